//! Entity Collaborator
//!
//! `OrderCollaborator` over the REST API for any admin entity.

use async_trait::async_trait;
use reorder_core::{CollaboratorError, ListQuery, OrderCollaborator, OrderPatch};
use serde::Serialize;
use std::marker::PhantomData;

use super::client::{check_status, list_params, transport_error, ApiClient};
use crate::models::{AdminEntity, EntityId, ListResponse};

/// Body of the order update: `{"items": [{"id": .., "order": ..}, ...]}`
#[derive(Serialize)]
struct OrderBody<'a> {
    items: &'a OrderPatch<EntityId>,
}

/// List and reorder endpoints of one entity kind
pub struct RestCollaborator<T> {
    client: ApiClient,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for RestCollaborator<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: AdminEntity> RestCollaborator<T> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }
}

#[async_trait(?Send)]
impl<T: AdminEntity> OrderCollaborator<T> for RestCollaborator<T> {
    async fn list(&self, query: &ListQuery) -> Result<Vec<T>, CollaboratorError> {
        let url = self.client.collection_url(T::KIND);
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .http()
            .get(&url)
            .query(&list_params(query))
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response).await?;
        let body: ListResponse<T> = response.json().await.map_err(transport_error)?;
        Ok(body.into_rows())
    }

    async fn update_order(&self, patch: &OrderPatch<T::Id>) -> Result<(), CollaboratorError> {
        let url = self.client.order_url(T::KIND);
        log::debug!("PUT {} ({} items)", url, patch.len());

        let response = self
            .client
            .http()
            .put(&url)
            .json(&OrderBody { items: patch })
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await?;
        Ok(())
    }
}
