//! HTTP Client
//!
//! Thin wrapper over `reqwest` that knows the API base URL and maps transport
//! failures into collaborator errors.

use reorder_core::{CollaboratorError, ListQuery};

use crate::models::EntityKind;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// `GET`/list URL of an entity collection
    pub fn collection_url(&self, kind: EntityKind) -> String {
        format!("{}/{}", self.base_url, kind.endpoint())
    }

    /// `PUT` URL that replaces the order of a whole collection
    pub fn order_url(&self, kind: EntityKind) -> String {
        format!("{}/{}/order", self.base_url, kind.endpoint())
    }
}

/// Query-string pairs for a list request
pub(super) fn list_params(query: &ListQuery) -> Vec<(String, String)> {
    let mut params = query.filters.clone();
    if let Some(page) = query.page {
        params.push(("page".to_string(), page.number.to_string()));
        params.push(("page_size".to_string(), page.size.to_string()));
    }
    params
}

pub(super) fn transport_error(error: reqwest::Error) -> CollaboratorError {
    if error.is_decode() {
        CollaboratorError::Decode(error.to_string())
    } else {
        CollaboratorError::Transport(error.to_string())
    }
}

/// Turn a non-2xx response into a `Status` error, keeping the body as message
pub(super) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CollaboratorError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(CollaboratorError::Status {
        status: status.as_u16(),
        message: if message.is_empty() {
            status.canonical_reason().unwrap_or("error").to_string()
        } else {
            message
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let client = ApiClient::new("https://api.codelance.dev/v1/");
        assert_eq!(
            client.collection_url(EntityKind::ProjectCategories),
            "https://api.codelance.dev/v1/project-categories"
        );
        assert_eq!(
            client.order_url(EntityKind::Reviews),
            "https://api.codelance.dev/v1/reviews/order"
        );
    }

    #[test]
    fn test_list_params() {
        assert!(list_params(&ListQuery::all()).is_empty());

        let query = ListQuery::all().with_filter("is_active", "true").with_page(2, 25);
        assert_eq!(
            list_params(&query),
            vec![
                ("is_active".to_string(), "true".to_string()),
                ("page".to_string(), "2".to_string()),
                ("page_size".to_string(), "25".to_string()),
            ]
        );
    }
}
