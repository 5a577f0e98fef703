//! Collaborator Seam
//!
//! The backend contract the controller consumes. Implementations can be a REST
//! client, an in-memory fake, etc.

use async_trait::async_trait;
use thiserror::Error;

use crate::item::{OrderPatch, OrderedItem};

/// Page window for list requests (1-based page)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub size: u32,
}

/// Filters and pagination forwarded to `list`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: Vec<(String, String)>,
    pub page: Option<Page>,
}

impl ListQuery {
    /// Whole collection, unfiltered
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    pub fn with_page(mut self, number: u32, size: u32) -> Self {
        self.page = Some(Page { number, size });
        self
    }

    /// True when the result is the entire collection, so array index == rank
    pub fn is_whole_collection(&self) -> bool {
        self.filters.is_empty() && self.page.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Backend endpoints for one entity type.
///
/// `update_order` must be all-or-nothing: a partial write would break rank
/// contiguity.
#[async_trait(?Send)]
pub trait OrderCollaborator<T: OrderedItem> {
    /// Items sorted ascending by rank
    async fn list(&self, query: &ListQuery) -> Result<Vec<T>, CollaboratorError>;

    /// Replace the rank of every referenced item
    async fn update_order(&self, patch: &OrderPatch<T::Id>) -> Result<(), CollaboratorError>;
}
