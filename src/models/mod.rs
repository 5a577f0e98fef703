//! Frontend Models
//!
//! Canonical records for the admin screens. The backend is not consistent
//! about field names (`isActive` vs `is_active`, `order` vs `sort_order`,
//! bare arrays vs `{ "data": [...] }`), so every variant is accepted here with
//! serde aliases and nothing downstream ever sees the raw shape.

mod project;
mod category;
mod process_step;
mod review;

pub use project::Project;
pub use category::ProjectCategory;
pub use process_step::ProcessStep;
pub use review::Review;

use reorder_core::OrderedItem;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Row identifier: the backend uses integers for most tables, strings for some
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(id) => write!(f, "{}", id),
            EntityId::Text(id) => f.write_str(id),
        }
    }
}

/// Reorderable admin screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Projects,
    ProjectCategories,
    ProcessSteps,
    Reviews,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Projects,
        EntityKind::ProjectCategories,
        EntityKind::ProcessSteps,
        EntityKind::Reviews,
    ];

    /// REST collection path, relative to the API base
    pub fn endpoint(&self) -> &'static str {
        match self {
            EntityKind::Projects => "projects",
            EntityKind::ProjectCategories => "project-categories",
            EntityKind::ProcessSteps => "process-steps",
            EntityKind::Reviews => "reviews",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Projects => "Projects",
            EntityKind::ProjectCategories => "Categories",
            EntityKind::ProcessSteps => "Process Steps",
            EntityKind::Reviews => "Reviews",
        }
    }
}

/// A record shown on a reorderable admin screen
pub trait AdminEntity:
    OrderedItem<Id = EntityId> + DeserializeOwned + PartialEq + fmt::Debug + Send + Sync + 'static
{
    const KIND: EntityKind;

    /// Main text of the row
    fn title(&self) -> &str;

    fn is_active(&self) -> bool;
}

/// List payload: either a bare array or an envelope
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Envelope(Envelope<T>),
}

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(alias = "results", alias = "items")]
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn into_rows(self) -> Vec<T> {
        match self {
            ListResponse::Bare(rows) => rows,
            ListResponse::Envelope(envelope) => envelope.data,
        }
    }
}

pub(crate) fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_int_or_string() {
        let ids: Vec<EntityId> = serde_json::from_str(r#"[12, "a1b2"]"#).unwrap();
        assert_eq!(ids, vec![EntityId::Int(12), EntityId::Text("a1b2".to_string())]);
        assert_eq!(serde_json::to_string(&ids[0]).unwrap(), "12");
        assert_eq!(ids[1].to_string(), "a1b2");
    }

    #[test]
    fn test_list_response_shapes() {
        let bare: ListResponse<Review> =
            serde_json::from_str(r#"[{"id": 1, "author": "Ana", "order": 0}]"#).unwrap();
        assert_eq!(bare.into_rows().len(), 1);

        let wrapped: ListResponse<Review> = serde_json::from_str(
            r#"{"results": [{"id": 1, "author": "Ana"}, {"id": 2, "author": "Ben"}], "count": 2}"#,
        )
        .unwrap();
        assert_eq!(wrapped.into_rows().len(), 2);
    }

    #[test]
    fn test_endpoints_are_distinct() {
        let mut endpoints: Vec<_> = EntityKind::ALL.iter().map(|k| k.endpoint()).collect();
        endpoints.sort();
        endpoints.dedup();
        assert_eq!(endpoints.len(), 4);
    }
}
