//! Review Record

use reorder_core::OrderedItem;
use serde::{Deserialize, Serialize};

use super::{default_true, AdminEntity, EntityId, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: EntityId,
    #[serde(alias = "name", alias = "clientName", alias = "client_name")]
    pub author: String,
    #[serde(default)]
    pub company: Option<String>,
    /// 1-5 stars
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default = "default_true", alias = "isActive", alias = "active")]
    pub is_active: bool,
    #[serde(default, alias = "sort_order", alias = "sortOrder", alias = "position")]
    pub order: i32,
}

impl OrderedItem for Review {
    type Id = EntityId;

    fn id(&self) -> EntityId {
        self.id.clone()
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
}

impl AdminEntity for Review {
    const KIND: EntityKind = EntityKind::Reviews;

    fn title(&self) -> &str {
        &self.author
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_name_alias() {
        let json = r#"{"id": 9, "clientName": "Maya", "company": "Acme", "rating": 5, "active": false}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.author, "Maya");
        assert_eq!(review.rating, Some(5));
        assert!(!review.is_active);
    }
}
