//! Project Record

use reorder_core::OrderedItem;
use serde::{Deserialize, Serialize};

use super::{default_true, AdminEntity, EntityId, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntityId,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// Category display name, when the backend expands it
    #[serde(default, alias = "categoryName", alias = "category_name")]
    pub category: Option<String>,
    #[serde(default = "default_true", alias = "isActive", alias = "active")]
    pub is_active: bool,
    #[serde(default, alias = "sort_order", alias = "sortOrder", alias = "position")]
    pub order: i32,
}

impl OrderedItem for Project {
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

impl AdminEntity for Project {
    const KIND: EntityKind = EntityKind::Projects;

    fn title(&self) -> &str {
        &self.title
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
