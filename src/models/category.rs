//! Project Category Record

use reorder_core::OrderedItem;
use serde::{Deserialize, Serialize};

use super::{default_true, AdminEntity, EntityId, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCategory {
    pub id: EntityId,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default, alias = "projectsCount", alias = "projects_count")]
    pub project_count: Option<u32>,
    #[serde(default = "default_true", alias = "isActive", alias = "active")]
    pub is_active: bool,
    #[serde(default, alias = "sort_order", alias = "sortOrder", alias = "position")]
    pub order: i32,
}

impl OrderedItem for ProjectCategory {
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

impl AdminEntity for ProjectCategory {
    const KIND: EntityKind = EntityKind::ProjectCategories;

    fn title(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
