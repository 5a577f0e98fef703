//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::EntityKind;

/// Admin shell state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AdminState {
    /// Screen shown in the main column
    pub active_screen: EntityKind,
    /// Screens with a reorder being saved
    pub saving: Vec<EntityKind>,
}

impl AdminState {
    pub fn new() -> Self {
        Self {
            active_screen: EntityKind::Projects,
            saving: Vec::new(),
        }
    }
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_mark_saving(store: &AdminStore, kind: EntityKind) {
    let binding = store.saving();
    let mut saving = binding.write();
    if !saving.contains(&kind) {
        saving.push(kind);
    }
}

pub fn store_clear_saving(store: &AdminStore, kind: EntityKind) {
    store.saving().write().retain(|k| *k != kind);
}

pub fn store_is_saving(store: &AdminStore, kind: EntityKind) -> bool {
    store.saving().read().contains(&kind)
}

/// For event handlers and async tasks
pub fn store_is_saving_untracked(store: &AdminStore, kind: EntityKind) -> bool {
    store.saving().with_untracked(|saving| saving.contains(&kind))
}
