//! Reorder Core
//!
//! Drag-and-drop reordering for server-backed admin lists:
//! - item: the ordered entity contract and the full-collection order patch
//! - collection: local list mutation and rank normalization
//! - session: ephemeral drag gesture state
//! - collaborator: the backend seam (list + update order)
//! - controller: optimistic update, persistence and reconciliation

mod item;
mod collection;
mod session;
mod collaborator;
mod controller;
mod error;


pub use item::{OrderedItem, OrderEntry, OrderPatch};
pub use collection::OrderedCollection;
pub use session::DragSession;
pub use collaborator::{CollaboratorError, ListQuery, OrderCollaborator, Page};
pub use controller::{
    ConfirmPolicy, ControllerOptions, Notice, NoticeLevel, PendingReorder, RefreshToken,
    ReorderController, ReorderOutcome, ReorderState,
};
pub use error::ReorderError;
