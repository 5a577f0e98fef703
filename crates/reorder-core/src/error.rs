//! Controller Errors

use thiserror::Error;

use crate::collaborator::CollaboratorError;

/// Gesture or refresh rejected by the controller.
///
/// Network failures never surface here: they are folded into
/// [`crate::ReorderOutcome`] and reported as notices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("a reorder is still being saved")]
    Busy,

    #[error("list changed while the refresh was in flight")]
    StaleRefresh,

    #[error("reordering disabled: {0}")]
    Disabled(&'static str),

    #[error("failed to load list: {0}")]
    Load(#[from] CollaboratorError),
}
