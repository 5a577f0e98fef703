//! Reorderable List Controller
//!
//! Owns the rendered list of one admin screen and keeps it consistent with the
//! backend's order:
//!
//! `Idle -> Dragging -> Submitting -> Confirmed | RolledBack | RefreshFailed`
//!
//! A drop is split in three phases so a UI can hold the controller in a signal
//! without borrowing it across an await:
//! 1. [`ReorderController::drop`] applies the move optimistically and returns a
//!    [`PendingReorder`]
//! 2. [`PendingReorder::resolve`] talks to the backend and never fails
//! 3. [`ReorderController::settle`] applies the [`ReorderOutcome`]

use log::{debug, error, info, warn};

use crate::collaborator::{CollaboratorError, ListQuery, OrderCollaborator};
use crate::collection::OrderedCollection;
use crate::error::ReorderError;
use crate::item::{OrderPatch, OrderedItem};
use crate::session::DragSession;

/// What to do after the backend accepts a new order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfirmPolicy {
    /// Re-fetch and replace the local list with the server's answer
    #[default]
    Refetch,
    /// Keep the optimistic list, skip the extra round-trip
    TrustOptimistic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerOptions {
    pub confirm_policy: ConfirmPolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReorderState {
    #[default]
    Idle,
    Dragging,
    /// Optimistic order rendered, write in flight
    Submitting,
    Confirmed,
    /// Write failed, authoritative order restored
    RolledBack,
    /// Write failed and the authoritative order could not be fetched
    RefreshFailed,
}

impl ReorderState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, ReorderState::Dragging | ReorderState::Submitting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// Operator-facing message raised by a settled reorder or a failed load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// Result of talking to the backend about one drop
#[derive(Debug, Clone, PartialEq)]
pub enum ReorderOutcome<T> {
    /// Write accepted, rows re-fetched
    Confirmed { generation: u64, rows: Vec<T> },
    /// Write accepted, confirmation skipped by policy
    Trusted { generation: u64 },
    /// Write accepted but the confirmation fetch failed
    Unconfirmed { generation: u64, error: CollaboratorError },
    /// Write rejected, authoritative rows re-fetched
    RolledBack { generation: u64, cause: CollaboratorError, rows: Vec<T> },
    /// Write rejected and the rollback fetch failed
    RefreshFailed {
        generation: u64,
        cause: CollaboratorError,
        refresh_error: CollaboratorError,
    },
}

impl<T> ReorderOutcome<T> {
    pub fn generation(&self) -> u64 {
        match self {
            ReorderOutcome::Confirmed { generation, .. }
            | ReorderOutcome::Trusted { generation }
            | ReorderOutcome::Unconfirmed { generation, .. }
            | ReorderOutcome::RolledBack { generation, .. }
            | ReorderOutcome::RefreshFailed { generation, .. } => *generation,
        }
    }
}

/// Snapshot of the list's version taken when a refresh is requested.
///
/// Rows fetched under an older token predate a reorder or a query change
/// and are refused by [`ReorderController::apply_refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshToken(u64);

/// A drop that has been rendered but not yet persisted
#[derive(Debug, Clone)]
pub struct PendingReorder<T: OrderedItem> {
    generation: u64,
    patch: OrderPatch<T::Id>,
    query: ListQuery,
    policy: ConfirmPolicy,
}

impl<T: OrderedItem> PendingReorder<T> {
    pub fn patch(&self) -> &OrderPatch<T::Id> {
        &self.patch
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Submit the patch, then confirm or roll back.
    ///
    /// No automatic retry: the operator retries by dragging again.
    pub async fn resolve<C>(self, collaborator: &C) -> ReorderOutcome<T>
    where
        C: OrderCollaborator<T> + ?Sized,
    {
        let generation = self.generation;

        match collaborator.update_order(&self.patch).await {
            Ok(()) => {
                if self.policy == ConfirmPolicy::TrustOptimistic {
                    return ReorderOutcome::Trusted { generation };
                }
                match collaborator.list(&self.query).await {
                    Ok(rows) => ReorderOutcome::Confirmed { generation, rows },
                    Err(error) => ReorderOutcome::Unconfirmed { generation, error },
                }
            }
            Err(cause) => {
                warn!("reorder #{} rejected: {}", generation, cause);
                match collaborator.list(&self.query).await {
                    Ok(rows) => ReorderOutcome::RolledBack { generation, cause, rows },
                    Err(refresh_error) => ReorderOutcome::RefreshFailed {
                        generation,
                        cause,
                        refresh_error,
                    },
                }
            }
        }
    }
}

/// Drag-and-drop reordering for one server-backed list
#[derive(Debug, Clone)]
pub struct ReorderController<T: OrderedItem> {
    /// What is rendered (possibly optimistic)
    collection: OrderedCollection<T>,
    /// Last order known to match the backend
    confirmed: OrderedCollection<T>,
    session: DragSession,
    state: ReorderState,
    notice: Option<Notice>,
    query: ListQuery,
    options: ControllerOptions,
    generation: u64,
    /// Bumped whenever the list or its query changes outside a refresh
    epoch: u64,
}

impl<T: OrderedItem> Default for ReorderController<T> {
    fn default() -> Self {
        Self::new(ControllerOptions::default())
    }
}

impl<T: OrderedItem> ReorderController<T> {
    pub fn new(options: ControllerOptions) -> Self {
        Self {
            collection: OrderedCollection::default(),
            confirmed: OrderedCollection::default(),
            session: DragSession::default(),
            state: ReorderState::Idle,
            notice: None,
            query: ListQuery::all(),
            options,
            generation: 0,
            epoch: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        self.collection.items()
    }

    pub fn collection(&self) -> &OrderedCollection<T> {
        &self.collection
    }

    pub fn session(&self) -> DragSession {
        self.session
    }

    pub fn state(&self) -> ReorderState {
        self.state
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn is_busy(&self) -> bool {
        self.state == ReorderState::Submitting
    }

    /// Change filters/pagination. The caller reloads afterwards.
    pub fn set_query(&mut self, query: ListQuery) -> Result<(), ReorderError> {
        if !self.state.is_settled() {
            return Err(ReorderError::Busy);
        }
        self.query = query;
        self.epoch += 1;
        Ok(())
    }

    /// Whether a new drag may start right now
    pub fn can_reorder(&self) -> Result<(), ReorderError> {
        if self.is_busy() {
            return Err(ReorderError::Busy);
        }
        if self.state == ReorderState::RefreshFailed {
            return Err(ReorderError::Disabled("order could not be refreshed, reload the list"));
        }
        if !self.query.is_whole_collection() {
            return Err(ReorderError::Disabled("clear filters and pagination to reorder"));
        }
        Ok(())
    }

    pub fn begin_drag(&mut self, index: usize) -> Result<(), ReorderError> {
        self.can_reorder()?;
        let len = self.collection.len();
        if index >= len {
            return Err(ReorderError::IndexOutOfRange { index, len });
        }
        self.session.begin(index);
        self.state = ReorderState::Dragging;
        debug!("drag start at {}", index);
        Ok(())
    }

    pub fn drag_over(&mut self, index: usize) {
        if self.state == ReorderState::Dragging && index < self.collection.len() {
            self.session.over(index);
        }
    }

    pub fn drag_leave(&mut self) {
        if self.state == ReorderState::Dragging {
            self.session.leave();
        }
    }

    /// Always clears the session. A drag that never dropped leaves the order untouched.
    pub fn drag_end(&mut self) {
        self.session.clear();
        if self.state == ReorderState::Dragging {
            debug!("drag cancelled");
            self.state = ReorderState::Idle;
        }
    }

    /// Apply the move locally and hand back the write to perform.
    ///
    /// Returns `None` (no mutation, nothing to send) when no drag is active,
    /// when dropping on the original index, or when `target` is out of range.
    pub fn drop(&mut self, target: usize) -> Option<PendingReorder<T>> {
        let session = self.session.take();
        if self.state != ReorderState::Dragging {
            return None;
        }
        self.state = ReorderState::Idle;

        let from = session.dragged_index?;
        if from == target {
            debug!("drop on own index {}, ignored", target);
            return None;
        }
        if let Err(e) = self.collection.move_item(from, target) {
            warn!("drop ignored: {}", e);
            return None;
        }
        self.collection.normalize();

        self.generation += 1;
        self.epoch += 1;
        self.state = ReorderState::Submitting;
        self.notice = None;
        info!(
            "reorder #{}: {} -> {} ({} items)",
            self.generation,
            from,
            target,
            self.collection.len()
        );

        Some(PendingReorder {
            generation: self.generation,
            patch: self.collection.patch(),
            query: self.query.clone(),
            policy: self.options.confirm_policy,
        })
    }

    /// Apply the backend's answer and clear the session
    pub fn settle(&mut self, outcome: ReorderOutcome<T>) {
        if self.state != ReorderState::Submitting || outcome.generation() != self.generation {
            warn!(
                "stale reorder outcome #{} ignored (current #{}, {:?})",
                outcome.generation(),
                self.generation,
                self.state
            );
            return;
        }
        self.session.clear();
        self.epoch += 1;

        match outcome {
            ReorderOutcome::Confirmed { rows, .. } => {
                let optimistic = self.collection.ids();
                self.replace_all(rows);
                self.state = ReorderState::Confirmed;
                if self.collection.ids() != optimistic {
                    info!("server order differs from optimistic guess, using server order");
                }
            }
            ReorderOutcome::Trusted { .. } => {
                self.confirmed = self.collection.clone();
                self.state = ReorderState::Confirmed;
            }
            ReorderOutcome::Unconfirmed { error, .. } => {
                warn!("order saved but confirmation fetch failed: {}", error);
                self.confirmed = self.collection.clone();
                self.state = ReorderState::Confirmed;
                self.notice = Some(Notice::warning(format!(
                    "Order saved, but the list could not be refreshed ({}).",
                    error
                )));
            }
            ReorderOutcome::RolledBack { cause, rows, .. } => {
                self.replace_all(rows);
                self.state = ReorderState::RolledBack;
                self.notice = Some(Notice::warning(format!(
                    "Could not save the new order ({}). The previous order was restored; drag again to retry.",
                    cause
                )));
            }
            ReorderOutcome::RefreshFailed { cause, refresh_error, .. } => {
                error!("reorder failed ({}) and rollback fetch failed ({})", cause, refresh_error);
                // Never leave the optimistic guess on screen
                self.collection = self.confirmed.clone();
                self.state = ReorderState::RefreshFailed;
                self.notice = Some(Notice::error("Failed to refresh order, please reload."));
            }
        }
    }

    /// `drop`, `resolve` and `settle` in one call
    pub async fn drop_and_persist<C>(&mut self, target: usize, collaborator: &C) -> ReorderState
    where
        C: OrderCollaborator<T> + ?Sized,
    {
        if let Some(pending) = self.drop(target) {
            let outcome = pending.resolve(collaborator).await;
            self.settle(outcome);
        }
        self.state
    }

    /// Fetch the list for the current query
    pub async fn load<C>(&mut self, collaborator: &C) -> Result<(), ReorderError>
    where
        C: OrderCollaborator<T> + ?Sized,
    {
        if !self.state.is_settled() {
            return Err(ReorderError::Busy);
        }
        let token = self.refresh_token();
        match collaborator.list(&self.query).await {
            Ok(rows) => self.apply_refresh(token, rows),
            Err(e) => {
                self.report_load_error(&e);
                Err(ReorderError::Load(e))
            }
        }
    }

    /// Take before sending a list request, hand back to [`Self::apply_refresh`]
    pub fn refresh_token(&self) -> RefreshToken {
        RefreshToken(self.epoch)
    }

    /// Replace the list with freshly fetched rows.
    ///
    /// Refused mid-gesture, while a write is in flight, and when a reorder
    /// or query change happened after `token` was taken.
    pub fn apply_refresh(&mut self, token: RefreshToken, rows: Vec<T>) -> Result<(), ReorderError> {
        if !self.state.is_settled() {
            return Err(ReorderError::Busy);
        }
        if token.0 != self.epoch {
            debug!("refresh taken at #{} dropped (list at #{})", token.0, self.epoch);
            return Err(ReorderError::StaleRefresh);
        }
        self.replace_all(rows);
        if self.state == ReorderState::RefreshFailed {
            self.state = ReorderState::Idle;
            self.notice = None;
        }
        Ok(())
    }

    pub fn report_load_error(&mut self, error: &CollaboratorError) {
        error!("list fetch failed: {}", error);
        self.notice = Some(Notice::error(format!("Failed to load the list ({}).", error)));
    }

    fn replace_all(&mut self, rows: Vec<T>) {
        self.collection = OrderedCollection::from_fetched(rows);
        self.confirmed = self.collection.clone();
    }
}
