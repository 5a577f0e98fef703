//! Ordered Item Contract
//!
//! What the controller needs to know about a row, and the payload sent
//! back to the backend after a reorder.

use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// A row that carries a stable id and a persisted rank.
pub trait OrderedItem: Clone {
    /// Stable identifier, never changes for the item's lifetime
    type Id: Clone + Eq + Hash + Debug + Serialize;

    fn id(&self) -> Self::Id;

    /// Persisted rank (ascending = displayed first)
    fn order(&self) -> i32;

    fn set_order(&mut self, order: i32);
}

/// One `{id, order}` pair of a patch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderEntry<Id> {
    pub id: Id,
    pub order: i32,
}

/// New ranks for the whole collection.
///
/// Always covers every item, never a delta: the backend replaces all ranks
/// at once and does not need to infer shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderPatch<Id> {
    entries: Vec<OrderEntry<Id>>,
}

impl<Id> OrderPatch<Id> {
    pub fn new(entries: Vec<OrderEntry<Id>>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[OrderEntry<Id>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<Id> IntoIterator for OrderPatch<Id> {
    type Item = OrderEntry<Id>;
    type IntoIter = std::vec::IntoIter<OrderEntry<Id>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
