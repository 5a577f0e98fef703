//! Ordered Collection
//!
//! The locally rendered list. Array position and `order` are kept in lockstep
//! after every fetch and every successful reorder.

use crate::error::ReorderError;
use crate::item::{OrderEntry, OrderPatch, OrderedItem};

/// Items sorted ascending by rank
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedCollection<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: OrderedItem> OrderedCollection<T> {
    /// Build from rows returned by the backend.
    ///
    /// The backend already sorts by rank; sorting again (stable) protects
    /// against a collaborator that does not. Ranks are left as fetched, they
    /// may be non-contiguous until the next reorder.
    pub fn from_fetched(mut items: Vec<T>) -> Self {
        items.sort_by_key(|item| item.order());
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move the item at `from` to `to`.
    ///
    /// Remove-then-insert, not a swap: every item between the two positions
    /// shifts one slot toward the vacated position.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), ReorderError> {
        let len = self.items.len();
        if from >= len {
            return Err(ReorderError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(ReorderError::IndexOutOfRange { index: to, len });
        }
        if from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
        }
        Ok(())
    }

    /// Rewrite every rank as its array index (0, 1, 2, ...)
    pub fn normalize(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.set_order(index as i32);
        }
    }

    pub fn is_normalized(&self) -> bool {
        self.items
            .iter()
            .enumerate()
            .all(|(index, item)| item.order() == index as i32)
    }

    /// Ranks of the whole collection in display order
    pub fn patch(&self) -> OrderPatch<T::Id> {
        OrderPatch::new(
            self.items
                .iter()
                .map(|item| OrderEntry {
                    id: item.id(),
                    order: item.order(),
                })
                .collect(),
        )
    }

    pub fn ids(&self) -> Vec<T::Id> {
        self.items.iter().map(|item| item.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{letters, row, Row};

    #[test]
    fn test_from_fetched_sorts_by_order() {
        let collection = OrderedCollection::from_fetched(vec![row('C', 9), row('A', 2), row('B', 5)]);
        assert_eq!(letters(collection.items()), "ABC");
        // Gaps survive until a reorder normalizes them
        assert!(!collection.is_normalized());
    }

    #[test]
    fn test_move_forward_shifts_between_items_back() {
        let mut collection =
            OrderedCollection::from_fetched(vec![row('A', 0), row('B', 1), row('C', 2), row('D', 3)]);
        collection.move_item(0, 2).unwrap();
        collection.normalize();

        assert_eq!(letters(collection.items()), "BCAD");
        let patch: Vec<(char, i32)> = collection.patch().into_iter().map(|e| (e.id, e.order)).collect();
        assert_eq!(patch, vec![('B', 0), ('C', 1), ('A', 2), ('D', 3)]);
    }

    #[test]
    fn test_move_backward() {
        let mut collection = OrderedCollection::from_fetched(vec![row('A', 0), row('B', 1), row('C', 2)]);
        collection.move_item(2, 0).unwrap();
        collection.normalize();

        assert_eq!(letters(collection.items()), "CAB");
        assert_eq!(
            collection.items().iter().map(Row::order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_move_is_not_a_swap() {
        let len = 5;
        for from in 0..len {
            for to in 0..len {
                if from == to {
                    continue;
                }
                let original: Vec<Row> = "ABCDE"
                    .chars()
                    .enumerate()
                    .map(|(i, c)| row(c, i as i32))
                    .collect();
                let mut collection = OrderedCollection::from_fetched(original.clone());
                collection.move_item(from, to).unwrap();
                let moved = collection.items();

                assert_eq!(moved[to].id, original[from].id, "from={} to={}", from, to);
                if from < to {
                    for i in from..to {
                        assert_eq!(moved[i].id, original[i + 1].id, "from={} to={}", from, to);
                    }
                } else {
                    for i in (to + 1)..=from {
                        assert_eq!(moved[i].id, original[i - 1].id, "from={} to={}", from, to);
                    }
                }
                // Outside the moved span nothing changes
                let (lo, hi) = (from.min(to), from.max(to));
                for i in (0..lo).chain((hi + 1)..len) {
                    assert_eq!(moved[i].id, original[i].id);
                }
            }
        }
    }

    #[test]
    fn test_move_out_of_range() {
        let mut collection = OrderedCollection::from_fetched(vec![row('A', 0), row('B', 1)]);
        assert_eq!(
            collection.move_item(0, 2),
            Err(ReorderError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            collection.move_item(5, 0),
            Err(ReorderError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(letters(collection.items()), "AB");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut collection = OrderedCollection::from_fetched(vec![row('A', 10), row('B', 20), row('C', 30)]);
        collection.normalize();
        let once = collection.clone();
        collection.normalize();

        assert_eq!(collection, once);
        assert!(collection.is_normalized());
    }
}
