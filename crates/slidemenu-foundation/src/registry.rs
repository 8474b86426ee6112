//! Bookkeeping for which rows are slid out of their neutral position.
//!
//! Pure state with no host access: the translation engine mutates it on every
//! applied delta and at exact-boundary transitions; the gesture router reads
//! it to make interception decisions. Both run on the same cooperative
//! timeline, so there is no locking.

use indexmap::IndexSet;

use crate::host::RowId;

/// Tracks opened rows, the (at most one) fully open row, and the (at most
/// one) row currently being dragged.
///
/// The fully open row is always a member of the opened set, and its
/// translation is exactly the extreme value while marked.
#[derive(Default)]
pub struct SlideRegistry {
    opened: IndexSet<RowId>,
    fully_open: Option<RowId>,
    dragged: Option<RowId>,
}

impl SlideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a row as opened. Idempotent.
    pub fn enter(&mut self, row: RowId) {
        self.opened.insert(row);
    }

    /// Marks a row as no longer opened. Idempotent. A row leaving the opened
    /// set can no longer be the fully open row.
    pub fn leave(&mut self, row: RowId) {
        self.opened.shift_remove(&row);
        if self.fully_open == Some(row) {
            self.fully_open = None;
        }
    }

    pub fn is_opened(&self, row: RowId) -> bool {
        self.opened.contains(&row)
    }

    pub fn has_opened_rows(&self) -> bool {
        !self.opened.is_empty()
    }

    /// Opened rows in insertion order.
    pub fn opened_rows(&self) -> impl Iterator<Item = RowId> + '_ {
        self.opened.iter().copied()
    }

    /// Marks the row whose translation sits exactly at the extreme value.
    /// Enters the row into the opened set as well, keeping the subset
    /// relation by construction.
    pub fn mark_fully_open(&mut self, row: RowId) {
        self.opened.insert(row);
        self.fully_open = Some(row);
    }

    /// Clears the fully open mark if it refers to `row`.
    pub fn clear_fully_open(&mut self, row: RowId) {
        if self.fully_open == Some(row) {
            self.fully_open = None;
        }
    }

    pub fn fully_open_row(&self) -> Option<RowId> {
        self.fully_open
    }

    /// Marks the single row being dragged this gesture stream.
    pub fn set_dragged(&mut self, row: RowId) {
        self.dragged = Some(row);
    }

    pub fn clear_dragged(&mut self) {
        self.dragged = None;
    }

    pub fn dragged_row(&self) -> Option<RowId> {
        self.dragged
    }

    /// Wholesale teardown, used when the row set detaches.
    pub fn clear_all(&mut self) {
        self.opened.clear();
        self.fully_open = None;
        self.dragged = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_leave_are_idempotent() {
        let mut registry = SlideRegistry::new();
        registry.enter(1);
        registry.enter(1);
        assert_eq!(registry.opened_rows().count(), 1);
        registry.leave(1);
        registry.leave(1);
        assert!(!registry.has_opened_rows());
    }

    #[test]
    fn fully_open_is_subset_of_opened() {
        let mut registry = SlideRegistry::new();
        registry.mark_fully_open(7);
        assert!(registry.is_opened(7));
        assert_eq!(registry.fully_open_row(), Some(7));
    }

    #[test]
    fn leaving_clears_fully_open() {
        let mut registry = SlideRegistry::new();
        registry.mark_fully_open(7);
        registry.leave(7);
        assert_eq!(registry.fully_open_row(), None);
    }

    #[test]
    fn fully_open_is_single() {
        let mut registry = SlideRegistry::new();
        registry.mark_fully_open(1);
        registry.mark_fully_open(2);
        assert_eq!(registry.fully_open_row(), Some(2));
        assert!(registry.is_opened(1));
    }

    #[test]
    fn clear_fully_open_is_row_scoped() {
        let mut registry = SlideRegistry::new();
        registry.mark_fully_open(3);
        registry.clear_fully_open(4);
        assert_eq!(registry.fully_open_row(), Some(3));
        registry.clear_fully_open(3);
        assert_eq!(registry.fully_open_row(), None);
        // Still opened; only the fully-open mark was cleared.
        assert!(registry.is_opened(3));
    }

    #[test]
    fn opened_rows_preserve_insertion_order() {
        let mut registry = SlideRegistry::new();
        registry.enter(5);
        registry.enter(2);
        registry.enter(9);
        let rows: Vec<RowId> = registry.opened_rows().collect();
        assert_eq!(rows, vec![5, 2, 9]);
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut registry = SlideRegistry::new();
        registry.enter(1);
        registry.mark_fully_open(2);
        registry.set_dragged(3);
        registry.clear_all();
        assert!(!registry.has_opened_rows());
        assert_eq!(registry.fully_open_row(), None);
        assert_eq!(registry.dragged_row(), None);
    }
}
