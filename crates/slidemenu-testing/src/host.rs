//! An in-memory [`RowHost`] standing in for a real list view.

use std::collections::HashMap;

use slidemenu_foundation::{LayoutDirection, RowHost, RowId, ScrollState};
use slidemenu_graphics::Rect;
use smallvec::SmallVec;

struct TestRow {
    id: RowId,
    bounds: Rect,
    menu_entry_widths: Option<Vec<f32>>,
    direction: LayoutDirection,
    translation: f32,
    entry_offsets: HashMap<usize, f32>,
    layer_promotions: usize,
    layer_restores: usize,
}

/// A fixed set of laid-out rows with recorded translations and offsets.
///
/// Rows are hit-tested in insertion order (earlier rows are front-most) and
/// adapter positions map one-to-one onto insertion order.
pub struct TestHost {
    rows: Vec<TestRow>,
    next_id: RowId,
    scroll_state: ScrollState,
    horizontal: bool,
    disallow_intercept_requests: usize,
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
            scroll_state: ScrollState::Idle,
            horizontal: false,
            disallow_intercept_requests: 0,
        }
    }

    /// Adds a row with the given bounds. `menu_entry_widths` of `None` makes
    /// a menu-less row. Returns the row's id; the row's adapter position is
    /// its insertion index.
    pub fn add_row(&mut self, bounds: Rect, menu_entry_widths: Option<Vec<f32>>) -> RowId {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(TestRow {
            id,
            bounds,
            menu_entry_widths,
            direction: LayoutDirection::Ltr,
            translation: 0.0,
            entry_offsets: HashMap::new(),
            layer_promotions: 0,
            layer_restores: 0,
        });
        id
    }

    pub fn set_layout_direction(&mut self, row: RowId, direction: LayoutDirection) {
        if let Some(row) = self.row_mut(row) {
            row.direction = direction;
        }
    }

    pub fn set_scroll_state(&mut self, state: ScrollState) {
        self.scroll_state = state;
    }

    pub fn set_scrolls_horizontally(&mut self, horizontal: bool) {
        self.horizontal = horizontal;
    }

    /// How many times the controller asked ancestors not to intercept.
    pub fn disallow_intercept_requests(&self) -> usize {
        self.disallow_intercept_requests
    }

    pub fn layer_promotions(&self, row: RowId) -> usize {
        self.row(row).map_or(0, |r| r.layer_promotions)
    }

    pub fn layer_restores(&self, row: RowId) -> usize {
        self.row(row).map_or(0, |r| r.layer_restores)
    }

    fn row(&self, id: RowId) -> Option<&TestRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut TestRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }
}

impl RowHost for TestHost {
    fn rows_front_to_back(&self) -> Vec<RowId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    fn row_bounds(&self, row: RowId) -> Option<Rect> {
        self.row(row).map(|r| r.bounds)
    }

    fn row_at_position(&self, position: usize) -> Option<RowId> {
        self.rows.get(position).map(|row| row.id)
    }

    fn layout_direction(&self, row: RowId) -> LayoutDirection {
        self.row(row).map_or(LayoutDirection::Ltr, |r| r.direction)
    }

    fn menu_entry_widths(&self, row: RowId) -> Option<SmallVec<[f32; 4]>> {
        self.row(row)?
            .menu_entry_widths
            .as_ref()
            .map(|widths| widths.iter().copied().collect())
    }

    fn row_translation(&self, row: RowId) -> f32 {
        self.row(row).map_or(0.0, |r| r.translation)
    }

    fn set_row_translation(&mut self, row: RowId, translation_x: f32) {
        if let Some(row) = self.row_mut(row) {
            row.translation = translation_x;
        }
    }

    fn menu_entry_offset(&self, row: RowId, entry: usize) -> f32 {
        self.row(row)
            .map_or(0.0, |r| r.entry_offsets.get(&entry).copied().unwrap_or(0.0))
    }

    fn set_menu_entry_offset(&mut self, row: RowId, entry: usize, offset_x: f32) {
        if let Some(row) = self.row_mut(row) {
            row.entry_offsets.insert(entry, offset_x);
        }
    }

    fn request_disallow_intercept(&mut self) {
        self.disallow_intercept_requests += 1;
    }

    fn scroll_state(&self) -> ScrollState {
        self.scroll_state
    }

    fn can_scroll_horizontally(&self) -> bool {
        self.horizontal
    }

    fn promote_row_layers(&mut self, row: RowId) {
        if let Some(row) = self.row_mut(row) {
            row.layer_promotions += 1;
        }
    }

    fn restore_row_layers(&mut self, row: RowId) {
        if let Some(row) = self.row_mut(row) {
            row.layer_restores += 1;
        }
    }
}
