use slidemenu_graphics::Rect;
use smallvec::SmallVec;

/// Opaque handle for one attached row slot.
///
/// Assigned by the host and valid only while the row is attached; the engine
/// never compares rows by anything else, so recycling a slot just means the
/// host stops reporting its old id.
pub type RowId = u64;

/// Resolved reading direction of a row's layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutDirection {
    Ltr,
    Rtl,
}

/// Vertical scroll activity of the surrounding list.
///
/// A horizontal row drag is only recognized while the list is `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollState {
    Idle,
    Scrolling,
}

/// The narrow seam to the surrounding list.
///
/// Row layout, adapter binding, and vertical scrolling all live behind this
/// trait; the gesture engine only hit-tests bounds, reads and writes
/// horizontal translations, and asks the host to keep ancestors from
/// intercepting the stream.
pub trait RowHost {
    /// Attached rows in hit-test order, front-most first.
    fn rows_front_to_back(&self) -> Vec<RowId>;

    /// Current bounds of a row in the list's coordinate space, or `None` if
    /// the row is no longer attached.
    fn row_bounds(&self, row: RowId) -> Option<Rect>;

    /// The attached row currently representing the given stable adapter
    /// position, or `None` if that position is not laid out.
    fn row_at_position(&self, position: usize) -> Option<RowId>;

    fn layout_direction(&self, row: RowId) -> LayoutDirection;

    /// Measured widths of the first descendants of the row's trailing menu
    /// container entries, in order. `None` when the row's last child is not
    /// a menu container at all; rows whose combined width is not positive
    /// are treated as menu-less by the resolver.
    fn menu_entry_widths(&self, row: RowId) -> Option<SmallVec<[f32; 4]>>;

    /// Current horizontal translation of the row's content children.
    fn row_translation(&self, row: RowId) -> f32;

    /// Applies the same horizontal translation to every content child of the
    /// row, including the menu container.
    fn set_row_translation(&mut self, row: RowId, translation_x: f32);

    /// Entry-local parallax offset of one menu entry, relative to the menu
    /// container.
    fn menu_entry_offset(&self, row: RowId, entry: usize) -> f32;

    fn set_menu_entry_offset(&mut self, row: RowId, entry: usize, offset_x: f32);

    /// Asks ancestor containers not to intercept the remainder of the
    /// current pointer stream.
    fn request_disallow_intercept(&mut self);

    fn scroll_state(&self) -> ScrollState;

    /// Whether the list's own layout scrolls horizontally; row dragging is
    /// disabled in that case.
    fn can_scroll_horizontally(&self) -> bool;

    /// Hint that the row's children are about to animate and may be promoted
    /// to a hardware-accelerated rendering mode. Performance property only.
    fn promote_row_layers(&mut self, row: RowId) {
        let _ = row;
    }

    /// Undoes [`promote_row_layers`](Self::promote_row_layers).
    fn restore_row_layers(&mut self, row: RowId) {
        let _ = row;
    }
}
