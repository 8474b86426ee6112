//! The gesture router: the top-level state machine consuming the raw pointer
//! stream and the public controller surface for hosts.
//!
//! Dispatch follows the two-phase shape of the surrounding platform: while a
//! child of the list owns the pointer stream the host forwards every event to
//! [`SlidingMenuController::on_intercept_pointer_event`]; once that returns
//! `true` (or the stream belongs to the list itself) events go to
//! [`SlidingMenuController::on_pointer_event`]. Exactly one of the two is
//! invoked per event, and the down event always goes through interception
//! first.

use std::fmt;

use slidemenu_graphics::Rect;

use crate::engine::TranslationEngine;
use crate::fling::{self, SnapTarget};
use crate::gesture_constants::{DEFAULT_TRANSITION_DURATION_MS, MAX_FLING_VELOCITY, TOUCH_SLOP};
use crate::host::{LayoutDirection, RowHost, RowId, ScrollState};
use crate::input::{PointerEvent, PointerEventKind, VelocityTracker};
use crate::metrics::{menu_bounds, open_sign};

/// A negative transition duration was requested; the previously configured
/// duration remains in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDurationError {
    pub requested_ms: i32,
}

impl fmt::Display for InvalidDurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transition animations cannot have a negative duration: {}",
            self.requested_ms
        )
    }
}

impl std::error::Error for InvalidDurationError {}

/// Coordinates row-menu dragging against the surrounding list's own vertical
/// scrolling.
///
/// One controller instance owns all mutable slide state (constructed with the
/// list, torn down via [`on_detached`](Self::on_detached)); the host feeds it
/// the raw pointer stream and a per-frame clock.
pub struct SlidingMenuController {
    engine: TranslationEngine,
    draggable: bool,
    duration_ms: u32,

    // Per-gesture-stream state, torn down on up/cancel or defensively on an
    // unexpected down.
    down_x: f32,
    down_y: f32,
    touch_x: [f32; 2],
    touch_y: [f32; 2],
    velocity: VelocityTracker,
    active_row: Option<RowId>,
    active_bounds: Option<Rect>,
    active_menu_bounds: Option<Rect>,
    has_fully_open_on_down: bool,
    dragging: bool,
}

impl Default for SlidingMenuController {
    fn default() -> Self {
        Self::new()
    }
}

impl SlidingMenuController {
    pub fn new() -> Self {
        Self {
            engine: TranslationEngine::new(),
            draggable: true,
            duration_ms: DEFAULT_TRANSITION_DURATION_MS,
            down_x: 0.0,
            down_y: 0.0,
            touch_x: [0.0; 2],
            touch_y: [0.0; 2],
            velocity: VelocityTracker::new(),
            active_row: None,
            active_bounds: None,
            active_menu_bounds: None,
            has_fully_open_on_down: false,
            dragging: false,
        }
    }

    /// Whether rows may be dragged directly. Programmatic opening and
    /// closing stays possible regardless.
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    /// Duration in milliseconds of the animations that open or close rows.
    pub fn transition_duration(&self) -> u32 {
        self.duration_ms
    }

    /// Sets the open/close animation duration. Negative durations are
    /// rejected and leave the configured duration unchanged.
    pub fn set_transition_duration(&mut self, duration_ms: i32) -> Result<(), InvalidDurationError> {
        if duration_ms < 0 {
            return Err(InvalidDurationError {
                requested_ms: duration_ms,
            });
        }
        self.duration_ms = duration_ms as u32;
        Ok(())
    }

    /// True while a row is being dragged by the user.
    pub fn is_row_being_dragged(&self) -> bool {
        self.dragging
    }

    pub fn dragged_row(&self) -> Option<RowId> {
        self.engine.registry().dragged_row()
    }

    pub fn fully_open_row(&self) -> Option<RowId> {
        self.engine.registry().fully_open_row()
    }

    /// Rows currently slid past the opened threshold, in the order they
    /// crossed it.
    pub fn opened_rows(&self) -> Vec<RowId> {
        self.engine.registry().opened_rows().collect()
    }

    pub fn has_pending_animations(&self) -> bool {
        self.engine.has_pending_animations()
    }

    /// Steps all pending open/close animations to `now_ms`. The host calls
    /// this once per frame while [`has_pending_animations`]
    /// (Self::has_pending_animations) reports work.
    pub fn on_frame(&mut self, host: &mut dyn RowHost, now_ms: i64) {
        self.engine.on_frame(host, now_ms);
    }

    /// Interception decision for one pointer event: `true` claims the
    /// remainder of the stream for the controller. The host combines this
    /// with its own vertical-scroll interception.
    pub fn on_intercept_pointer_event(
        &mut self,
        host: &mut dyn RowHost,
        event: &PointerEvent,
    ) -> bool {
        if event.kind == PointerEventKind::Down {
            // Reset things for a new stream, in case we didn't see the whole
            // previous one.
            if self.dragging || self.active_row.is_some() {
                log::warn!(
                    "pointer down arrived without a matching up/cancel; resetting gesture state"
                );
            }
            self.clear_stream();
        }
        self.velocity.add_sample(event.time_ms, event.position.x);

        match event.kind {
            PointerEventKind::Down => {
                self.down_x = event.position.x;
                self.down_y = event.position.y;
                self.mark_touch_point(event.position.x, event.position.y);

                for row in host.rows_front_to_back() {
                    let Some(bounds) = host.row_bounds(row) else {
                        continue;
                    };
                    if !bounds.contains(self.down_x, self.down_y) {
                        continue;
                    }
                    if self.engine.resolve_and_cache(&*host, row) {
                        self.active_row = Some(row);
                        self.active_bounds = Some(bounds);
                    }
                    break;
                }

                if !self.engine.registry().has_opened_rows() {
                    return false;
                }
                // A drag may be starting: keep ancestors from stealing the
                // stream while any row is away from rest.
                host.request_disallow_intercept();
                if let Some(full) = self.engine.registry().fully_open_row() {
                    self.has_fully_open_on_down = true;
                    if self.active_row == Some(full) {
                        let menu = self.resolve_active_menu_bounds(host, full);
                        // A tap on the fully open menu itself passes through
                        // to the menu's own children.
                        if menu.is_some_and(|m| m.contains(self.down_x, self.down_y)) {
                            return false;
                        }
                        // A tap on the rest of that row is swallowed so no
                        // stray click fires underneath the open menu.
                        if self
                            .active_bounds
                            .is_some_and(|b| b.contains(self.down_x, self.down_y))
                        {
                            return true;
                        }
                    }
                    // The fully open row is not the one touched, or the
                    // touch landed outside every row: close it.
                    self.engine.release(host, full, self.duration_ms);
                }
                // Claim the stream while any row is open at all, so the
                // pending up event cannot click through a half-open row.
                true
            }

            PointerEventKind::Move => {
                self.mark_touch_point(event.position.x, event.position.y);
                self.try_handle_drag(host)
            }

            PointerEventKind::Up | PointerEventKind::Cancel => {
                // A tap that stayed inside the fully open menu area closes
                // the row as the finger lifts.
                if self.has_fully_open_on_down
                    && self
                        .active_menu_bounds
                        .is_some_and(|m| m.contains(self.down_x, self.down_y))
                {
                    self.release_active_or_open_row(host, true);
                }
                self.clear_stream();
                false
            }

            PointerEventKind::SecondaryDown | PointerEventKind::SecondaryUp => false,
        }
    }

    /// Handles one pointer event once the stream belongs to the list.
    /// Returns `true` when the controller consumed the event; the host must
    /// then keep it from its own vertical scrolling.
    pub fn on_pointer_event(&mut self, host: &mut dyn RowHost, event: &PointerEvent) -> bool {
        self.velocity.add_sample(event.time_ms, event.position.x);

        match event.kind {
            PointerEventKind::Down => false,

            PointerEventKind::SecondaryDown | PointerEventKind::SecondaryUp => {
                // Extra fingers would corrupt single-row slide state; swallow
                // them whenever any slide state exists.
                self.dragging
                    || self.has_fully_open_on_down
                    || self.engine.registry().has_opened_rows()
            }

            PointerEventKind::Move => {
                self.mark_touch_point(event.position.x, event.position.y);

                if !self.draggable && self.cancel_touch(host, true) {
                    return true;
                }
                if self.dragging {
                    if let Some(active) = self.active_row {
                        let dx = self.touch_x[1] - self.touch_x[0];
                        self.engine.apply_delta(host, active, dx);
                    }
                    // Consumed: the list must not scroll vertically while a
                    // row is being dragged.
                    return true;
                }
                // Drag recognition first, so a fully open row can still be
                // dragged back; only unrecognized moves are merely swallowed.
                if self.try_handle_drag(host) || self.has_fully_open_on_down {
                    return true;
                }
                // Keep the list still while some row is away from rest.
                self.engine.registry().has_opened_rows()
            }

            PointerEventKind::Up => {
                if self.draggable && self.dragging {
                    self.finish_drag(host);
                    self.clear_stream();
                    return true;
                }
                self.cancel_touch(host, true);
                false
            }

            PointerEventKind::Cancel => {
                self.cancel_touch(host, true);
                false
            }
        }
    }

    /// Opens the menu of the row at the given stable adapter position.
    ///
    /// Returns `false` if the position is not laid out, the row has no menu,
    /// or that row is already the fully open one.
    pub fn open_row_at(&mut self, host: &mut dyn RowHost, position: usize, animate: bool) -> bool {
        let Some(row) = host.row_at_position(position) else {
            return false;
        };
        if self.engine.registry().fully_open_row() == Some(row) {
            return false;
        }
        if !self.engine.resolve_and_cache(&*host, row) {
            return false;
        }
        // First settle whatever is being touched or was previously open.
        if !self.cancel_touch(host, animate) {
            self.release_active_or_open_row(host, animate);
        }
        let total_width = match self.engine.metrics(row) {
            Some(metrics) => metrics.total_width,
            None => return false,
        };
        let extreme = open_sign(host.layout_direction(row)) * total_width;
        let duration = if animate { self.duration_ms } else { 0 };
        self.engine.smooth_translate_to(host, row, extreme, duration);
        true
    }

    /// Closes whichever row is currently dragged or fully open, if any.
    pub fn release_active_or_open_row(&mut self, host: &mut dyn RowHost, animate: bool) {
        let target = if self.dragging {
            self.active_row
        } else {
            self.engine.registry().fully_open_row()
        };
        if let Some(row) = target {
            let duration = if animate { self.duration_ms } else { 0 };
            self.engine.release(host, row, duration);
        }
    }

    /// Drops all engine state for one recycled row, force-completing its
    /// animation first. If the row was mid-gesture the stream state resets.
    pub fn on_row_recycled(&mut self, host: &mut dyn RowHost, row: RowId) {
        self.engine.forget_row(host, row);
        if self.active_row == Some(row) {
            self.clear_stream();
        }
    }

    /// Teardown when the row set detaches from the live view tree: the fully
    /// open row is released immediately, every in-flight animation is
    /// force-completed, and the registry is cleared wholesale.
    pub fn on_detached(&mut self, host: &mut dyn RowHost) {
        if let Some(full) = self.engine.registry().fully_open_row() {
            self.engine.release(host, full, 0);
        }
        self.engine.force_finish_all(host);
        self.engine.clear();
        self.clear_stream();
    }

    fn finish_drag(&mut self, host: &mut dyn RowHost) {
        let Some(active) = self.active_row else {
            return;
        };
        let Some(total_width) = self.engine.metrics(active).map(|m| m.total_width) else {
            return;
        };
        let sign = open_sign(host.layout_direction(active));
        let extreme = sign * total_width;
        let translation = host.row_translation(active);
        if translation == 0.0 || translation == extreme {
            // Already at a rest state; the engine marked fully-open when the
            // boundary was reached.
            return;
        }
        let toward_open_delta = (self.touch_x[1] - self.touch_x[0]) * sign;
        let velocity = self.velocity.x_velocity_capped(MAX_FLING_VELOCITY).abs();
        match fling::classify(toward_open_delta, velocity, translation.abs(), total_width) {
            SnapTarget::Open => {
                self.engine
                    .smooth_translate_to(host, active, extreme, self.duration_ms);
            }
            SnapTarget::Closed => {
                self.engine.release(host, active, self.duration_ms);
            }
        }
    }

    /// Directional slop gating: recognizes a horizontal row drag once the
    /// pointer has stayed within the vertical slop and traveled past the
    /// horizontal slop. While no row is open only travel in the reveal
    /// direction counts, preventing accidental reveals from ambiguous
    /// wiggle; once some row is open either direction is accepted, since the
    /// user may be closing it.
    fn try_handle_drag(&mut self, host: &mut dyn RowHost) -> bool {
        let Some(active) = self.active_row else {
            return false;
        };
        if !self.draggable {
            return false;
        }
        if host.scroll_state() != ScrollState::Idle {
            return false;
        }
        // The layout's orientation may not be vertical.
        if host.can_scroll_horizontally() {
            return false;
        }

        let abs_dy = (self.touch_y[1] - self.down_y).abs();
        if abs_dy > TOUCH_SLOP {
            return false;
        }
        let dx = self.touch_x[1] - self.down_x;
        let recognized = if self.engine.registry().has_opened_rows() {
            dx.abs() > TOUCH_SLOP
        } else {
            match host.layout_direction(active) {
                LayoutDirection::Ltr => dx < -TOUCH_SLOP,
                LayoutDirection::Rtl => dx > TOUCH_SLOP,
            }
        };
        if recognized {
            self.dragging = true;
            self.engine.registry_mut().set_dragged(active);
            host.request_disallow_intercept();
            return true;
        }
        false
    }

    /// Ends the gesture early, settling whatever the stream was acting on.
    /// Returns `false` when there was nothing to settle.
    fn cancel_touch(&mut self, host: &mut dyn RowHost, animate: bool) -> bool {
        let duration = if animate { self.duration_ms } else { 0 };
        if self.dragging {
            if let Some(active) = self.active_row {
                self.engine.release(host, active, duration);
            }
            self.clear_stream();
            return true;
        }
        if self.has_fully_open_on_down {
            if self.active_row.is_some()
                && self.active_row == self.engine.registry().fully_open_row()
            {
                if let Some(row) = self.active_row {
                    self.engine.release(host, row, duration);
                }
            }
            self.clear_stream();
            return true;
        }
        false
    }

    fn resolve_active_menu_bounds(&mut self, host: &dyn RowHost, row: RowId) -> Option<Rect> {
        let bounds = self.active_bounds?;
        let total_width = self.engine.metrics(row)?.total_width;
        let menu = menu_bounds(bounds, total_width, host.layout_direction(row));
        self.active_menu_bounds = Some(menu);
        self.active_menu_bounds
    }

    fn mark_touch_point(&mut self, x: f32, y: f32) {
        self.touch_x[0] = self.touch_x[1];
        self.touch_x[1] = x;
        self.touch_y[0] = self.touch_y[1];
        self.touch_y[1] = y;
    }

    fn clear_stream(&mut self) {
        self.velocity.reset();
        self.active_row = None;
        self.active_bounds = None;
        self.active_menu_bounds = None;
        self.has_fully_open_on_down = false;
        self.dragging = false;
        self.engine.registry_mut().clear_dragged();
    }
}
