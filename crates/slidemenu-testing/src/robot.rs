//! A gesture robot driving [`SlidingMenuController`] through realistic
//! pointer streams against a [`TestHost`].
//!
//! The robot reproduces the host-side dispatch contract: every event reaches
//! exactly one of the controller's two entry points. The down event and every
//! event after it go through interception until interception claims the
//! stream; from then on the stream is delivered to the touch handler.

use slidemenu_foundation::{
    PointerEvent, PointerEventKind, RowHost, SlidingMenuController,
};
use slidemenu_graphics::Point;

use crate::TestHost;

/// Frame period of the robot's simulated clock.
const FRAME_MS: i64 = 16;

/// Upper bound on settle frames, to fail loudly instead of spinning if an
/// animation never reports completion.
const MAX_SETTLE_FRAMES: usize = 1_000;

pub struct GestureRobot {
    controller: SlidingMenuController,
    host: TestHost,
    now_ms: i64,
    last_x: f32,
    last_y: f32,
    claimed: bool,
}

impl GestureRobot {
    pub fn new(host: TestHost) -> Self {
        Self {
            controller: SlidingMenuController::new(),
            host,
            now_ms: 0,
            last_x: 0.0,
            last_y: 0.0,
            claimed: false,
        }
    }

    pub fn host(&self) -> &TestHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut TestHost {
        &mut self.host
    }

    pub fn controller(&self) -> &SlidingMenuController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SlidingMenuController {
        &mut self.controller
    }

    pub fn now_ms(&self) -> i64 {
        self.now_ms
    }

    /// Whether interception has claimed the current stream.
    pub fn stream_claimed(&self) -> bool {
        self.claimed
    }

    /// Puts the primary pointer down. Returns the interception decision.
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.claimed = false;
        self.dispatch(PointerEvent::down(x, y, self.now_ms))
    }

    /// Moves the pointer one frame later. Returns whether the controller
    /// consumed the event.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.move_to_after(x, y, FRAME_MS)
    }

    /// Moves the pointer after an explicit delay.
    pub fn move_to_after(&mut self, x: f32, y: f32, delay_ms: i64) -> bool {
        self.now_ms += delay_ms;
        self.dispatch(PointerEvent::moved(x, y, self.now_ms))
    }

    /// Lifts the pointer at its last position, one frame later.
    pub fn lift(&mut self) -> bool {
        self.lift_after(FRAME_MS)
    }

    /// Lifts the pointer at its last position after an explicit delay. Delays
    /// past the velocity tracker's stop threshold read as a zero-velocity
    /// release.
    pub fn lift_after(&mut self, delay_ms: i64) -> bool {
        self.now_ms += delay_ms;
        let consumed = self.dispatch(PointerEvent::up(self.last_x, self.last_y, self.now_ms));
        self.claimed = false;
        consumed
    }

    /// Cancels the stream, as when an ancestor steals it.
    pub fn cancel(&mut self) -> bool {
        self.now_ms += FRAME_MS;
        let consumed = self.dispatch(PointerEvent::cancel(self.last_x, self.last_y, self.now_ms));
        self.claimed = false;
        consumed
    }

    /// Puts a second finger down at the given position.
    pub fn secondary_press(&mut self, x: f32, y: f32) -> bool {
        self.now_ms += FRAME_MS;
        self.dispatch(PointerEvent::new(
            PointerEventKind::SecondaryDown,
            Point::new(x, y),
            self.now_ms,
        ))
    }

    /// Lifts a secondary finger.
    pub fn secondary_lift(&mut self, x: f32, y: f32) -> bool {
        self.now_ms += FRAME_MS;
        self.dispatch(PointerEvent::new(
            PointerEventKind::SecondaryUp,
            Point::new(x, y),
            self.now_ms,
        ))
    }

    /// Runs single frames until no animation is pending.
    pub fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.controller.has_pending_animations() {
                return;
            }
            self.frame();
        }
        panic!("animations did not settle within {MAX_SETTLE_FRAMES} frames");
    }

    /// Advances the clock one frame and steps pending animations.
    pub fn frame(&mut self) {
        self.now_ms += FRAME_MS;
        self.controller.on_frame(&mut self.host, self.now_ms);
    }

    fn dispatch(&mut self, event: PointerEvent) -> bool {
        self.last_x = event.position.x;
        self.last_y = event.position.y;
        if self.claimed {
            self.controller.on_pointer_event(&mut self.host, &event)
        } else {
            let intercepted = self
                .controller
                .on_intercept_pointer_event(&mut self.host, &event);
            if intercepted {
                self.claimed = true;
            }
            intercepted
        }
    }
}

impl GestureRobot {
    /// Convenience: translation of a row as the host sees it.
    pub fn translation(&self, row: slidemenu_foundation::RowId) -> f32 {
        self.host.row_translation(row)
    }

    /// Opens a row's menu through the controller's programmatic surface.
    pub fn open_row_at(&mut self, position: usize, animate: bool) -> bool {
        self.controller.open_row_at(&mut self.host, position, animate)
    }

    /// Closes the dragged or fully open row, if any.
    pub fn release(&mut self, animate: bool) {
        self.controller
            .release_active_or_open_row(&mut self.host, animate);
    }

    /// Simulates the row set detaching from the live view tree.
    pub fn detach(&mut self) {
        self.controller.on_detached(&mut self.host);
    }

    /// Simulates one row being recycled out of the layout.
    pub fn recycle(&mut self, row: slidemenu_foundation::RowId) {
        self.controller.on_row_recycled(&mut self.host, row);
    }
}
