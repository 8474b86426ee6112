//! Release classification: where should a dragged row settle?

use crate::gesture_constants::MIN_FLING_VELOCITY;

/// Rest state a released row snaps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapTarget {
    /// Fully open: translation at ± the total menu width.
    Open,
    /// Fully closed: translation back to neutral.
    Closed,
}

/// Decides the snap target for a release while dragging.
///
/// `toward_open_delta` is the most recent pointer delta with the reveal
/// direction normalized to positive; `velocity` is the 1-second-normalized
/// horizontal speed magnitude at release. A fling — velocity at or above
/// [`MIN_FLING_VELOCITY`] with the delta's sign matching — forces the
/// corresponding extreme regardless of position. Otherwise the row closes if
/// it has traveled less than half its menu width and opens fully if it has
/// traveled at least half.
pub fn classify(
    toward_open_delta: f32,
    velocity: f32,
    translation_magnitude: f32,
    total_menu_width: f32,
) -> SnapTarget {
    if toward_open_delta > 0.0 && velocity >= MIN_FLING_VELOCITY {
        return SnapTarget::Open;
    }
    if toward_open_delta < 0.0 && velocity >= MIN_FLING_VELOCITY {
        return SnapTarget::Closed;
    }
    if translation_magnitude < total_menu_width / 2.0 {
        SnapTarget::Closed
    } else {
        SnapTarget::Open
    }
}
