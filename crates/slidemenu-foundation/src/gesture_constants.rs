//! Shared gesture constants for consistent touch handling.
//!
//! These values are in logical pixels. Hosts on very high-density touch
//! screens may want to scale pointer positions before feeding them in; the
//! engine itself works in one coordinate space.

/// Touch slop in logical pixels.
///
/// Pointer displacement must exceed this distance before it is treated as an
/// intentional drag rather than noise:
/// - vertical displacement within the slop keeps horizontal intent alive,
/// - horizontal displacement past the slop (in the gated direction) starts
///   the row drag.
///
/// Value of 8.0 is large enough to ignore minor finger jitter on touch
/// screens, small enough to feel responsive, and matches common platform
/// conventions (Android uses ~8dp for ViewConfiguration.TOUCH_SLOP).
pub const TOUCH_SLOP: f32 = 8.0;

/// Minimum horizontal gesture speed, in logical pixels per second, for a
/// release to snap a row open or closed regardless of its current position.
pub const MIN_FLING_VELOCITY: f32 = 200.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Velocity estimates are capped here before classification, matching
/// Android's default maximum fling velocity on a baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Default duration, in milliseconds, of the animations that open or close a
/// row menu when no other duration has been configured.
pub const DEFAULT_TRANSITION_DURATION_MS: u32 = 500;

/// A row counts as "opened" while its translation magnitude exceeds this
/// fraction of its own total menu width. Membership is re-evaluated on every
/// applied delta, not just at gesture end.
pub const OPENED_THRESHOLD_FRACTION: f32 = 0.05;

/// Translations within this distance of a rest position (fully closed or
/// fully open) are pinned to the exact value, so the two stable states stay
/// exact despite float accumulation across animation increments.
pub const BOUNDARY_SNAP_EPSILON: f32 = 0.5;
