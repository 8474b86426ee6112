//! Animation primitives for sliding row menus.
//!
//! Provides the two easing curves used when a menu snaps open or closed and a
//! timed relative-delta animation that a host frame clock drives to
//! completion. There is no runtime in this crate: the engine that owns an
//! animation calls [`SlideAnimation::tick`] with the current frame time and
//! applies the returned increments itself.

mod easing;
mod slide_animation;

pub use easing::Easing;
pub use slide_animation::SlideAnimation;
