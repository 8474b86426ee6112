//! Core sliding-item-menu machinery: gesture recognition, slide translation,
//! and the registry of opened rows, behind the [`RowHost`] abstraction.
//!
//! Rows of a vertically scrolling list each carry an optional hidden
//! horizontal menu. A sideways drag on a row (toward the menu while
//! everything is closed, either way afterwards) slides the row's content to
//! reveal the menu; release snaps to fully open or fully closed based on
//! position and fling velocity. [`SlidingMenuController`] is the single
//! entry point hosts integrate with.

pub mod engine;
pub mod fling;
pub mod gesture_constants;
pub mod host;
pub mod input;
pub mod metrics;
pub mod registry;
pub mod router;

pub use engine::TranslationEngine;
pub use fling::{classify, SnapTarget};
pub use host::{LayoutDirection, RowHost, RowId, ScrollState};
pub use input::{PointerEvent, PointerEventKind, VelocityTracker};
pub use metrics::{menu_bounds, open_sign, resolve_menu_metrics, MenuMetrics};
pub use registry::SlideRegistry;
pub use router::{InvalidDurationError, SlidingMenuController};
