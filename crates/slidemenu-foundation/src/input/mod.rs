pub mod types;
pub mod velocity;

pub use types::{PointerEvent, PointerEventKind};
pub use velocity::VelocityTracker;
