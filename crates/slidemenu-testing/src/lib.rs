//! Testing utilities for the sliding-menu crates: an in-memory [`RowHost`]
//! and a gesture robot that drives the controller through realistic pointer
//! streams.
//!
//! [`RowHost`]: slidemenu_foundation::RowHost

mod host;
mod robot;

pub use host::TestHost;
pub use robot::GestureRobot;
