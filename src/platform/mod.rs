//! Platform abstraction layer
//!
//! Browser/native differences for:
//! - Input events (touch and mouse both reduce to gestures)
//! - Storage (see [`crate::persistence`])

pub mod input;

pub use input::GestureTracker;
