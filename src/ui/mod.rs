//! Immediate-mode UI helpers
//!
//! Simple rectangle-based layout plus the handful of widgets the skin
//! editor needs. No retained state - everything is rebuilt each frame.

mod rect;
mod widgets;

pub use rect::*;
pub use widgets::*;
