//! Platformer game module
//!
//! One deterministic fixed-rate simulation (entities, resolver, world)
//! under a two-state menu/play runtime. All physics constants come from
//! an immutable `Tuning` handed in at session reset.

pub mod collision;
pub mod entities;
pub mod runtime;
pub mod tuning;
pub mod world;

pub use runtime::{FrameActions, GameToolState, SceneAssets};
pub use tuning::Tuning;
