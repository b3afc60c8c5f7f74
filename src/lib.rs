pub mod app;
pub mod core;
pub mod cradle;
pub mod debug;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::CradleAppPlugin;
pub use crate::core::components::{Bob, BobIndex, CradleRig, DragConstraint, FramePiece, RopeConstraint};
pub use crate::core::config::{SimConfig, WindowConfig};
pub use crate::cradle::{CradleLayout, CradleParams, CurrentCradle, InvalidParameter, ParamField, RebuildCradle};
