pub mod config;

pub use config::{DragConfig, GravityConfig, InitialCradleConfig, SimConfig, WindowConfig};
