pub mod setup;

pub use setup::{PhysicsSetupPlugin, PIXELS_PER_METER};
