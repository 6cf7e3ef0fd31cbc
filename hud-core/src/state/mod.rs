//! HUD state
//!
//! The snapshot is what the application hands in; the render state is
//! what the renderer keeps between frames.

pub mod render;
pub mod snapshot;
pub mod status;

pub use render::{BatteryDetails, RenderState, StateChanges};
pub use snapshot::UiSnapshot;
pub use status::Status;
