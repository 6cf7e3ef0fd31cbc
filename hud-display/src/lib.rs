//! Overlay renderer and surface abstraction for the onroad HUD
//!
//! This crate provides:
//! - `HudSurface` trait for anything that can take 2D draw calls
//! - `HudRenderer`, which turns a `UiSnapshot` stream into draw calls
//! - `RecordingSurface`, a fixed-capacity command list (tests, remote replay)
//! - `GraphicsSurface`, an adapter onto any `embedded-graphics` draw target
//! - Built-in battery-heater icons
//!
//! # Architecture
//!
//! The renderer owns its state and only reads it while drawing, so a frame
//! can be drawn any number of times with identical output. Hosts push state
//! with [`HudRenderer::update_state`] and get an [`UpdateNotifier`] callback
//! when the battery/heater layout needs refreshing.
//!
//! [`UpdateNotifier`]: hud_core::UpdateNotifier

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod backend;
pub mod graphics;
pub mod icon;
pub mod panel;
pub mod recording;
pub mod renderer;

// Re-export key types
pub use backend::{Font, FontWeight, HudSurface, SurfaceError};
pub use graphics::GraphicsSurface;
pub use icon::{Icon, IconSet};
pub use recording::{DrawOp, RecordingSurface};
pub use renderer::{draw_icon, draw_text, HudRenderer};
