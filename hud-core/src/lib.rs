//! Toolkit-agnostic core of the onroad HUD
//!
//! This crate contains everything the overlay renderer needs that does not
//! depend on a drawing surface:
//!
//! - UI state snapshot (input) and render state (what gets drawn)
//! - Engagement status and its styling lookup
//! - Speed unit conversion and display rounding
//! - Geometry and colour primitives
//! - Configuration type definitions and TOML loading
//! - Update notification trait

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod geometry;
pub mod state;
pub mod traits;
pub mod units;

pub use color::Rgba;
pub use geometry::{Corner, Point, Rect, Size};
pub use state::{BatteryDetails, RenderState, Status, UiSnapshot};
pub use traits::UpdateNotifier;
