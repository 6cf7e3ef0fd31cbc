//! Host integration traits
//!
//! These traits define the interface between the renderer and the
//! application that hosts it.

pub mod notify;

pub use notify::UpdateNotifier;
