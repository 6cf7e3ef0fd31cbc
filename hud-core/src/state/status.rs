//! Driving-engagement status

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Engagement status of the driving-assistance system
///
/// Only selects styling; the renderer never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    /// Not controlling the vehicle
    #[default]
    Disengaged,
    /// Driver is overriding (e.g. pressing the gas)
    Override,
    /// Actively controlling
    Engaged,
    /// Controlling, but an alert demands attention
    Warning,
}

impl Status {
    /// All statuses, in table order
    pub const ALL: [Status; 4] = [
        Status::Disengaged,
        Status::Override,
        Status::Engaged,
        Status::Warning,
    ];
}
