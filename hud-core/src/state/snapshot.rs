//! UI state snapshot
//!
//! The surrounding application fills one of these per update from whatever
//! transport it uses. Every field is optional: `None` leaves the
//! corresponding render state untouched.

use super::render::BatteryDetails;
use super::status::Status;

/// Read-only state snapshot fed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiSnapshot {
    /// No car state received since the UI started
    ///
    /// Clears cruise and speed; the speed fields below are ignored.
    pub car_state_stale: bool,
    /// Computed vehicle speed (m/s)
    pub v_ego: Option<f32>,
    /// Dashboard-sourced vehicle speed (m/s), 0 when not reported
    pub v_ego_cluster: Option<f32>,
    /// Cruise target as shown on the cluster (km/h), 0 when not reported
    pub v_cruise_cluster: Option<f32>,
    /// Cruise target from sources that predate the cluster value (km/h)
    pub v_cruise_fallback: Option<f32>,
    /// Metric units selected
    pub is_metric: Option<bool>,
    /// Engagement status
    pub status: Option<Status>,
    /// Battery heater switched on
    pub battery_heater_enabled: Option<bool>,
    /// Battery measurements
    pub battery_details: Option<BatteryDetails>,
    /// Battery detail panel expanded
    pub battery_panel_expanded: Option<bool>,
}

impl UiSnapshot {
    /// Snapshot that changes nothing
    pub const fn empty() -> Self {
        Self {
            car_state_stale: false,
            v_ego: None,
            v_ego_cluster: None,
            v_cruise_cluster: None,
            v_cruise_fallback: None,
            is_metric: None,
            status: None,
            battery_heater_enabled: None,
            battery_details: None,
            battery_panel_expanded: None,
        }
    }

    /// Set the speed readings (m/s)
    pub fn with_speed(mut self, v_ego: f32, v_ego_cluster: f32) -> Self {
        self.v_ego = Some(v_ego);
        self.v_ego_cluster = Some(v_ego_cluster);
        self
    }

    /// Set the cruise target (km/h)
    pub fn with_cruise(mut self, v_cruise_kph: f32) -> Self {
        self.v_cruise_cluster = Some(v_cruise_kph);
        self
    }

    pub fn with_metric(mut self, is_metric: bool) -> Self {
        self.is_metric = Some(is_metric);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the heater switch and battery measurements
    pub fn with_battery(mut self, heater_enabled: bool, details: BatteryDetails) -> Self {
        self.battery_heater_enabled = Some(heater_enabled);
        self.battery_details = Some(details);
        self
    }

    pub fn with_panel_expanded(mut self, expanded: bool) -> Self {
        self.battery_panel_expanded = Some(expanded);
        self
    }
}
