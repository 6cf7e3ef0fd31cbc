//! Render state
//!
//! The renderer's private copy of everything it draws. Only
//! [`RenderState::apply`] mutates it, so a frame always sees the result of
//! the last complete update.

use super::snapshot::UiSnapshot;
use super::status::Status;
use crate::units::{SpeedUnit, SET_SPEED_NA};

/// Battery measurements shown in the detail panel
///
/// Plain measurements; no cross-field invariant is checked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryDetails {
    /// Heater currently drawing power
    pub heater_active: bool,
    /// Usable capacity (Wh)
    pub capacity: f32,
    /// Stored energy (Wh)
    pub charge: f32,
    /// State of charge (%)
    pub soc: f32,
    /// Pack temperature (°C)
    pub temperature: f32,
    /// Lowest cell voltage (V)
    pub cell_voltage: f32,
    /// Pack voltage (V)
    pub voltage: f32,
    /// Pack current (A)
    pub current: f32,
    /// Current limit (A)
    pub current_max: f32,
    /// Pack power (W)
    pub power: f32,
    /// Power limit (W)
    pub power_max: f32,
}

impl BatteryDetails {
    /// Numeric fields in panel order
    pub fn measurements(&self) -> [f32; 10] {
        [
            self.capacity,
            self.charge,
            self.soc,
            self.temperature,
            self.cell_voltage,
            self.voltage,
            self.current,
            self.current_max,
            self.power,
            self.power_max,
        ]
    }

    /// Check if nothing has been reported yet
    pub fn is_unpopulated(&self) -> bool {
        !self.heater_active && self.measurements().iter().all(|v| *v == 0.0)
    }

    /// Bitwise comparison of the measurements
    ///
    /// Unlike `==`, a NaN reading equals itself, so a sensor stuck at NaN
    /// does not look like a change on every update.
    pub fn same_as(&self, other: &BatteryDetails) -> bool {
        self.heater_active == other.heater_active
            && self
                .measurements()
                .iter()
                .zip(other.measurements().iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

/// Which layout-relevant fields an update changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateChanges {
    pub heater_enabled: bool,
    pub heater_active: bool,
    /// Any battery measurement other than the heater flag
    pub measurements: bool,
    pub panel_expanded: bool,
}

impl StateChanges {
    pub fn any(&self) -> bool {
        self.heater_enabled || self.heater_active || self.measurements || self.panel_expanded
    }
}

/// Everything the HUD draws
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderState {
    /// Computed vehicle speed (m/s)
    pub speed: f32,
    /// Dashboard-sourced vehicle speed (m/s)
    pub cluster_speed: f32,
    /// Cruise target (km/h)
    pub set_speed: f32,
    pub is_cruise_set: bool,
    pub is_metric: bool,
    /// A non-zero cluster speed has been seen at least once
    pub v_ego_cluster_seen: bool,
    pub status: Status,
    pub battery_heater_enabled: bool,
    pub battery_details: BatteryDetails,
    pub battery_panel_expanded: bool,
}

impl RenderState {
    /// Zeroed state
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a snapshot, returning what changed in the battery/panel fields
    pub fn apply(&mut self, snapshot: &UiSnapshot) -> StateChanges {
        if let Some(is_metric) = snapshot.is_metric {
            self.is_metric = is_metric;
        }
        if let Some(status) = snapshot.status {
            self.status = status;
        }

        if snapshot.car_state_stale {
            self.is_cruise_set = false;
            self.set_speed = 0.0;
            self.speed = 0.0;
            self.cluster_speed = 0.0;
        } else {
            self.apply_speeds(snapshot);
        }

        self.apply_battery(snapshot)
    }

    fn apply_speeds(&mut self, snapshot: &UiSnapshot) {
        // Older sources report 0 for the cluster cruise speed
        let cruise = match (snapshot.v_cruise_cluster, snapshot.v_cruise_fallback) {
            (Some(cluster), _) if cluster != 0.0 => Some(cluster),
            (_, Some(fallback)) => Some(fallback),
            (cluster, None) => cluster,
        };
        if let Some(v_cruise) = cruise {
            self.set_speed = v_cruise;
            self.is_cruise_set = v_cruise > 0.0 && v_cruise != SET_SPEED_NA;
        }

        if let Some(v_cluster) = snapshot.v_ego_cluster {
            self.cluster_speed = v_cluster.max(0.0);
            self.v_ego_cluster_seen |= v_cluster != 0.0;
        }
        if let Some(v_ego) = snapshot.v_ego {
            self.speed = v_ego.max(0.0);
        }
    }

    fn apply_battery(&mut self, snapshot: &UiSnapshot) -> StateChanges {
        let mut changes = StateChanges::default();

        if let Some(enabled) = snapshot.battery_heater_enabled {
            changes.heater_enabled = enabled != self.battery_heater_enabled;
            self.battery_heater_enabled = enabled;
        }
        if let Some(details) = snapshot.battery_details {
            changes.heater_active = details.heater_active != self.battery_details.heater_active;
            let measurements_only = BatteryDetails {
                heater_active: self.battery_details.heater_active,
                ..details
            };
            changes.measurements = !measurements_only.same_as(&self.battery_details);
            self.battery_details = details;
        }
        if let Some(expanded) = snapshot.battery_panel_expanded {
            changes.panel_expanded = expanded != self.battery_panel_expanded;
            self.battery_panel_expanded = expanded;
        }

        changes
    }

    /// Speed to show (m/s)
    ///
    /// The cluster value is trusted once it has ever been reported.
    pub fn current_speed_ms(&self) -> f32 {
        if self.v_ego_cluster_seen {
            self.cluster_speed
        } else {
            self.speed
        }
    }

    /// Display unit for the metric flag
    pub fn unit(&self) -> SpeedUnit {
        SpeedUnit::from_metric(self.is_metric)
    }

    /// Current speed in the display unit
    pub fn display_speed(&self) -> f32 {
        self.unit().from_ms(self.current_speed_ms())
    }

    /// Cruise target in the display unit, `None` when cruise is not set
    pub fn display_set_speed(&self) -> Option<f32> {
        self.is_cruise_set.then(|| self.unit().from_kph(self.set_speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(soc: f32, heater_active: bool) -> BatteryDetails {
        BatteryDetails {
            heater_active,
            soc,
            voltage: 12.6,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_zeroed() {
        let state = RenderState::new();
        assert_eq!(state.speed, 0.0);
        assert!(!state.is_cruise_set);
        assert!(!state.is_metric);
        assert!(!state.v_ego_cluster_seen);
        assert_eq!(state.status, Status::Disengaged);
        assert!(state.battery_details.is_unpopulated());
    }

    #[test]
    fn test_missing_fields_unchanged() {
        let mut state = RenderState::new();
        state.apply(&UiSnapshot::empty().with_metric(true).with_cruise(90.0));

        state.apply(&UiSnapshot::empty());
        assert!(state.is_metric);
        assert!(state.is_cruise_set);
        assert_eq!(state.set_speed, 90.0);
    }

    #[test]
    fn test_cruise_not_available() {
        let mut state = RenderState::new();
        state.apply(&UiSnapshot::empty().with_cruise(SET_SPEED_NA));
        assert!(!state.is_cruise_set);

        state.apply(&UiSnapshot::empty().with_cruise(0.0));
        assert!(!state.is_cruise_set);

        state.apply(&UiSnapshot::empty().with_cruise(50.0));
        assert!(state.is_cruise_set);
    }

    #[test]
    fn test_cruise_fallback() {
        let mut state = RenderState::new();
        let snapshot = UiSnapshot {
            v_cruise_cluster: Some(0.0),
            v_cruise_fallback: Some(80.0),
            ..UiSnapshot::empty()
        };
        state.apply(&snapshot);
        assert!(state.is_cruise_set);
        assert_eq!(state.set_speed, 80.0);

        // Cluster value wins when reported
        let snapshot = UiSnapshot {
            v_cruise_cluster: Some(100.0),
            v_cruise_fallback: Some(80.0),
            ..UiSnapshot::empty()
        };
        state.apply(&snapshot);
        assert_eq!(state.set_speed, 100.0);
    }

    #[test]
    fn test_cluster_speed_latch() {
        let mut state = RenderState::new();
        state.apply(&UiSnapshot::empty().with_speed(20.0, 0.0));
        assert!(!state.v_ego_cluster_seen);
        assert_eq!(state.current_speed_ms(), 20.0);

        state.apply(&UiSnapshot::empty().with_speed(20.0, 19.5));
        assert!(state.v_ego_cluster_seen);
        assert_eq!(state.current_speed_ms(), 19.5);

        // A later zero reading does not reset the latch
        state.apply(&UiSnapshot::empty().with_speed(20.0, 0.0));
        assert!(state.v_ego_cluster_seen);
        assert_eq!(state.current_speed_ms(), 0.0);
    }

    #[test]
    fn test_stale_car_state_resets() {
        let mut state = RenderState::new();
        state.apply(&UiSnapshot::empty().with_speed(30.0, 0.0).with_cruise(100.0));

        let stale = UiSnapshot {
            car_state_stale: true,
            ..UiSnapshot::empty().with_speed(30.0, 0.0).with_metric(true)
        };
        state.apply(&stale);
        assert!(!state.is_cruise_set);
        assert_eq!(state.speed, 0.0);
        assert!(state.is_metric);
    }

    #[test]
    fn test_negative_speed_clamped() {
        let mut state = RenderState::new();
        state.apply(&UiSnapshot::empty().with_speed(-0.3, 0.0));
        assert_eq!(state.speed, 0.0);
    }

    #[test]
    fn test_display_speeds() {
        let mut state = RenderState::new();
        state.apply(
            &UiSnapshot::empty()
                .with_metric(false)
                .with_speed(27.8, 0.0)
                .with_cruise(100.0),
        );
        assert!((state.display_speed() - 62.19).abs() < 0.01);
        assert!((state.display_set_speed().unwrap() - 62.14).abs() < 0.01);

        state.apply(&UiSnapshot::empty().with_cruise(SET_SPEED_NA));
        assert_eq!(state.display_set_speed(), None);
    }

    #[test]
    fn test_battery_changes() {
        let mut state = RenderState::new();

        let changes = state.apply(&UiSnapshot::empty().with_battery(true, details(50.0, false)));
        assert!(changes.heater_enabled);
        assert!(!changes.heater_active);
        assert!(changes.measurements);

        let changes = state.apply(&UiSnapshot::empty().with_battery(true, details(50.0, false)));
        assert!(!changes.any());

        let changes = state.apply(&UiSnapshot::empty().with_battery(true, details(50.0, true)));
        assert!(changes.heater_active);
        assert!(!changes.measurements);
        assert!(!changes.heater_enabled);
    }

    #[test]
    fn test_nan_measurement_is_stable() {
        let mut state = RenderState::new();
        let nan = details(f32::NAN, false);
        state.apply(&UiSnapshot::empty().with_battery(false, nan));
        let changes = state.apply(&UiSnapshot::empty().with_battery(false, nan));
        assert!(!changes.any());
    }

    #[test]
    fn test_panel_toggle() {
        let mut state = RenderState::new();
        let changes = state.apply(&UiSnapshot::empty().with_panel_expanded(true));
        assert!(changes.panel_expanded);
        assert!(state.battery_panel_expanded);

        let changes = state.apply(&UiSnapshot::empty().with_panel_expanded(true));
        assert!(!changes.panel_expanded);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn speeds() -> impl Strategy<Value = (Option<f32>, Option<f32>, bool)> {
            (
                prop::option::of(-50.0f32..80.0),
                prop::option::of(-50.0f32..80.0),
                any::<bool>(),
            )
        }

        proptest! {
            #[test]
            fn speed_never_negative(updates in prop::collection::vec(speeds(), 1..16)) {
                let mut state = RenderState::new();
                for (v_ego, v_cluster, stale) in updates {
                    state.apply(&UiSnapshot {
                        car_state_stale: stale,
                        v_ego,
                        v_ego_cluster: v_cluster,
                        ..UiSnapshot::empty()
                    });
                    prop_assert!(state.speed >= 0.0);
                    prop_assert!(state.cluster_speed >= 0.0);
                    prop_assert!(state.display_speed() >= 0.0);
                }
            }

            #[test]
            fn cluster_latch_never_resets(updates in prop::collection::vec(speeds(), 1..16)) {
                let mut state = RenderState::new();
                let mut seen = false;
                for (v_ego, v_cluster, stale) in updates {
                    state.apply(&UiSnapshot {
                        car_state_stale: stale,
                        v_ego,
                        v_ego_cluster: v_cluster,
                        ..UiSnapshot::empty()
                    });
                    if !stale {
                        seen |= v_cluster.map_or(false, |v| v != 0.0);
                    }
                    prop_assert_eq!(state.v_ego_cluster_seen, seen);
                }
            }

            #[test]
            fn stale_clears_cruise(v_cruise in 1.0f32..250.0) {
                let mut state = RenderState::new();
                state.apply(&UiSnapshot::empty().with_cruise(v_cruise));
                prop_assert!(state.is_cruise_set);

                state.apply(&UiSnapshot {
                    car_state_stale: true,
                    ..UiSnapshot::empty().with_cruise(v_cruise)
                });
                prop_assert!(!state.is_cruise_set);
                prop_assert_eq!(state.display_set_speed(), None);
            }
        }
    }
}
