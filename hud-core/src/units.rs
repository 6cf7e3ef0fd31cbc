//! Speed unit conversion
//!
//! Vehicle speeds arrive in m/s; cruise targets arrive in km/h as the
//! instrument cluster reports them. Everything is converted to the
//! selected display unit only at draw time.

/// m/s to km/h
pub const MS_TO_KPH: f32 = 3.6;

/// m/s to mph
pub const MS_TO_MPH: f32 = 2.236_936;

/// km/h to mph
pub const KPH_TO_MPH: f32 = 0.621_371;

/// Cruise speed value meaning "not available"
pub const SET_SPEED_NA: f32 = 255.0;

/// Display unit system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedUnit {
    Kph,
    Mph,
}

impl SpeedUnit {
    /// Pick the unit for the metric flag
    pub const fn from_metric(is_metric: bool) -> Self {
        if is_metric {
            SpeedUnit::Kph
        } else {
            SpeedUnit::Mph
        }
    }

    /// Label drawn under the current speed
    pub const fn label(self) -> &'static str {
        match self {
            SpeedUnit::Kph => "km/h",
            SpeedUnit::Mph => "mph",
        }
    }

    /// Convert a vehicle speed in m/s, clamped at zero
    pub fn from_ms(self, v_ms: f32) -> f32 {
        let factor = match self {
            SpeedUnit::Kph => MS_TO_KPH,
            SpeedUnit::Mph => MS_TO_MPH,
        };
        (v_ms * factor).max(0.0)
    }

    /// Convert a cruise target in km/h
    pub fn from_kph(self, v_kph: f32) -> f32 {
        match self {
            SpeedUnit::Kph => v_kph,
            SpeedUnit::Mph => v_kph * KPH_TO_MPH,
        }
    }
}

/// Round to the nearest whole display value
///
/// Halves round away from zero. Non-finite and negative inputs show as 0.
pub fn display_round(value: f32) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // f32 has no `round` in core
    let rounded = (value + 0.5) as u64;
    rounded.min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_speed() {
        let kph = SpeedUnit::Kph.from_ms(27.8);
        assert_eq!(display_round(kph), 100);
    }

    #[test]
    fn test_imperial_speed() {
        let mph = SpeedUnit::Mph.from_ms(27.8);
        assert_eq!(display_round(mph), 62);
    }

    #[test]
    fn test_negative_speed_clamped() {
        assert_eq!(SpeedUnit::Kph.from_ms(-1.0), 0.0);
        assert_eq!(display_round(-3.2), 0);
    }

    #[test]
    fn test_cruise_conversion() {
        assert_eq!(SpeedUnit::Kph.from_kph(100.0), 100.0);
        assert_eq!(display_round(SpeedUnit::Mph.from_kph(100.0)), 62);
    }

    #[test]
    fn test_display_round() {
        assert_eq!(display_round(0.49), 0);
        assert_eq!(display_round(0.5), 1);
        assert_eq!(display_round(99.5), 100);
        assert_eq!(display_round(f32::NAN), 0);
        assert_eq!(display_round(f32::INFINITY), 0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SpeedUnit::from_metric(true).label(), "km/h");
        assert_eq!(SpeedUnit::from_metric(false).label(), "mph");
    }
}
