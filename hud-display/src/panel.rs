//! Battery detail panel lines
//!
//! One labelled line per battery field, value plus unit suffix.

use core::fmt::Write;

use heapless::String;
use hud_core::BatteryDetails;

/// Number of lines in the panel
pub const DETAIL_LINES: usize = 11;

/// Maximum formatted value length
pub const MAX_VALUE_LEN: usize = 16;

/// A label/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String<MAX_VALUE_LEN>,
}

/// Shown in place of a reading too wide for the panel
const OVERFLOW_VALUE: &str = "---";

/// Format a reading with `precision` decimals and a unit suffix
fn reading(label: &'static str, value: f32, precision: usize, unit: &str) -> DetailLine {
    let mut out = String::new();
    if write!(out, "{:.*} {}", precision, value, unit).is_err() {
        // Keep the unit; the placeholder plus any unit always fits
        out.clear();
        let _ = write!(out, "{} {}", OVERFLOW_VALUE, unit);
    }
    DetailLine { label, value: out }
}

/// Format every battery field for display
pub fn detail_lines(details: &BatteryDetails) -> [DetailLine; DETAIL_LINES] {
    let mut heater = String::new();
    let _ = heater.push_str(if details.heater_active { "On" } else { "Off" });

    [
        DetailLine {
            label: "Heater",
            value: heater,
        },
        reading("Capacity", details.capacity, 0, "Wh"),
        reading("Charge", details.charge, 0, "Wh"),
        reading("SoC", details.soc, 1, "%"),
        reading("Temp", details.temperature, 1, "°C"),
        reading("Cell", details.cell_voltage, 3, "V"),
        reading("Voltage", details.voltage, 1, "V"),
        reading("Current", details.current, 1, "A"),
        reading("Current max", details.current_max, 1, "A"),
        reading("Power", details.power, 0, "W"),
        reading("Power max", details.power_max, 0, "W"),
    ]
}
