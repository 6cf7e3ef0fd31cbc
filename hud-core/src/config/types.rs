//! Configuration type definitions
//!
//! Defaults reproduce the stock layout for a 2160x1080 panel. Every table
//! can be overridden from TOML (see [`super::loader`]); missing keys fall
//! back to these defaults.

use heapless::String;

use crate::color::Rgba;
use crate::geometry::{Corner, Point, Size};
use crate::state::{StateChanges, Status};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum placeholder glyph length in bytes
pub const MAX_PLACEHOLDER_LEN: usize = 8;

/// Default placeholder shown when cruise is not set
pub const DEFAULT_PLACEHOLDER: &str = "–";

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML parsing failed
    TomlParse,
    /// A value is out of range; names the offending key
    InvalidValue(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::TomlParse => write!(f, "invalid TOML"),
            ConfigError::InvalidValue(key) => write!(f, "invalid value for `{}`", key),
        }
    }
}

/// Pixel layout of the overlay widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Height of the darkening gradient at the top
    pub header_height: u32,
    /// Top-left of the set-speed box, relative to the surface rect
    pub set_speed_origin: Point,
    /// Set-speed box size (imperial)
    pub set_speed_size: Size,
    /// Set-speed box size (metric, wider for three digits)
    pub set_speed_size_metric: Size,
    pub set_speed_radius: u32,
    pub set_speed_border: u32,
    /// Offset of the "MAX" label from the top of the box
    pub max_label_offset: u32,
    /// Offset of the set-speed value from the top of the box
    pub set_speed_value_offset: u32,
    /// Baseline of the current-speed numeral
    pub speed_y: i32,
    /// Baseline of the unit label
    pub unit_y: i32,
    /// Alpha of the unit label
    pub unit_alpha: u8,
    /// Outer diameter of the battery-heater badge
    pub btn_size: u32,
    /// Distance from the surface edge to the badge
    pub badge_margin: u32,
    pub badge_corner: Corner,
    /// Battery detail panel size
    pub panel_size: Size,
    /// Gap between badge and panel
    pub panel_gap: u32,
    pub panel_padding: u32,
    pub panel_line_height: u32,
    pub panel_radius: u32,
}

impl LayoutConfig {
    /// Icon size inside the badge
    pub const fn img_size(&self) -> u32 {
        (self.btn_size / 4) * 3
    }

    /// Distance from the surface edges to the badge centre
    pub const fn badge_inset(&self) -> i32 {
        (self.badge_margin + self.btn_size / 2) as i32
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_height: 420,
            set_speed_origin: Point::new(60, 45),
            set_speed_size: Size::new(172, 204),
            set_speed_size_metric: Size::new(200, 204),
            set_speed_radius: 32,
            set_speed_border: 6,
            max_label_offset: 27,
            set_speed_value_offset: 77,
            speed_y: 210,
            unit_y: 290,
            unit_alpha: 200,
            btn_size: 192,
            badge_margin: 30,
            badge_corner: Corner::BottomLeft,
            panel_size: Size::new(520, 540),
            panel_gap: 30,
            panel_padding: 28,
            panel_line_height: 44,
            panel_radius: 24,
        }
    }
}

/// Styling for one engagement status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatusStyle {
    /// "MAX" label colour while cruise is set
    pub max_label: Rgba,
    /// Set-speed box border
    pub border: Rgba,
}

impl StatusStyle {
    pub const fn new(max_label: Rgba) -> Self {
        Self {
            max_label,
            border: Rgba::new(0xff, 0xff, 0xff, 75),
        }
    }
}

/// Status → style lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusStyles {
    pub disengaged: StatusStyle,
    #[cfg_attr(feature = "serde", serde(rename = "override"))]
    pub overriding: StatusStyle,
    pub engaged: StatusStyle,
    pub warning: StatusStyle,
    /// "MAX" label colour while cruise is not set
    pub max_label_inactive: Rgba,
    pub set_speed_active: Rgba,
    pub set_speed_inactive: Rgba,
    /// Set-speed box fill
    pub set_speed_background: Rgba,
    /// Battery-heater badge fill
    pub badge_background: Rgba,
    /// Battery detail panel fill
    pub panel_background: Rgba,
}

impl StatusStyles {
    /// Look up the style for a status
    pub fn get(&self, status: Status) -> &StatusStyle {
        match status {
            Status::Disengaged => &self.disengaged,
            Status::Override => &self.overriding,
            Status::Engaged => &self.engaged,
            Status::Warning => &self.warning,
        }
    }
}

impl Default for StatusStyles {
    fn default() -> Self {
        Self {
            disengaged: StatusStyle::new(Rgba::WHITE),
            overriding: StatusStyle::new(Rgba::rgb(0x91, 0x9b, 0x95)),
            engaged: StatusStyle::new(Rgba::rgb(0x80, 0xd8, 0xa6)),
            warning: StatusStyle::new(Rgba::rgb(0xda, 0x6f, 0x25)),
            max_label_inactive: Rgba::rgb(0xa6, 0xa6, 0xa6),
            set_speed_active: Rgba::WHITE,
            set_speed_inactive: Rgba::rgb(0x72, 0x72, 0x72),
            set_speed_background: Rgba::new(0, 0, 0, 166),
            badge_background: Rgba::new(0, 0, 0, 70),
            panel_background: Rgba::new(0, 0, 0, 166),
        }
    }
}

/// Which state changes ask the host for a layout refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NotifyPolicy {
    pub heater_enabled: bool,
    pub heater_active: bool,
    pub measurements: bool,
    pub panel_expanded: bool,
}

impl NotifyPolicy {
    /// Check if `changes` should fire a notification
    pub fn triggers(&self, changes: &StateChanges) -> bool {
        (self.heater_enabled && changes.heater_enabled)
            || (self.heater_active && changes.heater_active)
            || (self.measurements && changes.measurements)
            || (self.panel_expanded && changes.panel_expanded)
    }
}

impl Default for NotifyPolicy {
    fn default() -> Self {
        Self {
            heater_enabled: true,
            heater_active: true,
            measurements: true,
            panel_expanded: true,
        }
    }
}

/// What to draw when the panel is expanded but no battery data has arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum UnpopulatedPanel {
    /// Draw the panel with every value at zero
    #[default]
    ZeroFilled,
    /// Leave the panel out
    Skip,
}

/// Battery detail panel behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelPolicy {
    pub unpopulated: UnpopulatedPanel,
}

/// Complete HUD configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HudConfig {
    pub layout: LayoutConfig,
    pub styles: StatusStyles,
    pub notify: NotifyPolicy,
    pub panel: PanelPolicy,
    /// Icon opacity while the heater is off (0-255)
    pub inactive_icon_opacity: u8,
    /// Glyph shown instead of the set speed when cruise is not set
    pub placeholder: String<MAX_PLACEHOLDER_LEN>,
}

impl Default for HudConfig {
    fn default() -> Self {
        let mut placeholder = String::new();
        let _ = placeholder.push_str(DEFAULT_PLACEHOLDER);
        Self {
            layout: LayoutConfig::default(),
            styles: StatusStyles::default(),
            notify: NotifyPolicy::default(),
            panel: PanelPolicy::default(),
            inactive_icon_opacity: 77,
            placeholder,
        }
    }
}

impl HudConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.img_size() == 0 {
            return Err(ConfigError::InvalidValue("layout.btn_size"));
        }
        if self.layout.panel_line_height == 0 {
            return Err(ConfigError::InvalidValue("layout.panel_line_height"));
        }
        if self.layout.set_speed_size.is_empty() || self.layout.set_speed_size_metric.is_empty() {
            return Err(ConfigError::InvalidValue("layout.set_speed_size"));
        }
        // Inactive icon must read as clearly dimmed
        if self.inactive_icon_opacity > 128 {
            return Err(ConfigError::InvalidValue("inactive_icon_opacity"));
        }
        if self.placeholder.is_empty() {
            return Err(ConfigError::InvalidValue("placeholder"));
        }
        Ok(())
    }
}
