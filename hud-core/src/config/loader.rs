//! TOML configuration loading
//!
//! Partial files are fine: every table and key is optional and falls back
//! to the compiled-in default.
//!
//! ```toml
//! inactive_icon_opacity = 64
//!
//! [layout]
//! badge_corner = "bottom-right"
//!
//! [styles.engaged]
//! max_label = { r = 128, g = 216, b = 166, a = 255 }
//! border = { r = 255, g = 255, b = 255, a = 75 }
//!
//! [panel]
//! unpopulated = "skip"
//! ```

use super::types::{ConfigError, HudConfig};

impl HudConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: HudConfig = toml::from_str(input).map_err(|_| ConfigError::TomlParse)?;
        config.validate()?;
        Ok(config)
    }
}
