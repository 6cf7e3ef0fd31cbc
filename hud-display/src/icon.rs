//! Icon assets
//!
//! Icons are 1-bit bitmaps, row-major, MSB first, each row padded to a
//! whole byte. Set bits are drawn in the foreground colour; clear bits are
//! transparent. Surfaces scale them into whatever rectangle they are given.

/// A 1-bit icon bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Icon {
    /// Identifier used by command recorders
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub data: &'static [u8],
}

impl Icon {
    /// Create an icon, returning `None` if `data` is too short
    pub const fn new(
        name: &'static str,
        width: u32,
        height: u32,
        data: &'static [u8],
    ) -> Option<Self> {
        let bytes_per_row = (width as usize + 7) / 8;
        if data.len() < bytes_per_row * height as usize {
            return None;
        }
        Some(Self {
            name,
            width,
            height,
            data,
        })
    }

    const fn bytes_per_row(&self) -> usize {
        (self.width as usize + 7) / 8
    }

    /// Check if the bitmap pixel at (`x`, `y`) is set
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y as usize * self.bytes_per_row() + x as usize / 8;
        let bit = 7 - (x % 8);
        self.data
            .get(index)
            .map(|byte| (byte >> bit) & 1 == 1)
            .unwrap_or(false)
    }

    /// Nearest-neighbour sample for pixel (`dx`, `dy`) of a `dest_w`×`dest_h` scaling
    pub fn sample(&self, dx: u32, dy: u32, dest_w: u32, dest_h: u32) -> bool {
        if dest_w == 0 || dest_h == 0 {
            return false;
        }
        let x = (dx as u64 * self.width as u64 / dest_w as u64) as u32;
        let y = (dy as u64 * self.height as u64 / dest_h as u64) as u32;
        self.pixel(x, y)
    }
}

/// Icons used by the battery-heater badge
///
/// Loaded once when the renderer is built and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IconSet {
    pub heater_enabled: Icon,
    pub heater_disabled: Icon,
}

impl IconSet {
    /// The compiled-in 24x24 icons
    pub const fn builtin() -> Self {
        Self {
            heater_enabled: HEATER_ENABLED,
            heater_disabled: HEATER_DISABLED,
        }
    }

    /// Icon for the heater switch state
    pub const fn for_heater(&self, enabled: bool) -> &Icon {
        if enabled {
            &self.heater_enabled
        } else {
            &self.heater_disabled
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Battery with heat waves
pub const HEATER_ENABLED: Icon = Icon {
    name: "battery_heater_enabled",
    width: 24,
    height: 24,
    data: &HEATER_ENABLED_BITS,
};

/// Battery with heat waves, struck through
pub const HEATER_DISABLED: Icon = Icon {
    name: "battery_heater_disabled",
    width: 24,
    height: 24,
    data: &HEATER_DISABLED_BITS,
};

#[rustfmt::skip]
const HEATER_ENABLED_BITS: [u8; 72] = [
    0x00, 0x00, 0x00,
    0x08, 0x20, 0x80,
    0x04, 0x10, 0x40,
    0x08, 0x20, 0x80,
    0x04, 0x10, 0x40,
    0x08, 0x20, 0x80,
    0x00, 0x00, 0x00,
    0x00, 0x00, 0x00,
    0x03, 0xc3, 0xc0,
    0x03, 0xc3, 0xc0,
    0x3f, 0xff, 0xfc,
    0x20, 0x00, 0x04,
    0x20, 0x00, 0x04,
    0x23, 0x82, 0x24,
    0x20, 0x02, 0x24,
    0x20, 0x83, 0xe4,
    0x20, 0x80, 0x24,
    0x23, 0x80, 0x24,
    0x20, 0x00, 0x04,
    0x20, 0x00, 0x04,
    0x3f, 0xff, 0xfc,
    0x00, 0x00, 0x00,
    0x00, 0x00, 0x00,
    0x00, 0x00, 0x00,
];

#[rustfmt::skip]
const HEATER_DISABLED_BITS: [u8; 72] = [
    0xc0, 0x00, 0x00,
    0x68, 0x20, 0x80,
    0x34, 0x10, 0x40,
    0x18, 0x20, 0x80,
    0x0c, 0x10, 0x40,
    0x0e, 0x20, 0x80,
    0x03, 0x00, 0x00,
    0x01, 0x80, 0x00,
    0x03, 0xc3, 0xc0,
    0x03, 0xe3, 0xc0,
    0x3f, 0xff, 0xfc,
    0x20, 0x18, 0x04,
    0x20, 0x0c, 0x04,
    0x23, 0x86, 0x24,
    0x20, 0x03, 0x24,
    0x20, 0x83, 0xe4,
    0x20, 0x80, 0xe4,
    0x23, 0x80, 0x64,
    0x20, 0x00, 0x34,
    0x20, 0x00, 0x1c,
    0x3f, 0xff, 0xfc,
    0x00, 0x00, 0x06,
    0x00, 0x00, 0x03,
    0x00, 0x00, 0x01,
];
