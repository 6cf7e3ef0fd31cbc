//! Drawing surface trait
//!
//! Defines the interface the renderer draws through. Implementations handle
//! the specifics of a GUI toolkit, a framebuffer, or a command recorder.

use hud_core::{Point, Rect, Rgba, Size};

use crate::icon::Icon;

/// Surface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// The underlying target rejected a draw
    Communication,
    /// Command buffer full
    BufferOverflow,
}

impl core::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SurfaceError::Communication => write!(f, "draw target error"),
            SurfaceError::BufferOverflow => write!(f, "command buffer full"),
        }
    }
}

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontWeight {
    Regular,
    DemiBold,
    Bold,
}

/// UI font request
///
/// Surfaces map the pixel size to the closest face they have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Font {
    /// Nominal pixel size
    pub size: u16,
    pub weight: FontWeight,
}

impl Font {
    /// "MAX" label above the set speed
    pub const MAX_LABEL: Font = Font::new(40, FontWeight::DemiBold);
    /// Set-speed value
    pub const SET_SPEED: Font = Font::new(90, FontWeight::Bold);
    /// Current-speed numeral
    pub const SPEED: Font = Font::new(176, FontWeight::Bold);
    /// Unit label under the current speed
    pub const UNIT: Font = Font::new(66, FontWeight::Regular);
    /// Battery detail panel lines
    pub const PANEL: Font = Font::new(36, FontWeight::Regular);

    pub const fn new(size: u16, weight: FontWeight) -> Self {
        Self { size, weight }
    }

    /// Approximate bounding box of `text` for a proportional UI face
    ///
    /// Average advance is 0.6 em; line height is the nominal size.
    pub fn approx_text_size(&self, text: &str) -> Size {
        let chars = text.chars().count() as u32;
        let advance = (self.size as u32 * 3) / 5;
        Size::new(chars * advance, self.size as u32)
    }
}

/// Surface trait
///
/// Provides a toolkit-agnostic interface for the overlay's 2D drawing.
/// Colours carry straight alpha; how they composite is up to the surface.
pub trait HudSurface {
    /// Fill `rect` with a vertical gradient from `top` to `bottom`
    fn fill_vertical_gradient(&mut self, rect: Rect, top: Rgba, bottom: Rgba)
        -> Result<(), SurfaceError>;

    /// Draw a rounded rectangle with a fill and an inside border
    ///
    /// A `border_width` of 0 draws no border.
    fn draw_rounded_rect(
        &mut self,
        rect: Rect,
        radius: u32,
        fill: Rgba,
        border: Rgba,
        border_width: u32,
    ) -> Result<(), SurfaceError>;

    /// Fill a circle
    fn fill_circle(&mut self, center: Point, diameter: u32, color: Rgba)
        -> Result<(), SurfaceError>;

    /// Draw text with its bounding box's top-left corner at `top_left`
    fn draw_text(
        &mut self,
        top_left: Point,
        text: &str,
        font: Font,
        color: Rgba,
    ) -> Result<(), SurfaceError>;

    /// Bounding box `text` would occupy in `font`
    fn text_size(&self, text: &str, font: Font) -> Size {
        font.approx_text_size(text)
    }

    /// Draw `icon` scaled into `dest` at `opacity` (0-255)
    fn draw_icon(&mut self, dest: Rect, icon: &Icon, opacity: u8) -> Result<(), SurfaceError>;
}
