//! Recording surface
//!
//! Captures draw calls as a fixed-capacity command list instead of pixels.
//! Used to unit-test layout without a display, and to build a frame once and
//! replay it onto a real surface later.

use heapless::{String, Vec};
use hud_core::{Point, Rect, Rgba, Size};

use crate::backend::{Font, HudSurface, SurfaceError};
use crate::icon::Icon;

/// Maximum recorded text length in bytes
pub const MAX_TEXT_LEN: usize = 32;

/// A recorded draw call
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawOp {
    Gradient {
        rect: Rect,
        top: Rgba,
        bottom: Rgba,
    },
    RoundedRect {
        rect: Rect,
        radius: u32,
        fill: Rgba,
        border: Rgba,
        border_width: u32,
    },
    Circle {
        center: Point,
        diameter: u32,
        color: Rgba,
    },
    Text {
        top_left: Point,
        text: String<MAX_TEXT_LEN>,
        font: Font,
        color: Rgba,
    },
    Icon {
        dest: Rect,
        icon: Icon,
        opacity: u8,
    },
}

impl DrawOp {
    /// Text of a `Text` op
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }

    /// Replay this op onto another surface
    pub fn replay<S: HudSurface + ?Sized>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        match self {
            DrawOp::Gradient { rect, top, bottom } => {
                surface.fill_vertical_gradient(*rect, *top, *bottom)
            }
            DrawOp::RoundedRect {
                rect,
                radius,
                fill,
                border,
                border_width,
            } => surface.draw_rounded_rect(*rect, *radius, *fill, *border, *border_width),
            DrawOp::Circle {
                center,
                diameter,
                color,
            } => surface.fill_circle(*center, *diameter, *color),
            DrawOp::Text {
                top_left,
                text,
                font,
                color,
            } => surface.draw_text(*top_left, text, *font, *color),
            DrawOp::Icon {
                dest,
                icon,
                opacity,
            } => surface.draw_icon(*dest, icon, *opacity),
        }
    }
}

/// Surface that records up to `N` draw calls
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface<const N: usize> {
    ops: Vec<DrawOp, N>,
}

impl<const N: usize> RecordingSurface<N> {
    /// Create an empty recorder
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Recorded ops in draw order
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drop all recorded ops
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Check if nothing was drawn
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// All recorded text, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(DrawOp::text)
    }

    /// Replay every recorded op onto `surface`
    pub fn replay<S: HudSurface + ?Sized>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        for op in &self.ops {
            op.replay(surface)?;
        }
        Ok(())
    }

    fn push(&mut self, op: DrawOp) -> Result<(), SurfaceError> {
        self.ops.push(op).map_err(|_| SurfaceError::BufferOverflow)
    }
}

/// Copy `text` into a bounded string, cutting at a character boundary
fn truncated(text: &str) -> String<MAX_TEXT_LEN> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            warn!("recording: text truncated to {} bytes", out.len());
            break;
        }
    }
    out
}

impl<const N: usize> HudSurface for RecordingSurface<N> {
    fn fill_vertical_gradient(
        &mut self,
        rect: Rect,
        top: Rgba,
        bottom: Rgba,
    ) -> Result<(), SurfaceError> {
        self.push(DrawOp::Gradient { rect, top, bottom })
    }

    fn draw_rounded_rect(
        &mut self,
        rect: Rect,
        radius: u32,
        fill: Rgba,
        border: Rgba,
        border_width: u32,
    ) -> Result<(), SurfaceError> {
        self.push(DrawOp::RoundedRect {
            rect,
            radius,
            fill,
            border,
            border_width,
        })
    }

    fn fill_circle(&mut self, center: Point, diameter: u32, color: Rgba) -> Result<(), SurfaceError> {
        self.push(DrawOp::Circle {
            center,
            diameter,
            color,
        })
    }

    fn draw_text(
        &mut self,
        top_left: Point,
        text: &str,
        font: Font,
        color: Rgba,
    ) -> Result<(), SurfaceError> {
        self.push(DrawOp::Text {
            top_left,
            text: truncated(text),
            font,
            color,
        })
    }

    fn text_size(&self, text: &str, font: Font) -> Size {
        font.approx_text_size(text)
    }

    fn draw_icon(&mut self, dest: Rect, icon: &Icon, opacity: u8) -> Result<(), SurfaceError> {
        self.push(DrawOp::Icon {
            dest,
            icon: *icon,
            opacity,
        })
    }
}
