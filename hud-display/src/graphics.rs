//! `embedded-graphics` adapter
//!
//! Draws onto any `DrawTarget<Color = Rgb888>`. Draw targets are
//! write-only, so alpha is composited against a fixed backdrop colour
//! instead of the pixels already on screen. Fully transparent draws are
//! skipped.
//!
//! Text uses the ISO 8859-1 mono fonts (so `°` renders). Characters outside
//! Latin-1 are substituted before drawing: dashes become `-`, anything else
//! `?`.

use embedded_graphics::mono_font::iso_8859_1::{
    FONT_10X20, FONT_6X10, FONT_7X13_BOLD, FONT_9X18, FONT_9X18_BOLD,
};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{DrawTarget, Drawable, Primitive};
use embedded_graphics::primitives::{
    Circle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment,
};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Pixel;
use heapless::String;
use hud_core::{Point, Rect, Rgba, Size};

use crate::backend::{Font, FontWeight, HudSurface, SurfaceError};
use crate::icon::Icon;

/// [`HudSurface`] over an `embedded-graphics` draw target
pub struct GraphicsSurface<'a, D> {
    target: &'a mut D,
    backdrop: Rgba,
}

impl<'a, D> GraphicsSurface<'a, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    /// Wrap `target`, compositing against black
    pub fn new(target: &'a mut D) -> Self {
        Self::with_backdrop(target, Rgba::BLACK)
    }

    /// Wrap `target`, compositing against `backdrop`
    pub fn with_backdrop(target: &'a mut D, backdrop: Rgba) -> Self {
        Self {
            target,
            backdrop: backdrop.with_alpha(0xff),
        }
    }

    /// Blend `color` onto the backdrop, `None` if fully transparent
    fn blend(&self, color: Rgba) -> Option<Rgb888> {
        if color.a == 0 {
            return None;
        }
        let c = color.over(self.backdrop);
        Some(Rgb888::new(c.r, c.g, c.b))
    }
}

/// Pick the mono font closest to a requested UI font
fn mono_font(font: Font) -> &'static MonoFont<'static> {
    let bold = !matches!(font.weight, FontWeight::Regular);
    match (font.size, bold) {
        (0..=29, _) => &FONT_6X10,
        (30..=59, true) => &FONT_7X13_BOLD,
        (30..=59, false) => &FONT_9X18,
        (_, true) => &FONT_9X18_BOLD,
        (_, false) => &FONT_10X20,
    }
}

/// Longest text drawn in one call, in bytes after substitution
const MAX_GLYPH_BYTES: usize = 64;

/// Substitute a character the Latin-1 fonts can draw
fn latin1_glyph(ch: char) -> char {
    match ch {
        '\u{0}'..='\u{ff}' => ch,
        // Hyphen, figure dash, en/em dash, horizontal bar, minus
        '\u{2010}'..='\u{2015}' | '\u{2212}' => '-',
        _ => '?',
    }
}

/// Copy `text` with every character mapped by [`latin1_glyph`]
fn latin1_text(text: &str) -> String<MAX_GLYPH_BYTES> {
    let mut out = String::new();
    for ch in text.chars().map(latin1_glyph) {
        if out.push(ch).is_err() {
            warn!("graphics: text truncated to {} bytes", out.len());
            break;
        }
    }
    out
}

fn to_point(p: Point) -> embedded_graphics::geometry::Point {
    embedded_graphics::geometry::Point::new(p.x, p.y)
}

fn to_rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(
        to_point(rect.origin),
        embedded_graphics::geometry::Size::new(rect.size.width, rect.size.height),
    )
}

impl<D> HudSurface for GraphicsSurface<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    fn fill_vertical_gradient(
        &mut self,
        rect: Rect,
        top: Rgba,
        bottom: Rgba,
    ) -> Result<(), SurfaceError> {
        let rows = rect.size.height;
        for row in 0..rows {
            let color = top.lerp(bottom, row, rows.saturating_sub(1));
            if let Some(color) = self.blend(color) {
                let line = Rect {
                    origin: rect.origin.offset(0, row as i32),
                    size: Size::new(rect.size.width, 1),
                };
                self.target
                    .fill_solid(&to_rectangle(line), color)
                    .map_err(|_| SurfaceError::Communication)?;
            }
        }
        Ok(())
    }

    fn draw_rounded_rect(
        &mut self,
        rect: Rect,
        radius: u32,
        fill: Rgba,
        border: Rgba,
        border_width: u32,
    ) -> Result<(), SurfaceError> {
        let mut style = PrimitiveStyleBuilder::new().stroke_alignment(StrokeAlignment::Inside);
        if let Some(fill) = self.blend(fill) {
            style = style.fill_color(fill);
        }
        if border_width > 0 {
            if let Some(border) = self.blend(border) {
                style = style.stroke_color(border).stroke_width(border_width);
            }
        }

        RoundedRectangle::with_equal_corners(
            to_rectangle(rect),
            embedded_graphics::geometry::Size::new(radius, radius),
        )
        .into_styled(style.build())
        .draw(self.target)
        .map_err(|_| SurfaceError::Communication)
    }

    fn fill_circle(&mut self, center: Point, diameter: u32, color: Rgba) -> Result<(), SurfaceError> {
        let Some(color) = self.blend(color) else {
            return Ok(());
        };
        let style = PrimitiveStyleBuilder::new().fill_color(color).build();
        Circle::with_center(to_point(center), diameter)
            .into_styled(style)
            .draw(self.target)
            .map_err(|_| SurfaceError::Communication)
    }

    fn draw_text(
        &mut self,
        top_left: Point,
        text: &str,
        font: Font,
        color: Rgba,
    ) -> Result<(), SurfaceError> {
        let Some(color) = self.blend(color) else {
            return Ok(());
        };
        let style = MonoTextStyle::new(mono_font(font), color);
        let glyphs = latin1_text(text);
        Text::with_baseline(&glyphs, to_point(top_left), style, Baseline::Top)
            .draw(self.target)
            .map(|_| ())
            .map_err(|_| SurfaceError::Communication)
    }

    fn text_size(&self, text: &str, font: Font) -> Size {
        // Substitution is one-to-one, so the drawn glyph count is the char count
        let mono = mono_font(font);
        let chars = text.chars().count() as u32;
        let width = if chars == 0 {
            0
        } else {
            chars * mono.character_size.width + (chars - 1) * mono.character_spacing
        };
        Size::new(width, mono.character_size.height)
    }

    fn draw_icon(&mut self, dest: Rect, icon: &Icon, opacity: u8) -> Result<(), SurfaceError> {
        let Some(color) = self.blend(Rgba::WHITE.fade(opacity)) else {
            return Ok(());
        };
        let (w, h) = (dest.size.width, dest.size.height);
        let pixels = (0..h).flat_map(move |dy| {
            (0..w).filter_map(move |dx| {
                icon.sample(dx, dy, w, h).then(|| {
                    Pixel(
                        to_point(dest.origin.offset(dx as i32, dy as i32)),
                        color,
                    )
                })
            })
        });
        self.target
            .draw_iter(pixels)
            .map_err(|_| SurfaceError::Communication)
    }
}
