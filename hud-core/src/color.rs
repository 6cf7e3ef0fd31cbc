//! RGBA colour
//!
//! Colours carry straight (non-premultiplied) alpha. Surfaces decide how
//! to composite them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Create a colour from all four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }

    /// Same colour with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Scale alpha by an opacity (0-255)
    pub const fn fade(self, opacity: u8) -> Self {
        let a = (self.a as u16 * opacity as u16 + 127) / 255;
        self.with_alpha(a as u8)
    }

    /// Alpha-blend this colour over an opaque `dst`
    ///
    /// The result is always opaque.
    pub fn over(self, dst: Rgba) -> Rgba {
        let a = self.a as u16;
        let inv = 255 - a;
        let mix = |s: u8, d: u8| ((s as u16 * a + d as u16 * inv + 127) / 255) as u8;
        Rgba::rgb(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b))
    }

    /// Linear interpolation between two colours, `t` in 0..=`steps`
    pub fn lerp(self, other: Rgba, t: u32, steps: u32) -> Rgba {
        if steps == 0 {
            return self;
        }
        let t = t.min(steps) as i32;
        let steps = steps as i32;
        let mix = |a: u8, b: u8| (a as i32 + (b as i32 - a as i32) * t / steps) as u8;
        Rgba::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade() {
        assert_eq!(Rgba::WHITE.fade(255).a, 255);
        assert_eq!(Rgba::WHITE.fade(0).a, 0);
        assert_eq!(Rgba::WHITE.with_alpha(200).fade(128).a, 100);
    }

    #[test]
    fn test_over() {
        let half_white = Rgba::WHITE.with_alpha(128);
        let out = half_white.over(Rgba::BLACK);
        assert_eq!(out, Rgba::rgb(128, 128, 128));

        assert_eq!(Rgba::TRANSPARENT.over(Rgba::rgb(1, 2, 3)), Rgba::rgb(1, 2, 3));
        assert_eq!(Rgba::WHITE.over(Rgba::BLACK), Rgba::WHITE);
    }

    #[test]
    fn test_lerp_endpoints() {
        let top = Rgba::new(0, 0, 0, 115);
        let bottom = Rgba::TRANSPARENT;
        assert_eq!(top.lerp(bottom, 0, 10), top);
        assert_eq!(top.lerp(bottom, 10, 10), bottom);
        assert_eq!(top.lerp(bottom, 5, 0), top);
    }
}
