//! Geometry primitives
//!
//! Surface coordinates are signed pixels with the origin at the top-left
//! corner; sizes are unsigned so a rectangle can never have a negative
//! extent.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `dx`, `dy`, clamped to the coordinate range
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Rectangle of `size` centred on `center`
    pub const fn centered(center: Point, size: Size) -> Self {
        Self {
            origin: Point::new(
                center.x.saturating_sub((size.width / 2) as i32),
                center.y.saturating_sub((size.height / 2) as i32),
            ),
            size,
        }
    }

    /// Check for zero area
    pub const fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    pub const fn left(&self) -> i32 {
        self.origin.x
    }

    pub const fn top(&self) -> i32 {
        self.origin.y
    }

    /// One past the right-most column, clamped at `i32::MAX`
    pub const fn right(&self) -> i32 {
        self.origin.x.saturating_add_unsigned(self.size.width)
    }

    /// One past the bottom-most row, clamped at `i32::MAX`
    pub const fn bottom(&self) -> i32 {
        self.origin.y.saturating_add_unsigned(self.size.height)
    }

    pub const fn center(&self) -> Point {
        self.origin
            .offset((self.size.width / 2) as i32, (self.size.height / 2) as i32)
    }

    /// Move the top edge down by `dy`, keeping the bottom edge
    pub const fn inset_top(&self, dy: u32) -> Self {
        let dy = if dy > self.size.height {
            self.size.height
        } else {
            dy
        };
        Self {
            origin: self.origin.offset(0, dy as i32),
            size: Size::new(self.size.width, self.size.height - dy),
        }
    }
}

/// Corner of a rectangle used to anchor badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Corner {
    TopLeft,
    TopRight,
    #[default]
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Point inside `rect` offset by `inset` from both edges of this corner
    pub const fn anchor(self, rect: &Rect, inset: i32) -> Point {
        let x = match self {
            Corner::TopLeft | Corner::BottomLeft => rect.left().saturating_add(inset),
            Corner::TopRight | Corner::BottomRight => rect.right().saturating_sub(inset),
        };
        let y = match self {
            Corner::TopLeft | Corner::TopRight => rect.top().saturating_add(inset),
            Corner::BottomLeft | Corner::BottomRight => rect.bottom().saturating_sub(inset),
        };
        Point::new(x, y)
    }
}
