//! Pixel tests for the embedded-graphics adapter

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, RgbColor};
use embedded_graphics::Pixel;
use hud_core::config::HudConfig;
use hud_core::{BatteryDetails, Point, Rect, Rgba, Size, Status, UiSnapshot};
use hud_display::{Font, GraphicsSurface, HudRenderer, HudSurface};

const WIDTH: u32 = 720;
const HEIGHT: u32 = 360;

/// Heap-backed RGB framebuffer, off-screen writes are dropped
struct Framebuffer {
    pixels: Vec<Rgb888>,
}

impl Framebuffer {
    fn new() -> Self {
        Self {
            pixels: vec![Rgb888::BLACK; (WIDTH * HEIGHT) as usize],
        }
    }

    fn get(&self, x: i32, y: i32) -> Rgb888 {
        self.pixels[y as usize * WIDTH as usize + x as usize]
    }

    fn count(&self, color: Rgb888) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> embedded_graphics::geometry::Size {
        embedded_graphics::geometry::Size::new(WIDTH, HEIGHT)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 && (point.x as u32) < WIDTH && (point.y as u32) < HEIGHT {
                self.pixels[point.y as usize * WIDTH as usize + point.x as usize] = color;
            }
        }
        Ok(())
    }
}

fn small_config() -> HudConfig {
    let mut config = HudConfig::default();
    config.layout.header_height = 120;
    config.layout.btn_size = 64;
    config.layout.badge_margin = 10;
    config.layout.panel_size = Size::new(200, 200);
    config.layout.panel_line_height = 16;
    config.layout.panel_padding = 8;
    config
}

fn render(renderer: &HudRenderer) -> Framebuffer {
    let mut fb = Framebuffer::new();
    let mut surface = GraphicsSurface::new(&mut fb);
    renderer
        .draw(&mut surface, Rect::new(0, 0, WIDTH, HEIGHT))
        .unwrap();
    fb
}

#[test]
fn repeated_draws_are_pixel_identical() {
    let mut renderer = HudRenderer::new(small_config());
    renderer.update_state(
        &UiSnapshot::empty()
            .with_speed(15.0, 14.2)
            .with_cruise(90.0)
            .with_status(Status::Engaged)
            .with_battery(true, BatteryDetails::default())
            .with_panel_expanded(true),
    );

    let first = render(&renderer);
    let second = render(&renderer);
    assert!(first.pixels == second.pixels);
}

#[test]
fn header_gradient_fades_out() {
    let renderer = HudRenderer::new(small_config());
    let fb = render(&renderer);

    // Gradient darkens a black backdrop, so use a grey one
    let mut grey = Framebuffer::new();
    let mut surface = GraphicsSurface::with_backdrop(&mut grey, Rgba::rgb(200, 200, 200));
    surface
        .fill_vertical_gradient(
            Rect::new(0, 0, WIDTH, 100),
            Rgba::new(0, 0, 0, 115),
            Rgba::TRANSPARENT,
        )
        .unwrap();
    let top = grey.get(700, 0);
    let bottom = grey.get(700, 98);
    assert!(top.r() < bottom.r());
    // Last row is fully transparent and skipped
    assert_eq!(grey.get(700, 99), Rgb888::BLACK);

    // Nothing drawn on the far right below the header
    assert_eq!(fb.get(WIDTH as i32 - 1, HEIGHT as i32 - 1), Rgb888::BLACK);
}

#[test]
fn badge_icon_white_only_when_enabled() {
    let mut renderer = HudRenderer::new(small_config());
    let rect = Rect::new(0, 0, WIDTH, HEIGHT);
    let badge = renderer.battery_badge_rect(&rect);
    let count_in_badge = |fb: &Framebuffer, wanted: fn(Rgb888) -> bool| {
        (badge.top()..badge.bottom())
            .flat_map(|y| (badge.left()..badge.right()).map(move |x| (x, y)))
            .filter(|&(x, y)| wanted(fb.get(x, y)))
            .count()
    };

    renderer.update_state(&UiSnapshot::empty().with_battery(false, BatteryDetails::default()));
    let disabled = render(&renderer);
    assert_eq!(count_in_badge(&disabled, |c| c == Rgb888::WHITE), 0);
    // Dimmed icon is still drawn
    assert!(count_in_badge(&disabled, |c| c != Rgb888::BLACK) > 0);

    renderer.update_state(&UiSnapshot::empty().with_battery(true, BatteryDetails::default()));
    let enabled = render(&renderer);
    assert!(count_in_badge(&enabled, |c| c == Rgb888::WHITE) > 0);
}

#[test]
fn text_size_matches_mono_metrics() {
    let mut fb = Framebuffer::new();
    let surface = GraphicsSurface::new(&mut fb);
    // 9x18 bold, no extra character spacing
    let size = surface.text_size("100", Font::SPEED);
    assert_eq!(size, Size::new(3 * 9, 18));
    assert_eq!(surface.text_size("", Font::SPEED).width, 0);
}

#[test]
fn rounded_rect_border_inside() {
    let mut fb = Framebuffer::new();
    let mut surface = GraphicsSurface::new(&mut fb);
    surface
        .draw_rounded_rect(
            Rect::new(10, 10, 100, 50),
            8,
            Rgba::rgb(0, 0, 255),
            Rgba::WHITE,
            4,
        )
        .unwrap();

    assert_eq!(fb.get(60, 10), Rgb888::WHITE);
    assert_eq!(fb.get(60, 13), Rgb888::WHITE);
    assert_eq!(fb.get(60, 35), Rgb888::new(0, 0, 255));
    assert_eq!(fb.get(60, 60), Rgb888::BLACK);
    assert_eq!(fb.get(60, 9), Rgb888::BLACK);
}

#[test]
fn transparent_draws_skipped() {
    let mut fb = Framebuffer::new();
    let mut surface = GraphicsSurface::with_backdrop(&mut fb, Rgba::WHITE);
    surface
        .fill_circle(Point::new(50, 50), 40, Rgba::TRANSPARENT)
        .unwrap();
    surface
        .draw_text(Point::new(0, 0), "MAX", Font::MAX_LABEL, Rgba::TRANSPARENT)
        .unwrap();
    assert_eq!(fb.count(Rgb888::BLACK), (WIDTH * HEIGHT) as usize);
}

/// Pixels inside `rect`, row by row
fn region(fb: &Framebuffer, rect: Rect) -> Vec<Rgb888> {
    (rect.top()..rect.bottom())
        .flat_map(|y| (rect.left()..rect.right()).map(move |x| (x, y)))
        .map(|(x, y)| fb.get(x, y))
        .collect()
}

#[test]
fn cruise_unset_placeholder_draws_dash() {
    let renderer = HudRenderer::new(small_config());
    let frame = render(&renderer);

    // Placeholder sits top-centred in the set-speed box, 77 px down
    let layout = &renderer.config().layout;
    let glyph = {
        let mut fb = Framebuffer::new();
        GraphicsSurface::new(&mut fb).text_size("-", Font::SET_SPEED)
    };
    let box_center_x = layout.set_speed_origin.x + (layout.set_speed_size.width / 2) as i32;
    let glyph_rect = Rect::new(
        box_center_x - (glyph.width / 2) as i32,
        layout.set_speed_origin.y + layout.set_speed_value_offset as i32,
        glyph.width,
        glyph.height,
    );

    let expected = |text: &str| {
        let mut fb = Framebuffer::new();
        GraphicsSurface::new(&mut fb)
            .draw_text(
                glyph_rect.origin,
                text,
                Font::SET_SPEED,
                renderer.config().styles.set_speed_inactive,
            )
            .unwrap();
        region(&fb, glyph_rect)
    };

    let drawn = region(&frame, glyph_rect);
    assert!(drawn.iter().any(|p| *p != Rgb888::BLACK));
    assert_eq!(drawn, expected("-"));
    assert_ne!(drawn, expected("?"));
}
