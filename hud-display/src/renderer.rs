//! HUD overlay rendering
//!
//! Paints the set-speed box, the current speed, the battery-heater badge and
//! (when expanded) the battery detail panel.
//!
//! Coordinates in [`LayoutConfig`] are relative to the surface rect handed
//! to [`HudRenderer::draw`], so the same layout works for a full-screen
//! overlay or an inset view.
//!
//! [`LayoutConfig`]: hud_core::config::LayoutConfig

use core::fmt::Write;

use heapless::String;
use hud_core::config::{HudConfig, UnpopulatedPanel};
use hud_core::units::display_round;
use hud_core::{Corner, Point, Rect, RenderState, Rgba, Size, UiSnapshot, UpdateNotifier};

use crate::backend::{Font, HudSurface, SurfaceError};
use crate::icon::{Icon, IconSet};
use crate::panel::detail_lines;

/// Darkest point of the header gradient (45 % black)
const HEADER_TOP: Rgba = Rgba::new(0, 0, 0, 115);

/// Label text alpha in the battery panel
const PANEL_LABEL_ALPHA: u8 = 200;

/// Overlay renderer
///
/// Owns the render state and the badge icons. State changes only through
/// [`update_state`](Self::update_state); [`draw`](Self::draw) is read-only,
/// so drawing twice without an update produces the same frame.
pub struct HudRenderer<N = ()> {
    config: HudConfig,
    icons: IconSet,
    state: RenderState,
    notifier: N,
}

impl HudRenderer<()> {
    /// Create a renderer that ignores update notifications
    pub fn new(config: HudConfig) -> Self {
        Self::with_notifier(config, ())
    }
}

impl<N: UpdateNotifier> HudRenderer<N> {
    /// Create a renderer with the built-in icons
    pub fn with_notifier(config: HudConfig, notifier: N) -> Self {
        Self::with_icons(config, IconSet::builtin(), notifier)
    }

    /// Create a renderer with custom badge icons
    pub fn with_icons(config: HudConfig, icons: IconSet, notifier: N) -> Self {
        Self {
            config,
            icons,
            state: RenderState::new(),
            notifier,
        }
    }

    /// Current render state
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Take in a new state snapshot
    ///
    /// Fields missing from the snapshot keep their previous value. Notifies
    /// at most once if a battery/heater field covered by the notify policy
    /// changed.
    pub fn update_state(&mut self, snapshot: &UiSnapshot) {
        let changes = self.state.apply(snapshot);
        if self.config.notify.triggers(&changes) {
            debug!("hud: battery state changed {}", changes);
            self.notifier.notify();
        }
    }

    /// Draw one frame into `rect`
    ///
    /// A zero-area rect draws nothing.
    pub fn draw<S: HudSurface + ?Sized>(
        &self,
        surface: &mut S,
        rect: Rect,
    ) -> Result<(), SurfaceError> {
        if rect.is_empty() {
            trace!("hud: empty surface rect, frame skipped");
            return Ok(());
        }

        self.draw_header(surface, &rect)?;
        self.draw_set_speed(surface, &rect)?;
        self.draw_current_speed(surface, &rect)?;
        self.draw_battery_heater_icon(surface, &rect)?;
        if self.state.battery_panel_expanded {
            self.draw_battery_details_panel(surface, &rect)?;
        }
        Ok(())
    }

    /// Centre of the battery-heater badge
    pub fn battery_badge_center(&self, rect: &Rect) -> Point {
        let layout = &self.config.layout;
        layout.badge_corner.anchor(rect, layout.badge_inset())
    }

    /// Bounding box of the battery-heater badge
    pub fn battery_badge_rect(&self, rect: &Rect) -> Rect {
        let btn_size = self.config.layout.btn_size;
        Rect::centered(
            self.battery_badge_center(rect),
            Size::new(btn_size, btn_size),
        )
    }

    /// Check if a tap at `point` lands on the badge
    ///
    /// Hosts use this to flip `battery_panel_expanded` in their next
    /// snapshot.
    pub fn hit_battery_badge(&self, rect: &Rect, point: Point) -> bool {
        let center = self.battery_badge_center(rect);
        let radius = (self.config.layout.btn_size / 2) as i64;
        let dx = point.x as i64 - center.x as i64;
        let dy = point.y as i64 - center.y as i64;
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy)) <= radius * radius
    }

    /// Battery detail panel bounds, stacked beside the badge
    pub fn battery_panel_rect(&self, rect: &Rect) -> Rect {
        let layout = &self.config.layout;
        let badge = self.battery_badge_rect(rect);
        let size = layout.panel_size;
        let gap = layout.panel_gap;

        let x = match layout.badge_corner {
            Corner::TopLeft | Corner::BottomLeft => badge.left(),
            Corner::TopRight | Corner::BottomRight => {
                badge.right().saturating_sub_unsigned(size.width)
            }
        };
        let y = match layout.badge_corner {
            Corner::BottomLeft | Corner::BottomRight => badge
                .top()
                .saturating_sub_unsigned(gap)
                .saturating_sub_unsigned(size.height),
            Corner::TopLeft | Corner::TopRight => badge.bottom().saturating_add_unsigned(gap),
        };
        Rect::new(x, y, size.width, size.height)
    }

    fn draw_header<S: HudSurface + ?Sized>(
        &self,
        surface: &mut S,
        rect: &Rect,
    ) -> Result<(), SurfaceError> {
        let height = self.config.layout.header_height.min(rect.size.height);
        if height == 0 {
            return Ok(());
        }
        let header = Rect::new(rect.left(), rect.top(), rect.size.width, height);
        surface.fill_vertical_gradient(header, HEADER_TOP, Rgba::TRANSPARENT)
    }

    fn draw_set_speed<S: HudSurface + ?Sized>(
        &self,
        surface: &mut S,
        rect: &Rect,
    ) -> Result<(), SurfaceError> {
        let layout = &self.config.layout;
        let styles = &self.config.styles;
        let style = styles.get(self.state.status);

        // Metric box is wider; keep it centred on the default box
        let default_size = layout.set_speed_size;
        let size = if self.state.is_metric {
            layout.set_speed_size_metric
        } else {
            default_size
        };
        let origin = rect.origin.offset(
            layout.set_speed_origin.x,
            layout.set_speed_origin.y,
        );
        let recentre = (default_size.width as i32 - size.width as i32) / 2;
        let speed_box = Rect {
            origin: origin.offset(recentre, 0),
            size,
        };

        surface.draw_rounded_rect(
            speed_box,
            layout.set_speed_radius,
            styles.set_speed_background,
            style.border,
            layout.set_speed_border,
        )?;

        let mut value: String<16> = String::new();
        let (max_color, value_color) = match self.state.display_set_speed() {
            Some(set_speed) => {
                let _ = write!(value, "{}", display_round(set_speed));
                (style.max_label, styles.set_speed_active)
            }
            None => {
                let _ = value.push_str(&self.config.placeholder);
                (styles.max_label_inactive, styles.set_speed_inactive)
            }
        };

        draw_text_top_centered(
            surface,
            &speed_box.inset_top(layout.max_label_offset),
            "MAX",
            Font::MAX_LABEL,
            max_color,
        )?;
        draw_text_top_centered(
            surface,
            &speed_box.inset_top(layout.set_speed_value_offset),
            &value,
            Font::SET_SPEED,
            value_color,
        )
    }

    fn draw_current_speed<S: HudSurface + ?Sized>(
        &self,
        surface: &mut S,
        rect: &Rect,
    ) -> Result<(), SurfaceError> {
        let layout = &self.config.layout;
        let x = rect.center().x;

        let mut speed: String<16> = String::new();
        let _ = write!(speed, "{}", display_round(self.state.display_speed()));

        draw_text(
            surface,
            x,
            rect.top().saturating_add(layout.speed_y),
            &speed,
            Font::SPEED,
            0xff,
        )?;
        draw_text(
            surface,
            x,
            rect.top().saturating_add(layout.unit_y),
            self.state.unit().label(),
            Font::UNIT,
            layout.unit_alpha,
        )
    }

    fn draw_battery_heater_icon<S: HudSurface + ?Sized>(
        &self,
        surface: &mut S,
        rect: &Rect,
    ) -> Result<(), SurfaceError> {
        let layout = &self.config.layout;
        let enabled = self.state.battery_heater_enabled;
        let opacity = if enabled {
            0xff
        } else {
            self.config.inactive_icon_opacity
        };

        draw_icon(
            surface,
            self.battery_badge_center(rect),
            layout.btn_size,
            self.icons.for_heater(enabled),
            layout.img_size(),
            self.config.styles.badge_background,
            opacity,
        )
    }

    fn draw_battery_details_panel<S: HudSurface + ?Sized>(
        &self,
        surface: &mut S,
        rect: &Rect,
    ) -> Result<(), SurfaceError> {
        let details = &self.state.battery_details;
        if details.is_unpopulated() && self.config.panel.unpopulated == UnpopulatedPanel::Skip {
            return Ok(());
        }

        let layout = &self.config.layout;
        let panel = self.battery_panel_rect(rect);
        surface.draw_rounded_rect(
            panel,
            layout.panel_radius,
            self.config.styles.panel_background,
            Rgba::TRANSPARENT,
            0,
        )?;

        let padding = layout.panel_padding;
        let label_color = Rgba::WHITE.with_alpha(PANEL_LABEL_ALPHA);
        let label_x = panel.left().saturating_add_unsigned(padding);
        let mut y = panel.top().saturating_add_unsigned(padding);
        for line in detail_lines(details).iter() {
            surface.draw_text(Point::new(label_x, y), line.label, Font::PANEL, label_color)?;

            let value_width = surface.text_size(&line.value, Font::PANEL).width;
            let value_x = panel
                .right()
                .saturating_sub_unsigned(padding)
                .saturating_sub_unsigned(value_width);
            surface.draw_text(
                Point::new(value_x, y),
                &line.value,
                Font::PANEL,
                Rgba::WHITE,
            )?;
            y = y.saturating_add_unsigned(layout.panel_line_height);
        }
        Ok(())
    }
}

/// Draw white text centred on `x` with its bottom edge at `y`
///
/// Every readout goes through here so they share the surface's font
/// metrics.
pub fn draw_text<S: HudSurface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    text: &str,
    font: Font,
    alpha: u8,
) -> Result<(), SurfaceError> {
    let size = surface.text_size(text, font);
    let top_left = Point::new(
        x.saturating_sub_unsigned(size.width / 2),
        y.saturating_sub_unsigned(size.height),
    );
    surface.draw_text(top_left, text, font, Rgba::WHITE.with_alpha(alpha))
}

/// Draw text at the top of `rect`, centred horizontally
fn draw_text_top_centered<S: HudSurface + ?Sized>(
    surface: &mut S,
    rect: &Rect,
    text: &str,
    font: Font,
    color: Rgba,
) -> Result<(), SurfaceError> {
    let size = surface.text_size(text, font);
    let top_left = Point::new(
        rect.center().x.saturating_sub_unsigned(size.width / 2),
        rect.top(),
    );
    surface.draw_text(top_left, text, font, color)
}

/// Draw a circular badge with `icon` centred in it
///
/// The background is drawn at full opacity; only the icon is faded.
pub fn draw_icon<S: HudSurface + ?Sized>(
    surface: &mut S,
    center: Point,
    diameter: u32,
    icon: &Icon,
    img_size: u32,
    bg: Rgba,
    opacity: u8,
) -> Result<(), SurfaceError> {
    surface.fill_circle(center, diameter, bg)?;
    surface.draw_icon(
        Rect::centered(center, Size::new(img_size, img_size)),
        icon,
        opacity,
    )
}
