// Core data types for the diagram viewer and site chrome.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Tunables for the pan/zoom viewer. Every zoom path clamps through
/// [`ViewerConfig::clamp_scale`].
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub wheel_zoom_in: f64,
    pub wheel_zoom_out: f64,
    pub button_zoom_in: f64,
    pub button_zoom_out: f64,
    pub transition_secs: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.25,
            max_scale: 5.0,
            wheel_zoom_in: 1.1,
            wheel_zoom_out: 0.9,
            button_zoom_in: 1.25,
            button_zoom_out: 0.8,
            transition_secs: 0.05,
        }
    }
}

impl ViewerConfig {
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Wheel notch factor: scrolling down zooms out.
    pub fn wheel_factor(&self, delta_y: f64) -> f64 {
        if delta_y > 0.0 {
            self.wheel_zoom_out
        } else {
            self.wheel_zoom_in
        }
    }
}

/// Translation (viewport pixels) plus uniform scale, origin at the payload's
/// top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub fn translation(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Payload coordinates of a viewport-local point.
    pub fn local_to_world(&self, local: Point) -> Point {
        Point::new(
            (local.x - self.x) / self.scale,
            (local.y - self.y) / self.scale,
        )
    }

    /// Multiply scale by `factor` while keeping `local` visually fixed.
    pub fn zoomed_at(&self, local: Point, factor: f64, cfg: &ViewerConfig) -> Transform {
        let scale = cfg.clamp_scale(self.scale * factor);
        let ratio = scale / self.scale;
        Transform {
            x: local.x - ratio * (local.x - self.x),
            y: local.y - ratio * (local.y - self.y),
            scale,
        }
    }

    /// Multiply scale by `factor` around the viewport origin; translation is kept.
    pub fn scaled(&self, factor: f64, cfg: &ViewerConfig) -> Transform {
        Transform {
            scale: cfg.clamp_scale(self.scale * factor),
            ..*self
        }
    }

    pub fn with_translation(&self, t: Point) -> Transform {
        Transform {
            x: t.x,
            y: t.y,
            scale: self.scale,
        }
    }

    /// CSS `transform` value; pair with `transform-origin: 0 0`.
    pub fn projection(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.x, self.y, self.scale
        )
    }

    pub fn percent_label(&self) -> String {
        format!("{}%", (self.scale * 100.0).round() as i64)
    }
}

/// Idle-state cursor for the viewport.
pub fn cursor_for(touch_device: bool, dragging: bool) -> &'static str {
    if touch_device {
        "default"
    } else if dragging {
        "grabbing"
    } else {
        "grab"
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub subtle: &'static str,
    pub accent: &'static str,
    pub accent_soft: &'static str,
    pub accent_border: &'static str,
    pub diagram_bg: &'static str,
    pub diagram_text: &'static str,
}

const DARK: Palette = Palette {
    bg: "#0a0b0e",
    surface: "rgba(255,255,255,0.02)",
    border: "rgba(255,255,255,0.06)",
    text: "#e8e4e0",
    muted: "#8c827a",
    subtle: "#6b6560",
    accent: "#c8b99a",
    accent_soft: "rgba(200,185,154,0.1)",
    accent_border: "rgba(200,185,154,0.2)",
    diagram_bg: "#0a0b0e",
    diagram_text: "#3a3632",
};

const LIGHT: Palette = Palette {
    bg: "#f5f4f2",
    surface: "rgba(0,0,0,0.02)",
    border: "rgba(0,0,0,0.06)",
    text: "#2d2a2a",
    muted: "#6b6560",
    subtle: "#8a8580",
    accent: "#8b7355",
    accent_soft: "rgba(139,115,85,0.1)",
    accent_border: "rgba(139,115,85,0.2)",
    diagram_bg: "#000000",
    diagram_text: "#a8a29e",
};

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

/// Viewport widths below this get the collapsed navbar.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Docker,
    Wsl,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Docker, Page::Wsl];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Docker => "Docker",
            Page::Wsl => "WSL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identity_projection() {
        assert_eq!(
            Transform::IDENTITY.projection(),
            "translate(0px, 0px) scale(1)"
        );
        assert_eq!(Transform::default(), Transform::IDENTITY);
    }

    #[test]
    fn zoom_keeps_anchor_under_point() {
        let cfg = ViewerConfig::default();
        let before = Transform {
            x: 37.0,
            y: -12.5,
            scale: 1.7,
        };
        let p = Point::new(220.0, 95.0);
        let after = before.zoomed_at(p, 1.1, &cfg);
        let w0 = before.local_to_world(p);
        let w1 = after.local_to_world(p);
        assert!(approx(w0.x, w1.x));
        assert!(approx(w0.y, w1.y));
    }

    #[test]
    fn zoom_anchor_holds_when_clamped() {
        let cfg = ViewerConfig::default();
        let before = Transform {
            x: 10.0,
            y: 20.0,
            scale: 4.9,
        };
        let p = Point::new(300.0, 150.0);
        let after = before.zoomed_at(p, 1.1, &cfg);
        assert_eq!(after.scale, 5.0);
        let w0 = before.local_to_world(p);
        let w1 = after.local_to_world(p);
        assert!(approx(w0.x, w1.x));
        assert!(approx(w0.y, w1.y));
    }

    #[test]
    fn scaled_leaves_translation() {
        let cfg = ViewerConfig::default();
        let t = Transform {
            x: 5.0,
            y: 6.0,
            scale: 0.3,
        };
        let out = t.scaled(0.8, &cfg);
        assert_eq!(out.scale, 0.25);
        assert_eq!(out.translation(), Point::new(5.0, 6.0));
    }

    #[test]
    fn percent_label_rounds() {
        let t = Transform {
            scale: 1.1,
            ..Transform::IDENTITY
        };
        assert_eq!(t.percent_label(), "110%");
        let t = Transform {
            scale: 0.25,
            ..Transform::IDENTITY
        };
        assert_eq!(t.percent_label(), "25%");
        let t = Transform {
            scale: 1.2345,
            ..Transform::IDENTITY
        };
        assert_eq!(t.percent_label(), "123%");
    }

    #[test]
    fn wheel_factor_by_direction() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.wheel_factor(100.0), 0.9);
        assert_eq!(cfg.wheel_factor(-100.0), 1.1);
        assert_eq!(cfg.wheel_factor(0.0), 1.1);
    }

    #[test]
    fn cursor_affordance() {
        assert_eq!(cursor_for(true, true), "default");
        assert_eq!(cursor_for(false, true), "grabbing");
        assert_eq!(cursor_for(false, false), "grab");
    }

    #[test]
    fn theme_toggle_and_palette() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert_eq!(Theme::Light.palette().accent, "#8b7355");
        assert!(Theme::Dark.is_dark());
    }

    #[test]
    fn diagram_backdrop_per_theme() {
        assert_eq!(Theme::Dark.palette().diagram_bg, "#0a0b0e");
        assert_eq!(Theme::Light.palette().diagram_bg, "#000000");
        assert_ne!(
            Theme::Dark.palette().accent_border,
            Theme::Light.palette().accent_border
        );
    }

    #[test]
    fn mobile_breakpoint() {
        assert!(is_mobile_width(375.0));
        assert!(is_mobile_width(767.9));
        assert!(!is_mobile_width(768.0));
        assert!(!is_mobile_width(1280.0));
    }

    #[test]
    fn point_helpers() {
        let a = Point::new(100.0, 100.0);
        let b = Point::new(200.0, 100.0);
        assert_eq!(a.distance(b), 100.0);
        assert_eq!(a.midpoint(b), Point::new(150.0, 100.0));
        assert_eq!(b.sub(a), Point::new(100.0, 0.0));
    }
}
