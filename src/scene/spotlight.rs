//! Overlay backgrounds: the cursor spotlight, the dark "lights off" fill and the warm glow
//! spilling from the bulb once the switch is on.

use crate::foundation::core::{Point, Rgba, Viewport};

/// Spotlight radius that stays fully transparent.
pub const SPOTLIGHT_INNER_RADIUS: f64 = 80.0;
/// Radius at which the spotlight reaches full darkness.
pub const SPOTLIGHT_OUTER_RADIUS: f64 = 150.0;
/// Fill used right after the lights go off, until the pointer moves.
pub const CLOSED_FILL: Rgba = Rgba::new(0, 0, 0, 0.95);

/// Distance metric of a radial gradient.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientShape {
    /// Euclidean distance.
    Circle,
    /// Ellipse with the viewport's aspect ratio; distances are horizontal-radius pixels.
    Ellipse {
        /// `width / height` of the reference box.
        aspect: f64,
    },
}

/// One color stop placed at an absolute pixel distance from the center.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ColorStop {
    /// Distance from the center in pixels.
    pub offset_px: f64,
    /// Stop color.
    pub color: Rgba,
}

/// CSS-style `radial-gradient(...)` with pixel stops.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RadialGradient {
    /// Focus point in screen pixels.
    pub center: Point,
    /// Distance metric.
    pub shape: GradientShape,
    /// Stops in non-decreasing offset order.
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// Gradient distance of `p` from the center.
    pub fn distance(&self, p: Point) -> f64 {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        match self.shape {
            GradientShape::Circle => dx.hypot(dy),
            GradientShape::Ellipse { aspect } => dx.hypot(dy * aspect),
        }
    }

    /// Premultiplied color at gradient distance `d`.
    ///
    /// Interpolates in premultiplied space; clamps to the end stops outside their range.
    pub fn color_at_distance(&self, d: f64) -> [f32; 4] {
        let Some(first) = self.stops.first() else {
            return [0.0; 4];
        };
        if d <= first.offset_px {
            return first.color.to_premul_f32();
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if d <= b.offset_px {
                let span = b.offset_px - a.offset_px;
                if span <= 0.0 {
                    return b.color.to_premul_f32();
                }
                let t = ((d - a.offset_px) / span) as f32;
                let ca = a.color.to_premul_f32();
                let cb = b.color.to_premul_f32();
                return std::array::from_fn(|i| ca[i] + (cb[i] - ca[i]) * t);
            }
        }
        self.stops[self.stops.len() - 1].color.to_premul_f32()
    }

    /// Premultiplied color at screen point `p`.
    pub fn sample(&self, p: Point) -> [f32; 4] {
        self.color_at_distance(self.distance(p))
    }
}

/// What the full-screen overlay is painted with.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayBackground {
    /// Flat color.
    Solid(Rgba),
    /// Radial gradient.
    Radial(RadialGradient),
}

/// Center and transparent/opaque radii of a cursor-style spotlight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotlightGeometry {
    /// Focus point.
    pub center: Point,
    /// Radius of the last fully transparent stop.
    pub inner_radius: f64,
    /// Radius of the first fully opaque stop.
    pub outer_radius: f64,
}

impl OverlayBackground {
    /// Premultiplied overlay color at `p`.
    pub fn sample(&self, p: Point) -> [f32; 4] {
        match self {
            Self::Solid(c) => c.to_premul_f32(),
            Self::Radial(g) => g.sample(p),
        }
    }

    /// Spotlight geometry when this is a circular transparent-to-opaque mask.
    pub fn spotlight(&self) -> Option<SpotlightGeometry> {
        let Self::Radial(g) = self else {
            return None;
        };
        if g.shape != GradientShape::Circle {
            return None;
        }
        let inner = g.stops.iter().rev().find(|s| s.color.a == 0.0)?;
        let outer = g.stops.iter().find(|s| s.color.a >= 1.0)?;
        Some(SpotlightGeometry {
            center: g.center,
            inner_radius: inner.offset_px,
            outer_radius: outer.offset_px,
        })
    }
}

/// Circle of visibility around `at`, dark everywhere else.
pub fn cursor_spotlight(at: Point) -> OverlayBackground {
    OverlayBackground::Radial(RadialGradient {
        center: at,
        shape: GradientShape::Circle,
        stops: vec![
            ColorStop {
                offset_px: 0.0,
                color: Rgba::TRANSPARENT,
            },
            ColorStop {
                offset_px: SPOTLIGHT_INNER_RADIUS,
                color: Rgba::TRANSPARENT,
            },
            ColorStop {
                offset_px: SPOTLIGHT_OUTER_RADIUS,
                color: Rgba::BLACK,
            },
        ],
    })
}

/// Lights-off fill.
pub fn closed_fill() -> OverlayBackground {
    OverlayBackground::Solid(CLOSED_FILL)
}

/// Warm light spilling from the viewport center.
pub fn open_glow(viewport: Viewport) -> OverlayBackground {
    let stop = |offset_px: f64, r: u8, g: u8, b: u8, a: f32| ColorStop {
        offset_px,
        color: Rgba::new(r, g, b, a),
    };
    OverlayBackground::Radial(RadialGradient {
        center: viewport.center(),
        shape: GradientShape::Ellipse {
            aspect: f64::from(viewport.width) / f64::from(viewport.height),
        },
        stops: vec![
            stop(0.0, 255, 230, 150, 0.4),
            stop(100.0, 255, 200, 100, 0.3),
            stop(400.0, 200, 150, 80, 0.5),
            stop(800.0, 100, 70, 40, 0.65),
            stop(1200.0, 0, 0, 0, 0.75),
        ],
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/spotlight.rs"]
mod tests;
