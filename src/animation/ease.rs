/// CSS timing functions used by the balloon keyframes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// `ease-in`, `cubic-bezier(0.42, 0, 1, 1)`.
    In,
    /// `ease-in-out`, `cubic-bezier(0.42, 0, 0.58, 1)`.
    InOut,
}

impl Ease {
    /// Apply this timing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::In => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::InOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

fn bezier_axis(p1: f64, p2: f64, s: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

fn bezier_axis_slope(p1: f64, p2: f64, s: f64) -> f64 {
    let u = 1.0 - s;
    3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Solve `x(s) = t` for the curve parameter, then return `y(s)`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    let mut s = t;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, s) - t;
        if err.abs() < 1e-7 {
            return bezier_axis(y1, y2, s);
        }
        let slope = bezier_axis_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    // Newton stalled near a flat tangent; bisect instead.
    let (mut lo, mut hi) = (0.0, 1.0);
    s = t;
    for _ in 0..40 {
        let x = bezier_axis(x1, x2, s);
        if (x - t).abs() < 1e-7 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_axis(y1, y2, s)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
