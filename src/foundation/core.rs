use crate::foundation::error::{SwitchlightError, SwitchlightResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Absolute time on the scene's virtual clock, in milliseconds since mount.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct SimTime(pub u64);

impl SimTime {
    /// Mount instant.
    pub const ZERO: Self = Self(0);

    /// Milliseconds elapsed since `earlier`, saturating at zero.
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Shift forward by `ms` milliseconds.
    pub fn plus_ms(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}

/// A 0-based frame index in an output sequence.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> SwitchlightResult<Self> {
        if den == 0 {
            return Err(SwitchlightError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(SwitchlightError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Virtual-clock instant of frame `frame`, floored to whole milliseconds.
    pub fn frame_time(self, frame: u64) -> SimTime {
        let ms = (frame as u128 * 1000 * u128::from(self.den)) / u128::from(self.num);
        SimTime(ms as u64)
    }

    /// Number of frames needed to cover `duration_ms`.
    pub fn frames_in(self, duration_ms: u64) -> u64 {
        let num = u128::from(duration_ms) * u128::from(self.num);
        let den = 1000 * u128::from(self.den);
        num.div_ceil(den) as u64
    }
}

/// Screen dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Widths below this show the static notice instead of the scene.
    pub const MIN_INTERACTIVE_WIDTH: u32 = 768;

    /// Create a validated viewport that the CPU renderer can address.
    pub fn new(width: u32, height: u32) -> SwitchlightResult<Self> {
        let vp = Self { width, height };
        vp.validate()?;
        Ok(vp)
    }

    pub(crate) fn validate(self) -> SwitchlightResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SwitchlightError::validation("viewport must be non-empty"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(SwitchlightError::validation(
                "viewport dimensions must fit in u16",
            ));
        }
        Ok(())
    }

    /// Geometric center.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Full-screen rectangle.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// `true` when the screen is too narrow for the interactive scene.
    pub fn is_degraded(self) -> bool {
        self.width < Self::MIN_INTERACTIVE_WIDTH
    }

    /// Convert a viewport-fraction origin into pixels.
    pub fn fraction_to_px(self, fx: f64, fy: f64) -> Point {
        Point::new(fx * f64::from(self.width), fy * f64::from(self.height))
    }
}

/// Straight-alpha color with a fractional alpha, as written in CSS `rgba(...)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f32,
}

impl Rgba {
    /// `transparent` keyword (transparent black).
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 1.0);

    /// Build from channels.
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self::new(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
            1.0,
        )
    }

    /// Same color with alpha multiplied by `opacity`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            a: (self.a * opacity).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Alpha quantized to 8 bits.
    pub fn alpha_u8(self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Premultiplied channels in `[0, 1]`.
    pub fn to_premul_f32(self) -> [f32; 4] {
        let a = self.a.clamp(0.0, 1.0);
        [
            f32::from(self.r) / 255.0 * a,
            f32::from(self.g) / 255.0 * a,
            f32::from(self.b) / 255.0 * a,
            a,
        ]
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Quantize premultiplied floats in `[0, 1]`.
    pub fn from_premul_f32(c: [f32; 4]) -> Self {
        fn q(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        let a = q(c[3]);
        Self {
            r: q(c[0]).min(a),
            g: q(c[1]).min(a),
            b: q(c[2]).min(a),
            a,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
