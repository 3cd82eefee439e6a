//! Rising balloons shown while the lights are on.

use crate::animation::ease::Ease;
use crate::foundation::core::{Point, Rgba, SimTime, Viewport};
use crate::foundation::math::Rng64;

/// Balloons generated per activation unless configured otherwise.
pub const DEFAULT_BALLOON_COUNT: u32 = 26;
/// Largest balloon count a script may request.
pub const MAX_BALLOON_COUNT: u32 = 10_000;
/// Balloon graphic edge length in pixels.
pub const BALLOON_SIZE: f64 = 64.0;
/// Distance below the viewport bottom where each balloon starts.
pub const BALLOON_START_BELOW: f64 = 120.0;
/// Peak sideways displacement of the swing.
pub const SWING_AMPLITUDE_PX: f64 = 12.0;
/// Peak tilt of the swing.
pub const SWING_TILT_DEG: f64 = 8.0;

/// Balloon palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalloonColor {
    /// `#FF6B6B`
    Red,
    /// `#4ECDC4`
    Teal,
    /// `#FFE66D`
    Yellow,
    /// `#95E1D3`
    Mint,
    /// `#FF85A2`
    Pink,
    /// `#A8E6CF`
    LightGreen,
    /// `#FFD3B6`
    Peach,
    /// `#B4A7D6`
    Purple,
}

impl BalloonColor {
    /// Every palette entry.
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Teal,
        Self::Yellow,
        Self::Mint,
        Self::Pink,
        Self::LightGreen,
        Self::Peach,
        Self::Purple,
    ];

    /// Opaque fill color.
    pub fn rgba(self) -> Rgba {
        match self {
            Self::Red => Rgba::hex(0xFF6B6B),
            Self::Teal => Rgba::hex(0x4ECDC4),
            Self::Yellow => Rgba::hex(0xFFE66D),
            Self::Mint => Rgba::hex(0x95E1D3),
            Self::Pink => Rgba::hex(0xFF85A2),
            Self::LightGreen => Rgba::hex(0xA8E6CF),
            Self::Peach => Rgba::hex(0xFFD3B6),
            Self::Purple => Rgba::hex(0xB4A7D6),
        }
    }
}

/// One balloon's fixed animation parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Balloon {
    /// Index within its field.
    pub id: u32,
    /// Left edge as a percentage of the viewport width, `[0, 100)`.
    pub horizontal_position: f64,
    /// Seconds before the first rise, `[1, 2)`.
    pub start_delay: f64,
    /// Seconds per rise, `[10, 20)`.
    pub rise_duration: f64,
    /// Seconds per swing cycle, `[1, 2)`.
    pub swing_duration: f64,
    /// Fill color.
    pub color: BalloonColor,
}

/// Draw `count` balloons with independently randomized parameters.
pub fn generate_balloons(count: u32, rng: &mut Rng64) -> Vec<Balloon> {
    (0..count)
        .map(|id| Balloon {
            id,
            horizontal_position: rng.next_f64_01() * 100.0,
            start_delay: 1.0 + rng.next_f64_01(),
            rise_duration: 10.0 + rng.next_f64_01() * 10.0,
            swing_duration: 1.0 + rng.next_f64_01(),
            color: BalloonColor::ALL[rng.index(BalloonColor::ALL.len())],
        })
        .collect()
}

/// Where a balloon is at some instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalloonPose {
    /// Top-left of the balloon graphic.
    pub top_left: Point,
    /// Swing rotation in degrees.
    pub tilt_deg: f64,
    /// Fill color.
    pub color: BalloonColor,
}

/// A mounted set of balloons. Regenerated, never reused, on each activation.
#[derive(Clone, Debug)]
pub struct BalloonField {
    mounted_at: SimTime,
    balloons: Vec<Balloon>,
}

impl BalloonField {
    /// Generate a fresh field at `now`.
    pub fn mount(count: u32, now: SimTime, rng: &mut Rng64) -> Self {
        let balloons = generate_balloons(count, rng);
        tracing::debug!(count, at_ms = now.0, "balloon field mounted");
        Self {
            mounted_at: now,
            balloons,
        }
    }

    /// Balloon parameters.
    pub fn balloons(&self) -> &[Balloon] {
        &self.balloons
    }

    /// Pose of every balloon at `now`.
    pub fn poses(&self, viewport: Viewport, now: SimTime) -> Vec<BalloonPose> {
        let local = now.since(self.mounted_at) as f64 / 1000.0;
        self.balloons
            .iter()
            .map(|b| balloon_pose(b, viewport, local))
            .collect()
    }
}

/// Pose of `b` at `local_secs` after the field was mounted.
pub fn balloon_pose(b: &Balloon, viewport: Viewport, local_secs: f64) -> BalloonPose {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);

    // Bottom edge travels from `height + 120` to fully above the top edge.
    let start_bottom = height + BALLOON_START_BELOW;
    let travel = start_bottom;
    let rise = if local_secs < b.start_delay || b.rise_duration <= 0.0 {
        0.0
    } else {
        let cycle = (local_secs - b.start_delay).rem_euclid(b.rise_duration) / b.rise_duration;
        Ease::In.apply(cycle) * travel
    };

    let swing = swing_phase(local_secs, b.swing_duration);
    let left = b.horizontal_position / 100.0 * width + swing * SWING_AMPLITUDE_PX;
    let bottom = start_bottom - rise;

    BalloonPose {
        top_left: Point::new(left, bottom - BALLOON_SIZE),
        tilt_deg: swing * SWING_TILT_DEG,
        color: b.color,
    }
}

/// Swing keyframes: -1 at 0%, +1 at 50%, -1 at 100%, eased in-out per half.
fn swing_phase(local_secs: f64, period: f64) -> f64 {
    if period <= 0.0 {
        return 0.0;
    }
    let cycle = local_secs.rem_euclid(period) / period;
    if cycle < 0.5 {
        -1.0 + 2.0 * Ease::InOut.apply(cycle * 2.0)
    } else {
        1.0 - 2.0 * Ease::InOut.apply((cycle - 0.5) * 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/balloons.rs"]
mod tests;
