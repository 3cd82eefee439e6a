//! Burst particle physics.
//!
//! Each piece is a small tumbling quad launched from a burst origin. Physics advances in fixed
//! steps of 1/60 s of virtual time, independent of the output frame rate.

use crate::foundation::core::{Point, Rgba};
use crate::foundation::math::Rng64;

/// Physics steps per second of virtual time.
pub const STEPS_PER_SEC: f64 = 60.0;

/// Launch parameters shared by every piece of a burst.
#[derive(Clone, Debug, PartialEq)]
pub struct BurstOptions {
    /// Initial speed scale in pixels per step.
    pub start_velocity: f64,
    /// Cone width in degrees.
    pub spread_deg: f64,
    /// Cone direction in degrees, 90 is straight up.
    pub angle_deg: f64,
    /// Lifetime in physics steps.
    pub ticks: u32,
    /// Size multiplier.
    pub scalar: f64,
    /// Per-step velocity multiplier.
    pub decay: f64,
    /// Downward acceleration scale.
    pub gravity: f64,
    /// Constant sideways drift per step.
    pub drift: f64,
    /// Palette; one color is picked per piece.
    pub colors: Vec<Rgba>,
}

impl Default for BurstOptions {
    fn default() -> Self {
        Self {
            start_velocity: 30.0,
            spread_deg: 360.0,
            angle_deg: 90.0,
            ticks: 60,
            scalar: 2.0,
            decay: 0.9,
            gravity: 1.0,
            drift: 0.0,
            colors: vec![Rgba::WHITE, Rgba::BLACK],
        }
    }
}

/// One confetti piece.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    position: Point,
    angle2d: f64,
    velocity: f64,
    decay: f64,
    gravity: f64,
    drift: f64,
    wobble: f64,
    wobble_speed: f64,
    wobble_pos: Point,
    tilt_angle: f64,
    tilt_sin: f64,
    tilt_cos: f64,
    random: f64,
    scalar: f64,
    tick: u32,
    total_ticks: u32,
    color: Rgba,
}

impl ConfettiPiece {
    fn launch(origin: Point, opts: &BurstOptions, rng: &mut Rng64) -> Self {
        let spread = opts.spread_deg.to_radians();
        let color = if opts.colors.is_empty() {
            Rgba::WHITE
        } else {
            opts.colors[rng.index(opts.colors.len())]
        };
        Self {
            position: origin,
            angle2d: -opts.angle_deg.to_radians() + (0.5 * spread - rng.next_f64_01() * spread),
            velocity: opts.start_velocity * 0.5 + rng.next_f64_01() * opts.start_velocity,
            decay: opts.decay,
            gravity: opts.gravity * 3.0,
            drift: opts.drift,
            wobble: rng.next_f64_01() * 10.0,
            wobble_speed: (rng.next_f64_01() * 0.1 + 0.05).min(0.11),
            wobble_pos: origin,
            tilt_angle: rng.range(0.25, 0.75) * std::f64::consts::PI,
            tilt_sin: 0.0,
            tilt_cos: 0.0,
            random: rng.next_f64_01() + 2.0,
            scalar: opts.scalar,
            tick: 0,
            total_ticks: opts.ticks,
            color,
        }
    }

    /// Advance one physics step. Returns `false` once the piece has expired.
    fn step(&mut self, rng: &mut Rng64) -> bool {
        self.position.x += self.angle2d.cos() * self.velocity + self.drift;
        self.position.y += self.angle2d.sin() * self.velocity + self.gravity;
        self.velocity *= self.decay;

        self.wobble += self.wobble_speed;
        self.wobble_pos = Point::new(
            self.position.x + 10.0 * self.scalar * self.wobble.cos(),
            self.position.y + 10.0 * self.scalar * self.wobble.sin(),
        );
        self.tilt_angle += 0.1;
        self.tilt_sin = self.tilt_angle.sin();
        self.tilt_cos = self.tilt_angle.cos();
        self.random = rng.next_f64_01() + 2.0;

        self.tick += 1;
        self.tick < self.total_ticks
    }

    /// Current anchor position in screen pixels.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Steps lived so far.
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Fill color.
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Fades linearly over the piece's lifetime.
    pub fn opacity(&self) -> f32 {
        let progress = f64::from(self.tick) / f64::from(self.total_ticks.max(1));
        (1.0 - progress).clamp(0.0, 1.0) as f32
    }

    /// Tumbling quad corners in drawing order.
    pub fn quad(&self) -> [Point; 4] {
        let p = self.position;
        let w = self.wobble_pos;
        let x1 = p.x + self.random * self.tilt_cos;
        let y1 = p.y + self.random * self.tilt_sin;
        let x2 = w.x + self.random * self.tilt_cos;
        let y2 = w.y + self.random * self.tilt_sin;
        [
            Point::new(p.x.floor(), p.y.floor()),
            Point::new(w.x.floor(), y1.floor()),
            Point::new(x2.floor(), y2.floor()),
            Point::new(x1.floor(), w.y.floor()),
        ]
    }
}

/// Every live confetti piece plus the fixed-step clock driving them.
#[derive(Debug, Clone)]
pub struct ConfettiField {
    pieces: Vec<ConfettiPiece>,
    rng: Rng64,
    steps_taken: u64,
}

impl ConfettiField {
    /// Empty field drawing randomness from `rng`.
    pub fn new(rng: Rng64) -> Self {
        Self {
            pieces: Vec::new(),
            rng,
            steps_taken: 0,
        }
    }

    /// Launch `count` pieces from `origin`.
    pub fn fire(&mut self, origin: Point, count: u32, opts: &BurstOptions) {
        self.pieces.reserve(count as usize);
        for _ in 0..count {
            let piece = ConfettiPiece::launch(origin, opts, &mut self.rng);
            self.pieces.push(piece);
        }
    }

    /// Run one physics step on every piece, dropping expired ones.
    pub fn step(&mut self) {
        let rng = &mut self.rng;
        self.pieces.retain_mut(|p| p.step(rng));
        self.steps_taken += 1;
    }

    /// Run every step scheduled up to `elapsed_ms` of field time.
    pub fn advance_to_ms(&mut self, elapsed_ms: f64) {
        let target = (elapsed_ms.max(0.0) * STEPS_PER_SEC / 1000.0).floor() as u64;
        while self.steps_taken < target {
            self.step();
        }
    }

    /// Drop every piece immediately.
    pub fn reset(&mut self) {
        if !self.pieces.is_empty() {
            tracing::debug!(dropped = self.pieces.len(), "confetti reset");
        }
        self.pieces.clear();
    }

    /// Live pieces.
    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    /// Number of live pieces.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// `true` when nothing is in flight.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/confetti.rs"]
mod tests;
