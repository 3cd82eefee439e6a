use crate::foundation::core::{Point, SimTime, Viewport};
use crate::foundation::math::Rng64;
use crate::scene::burst::{BurstTimer, Tick};
use crate::scene::confetti::{BurstOptions, ConfettiField};
use crate::scene::indicator::DirectionalIndicator;
use crate::scene::spotlight::{OverlayBackground, closed_fill, cursor_spotlight, open_glow};

/// Horizontal origin band of the left-hand bursts, as viewport fractions.
pub const LEFT_BURST_BAND: (f64, f64) = (0.1, 0.3);
/// Horizontal origin band of the right-hand bursts, as viewport fractions.
pub const RIGHT_BURST_BAND: (f64, f64) = (0.7, 0.9);

/// State that exists only while the lights are on.
#[derive(Debug)]
struct OpenPhase {
    entered_at: SimTime,
    burst: Option<BurstTimer>,
}

#[derive(Debug)]
enum Mode {
    Closed,
    Open(OpenPhase),
}

/// Owns the overlay, the burst timer, the confetti and the pointer graphic.
///
/// Lights off: the overlay follows the pointer. Lights on: the overlay is a fixed glow and a
/// burst timer throws confetti from both sides until it runs out.
#[derive(Debug)]
pub struct SpotlightController {
    viewport: Viewport,
    overlay: OverlayBackground,
    mode: Mode,
    indicator: DirectionalIndicator,
    confetti: ConfettiField,
    burst_opts: BurstOptions,
    rng: Rng64,
    bursts_emitted: u64,
}

impl SpotlightController {
    /// Mount over `viewport`. Mounting runs the lights-off entry immediately.
    pub fn mount(viewport: Viewport, mut rng: Rng64) -> Self {
        let confetti = ConfettiField::new(rng.fork());
        let mut out = Self {
            viewport,
            overlay: closed_fill(),
            mode: Mode::Closed,
            indicator: DirectionalIndicator::default(),
            confetti,
            burst_opts: BurstOptions::default(),
            rng,
            bursts_emitted: 0,
        };
        out.apply_closed();
        out
    }

    /// `true` while in the Open state.
    pub fn is_open(&self) -> bool {
        matches!(self.mode, Mode::Open(_))
    }

    /// Instant the current Open state was entered.
    pub fn opened_at(&self) -> Option<SimTime> {
        match &self.mode {
            Mode::Open(phase) => Some(phase.entered_at),
            Mode::Closed => None,
        }
    }

    /// Current overlay paint.
    pub fn overlay(&self) -> &OverlayBackground {
        &self.overlay
    }

    /// Pointer graphic.
    pub fn indicator(&self) -> &DirectionalIndicator {
        &self.indicator
    }

    /// Confetti in flight.
    pub fn confetti(&self) -> &ConfettiField {
        &self.confetti
    }

    /// Number of running burst timers (zero or one).
    pub fn active_timers(&self) -> usize {
        match &self.mode {
            Mode::Open(OpenPhase { burst: Some(_), .. }) => 1,
            _ => 0,
        }
    }

    /// Bursts emitted since mount (each tick emits two).
    pub fn bursts_emitted(&self) -> u64 {
        self.bursts_emitted
    }

    /// Enter Open at `now`. Returns `false` when already open; no second timer is started.
    pub fn enter_open(&mut self, now: SimTime) -> bool {
        if self.is_open() {
            tracing::debug!(at_ms = now.0, "already open; keeping the running timer");
            return false;
        }
        self.overlay = open_glow(self.viewport);
        self.indicator.set_hidden(true);
        self.mode = Mode::Open(OpenPhase {
            entered_at: now,
            burst: Some(BurstTimer::start(now)),
        });
        true
    }

    /// Enter Closed. Returns `false` when already closed.
    pub fn enter_closed(&mut self, now: SimTime) -> bool {
        if !self.is_open() {
            return false;
        }
        tracing::debug!(at_ms = now.0, "closing; releasing burst timer");
        self.apply_closed();
        true
    }

    fn apply_closed(&mut self) {
        self.mode = Mode::Closed;
        self.overlay = closed_fill();
        self.confetti.reset();
        self.indicator.set_hidden(false);
    }

    /// Pointer moved to `at`; `target` is the switch center the graphic points at.
    pub fn pointer_moved(&mut self, at: Point, target: Point) {
        if self.is_open() {
            return;
        }
        self.overlay = cursor_spotlight(at);
        self.indicator.follow(at, target);
    }

    /// Fire every timer tick due up to `now` and run confetti physics up to `now`.
    ///
    /// Returns the ticks that fired, in order.
    pub fn advance_to(&mut self, now: SimTime) -> Vec<Tick> {
        let mut fired = Vec::new();
        loop {
            let tick = match &mut self.mode {
                Mode::Open(phase) => match phase.burst.as_mut() {
                    Some(timer) => timer.poll(now),
                    None => None,
                },
                Mode::Closed => None,
            };
            let Some(tick) = tick else {
                break;
            };
            match tick {
                Tick::Burst { at, particle_count } => {
                    self.confetti.advance_to_ms(at.0 as f64);
                    self.emit_bursts(particle_count);
                    tracing::trace!(at_ms = at.0, particle_count, "burst");
                }
                Tick::Elapsed { at } => {
                    if let Mode::Open(phase) = &mut self.mode {
                        phase.burst = None;
                    }
                    self.confetti.reset();
                    tracing::debug!(at_ms = at.0, "burst timer elapsed");
                }
            }
            fired.push(tick);
        }
        self.confetti.advance_to_ms(now.0 as f64);
        fired
    }

    fn emit_bursts(&mut self, particle_count: u32) {
        for band in [LEFT_BURST_BAND, RIGHT_BURST_BAND] {
            let fx = self.rng.range(band.0, band.1);
            let fy = self.rng.next_f64_01() - 0.2;
            let origin = self.viewport.fraction_to_px(fx, fy);
            self.confetti.fire(origin, particle_count, &self.burst_opts);
            self.bursts_emitted += 1;
        }
    }

    /// Release every resource tied to the current state.
    pub fn teardown(&mut self) {
        self.mode = Mode::Closed;
        self.confetti.reset();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/controller.rs"]
mod tests;
