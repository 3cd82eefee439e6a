use crate::foundation::core::SimTime;

/// Milliseconds between burst ticks.
pub const BURST_PERIOD_MS: u64 = 250;
/// Total length of the celebration.
pub const BURST_DURATION_MS: u64 = 5_000;
/// Pieces per burst at the very start; decays linearly to zero.
pub const BURST_MAX_PARTICLES: f64 = 50.0;

/// What a single timer tick produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Emit a symmetric pair of bursts with this many pieces each.
    Burst {
        /// Instant the tick fired.
        at: SimTime,
        /// Pieces per burst.
        particle_count: u32,
    },
    /// The duration ran out; the timer cancelled itself.
    Elapsed {
        /// Instant the tick fired.
        at: SimTime,
    },
}

/// Repeating celebration timer.
///
/// Owned by the Open state; dropping it is the cancellation. It never outlives the state that
/// started it.
#[derive(Debug)]
pub struct BurstTimer {
    ends_at: SimTime,
    next_due: SimTime,
    ticks_fired: u64,
}

impl BurstTimer {
    /// Start the timer at `now`. The first tick is one period later.
    pub fn start(now: SimTime) -> Self {
        tracing::debug!(at_ms = now.0, "burst timer started");
        Self {
            ends_at: now.plus_ms(BURST_DURATION_MS),
            next_due: now.plus_ms(BURST_PERIOD_MS),
            ticks_fired: 0,
        }
    }

    /// Ticks fired so far, including the final `Elapsed` tick.
    pub fn ticks_fired(&self) -> u64 {
        self.ticks_fired
    }

    /// Fire the pending tick if it is due at or before `now`.
    pub fn poll(&mut self, now: SimTime) -> Option<Tick> {
        if self.next_due > now {
            return None;
        }
        let at = self.next_due;
        self.next_due = at.plus_ms(BURST_PERIOD_MS);
        self.ticks_fired += 1;

        let time_left = self.ends_at.0 as i128 - at.0 as i128;
        if time_left <= 0 {
            return Some(Tick::Elapsed { at });
        }
        Some(Tick::Burst {
            at,
            particle_count: burst_size(time_left as u64),
        })
    }
}

impl Drop for BurstTimer {
    fn drop(&mut self) {
        tracing::debug!(ticks = self.ticks_fired, "burst timer released");
    }
}

/// Pieces per burst with `time_left_ms` remaining.
pub fn burst_size(time_left_ms: u64) -> u32 {
    let frac = time_left_ms.min(BURST_DURATION_MS) as f64 / BURST_DURATION_MS as f64;
    (BURST_MAX_PARTICLES * frac).floor() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/scene/burst.rs"]
mod tests;
