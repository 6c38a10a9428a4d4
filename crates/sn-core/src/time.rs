//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! simulated hour, which is why a vessel's speed in nm/hr is also the distance
//! it covers in a single tick.  `SimClock` keeps the counter together with the
//! tick duration so the tick log can show elapsed days and hours.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and how much simulated time one tick stands for.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// How many simulated seconds one tick represents.  Default: 3600.
    pub tick_duration_secs: u32,
    /// The current tick, advanced by `SimClock::advance()` once per tick.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_secs: u32) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.current_tick.0 * self.tick_duration_secs as u64
    }

    /// Break elapsed time into (day, hour) components from sim start.
    pub fn elapsed_dh(&self) -> (u64, u32) {
        let total_secs = self.elapsed_secs();
        let days = total_secs / 86_400;
        let hours = ((total_secs % 86_400) / 3_600) as u32;
        (days, hours)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(3_600)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h) = self.elapsed_dh();
        write!(f, "T{} (day {} {:02}:00)", self.current_tick, d, h)
    }
}
