//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing integer `Tick` (the step index).  The
//! mapping to simulated time units is held in `SimClock`:
//!
//!   time = tick * time_step
//!
//! Using an integer step as the canonical time unit keeps loop bounds exact
//! (no floating-point drift in the `0..=T` record count); the real-valued
//! time is derived on demand for output.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.  `Tick(0)` is the initial state,
/// before any motion.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between step counts and simulated time.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimClock {
    /// Simulated time units per step.
    pub time_step: f64,
    /// The current tick: advanced by `SimClock::advance()` each step.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(time_step: f64) -> Self {
        Self { time_step, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Simulated time at `current_tick`.
    #[inline]
    pub fn now(&self) -> f64 {
        self.time_at(self.current_tick)
    }

    /// Simulated time at an arbitrary tick.
    #[inline]
    pub fn time_at(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.time_step
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t = {:.3})", self.current_tick, self.now())
    }
}
