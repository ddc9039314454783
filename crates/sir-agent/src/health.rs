//! The per-agent SIR finite-state machine.
//!
//! ```text
//!   Susceptible ──infect──▶ Infected ──recover──▶ Recovered (terminal)
//! ```
//!
//! Transitions are monotone: there is no path back to `Susceptible` and no
//! reinfection.  The transition functions are total: applying one to a
//! state it does not apply to returns that state unchanged.

use std::fmt;

use rand_distr::Exp1;
use sir_core::{AgentRng, RecoveryModel};

/// Health compartment of one agent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Health {
    #[default]
    Susceptible = 0,
    Infected    = 1,
    Recovered   = 2,
}

impl Health {
    /// `Susceptible → Infected`; every other state is unchanged.
    #[inline]
    #[must_use]
    pub fn infect(self) -> Health {
        match self {
            Health::Susceptible => Health::Infected,
            other => other,
        }
    }

    /// `Infected → Recovered`; every other state is unchanged.
    #[inline]
    #[must_use]
    pub fn recover(self) -> Health {
        match self {
            Health::Infected => Health::Recovered,
            other => other,
        }
    }

    #[inline]
    pub fn is_susceptible(self) -> bool {
        self == Health::Susceptible
    }

    #[inline]
    pub fn is_infected(self) -> bool {
        self == Health::Infected
    }

    #[inline]
    pub fn is_recovered(self) -> bool {
        self == Health::Recovered
    }

    /// Short lowercase label used by output writers.
    pub fn as_str(self) -> &'static str {
        match self {
            Health::Susceptible => "susceptible",
            Health::Infected    => "infected",
            Health::Recovered   => "recovered",
        }
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Compartment counts ────────────────────────────────────────────────────────

/// Number of agents in each compartment at one instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SirCounts {
    pub susceptible: usize,
    pub infected:    usize,
    pub recovered:   usize,
}

impl SirCounts {
    /// Tally a slice of health states.
    pub fn tally(states: &[Health]) -> Self {
        let mut counts = SirCounts::default();
        for &h in states {
            counts.add(h);
        }
        counts
    }

    #[inline]
    pub fn add(&mut self, h: Health) {
        match h {
            Health::Susceptible => self.susceptible += 1,
            Health::Infected    => self.infected += 1,
            Health::Recovered   => self.recovered += 1,
        }
    }

    /// `S + I + R`; always equals the population size.
    #[inline]
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.recovered
    }
}

impl fmt::Display for SirCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S={} I={} R={}", self.susceptible, self.infected, self.recovered)
    }
}

// ── Recovery thresholds ───────────────────────────────────────────────────────

/// Infection-clock value at which a newly infected agent recovers.
///
/// `Fixed` consumes no randomness; `Exponential` draws one `Exp(1)` sample
/// from the agent's own stream and scales it by `mean`.
pub fn draw_recovery_threshold(model: RecoveryModel, mean: f64, rng: &mut AgentRng) -> f64 {
    match model {
        RecoveryModel::Fixed => mean,
        RecoveryModel::Exponential => {
            let unit: f64 = rng.sample(Exp1);
            mean * unit
        }
    }
}
