//! Immutable run parameters.
//!
//! `Parameters` is loaded once before the simulation starts (typically from a
//! TOML file by the CLI crate) and is read-only thereafter: the engine takes
//! it by value and only ever hands out `&Parameters`.

use crate::error::{SirError, SirResult};
use crate::geo::Domain;

/// How long an agent stays infected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RecoveryModel {
    /// Every agent recovers once its infection clock reaches exactly the
    /// mean recovery duration.
    #[default]
    Fixed,
    /// Each agent draws its own threshold from an exponential distribution
    /// with the configured mean when it becomes infected.
    Exponential,
}

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Number of agents `N`.
    pub population: usize,

    /// Domain width (x extent).
    pub width: f64,

    /// Domain height (y extent).
    pub height: f64,

    /// Distance an agent travels along its heading each step.
    pub step_size: f64,

    /// Agents within this distance of each other are in contact.
    pub infection_radius: f64,

    /// Per-contact, per-step probability that an infected agent infects a
    /// susceptible one.
    pub infection_probability: f64,

    /// Mean time an agent stays infected, in simulated time units.
    pub mean_recovery_duration: f64,

    /// Number of steps `T`.  The run records `T + 1` states.
    pub steps: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Simulated time per step.  Default: 1.0.
    #[cfg_attr(feature = "serde", serde(default = "default_time_step"))]
    pub time_step: f64,

    /// Number of agents (indices `0..k`) infected at `t = 0`.  Default: 1.
    #[cfg_attr(feature = "serde", serde(default = "default_initial_infected"))]
    pub initial_infected: usize,

    #[cfg_attr(feature = "serde", serde(default))]
    pub recovery_model: RecoveryModel,

    /// Half-width, in radians, of the uniform per-step heading perturbation.
    /// `0.0` (the default) means agents travel in straight lines between
    /// bounces.
    #[cfg_attr(feature = "serde", serde(default))]
    pub heading_jitter: f64,
}

#[cfg(feature = "serde")]
fn default_time_step() -> f64 {
    1.0
}

#[cfg(feature = "serde")]
fn default_initial_infected() -> usize {
    1
}

impl Default for Parameters {
    /// 100 agents in a 10 × 10 box, radius 0.5, p = 0.3, mean recovery 5,
    /// 50 steps, seed 42.
    fn default() -> Self {
        Self {
            population:             100,
            width:                  10.0,
            height:                 10.0,
            step_size:              0.1,
            infection_radius:       0.5,
            infection_probability:  0.3,
            mean_recovery_duration: 5.0,
            steps:                  50,
            seed:                   42,
            time_step:              1.0,
            initial_infected:       1,
            recovery_model:         RecoveryModel::Fixed,
            heading_jitter:         0.0,
        }
    }
}

impl Parameters {
    /// Check every constraint, reporting the first violated field.
    ///
    /// Called by the population builder before any agent is created.
    pub fn validate(&self) -> SirResult<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        non_negative("step_size", self.step_size)?;
        non_negative("infection_radius", self.infection_radius)?;
        positive("mean_recovery_duration", self.mean_recovery_duration)?;
        positive("time_step", self.time_step)?;
        non_negative("heading_jitter", self.heading_jitter)?;

        let p = self.infection_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(SirError::invalid(
                "infection_probability",
                format!("{p} is outside [0, 1]"),
            ));
        }

        if self.population > u32::MAX as usize {
            return Err(SirError::invalid(
                "population",
                format!("{} exceeds the maximum of {}", self.population, u32::MAX),
            ));
        }

        if self.initial_infected > self.population {
            return Err(SirError::invalid(
                "initial_infected",
                format!(
                    "{} initially infected agents requested but population is {}",
                    self.initial_infected, self.population
                ),
            ));
        }

        Ok(())
    }

    /// The rectangular world agents move in.
    #[inline]
    pub fn domain(&self) -> Domain {
        Domain::new(self.width, self.height)
    }

    /// Number of records a complete run produces (`T + 1`), saturating at
    /// `usize::MAX` for step counts the platform cannot index.
    #[inline]
    pub fn record_count(&self) -> usize {
        usize::try_from(self.steps).map_or(usize::MAX, |n| n.saturating_add(1))
    }
}

fn positive(field: &'static str, v: f64) -> SirResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(SirError::invalid(field, format!("{v} must be a positive finite number")))
    }
}

fn non_negative(field: &'static str, v: f64) -> SirResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(SirError::invalid(field, format!("{v} must be a non-negative finite number")))
    }
}
