//! Initial population construction from [`Parameters`].
//!
//! # Usage
//!
//! ```rust
//! use sir_agent::PopulationBuilder;
//! use sir_core::Parameters;
//!
//! let params = Parameters::default();
//! let (store, rngs) = PopulationBuilder::new(&params).build().unwrap();
//!
//! assert_eq!(store.count, 100);
//! assert_eq!(rngs.len(), 100);
//! assert_eq!(store.counts().infected, 1);
//! ```

use std::f64::consts::TAU;

use sir_core::{AgentId, Parameters, Point, SirError, SirResult};
use tracing::info;

use crate::health::draw_recovery_threshold;
use crate::{AgentRngs, AgentStore};

/// Builds the `t = 0` population: uniform random positions, uniform random
/// headings, agents `0..initial_infected` infected with clock 0, everyone
/// else susceptible.
///
/// Each agent's placement is drawn from its own RNG stream, so a fixed seed
/// always yields the same layout.  Explicit positions or headings may be
/// supplied instead (tests and scripted scenarios); the RNG draws for the
/// replaced quantity are then skipped.
pub struct PopulationBuilder<'a> {
    params:    &'a Parameters,
    positions: Option<Vec<Point>>,
    headings:  Option<Vec<f64>>,
}

impl<'a> PopulationBuilder<'a> {
    pub fn new(params: &'a Parameters) -> Self {
        Self { params, positions: None, headings: None }
    }

    /// Use these starting positions instead of random placement.
    ///
    /// Must have length `population` and lie inside the domain.
    pub fn positions(mut self, positions: Vec<Point>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Use these starting headings (radians) instead of random ones.
    pub fn headings(mut self, headings: Vec<f64>) -> Self {
        self.headings = Some(headings);
        self
    }

    /// Validate parameters and construct `AgentStore` + `AgentRngs`.
    ///
    /// # Errors
    /// [`SirError::InvalidParameters`] if `Parameters::validate` fails or an
    /// explicit layout has the wrong length or leaves the domain.  No agent
    /// is created in that case.
    pub fn build(self) -> SirResult<(AgentStore, AgentRngs)> {
        let params = self.params;
        params.validate()?;

        let n = params.population;
        let domain = params.domain();

        if let Some(p) = &self.positions {
            check_len("positions", p.len(), n)?;
            if let Some((i, bad)) = p.iter().enumerate().find(|(_, q)| !domain.contains(**q)) {
                return Err(SirError::InvalidParameters {
                    field:  "positions",
                    reason: format!("agent {i} at {bad} lies outside the domain"),
                });
            }
        }
        if let Some(h) = &self.headings {
            check_len("headings", h.len(), n)?;
        }

        let mut store = AgentStore::new(n);
        let mut rngs = AgentRngs::new(n, params.seed);

        for (i, rng) in rngs.inner.iter_mut().enumerate() {
            store.position[i] = match &self.positions {
                Some(p) => p[i],
                None => Point::new(
                    rng.gen_range(0.0..=domain.width),
                    rng.gen_range(0.0..=domain.height),
                ),
            };
            store.heading[i] = match &self.headings {
                Some(h) => h[i],
                None => rng.gen_range(0.0..TAU),
            };
        }

        for i in 0..params.initial_infected {
            let agent = AgentId(i as u32);
            let threshold = draw_recovery_threshold(
                params.recovery_model,
                params.mean_recovery_duration,
                rngs.get_mut(agent),
            );
            store.infect(agent, threshold);
        }

        info!(
            population = n,
            initial_infected = params.initial_infected,
            seed = params.seed,
            "population initialised"
        );

        Ok((store, rngs))
    }
}

fn check_len(field: &'static str, got: usize, expected: usize) -> SirResult<()> {
    if got == expected {
        Ok(())
    } else {
        Err(SirError::InvalidParameters {
            field,
            reason: format!("length {got} does not match population {expected}"),
        })
    }
}
