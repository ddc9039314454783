//! The `MotionModel` trait: the extension point for movement rules.

use sir_agent::{AgentRngs, AgentStore};
use sir_core::{AgentRng, Domain, Point};

/// Result of moving one agent for one step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Move {
    pub position: Point,
    pub heading:  f64,
}

/// Pluggable agent movement.
///
/// Implementations must keep the returned position inside `domain` and may
/// only draw randomness from the agent's own `rng`, so that a step's outcome
/// does not depend on the order agents are moved in.
pub trait MotionModel: Send + Sync + 'static {
    /// Advance one agent by one step.
    fn advance(&self, position: Point, heading: f64, domain: &Domain, rng: &mut AgentRng) -> Move;

    /// Advance every agent in `store` by one step, in index order.
    fn advance_all(&self, store: &mut AgentStore, rngs: &mut AgentRngs, domain: &Domain) {
        for (i, rng) in rngs.inner.iter_mut().enumerate() {
            let m = self.advance(store.position[i], store.heading[i], domain, rng);
            store.position[i] = m.position;
            store.heading[i] = m.heading;
        }
    }
}

/// Agents that never move.  Useful for tests that need a fixed layout.
#[derive(Copy, Clone, Debug, Default)]
pub struct Stationary;

impl MotionModel for Stationary {
    fn advance(&self, position: Point, heading: f64, _domain: &Domain, _rng: &mut AgentRng) -> Move {
        Move { position, heading }
    }
}
