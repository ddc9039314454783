//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The transmission pass needs `&mut AgentRngs` (exclusive access to each
//! agent's RNG) and `&AgentStore` (shared read access to positions and the
//! infectious snapshot) at the same time.  Keeping RNGs in a separate
//! `AgentRngs` struct lets both borrows coexist, and lets the `parallel`
//! feature in `sir-sim` hand `par_iter_mut()` over the RNGs alone.

use sir_core::{AgentId, AgentRng, Point};

use crate::health::{Health, SirCounts};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`].
#[derive(Debug)]
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];  // O(1), cache-friendly
/// ```
///
/// `infected_steps` and `recovery_threshold` are only meaningful while the
/// agent is `Infected`; they are left at their last value afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current position, always inside the domain.
    pub position: Vec<Point>,

    /// Direction of travel in radians, measured counter-clockwise from +x.
    pub heading: Vec<f64>,

    /// Compartment.
    pub health: Vec<Health>,

    /// Completed steps since infection.  The infection clock is derived as
    /// `infected_steps * dt` so it never accumulates rounding error.
    pub infected_steps: Vec<u64>,

    /// Clock value at which this agent recovers.
    pub recovery_threshold: Vec<f64>,
}

impl AgentStore {
    /// `count` susceptible agents at the origin, heading along +x.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            position:           vec![Point::default(); count],
            heading:            vec![0.0; count],
            health:             vec![Health::Susceptible; count],
            infected_steps:     vec![0; count],
            recovery_threshold: vec![0.0; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Agents currently in `state`, ascending.
    pub fn ids_in(&self, state: Health) -> Vec<AgentId> {
        self.health
            .iter()
            .enumerate()
            .filter(|&(_, &h)| h == state)
            .map(|(i, _)| AgentId(i as u32))
            .collect()
    }

    /// Compartment counts right now.
    pub fn counts(&self) -> SirCounts {
        SirCounts::tally(&self.health)
    }

    // ── State transitions ─────────────────────────────────────────────────

    /// Move a susceptible agent to `Infected` with a fresh clock.
    ///
    /// Returns `false` (and changes nothing) if the agent was not
    /// susceptible, so repeated calls within a step are harmless.
    pub fn infect(&mut self, agent: AgentId, recovery_threshold: f64) -> bool {
        let i = agent.index();
        if !self.health[i].is_susceptible() {
            return false;
        }
        self.health[i] = self.health[i].infect();
        self.infected_steps[i] = 0;
        self.recovery_threshold[i] = recovery_threshold;
        true
    }

    /// Simulated time `agent` has spent infected, for a step of `dt`.
    #[inline]
    pub fn infection_clock(&self, agent: AgentId, dt: f64) -> f64 {
        self.infected_steps[agent.index()] as f64 * dt
    }

    /// Advance an infected agent's clock by one step of `dt`, recovering it
    /// once the clock meets or exceeds its threshold.
    ///
    /// Returns `true` if the agent recovered on this call.  Agents that are
    /// not infected are left untouched.
    pub fn progress_infection(&mut self, agent: AgentId, dt: f64) -> bool {
        let i = agent.index();
        if !self.health[i].is_infected() {
            return false;
        }
        self.infected_steps[i] += 1;
        if self.infection_clock(agent, dt) >= self.recovery_threshold[i] {
            self.health[i] = self.health[i].recover();
            return true;
        }
        false
    }
}
