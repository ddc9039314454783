//! The `Sim` struct and its step loop.

use sir_agent::{draw_recovery_threshold, AgentRngs, AgentStore, Health, SirCounts};
use sir_core::{AgentId, AgentRng, Parameters, SimClock, Tick};
use sir_motion::MotionModel;
use sir_spatial::{ContactDetector, ContactList, ContactQuery};
use tracing::{debug, info, trace};

use crate::{
    NoopObserver, PositionSnapshot, SimBuilder, SimObserver, SimReport, SimResult, TimeSeries,
};

// ── Per-step summary ──────────────────────────────────────────────────────────

/// What happened during one step, for logging and tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct StepOutcome {
    pub contacts:   usize,
    pub infections: usize,
    pub recoveries: usize,
    pub counts:     SirCounts,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<D, M>` owns the population and drives the step pipeline described in
/// the crate docs.  Once built it cannot fail: every step is a total
/// function of the current state and the per-agent random streams.
///
/// Create via [`SimBuilder`].
pub struct Sim<D: ContactDetector, M: MotionModel> {
    /// Run parameters.  Never mutated after `build`.
    pub params: Parameters,

    /// Step counter and step-to-time mapping.
    pub clock: SimClock,

    /// Agent state (SoA arrays).
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    pub detector: D,
    pub motion:   M,

    /// One record per completed step, plus the `t = 0` record.
    pub series: TimeSeries,

    pub initial: PositionSnapshot,

    /// Interval snapshots captured so far.
    pub snapshots: Vec<PositionSnapshot>,

    pub snapshot_interval: u64,

    /// Seeded agents plus every infection applied since.
    pub ever_infected: usize,
}

impl<D: ContactDetector, M: MotionModel> Sim<D, M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current step to `params.steps`.
    ///
    /// There is no early stop: the loop keeps stepping after the last
    /// infection ends.  Calls observer hooks at every step boundary; use
    /// [`NoopObserver`] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let end = Tick(self.params.steps);
        info!(
            population = self.agents.count,
            steps = self.params.steps,
            seed = self.params.seed,
            "simulation started"
        );

        if self.clock.current_tick == Tick::ZERO && self.snapshot_interval > 0 {
            observer.on_snapshot(Tick::ZERO, &self.agents);
        }
        let remaining = end.0.saturating_sub(self.clock.current_tick.0);
        self.run_ticks(remaining, observer);
        observer.on_sim_end(self.clock.current_tick);

        let counts = self.agents.counts();
        info!(
            steps = self.clock.current_tick.0,
            ever_infected = self.ever_infected,
            %counts,
            "simulation finished"
        );
    }

    /// Run exactly `n` steps from the current position (ignores
    /// `params.steps`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            observer.on_step_start(self.clock.current_tick.offset(1));
            let outcome = self.step();
            let now = self.clock.current_tick;
            observer.on_step_end(now, outcome.counts);
            if self.snapshot_due(now) {
                observer.on_snapshot(now, &self.agents);
            }
        }
    }

    /// Advance every agent by one step, append the record, and return a
    /// summary of the step.
    pub fn step(&mut self) -> StepOutcome {
        self.clock.advance();
        let now = self.clock.current_tick;
        let domain = self.params.domain();

        // ── Phase 1: motion ───────────────────────────────────────────────
        self.motion.advance_all(&mut self.agents, &mut self.rngs, &domain);

        // ── Phase 2: infectious snapshot ──────────────────────────────────
        //
        // Fixed before any transmission, so agents infected below neither
        // transmit nor progress their clock until the next step.
        let infectious = self.agents.ids_in(Health::Infected);
        let susceptible = self.agents.ids_in(Health::Susceptible);

        // ── Phase 3: contact detection ────────────────────────────────────
        let query = ContactQuery {
            positions:   &self.agents.position,
            susceptible: &susceptible,
            infectious:  &infectious,
            radius:      self.params.infection_radius,
        };
        let pairs = self.detector.contacts(&query);
        let contacts = ContactList::from_sorted(self.agents.count, &pairs);

        // ── Phase 4: transmission decisions ───────────────────────────────
        let newly_infected = self.transmission_pass(&contacts);

        // ── Phase 5: apply infections ─────────────────────────────────────
        let mut infections = 0;
        for &(agent, threshold) in &newly_infected {
            if self.agents.infect(agent, threshold) {
                infections += 1;
                trace!(%agent, step = now.0, threshold, "infected");
            }
        }
        self.ever_infected += infections;

        // ── Phase 6: recovery (snapshot agents only) ──────────────────────
        let dt = self.params.time_step;
        let recoveries = infectious
            .iter()
            .filter(|&&agent| self.agents.progress_infection(agent, dt))
            .count();

        // ── Phase 7: record ───────────────────────────────────────────────
        let counts = self.agents.counts();
        self.series.push(now, self.clock.now(), counts);
        if self.snapshot_due(now) {
            self.snapshots.push(PositionSnapshot::capture(now, self.clock.now(), &self.agents));
        }

        debug!(
            step = now.0,
            contacts = contacts.pair_count(),
            infections,
            recoveries,
            %counts,
            "step complete"
        );

        StepOutcome { contacts: contacts.pair_count(), infections, recoveries, counts }
    }

    /// Freeze the run into a [`SimReport`], capturing the final layout.
    pub fn into_report(self) -> SimReport {
        let final_positions =
            PositionSnapshot::capture(self.clock.current_tick, self.clock.now(), &self.agents);
        SimReport {
            params: self.params,
            series: self.series,
            initial_positions: self.initial,
            final_positions,
            snapshots: self.snapshots,
            ever_infected: self.ever_infected,
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn snapshot_due(&self, step: Tick) -> bool {
        self.snapshot_interval > 0 && step.0.is_multiple_of(self.snapshot_interval)
    }

    /// Decide which susceptible agents become infected this step.
    ///
    /// Each agent with contacts draws one Bernoulli(p) per infector, in
    /// ascending infector order, and stops at the first success.  A newly
    /// infected agent then draws its recovery threshold from the same
    /// stream.  With the `parallel` Cargo feature the pass runs on Rayon's
    /// thread pool; since no agent touches another's RNG, the result is the
    /// same.
    fn transmission_pass(&mut self, contacts: &ContactList) -> Vec<(AgentId, f64)> {
        if contacts.is_empty() {
            return Vec::new();
        }

        // Explicit field borrows so the borrow checker sees disjoint access.
        let health = self.agents.health.as_slice();
        let p = self.params.infection_probability;
        let model = self.params.recovery_model;
        let mean = self.params.mean_recovery_duration;
        let rngs = &mut self.rngs.inner;

        let decide = |i: usize, rng: &mut AgentRng| -> Option<(AgentId, f64)> {
            let agent = AgentId(i as u32);
            if !health[i].is_susceptible() {
                return None;
            }
            let infectors = contacts.of(agent);
            if infectors.is_empty() || !infectors.iter().any(|_| rng.gen_bool(p)) {
                return None;
            }
            Some((agent, draw_recovery_threshold(model, mean, rng)))
        };

        #[cfg(not(feature = "parallel"))]
        {
            rngs.iter_mut()
                .enumerate()
                .filter_map(|(i, rng)| decide(i, rng))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            rngs.par_iter_mut()
                .enumerate()
                .filter_map(|(i, rng)| decide(i, rng))
                .collect()
        }
    }
}

/// Build a default simulation from `params`, run it to completion, and
/// return the report.
///
/// # Errors
/// Fails only if `params` does not validate; the run itself cannot fail.
pub fn simulate(params: Parameters) -> SimResult<SimReport> {
    let mut sim = SimBuilder::new(params).build()?;
    sim.run(&mut NoopObserver);
    Ok(sim.into_report())
}
