//! Fluent builder for constructing a [`Sim`].

use sir_agent::{AgentRngs, AgentStore, PopulationBuilder};
use sir_core::{Parameters, SimClock};
use sir_motion::{BounceMotion, MotionModel};
use sir_spatial::{ContactDetector, ContactStrategy, Detector};

use crate::{PositionSnapshot, Sim, SimError, SimResult, TimeSeries};

/// Fluent builder for [`Sim<D, M>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                  |
/// |--------------------------|------------------------------------------|
/// | `.strategy(s)`           | `ContactStrategy::Grid`                  |
/// | `.detector(d)`           | detector for the chosen strategy         |
/// | `.motion(m)`             | `BounceMotion::from_params`              |
/// | `.population(store, r)`  | `PopulationBuilder` random layout        |
/// | `.snapshot_interval(n)`  | `0` (initial and final snapshots only)   |
///
/// # Example
///
/// ```rust
/// use sir_core::Parameters;
/// use sir_sim::{NoopObserver, SimBuilder};
/// use sir_spatial::ContactStrategy;
///
/// let params = Parameters { steps: 10, ..Parameters::default() };
/// let mut sim = SimBuilder::new(params)
///     .strategy(ContactStrategy::RTree)
///     .snapshot_interval(5)
///     .build()
///     .unwrap();
/// sim.run(&mut NoopObserver);
/// assert_eq!(sim.into_report().snapshots.len(), 3); // steps 0, 5, 10
/// ```
pub struct SimBuilder<D: ContactDetector = Detector, M: MotionModel = BounceMotion> {
    params:            Parameters,
    detector:          D,
    motion:            M,
    population:        Option<(AgentStore, AgentRngs)>,
    snapshot_interval: u64,
}

impl SimBuilder {
    /// Start from `params` with the default detector and bounce motion.
    pub fn new(params: Parameters) -> Self {
        let motion = BounceMotion::from_params(&params);
        Self {
            params,
            detector: Detector::default(),
            motion,
            population: None,
            snapshot_interval: 0,
        }
    }

    /// Pick one of the built-in detectors.
    pub fn strategy(mut self, strategy: ContactStrategy) -> Self {
        self.detector = strategy.detector();
        self
    }
}

impl<D: ContactDetector, M: MotionModel> SimBuilder<D, M> {
    /// Use a custom contact detector.
    pub fn detector<D2: ContactDetector>(self, detector: D2) -> SimBuilder<D2, M> {
        SimBuilder {
            params:            self.params,
            detector,
            motion:            self.motion,
            population:        self.population,
            snapshot_interval: self.snapshot_interval,
        }
    }

    /// Use a custom motion model.
    pub fn motion<M2: MotionModel>(self, motion: M2) -> SimBuilder<D, M2> {
        SimBuilder {
            params:            self.params,
            detector:          self.detector,
            motion,
            population:        self.population,
            snapshot_interval: self.snapshot_interval,
        }
    }

    /// Supply a pre-built population (e.g. from
    /// [`PopulationBuilder::positions`]).  Both halves must have length
    /// `params.population`.
    pub fn population(mut self, store: AgentStore, rngs: AgentRngs) -> Self {
        self.population = Some((store, rngs));
        self
    }

    /// Capture a [`PositionSnapshot`] every `n` steps, starting at step 0.
    /// `0` disables interval snapshots.
    pub fn snapshot_interval(mut self, n: u64) -> Self {
        self.snapshot_interval = n;
        self
    }

    /// Validate inputs, create the population if none was supplied, record
    /// the `t = 0` state, and return a ready-to-run [`Sim`].
    ///
    /// # Errors
    /// [`SimError::Parameters`] if the parameters fail validation, or
    /// [`SimError::AgentCountMismatch`] if a supplied population has the
    /// wrong size.
    pub fn build(self) -> SimResult<Sim<D, M>> {
        self.params.validate()?;
        let n = self.params.population;

        let (store, rngs) = match self.population {
            Some((store, rngs)) => {
                check_count("agent store", store.count, n)?;
                check_count("agent rngs", rngs.len(), n)?;
                (store, rngs)
            }
            None => PopulationBuilder::new(&self.params).build()?,
        };

        let clock = SimClock::new(self.params.time_step);
        let capacity = self.params.record_count().min(MAX_PREALLOCATED_RECORDS);
        let mut series = TimeSeries::with_capacity(capacity);
        series.push(clock.current_tick, clock.now(), store.counts());

        let initial = PositionSnapshot::capture(clock.current_tick, clock.now(), &store);
        let snapshots = if self.snapshot_interval > 0 { vec![initial.clone()] } else { Vec::new() };
        let ever_infected = store.counts().infected + store.counts().recovered;

        Ok(Sim {
            params: self.params,
            clock,
            agents: store,
            rngs,
            detector: self.detector,
            motion: self.motion,
            series,
            initial,
            snapshots,
            snapshot_interval: self.snapshot_interval,
            ever_infected,
        })
    }
}

/// Upper bound on records reserved up front; longer runs grow the series.
const MAX_PREALLOCATED_RECORDS: usize = 1 << 16;

fn check_count(what: &'static str, got: usize, expected: usize) -> SimResult<()> {
    if got == expected {
        Ok(())
    } else {
        Err(SimError::AgentCountMismatch { expected, got, what })
    }
}
