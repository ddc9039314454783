//! Simulation observer trait for progress reporting and data collection.

use sir_agent::{AgentStore, SirCounts};
use sir_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Hooks run inside the loop, so they
/// should stay in memory; file output belongs after the run, from the
/// finished [`SimReport`][crate::SimReport].
///
/// # Example: peak tracker
///
/// ```rust
/// use sir_agent::SirCounts;
/// use sir_core::Tick;
/// use sir_sim::SimObserver;
///
/// #[derive(Default)]
/// struct Peak { infected: usize, at: Tick }
///
/// impl SimObserver for Peak {
///     fn on_step_end(&mut self, step: Tick, counts: SirCounts) {
///         if counts.infected > self.infected {
///             self.infected = counts.infected;
///             self.at = step;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before motion.
    fn on_step_start(&mut self, _step: Tick) {}

    /// Called after the step's record has been appended.
    fn on_step_end(&mut self, _step: Tick, _counts: SirCounts) {}

    /// Called at snapshot intervals (every `snapshot_interval` steps,
    /// including step 0) with read-only access to the whole population.
    fn on_snapshot(&mut self, _step: Tick, _agents: &AgentStore) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_step: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
