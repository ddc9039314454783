//! The immutable result of a finished run.

use sir_agent::SirCounts;
use sir_core::Parameters;

use crate::{PositionSnapshot, TimeSeries};

/// Everything a run produced, handed to output writers once the loop ends.
#[derive(Clone, Debug, PartialEq)]
pub struct SimReport {
    pub params:            Parameters,
    pub series:            TimeSeries,
    /// Layout at `t = 0`, before any motion.
    pub initial_positions: PositionSnapshot,
    /// Layout after the last step.
    pub final_positions:   PositionSnapshot,
    /// Interval snapshots, ascending by step.  Empty when the interval is 0.
    pub snapshots:         Vec<PositionSnapshot>,
    /// Agents that were Infected at any point, including the seeded ones.
    pub ever_infected:     usize,
}

impl SimReport {
    /// Counts in the last record.
    pub fn final_counts(&self) -> SirCounts {
        self.series.last().map(|r| r.counts).unwrap_or_default()
    }

    /// `true` when nobody is still infected at the end of the run.
    ///
    /// The loop never stops early, so a `false` here means the epidemic was
    /// still active when the step budget ran out.
    pub fn is_extinguished(&self) -> bool {
        self.final_counts().infected == 0
    }
}
