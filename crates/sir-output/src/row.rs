//! Plain data row types written by output backends.

use sir_agent::Health;
use sir_sim::{PositionSnapshot, TimeSeries};

use crate::{OutputError, OutputResult};

/// One time-series record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRow {
    pub step:        u64,
    pub time:        f64,
    pub susceptible: u64,
    pub infected:    u64,
    pub recovered:   u64,
}

impl SeriesRow {
    pub fn from_series(series: &TimeSeries) -> Vec<SeriesRow> {
        series
            .records()
            .map(|r| SeriesRow {
                step:        r.step.0,
                time:        r.time,
                susceptible: r.counts.susceptible as u64,
                infected:    r.counts.infected as u64,
                recovered:   r.counts.recovered as u64,
            })
            .collect()
    }
}

/// One agent's entry in a position snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRow {
    pub agent_id: u32,
    pub x:        f64,
    pub y:        f64,
    pub state:    Health,
}

impl PositionRow {
    /// Rows in agent-index order.
    pub fn from_snapshot(snapshot: &PositionSnapshot) -> Vec<PositionRow> {
        snapshot
            .entries
            .iter()
            .map(|e| PositionRow {
                agent_id: e.agent.0,
                x:        e.position.x,
                y:        e.position.y,
                state:    e.health,
            })
            .collect()
    }
}

/// Reject snapshot names that could escape the output directory.
pub(crate) fn check_name(name: &str) -> OutputResult<()> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\']);
    if bad { Err(OutputError::InvalidName(name.to_owned())) } else { Ok(()) }
}
