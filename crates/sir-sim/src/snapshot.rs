//! In-memory position snapshots.

use sir_agent::{AgentStore, Health};
use sir_core::{AgentId, Point, Tick};

/// One agent's position and health at the snapshot instant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionEntry {
    pub agent:    AgentId,
    pub position: Point,
    pub health:   Health,
}

/// Every agent's position and health at one step, in agent-index order.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionSnapshot {
    pub step:    Tick,
    pub time:    f64,
    pub entries: Vec<PositionEntry>,
}

impl PositionSnapshot {
    pub fn capture(step: Tick, time: f64, store: &AgentStore) -> Self {
        let entries = store
            .agent_ids()
            .map(|agent| PositionEntry {
                agent,
                position: store.position[agent.index()],
                health:   store.health[agent.index()],
            })
            .collect();
        Self { step, time, entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
