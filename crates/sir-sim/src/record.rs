//! The per-step compartment time series.

use sir_agent::SirCounts;
use sir_core::Tick;

/// One row of the time series.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SirRecord {
    pub step:   Tick,
    /// Simulated time, `step * time_step`.
    pub time:   f64,
    pub counts: SirCounts,
}

/// Append-only series of compartment counts, one entry per record.
///
/// Stored column-wise: the five vectors always have equal length, and entry
/// `k` of each belongs to the same record.  Rows are never mutated once
/// pushed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSeries {
    pub step:        Vec<u64>,
    pub time:        Vec<f64>,
    pub susceptible: Vec<usize>,
    pub infected:    Vec<usize>,
    pub recovered:   Vec<usize>,
}

impl TimeSeries {
    pub fn with_capacity(records: usize) -> Self {
        Self {
            step:        Vec::with_capacity(records),
            time:        Vec::with_capacity(records),
            susceptible: Vec::with_capacity(records),
            infected:    Vec::with_capacity(records),
            recovered:   Vec::with_capacity(records),
        }
    }

    pub fn push(&mut self, step: Tick, time: f64, counts: SirCounts) {
        self.step.push(step.0);
        self.time.push(time);
        self.susceptible.push(counts.susceptible);
        self.infected.push(counts.infected);
        self.recovered.push(counts.recovered);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.step.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.step.is_empty()
    }

    pub fn get(&self, k: usize) -> Option<SirRecord> {
        (k < self.len()).then(|| self.row(k))
    }

    pub fn first(&self) -> Option<SirRecord> {
        self.get(0)
    }

    pub fn last(&self) -> Option<SirRecord> {
        self.len().checked_sub(1).and_then(|k| self.get(k))
    }

    /// Iterate the records in order.
    pub fn records(&self) -> impl ExactSizeIterator<Item = SirRecord> + '_ {
        (0..self.len()).map(move |k| self.row(k))
    }

    /// Largest infected count and the first step it was reached at.
    pub fn peak_infected(&self) -> Option<(Tick, usize)> {
        self.records()
            .fold(None, |best: Option<(Tick, usize)>, r| match best {
                Some((_, n)) if n >= r.counts.infected => best,
                _ => Some((r.step, r.counts.infected)),
            })
    }

    fn row(&self, k: usize) -> SirRecord {
        SirRecord {
            step:   Tick(self.step[k]),
            time:   self.time[k],
            counts: SirCounts {
                susceptible: self.susceptible[k],
                infected:    self.infected[k],
                recovered:   self.recovered[k],
            },
        }
    }
}
