//! The contact-detection contract shared by every detector.

use sir_core::{AgentId, Point};

/// A susceptible agent within the infection radius of an infectious one.
///
/// Ordering is lexicographic on `(susceptible, infected)`, which is the
/// canonical order detectors return pairs in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Contact {
    pub susceptible: AgentId,
    pub infected:    AgentId,
}

/// Inputs to one contact-detection pass.
///
/// `positions` is indexed by `AgentId`; `susceptible` and `infectious` are
/// disjoint id lists (the infectious list is the start-of-step snapshot).
#[derive(Copy, Clone, Debug)]
pub struct ContactQuery<'a> {
    pub positions:   &'a [Point],
    pub susceptible: &'a [AgentId],
    pub infectious:  &'a [AgentId],
    pub radius:      f64,
}

impl ContactQuery<'_> {
    /// `r²`, the threshold every detector compares `distance_sq` against.
    #[inline]
    pub fn radius_sq(&self) -> f64 {
        self.radius * self.radius
    }

    /// The exact predicate: `dx² + dy² ≤ r²`, susceptible position first.
    #[inline]
    pub fn in_contact(&self, susceptible: AgentId, infected: AgentId) -> bool {
        self.positions[susceptible.index()].within(self.positions[infected.index()], self.radius)
    }
}

/// Pluggable proximity search.
///
/// Implementors push every qualifying pair into `out` in any order; callers
/// go through [`contacts`](Self::contacts), which sorts.  `&mut self` lets
/// a detector keep its scratch buffers between steps.
pub trait ContactDetector: Send {
    /// Append every `(s, i)` with `s ∈ susceptible`, `i ∈ infectious` and
    /// `dist²(s, i) ≤ r²` to `out`.
    fn detect(&mut self, query: &ContactQuery<'_>, out: &mut Vec<Contact>);

    /// All contact pairs for `query`, sorted by `(susceptible, infected)`.
    fn contacts(&mut self, query: &ContactQuery<'_>) -> Vec<Contact> {
        let mut out = Vec::new();
        if query.susceptible.is_empty() || query.infectious.is_empty() {
            return out;
        }
        self.detect(query, &mut out);
        out.sort_unstable();
        out
    }
}

// ── ContactList ───────────────────────────────────────────────────────────────

/// Transient per-step adjacency: for each agent, the infectious agents it is
/// in contact with, in ascending id order.
///
/// Stored in Compressed Sparse Row form.  Agent `a`'s contacts are
///
/// ```text
/// infected[ row_start[a] .. row_start[a+1] ]
/// ```
///
/// so lookup is a contiguous slice and the whole list is two allocations.
/// Rebuilt every step and dropped afterwards; nothing persists between steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactList {
    row_start: Vec<usize>,
    infected:  Vec<AgentId>,
}

impl ContactList {
    /// Build from pairs sorted by `(susceptible, infected)`, for a population
    /// of `agent_count`.
    pub fn from_sorted(agent_count: usize, contacts: &[Contact]) -> Self {
        debug_assert!(contacts.windows(2).all(|w| w[0] <= w[1]), "contacts must be sorted");

        let mut row_start = vec![0usize; agent_count + 1];
        for c in contacts {
            row_start[c.susceptible.index() + 1] += 1;
        }
        for i in 0..agent_count {
            row_start[i + 1] += row_start[i];
        }
        let infected = contacts.iter().map(|c| c.infected).collect();
        Self { row_start, infected }
    }

    /// Infectious agents in contact with `agent` this step, ascending.
    #[inline]
    pub fn of(&self, agent: AgentId) -> &[AgentId] {
        let i = agent.index();
        if i + 1 >= self.row_start.len() {
            return &[];
        }
        &self.infected[self.row_start[i]..self.row_start[i + 1]]
    }

    /// Total number of contact pairs.
    #[inline]
    pub fn pair_count(&self) -> usize {
        self.infected.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.infected.is_empty()
    }
}
