//! R-tree detector backed by `rstar`.
//!
//! The infectious snapshot is bulk-loaded into a fresh tree each step and
//! every susceptible agent runs one `locate_within_distance` query.  Leaf
//! distances go through the same `dx² + dy²` expression as
//! [`Point::distance_sq`], so the result set matches the brute-force scan.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use sir_core::AgentId;

use crate::{Contact, ContactDetector, ContactQuery};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: an `[x, y]` point with the owning agent.
#[derive(Clone, Debug)]
struct InfectiousEntry {
    point: [f64; 2],
    id:    AgentId,
}

impl RTreeObject for InfectiousEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for InfectiousEntry {
    /// Squared Euclidean distance, query point first to match
    /// `ContactQuery::in_contact`.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = point[0] - self.point[0];
        let dy = point[1] - self.point[1];
        dx * dx + dy * dy
    }
}

// ── RTreeDetector ─────────────────────────────────────────────────────────────

/// Contact detector that indexes infectious agents in an R-tree.
#[derive(Default)]
pub struct RTreeDetector {
    /// Last tree built; kept so callers can inspect its size in tests.
    tree: RTree<InfectiousEntry>,
}

impl RTreeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of infectious agents indexed by the last `detect` call.
    pub fn indexed(&self) -> usize {
        self.tree.size()
    }
}

impl ContactDetector for RTreeDetector {
    fn detect(&mut self, query: &ContactQuery<'_>, out: &mut Vec<Contact>) {
        let entries: Vec<InfectiousEntry> = query
            .infectious
            .iter()
            .map(|&id| InfectiousEntry { point: query.positions[id.index()].to_array(), id })
            .collect();
        self.tree = RTree::bulk_load(entries);

        let r_sq = query.radius_sq();
        for &s in query.susceptible {
            let origin = query.positions[s.index()].to_array();
            for hit in self.tree.locate_within_distance(origin, r_sq) {
                out.push(Contact { susceptible: s, infected: hit.id });
            }
        }
    }
}
