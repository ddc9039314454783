//! Runtime selection of a contact detector.

use std::fmt;
use std::str::FromStr;

use crate::{BruteForce, Contact, ContactDetector, ContactQuery, RTreeDetector, UniformGrid};

/// Which detector a run uses.  All strategies produce identical contacts;
/// they differ only in cost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContactStrategy {
    BruteForce,
    #[default]
    Grid,
    RTree,
}

impl ContactStrategy {
    /// Construct a fresh detector for this strategy.
    pub fn detector(self) -> Detector {
        match self {
            ContactStrategy::BruteForce => Detector::BruteForce(BruteForce),
            ContactStrategy::Grid       => Detector::Grid(UniformGrid::new()),
            ContactStrategy::RTree      => Detector::RTree(RTreeDetector::new()),
        }
    }
}

impl fmt::Display for ContactStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContactStrategy::BruteForce => "brute_force",
            ContactStrategy::Grid       => "grid",
            ContactStrategy::RTree      => "r_tree",
        };
        f.write_str(s)
    }
}

impl FromStr for ContactStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "brute_force" | "brute" => Ok(ContactStrategy::BruteForce),
            "grid"                  => Ok(ContactStrategy::Grid),
            "r_tree" | "rtree"      => Ok(ContactStrategy::RTree),
            other => Err(format!(
                "unknown contact strategy {other:?}: expected \"brute_force\", \"grid\", or \"r_tree\""
            )),
        }
    }
}

/// Enum-dispatched detector chosen at runtime from a [`ContactStrategy`].
pub enum Detector {
    BruteForce(BruteForce),
    Grid(UniformGrid),
    RTree(RTreeDetector),
}

impl Default for Detector {
    fn default() -> Self {
        ContactStrategy::default().detector()
    }
}

impl ContactDetector for Detector {
    fn detect(&mut self, query: &ContactQuery<'_>, out: &mut Vec<Contact>) {
        match self {
            Detector::BruteForce(d) => d.detect(query, out),
            Detector::Grid(d)       => d.detect(query, out),
            Detector::RTree(d)      => d.detect(query, out),
        }
    }
}
