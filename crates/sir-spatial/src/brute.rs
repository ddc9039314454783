//! All-pairs reference detector.

use crate::{Contact, ContactDetector, ContactQuery};

/// Checks every susceptible agent against every infectious agent.
///
/// O(S · I) per step.  This is the reference every other detector is tested
/// against.
#[derive(Copy, Clone, Debug, Default)]
pub struct BruteForce;

impl ContactDetector for BruteForce {
    fn detect(&mut self, query: &ContactQuery<'_>, out: &mut Vec<Contact>) {
        for &s in query.susceptible {
            for &i in query.infectious {
                if query.in_contact(s, i) {
                    out.push(Contact { susceptible: s, infected: i });
                }
            }
        }
    }
}
