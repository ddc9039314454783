//! `sir-spatial`: proximity contact detection.
//!
//! Given the positions of all agents, the susceptible agents, and the
//! infectious snapshot for the current step, a [`ContactDetector`] returns
//! every `(susceptible, infected)` pair with `dx² + dy² ≤ r²`.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`contact`]  | `Contact`, `ContactQuery`, `ContactList` (CSR), `ContactDetector` |
//! | [`brute`]    | `BruteForce`: the O(S·I) reference semantics              |
//! | [`grid`]     | `UniformGrid`: hash grid with cell size ≥ r               |
//! | [`rtree`]    | `RTreeDetector`: `rstar` bulk-loaded per step              |
//! | [`strategy`] | `ContactStrategy`, `Detector` (runtime selection)           |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                          |
//!
//! The brute-force scan is the definition; the grid and R-tree are
//! accelerators that must return exactly the same pairs for every layout.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for grid cell lookup.            |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `ContactStrategy`.    |

pub mod brute;
pub mod contact;
pub mod error;
pub mod grid;
pub mod rtree;
pub mod strategy;


pub use brute::BruteForce;
pub use contact::{Contact, ContactDetector, ContactList, ContactQuery};
pub use error::{SpatialError, SpatialResult};
pub use grid::UniformGrid;
pub use rtree::RTreeDetector;
pub use strategy::{ContactStrategy, Detector};
