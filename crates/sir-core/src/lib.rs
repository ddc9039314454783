//! `sir-core`: foundational types for the `contagion` SIR simulator.
//!
//! This crate is a dependency of every other `sir-*` crate.  It has no
//! `sir-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Point`, `Domain`, squared-distance helpers           |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `AgentRng`, one independent stream per agent          |
//! | [`params`]      | `Parameters`, `RecoveryModel`, validation             |
//! | [`error`]       | `SirError`, `SirResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types   |
//! |         | (required by the CLI's TOML configuration loader).         |

pub mod error;
pub mod geo;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SirError, SirResult};
pub use geo::{Domain, Point};
pub use ids::AgentId;
pub use params::{Parameters, RecoveryModel};
pub use rng::AgentRng;
pub use time::{SimClock, Tick};
