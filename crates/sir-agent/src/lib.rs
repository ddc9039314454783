//! `sir-agent`: Structure-of-Arrays agent storage for the `contagion` simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`health`]      | `Health` state machine, `SirCounts`, recovery thresholds  |
//! | [`store`]       | `AgentStore` (SoA arrays), `AgentRngs` (per-agent RNG)    |
//! | [`builder`]     | `PopulationBuilder` (initial layout from `Parameters`)    |
//!
//! Agents hold no references to one another.  Everything relational (who is
//! in contact with whom) is recomputed from positions each step by
//! `sir-spatial` and thrown away afterwards.

pub mod builder;
pub mod health;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::PopulationBuilder;
pub use health::{draw_recovery_threshold, Health, SirCounts};
pub use store::{AgentRngs, AgentStore};
