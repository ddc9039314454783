//! `sir-sim`: the timestep loop of the contagion simulator.
//!
//! # Step pipeline
//!
//! ```text
//! record counts at t = 0
//! for step in 1..=T:
//!   ① Motion      : MotionModel::advance_all (bounce at the walls).
//!   ② Snapshot    : ids of every Infected agent, fixed for this step.
//!   ③ Contacts    : ContactDetector over (susceptible × snapshot), r² test.
//!   ④ Transmission: per susceptible agent, one Bernoulli(p) per contact in
//!                  ascending infector order, stopping at the first success
//!                  (parallel with the `parallel` feature).
//!   ⑤ Apply       : newly infected agents get clock 0 and a threshold.
//!   ⑥ Recovery    : snapshot agents advance their clock by `time_step`.
//!   ⑦ Record      : append (step, time, S, I, R).
//! ```
//!
//! An agent infected in step `t` neither transmits nor progresses until
//! step `t + 1`.  The loop always runs the full `T` steps.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                |
//! |------------|-------------------------------------------------------|
//! | `parallel` | Runs the transmission pass on Rayon's thread pool.    |
//!
//! # Quick-start
//!
//! ```rust
//! use sir_core::Parameters;
//!
//! let report = sir_sim::simulate(Parameters::default()).unwrap();
//! assert_eq!(report.series.len(), 51);
//! assert_eq!(report.series.first().unwrap().counts.infected, 1);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod record;
pub mod report;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use record::{SirRecord, TimeSeries};
pub use report::SimReport;
pub use sim::{simulate, Sim, StepOutcome};
pub use snapshot::{PositionEntry, PositionSnapshot};
