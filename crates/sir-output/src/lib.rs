//! `sir-output`: result writers for finished contagion runs.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created                                   |
//! |-----------|-------------|-------------------------------------------------|
//! | *(none)*  | CSV         | `results.csv`, one `<name>.csv` per snapshot    |
//! | `sqlite`  | SQLite      | `output.db` (`results`, `positions` tables)     |
//! | `parquet` | Parquet     | `results.parquet`, one `<name>.parquet` per snapshot |
//!
//! All backends implement [`OutputWriter`].  Writers are only ever handed a
//! completed [`SimReport`][sir_sim::SimReport]; nothing here runs inside the
//! step loop, so a failed write never affects the simulation result.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sir_output::{write_report, CsvWriter};
//!
//! let report = sir_sim::simulate(params)?;
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! write_report(&mut writer, &report)?;
//! ```

pub mod backend;
pub mod csv;
pub mod error;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use backend::{open_writer, Backend};
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use report::write_report;
pub use row::{PositionRow, SeriesRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
