//! CSV output backend.
//!
//! Creates files in the configured output directory:
//! - `results.csv`: `step,time,susceptible,infected,recovered`
//! - `<name>.csv` per position snapshot: `agent_id,x,y,state`

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::row::check_name;
use crate::writer::OutputWriter;
use crate::{OutputResult, PositionRow, SeriesRow};

const SERIES_HEADER: [&str; 5] = ["step", "time", "susceptible", "infected", "recovered"];
const POSITION_HEADER: [&str; 4] = ["agent_id", "x", "y", "state"];

/// Writes simulation output to CSV files.
pub struct CsvWriter {
    dir:      PathBuf,
    series:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `results.csv` in `dir` and write its header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut series = Writer::from_path(dir.join("results.csv"))?;
        series.write_record(SERIES_HEADER)?;

        Ok(Self {
            dir: dir.to_path_buf(),
            series,
            finished: false,
        })
    }

    /// Path a snapshot called `name` is written to.
    pub fn positions_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.csv"))
    }
}

impl OutputWriter for CsvWriter {
    fn write_series(&mut self, rows: &[SeriesRow]) -> OutputResult<()> {
        for row in rows {
            self.series.write_record(&[
                row.step.to_string(),
                row.time.to_string(),
                row.susceptible.to_string(),
                row.infected.to_string(),
                row.recovered.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_positions(&mut self, name: &str, rows: &[PositionRow]) -> OutputResult<()> {
        check_name(name)?;
        let mut w = Writer::from_path(self.positions_path(name))?;
        w.write_record(POSITION_HEADER)?;
        for row in rows {
            w.write_record(&[
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.state.as_str().to_owned(),
            ])?;
        }
        w.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.series.flush()?;
        Ok(())
    }
}
