//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `results` and `positions`.

use std::path::Path;

use rusqlite::Connection;

use crate::row::check_name;
use crate::writer::OutputWriter;
use crate::{OutputResult, PositionRow, SeriesRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS results (
                 step        INTEGER PRIMARY KEY,
                 time        REAL    NOT NULL,
                 susceptible INTEGER NOT NULL,
                 infected    INTEGER NOT NULL,
                 recovered   INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS positions (
                 snapshot TEXT    NOT NULL,
                 agent_id INTEGER NOT NULL,
                 x        REAL    NOT NULL,
                 y        REAL    NOT NULL,
                 state    TEXT    NOT NULL,
                 PRIMARY KEY (snapshot, agent_id)
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_series(&mut self, rows: &[SeriesRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO results (step, time, susceptible, infected, recovered) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.step as i64,
                    row.time,
                    row.susceptible as i64,
                    row.infected as i64,
                    row.recovered as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_positions(&mut self, name: &str, rows: &[PositionRow]) -> OutputResult<()> {
        check_name(name)?;
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO positions (snapshot, agent_id, x, y, state) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    name,
                    row.agent_id,
                    row.x,
                    row.y,
                    row.state.as_str(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
