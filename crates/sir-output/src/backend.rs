//! Runtime backend selection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::{CsvWriter, OutputResult, OutputWriter};

/// Which writer a run's results go to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Csv,
    Sqlite,
    Parquet,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Csv     => "csv",
            Backend::Sqlite  => "sqlite",
            Backend::Parquet => "parquet",
        }
    }

    /// Whether this backend was compiled in.
    pub fn is_available(self) -> bool {
        match self {
            Backend::Csv     => true,
            Backend::Sqlite  => cfg!(feature = "sqlite"),
            Backend::Parquet => cfg!(feature = "parquet"),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv"     => Ok(Backend::Csv),
            "sqlite"  => Ok(Backend::Sqlite),
            "parquet" => Ok(Backend::Parquet),
            other => Err(format!(
                "unknown output backend {other:?}: expected \"csv\", \"sqlite\", or \"parquet\""
            )),
        }
    }
}

/// Open a writer for `backend` rooted at `dir`.
///
/// # Errors
/// [`OutputError::BackendUnavailable`] if the backend's Cargo feature is
/// off, or whatever the backend's constructor reports.
pub fn open_writer(backend: Backend, dir: &Path) -> OutputResult<Box<dyn OutputWriter>> {
    match backend {
        Backend::Csv => Ok(Box::new(CsvWriter::new(dir)?)),

        #[cfg(feature = "sqlite")]
        Backend::Sqlite => Ok(Box::new(crate::SqliteWriter::new(dir)?)),
        #[cfg(not(feature = "sqlite"))]
        Backend::Sqlite => Err(crate::OutputError::BackendUnavailable("sqlite")),

        #[cfg(feature = "parquet")]
        Backend::Parquet => Ok(Box::new(crate::ParquetWriter::new(dir)?)),
        #[cfg(not(feature = "parquet"))]
        Backend::Parquet => Err(crate::OutputError::BackendUnavailable("parquet")),
    }
}
