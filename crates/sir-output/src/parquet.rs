//! Parquet output backend (feature `parquet`).
//!
//! Creates files in the configured output directory:
//! - `results.parquet`
//! - `<name>.parquet` per position snapshot

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Float64Builder, StringBuilder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::row::check_name;
use crate::writer::OutputWriter;
use crate::{OutputResult, PositionRow, SeriesRow};

fn series_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("step",        DataType::UInt64,  false),
        Field::new("time",        DataType::Float64, false),
        Field::new("susceptible", DataType::UInt64,  false),
        Field::new("infected",    DataType::UInt64,  false),
        Field::new("recovered",   DataType::UInt64,  false),
    ]))
}

fn position_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("agent_id", DataType::UInt32,  false),
        Field::new("x",        DataType::Float64, false),
        Field::new("y",        DataType::Float64, false),
        Field::new("state",    DataType::Utf8,    false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes simulation output to Parquet files.
///
/// `finish()` **must** be called to write the footer of `results.parquet`;
/// a file written without it cannot be opened by Parquet readers.  Position
/// files are complete as soon as `write_positions` returns.
pub struct ParquetWriter {
    dir:        PathBuf,
    series:     Option<ArrowWriter<File>>,
    ser_schema: Arc<Schema>,
    pos_schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create `results.parquet` in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let ser_schema = series_schema();
        let pos_schema = position_schema();

        let file = File::create(dir.join("results.parquet"))?;
        let series = ArrowWriter::try_new(file, Arc::clone(&ser_schema), Some(snappy_props()))?;

        Ok(Self {
            dir: dir.to_path_buf(),
            series: Some(series),
            ser_schema,
            pos_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_series(&mut self, rows: &[SeriesRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.series.as_mut() else {
            return Ok(());
        };

        let mut steps       = UInt64Builder::new();
        let mut times       = Float64Builder::new();
        let mut susceptible = UInt64Builder::new();
        let mut infected    = UInt64Builder::new();
        let mut recovered   = UInt64Builder::new();

        for row in rows {
            steps.append_value(row.step);
            times.append_value(row.time);
            susceptible.append_value(row.susceptible);
            infected.append_value(row.infected);
            recovered.append_value(row.recovered);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.ser_schema),
            vec![
                Arc::new(steps.finish()),
                Arc::new(times.finish()),
                Arc::new(susceptible.finish()),
                Arc::new(infected.finish()),
                Arc::new(recovered.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_positions(&mut self, name: &str, rows: &[PositionRow]) -> OutputResult<()> {
        check_name(name)?;

        let mut agent_ids = UInt32Builder::new();
        let mut xs        = Float64Builder::new();
        let mut ys        = Float64Builder::new();
        let mut states    = StringBuilder::new();

        for row in rows {
            agent_ids.append_value(row.agent_id);
            xs.append_value(row.x);
            ys.append_value(row.y);
            states.append_value(row.state.as_str());
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.pos_schema),
            vec![
                Arc::new(agent_ids.finish()),
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
                Arc::new(states.finish()),
            ],
        )?;

        let file = File::create(self.dir.join(format!("{name}.parquet")))?;
        let mut writer = ArrowWriter::try_new(file, Arc::clone(&self.pos_schema), Some(snappy_props()))?;
        writer.write(&batch)?;
        writer.close()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.series.take() {
            w.close()?;
        }
        Ok(())
    }
}
