//! Writing a finished [`SimReport`] through any backend.

use sir_sim::SimReport;
use tracing::info;

use crate::{OutputResult, OutputWriter, PositionRow, SeriesRow};

/// Write `report` to `writer`: the time series, the `initial` and `final`
/// snapshots, every interval snapshot as `positions_<step>`, then
/// [`finish`](OutputWriter::finish).
///
/// Stops at the first failing write.  The report itself is never modified,
/// so a failed write can be retried with another writer.
pub fn write_report<W: OutputWriter + ?Sized>(writer: &mut W, report: &SimReport) -> OutputResult<()> {
    writer.write_series(&SeriesRow::from_series(&report.series))?;
    writer.write_positions("initial", &PositionRow::from_snapshot(&report.initial_positions))?;
    writer.write_positions("final", &PositionRow::from_snapshot(&report.final_positions))?;
    for snap in &report.snapshots {
        let name = format!("positions_{}", snap.step.0);
        writer.write_positions(&name, &PositionRow::from_snapshot(snap))?;
    }
    writer.finish()?;

    info!(
        records = report.series.len(),
        snapshots = report.snapshots.len() + 2,
        "results written"
    );
    Ok(())
}
