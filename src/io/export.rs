/*!
 * Metrics Export
 * Write per-process metrics as CSV or JSON
 */

use super::{FileFormat, IoError, IoResult};
use crate::core::types::Tick;
use crate::scheduler::ProcessMetrics;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Exported row shape
#[derive(Serialize)]
struct MetricsRow<'a> {
    #[serde(rename = "PID")]
    id: &'a str,
    #[serde(rename = "Waiting")]
    waiting: Tick,
    #[serde(rename = "Turnaround")]
    turnaround: Tick,
    #[serde(rename = "Response")]
    response: Tick,
}

impl<'a> From<&'a ProcessMetrics> for MetricsRow<'a> {
    fn from(m: &'a ProcessMetrics) -> Self {
        Self {
            id: &m.id,
            waiting: m.waiting,
            turnaround: m.turnaround,
            response: m.response,
        }
    }
}

/// Save metrics to a `.csv` or `.json` file
pub fn save_metrics(path: impl AsRef<Path>, metrics: &[ProcessMetrics]) -> IoResult<()> {
    let path = path.as_ref();
    let format = FileFormat::from_path(path)?;
    let file = File::create(path).map_err(|e| IoError::access(path, e))?;
    let mut writer = BufWriter::new(file);

    match format {
        FileFormat::Csv => write_metrics_csv(&mut writer, metrics)?,
        FileFormat::Json => write_metrics_json(&mut writer, metrics)?,
    }
    writer.flush().map_err(|e| IoError::access(path, e))?;

    info!(path = %path.display(), rows = metrics.len(), "Saved metrics");
    Ok(())
}

/// Write `PID,Waiting,Turnaround,Response` rows
///
/// Ids containing commas, quotes or line breaks are quoted.
pub fn write_metrics_csv<W: Write>(writer: &mut W, metrics: &[ProcessMetrics]) -> IoResult<()> {
    let mut out = WriterBuilder::new().has_headers(false).from_writer(writer);

    out.write_record(["PID", "Waiting", "Turnaround", "Response"])
        .map_err(write_error)?;
    for m in metrics {
        out.serialize(MetricsRow::from(m)).map_err(write_error)?;
    }
    out.flush().map_err(|e| write_error(e.into()))?;
    Ok(())
}

fn write_error(err: csv::Error) -> IoError {
    IoError::Access {
        path: "<writer>".to_string(),
        message: err.to_string(),
    }
}

/// Write a pretty-printed JSON array of metric rows
pub fn write_metrics_json<W: Write>(writer: &mut W, metrics: &[ProcessMetrics]) -> IoResult<()> {
    let rows: Vec<MetricsRow<'_>> = metrics.iter().map(MetricsRow::from).collect();
    serde_json::to_writer_pretty(writer, &rows)?;
    Ok(())
}
