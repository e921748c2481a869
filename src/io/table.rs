/*!
 * Metrics Table
 * Fixed-width text table of per-process results
 */

use crate::scheduler::SimulationResult;
use std::fmt::Write;

const HEADERS: [&str; 4] = ["PID", "Waiting", "Turnaround", "Response"];

/// Render per-process metrics followed by their averages
pub fn render_metrics_table(result: &SimulationResult) -> String {
    let id_width = result
        .metrics
        .iter()
        .map(|m| m.id.chars().count())
        .chain(std::iter::once(HEADERS[0].len()))
        .chain(std::iter::once("Average".len()))
        .max()
        .unwrap_or(HEADERS[0].len());

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "{:<id_width$}  {:>10}  {:>10}  {:>10}",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        HEADERS[3],
        id_width = id_width
    );
    let _ = writeln!(out, "{}", "-".repeat(id_width + 36));

    for m in &result.metrics {
        let _ = writeln!(
            out,
            "{:<id_width$}  {:>10}  {:>10}  {:>10}",
            m.id,
            m.waiting,
            m.turnaround,
            m.response,
            id_width = id_width
        );
    }

    let stats = &result.stats;
    let _ = writeln!(out, "{}", "-".repeat(id_width + 36));
    let _ = write!(
        out,
        "{:<id_width$}  {:>10.2}  {:>10.2}  {:>10.2}",
        "Average",
        stats.avg_waiting,
        stats.avg_turnaround,
        stats.avg_response,
        id_width = id_width
    );
    out
}
