/*!
 * Scheduling Metrics
 * Per-process timing derivation and run-level statistics
 */

use super::types::Segment;
use crate::core::types::{Pid, Tick};
use crate::process::Entry;
use serde::{Deserialize, Serialize};

/// Finalized timing metrics for one process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub id: Pid,
    pub arrival: Tick,
    pub burst: Tick,
    pub start: Tick,
    pub completion: Tick,
    pub waiting: Tick,
    pub turnaround: Tick,
    pub response: Tick,
}

/// Derive `(waiting, turnaround, response)` for a completed process
///
/// - turnaround = completion - arrival
/// - waiting    = turnaround - burst
/// - response   = start - arrival
///
/// Every policy goes through this function.
#[inline]
pub const fn derive(
    arrival: Tick,
    burst: Tick,
    start: Tick,
    completion: Tick,
) -> (Tick, Tick, Tick) {
    let turnaround = completion - arrival;
    let waiting = turnaround - burst;
    let response = start - arrival;
    (waiting, turnaround, response)
}

impl ProcessMetrics {
    /// Metrics for a terminated entry, `None` if it has not completed
    pub fn from_entry(entry: &Entry) -> Option<Self> {
        let start = entry.start?;
        let completion = entry.completion?;
        let (waiting, turnaround, response) =
            derive(entry.arrival, entry.burst, start, completion);
        Some(Self {
            id: entry.id.clone(),
            arrival: entry.arrival,
            burst: entry.burst,
            start,
            completion,
            waiting,
            turnaround,
            response,
        })
    }
}

/// Aggregate statistics for one simulation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Number of times a process was given the CPU
    pub dispatches: u64,
    /// Number of times a process left the CPU with work remaining
    pub preemptions: u64,
    /// Adjacent segments belonging to different processes
    pub context_switches: u64,
    /// End of the last segment
    pub makespan: Tick,
    /// Ticks in [0, makespan) where no process was running
    pub idle_time: Tick,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
}

impl SimulationStats {
    /// Derive run statistics from the finished timeline and metrics
    pub fn from_run(
        segments: &[Segment],
        metrics: &[ProcessMetrics],
        dispatches: u64,
        preemptions: u64,
    ) -> Self {
        let makespan = segments.last().map(|s| s.end).unwrap_or(0);
        let busy: Tick = segments.iter().map(Segment::duration).sum();
        let context_switches = segments
            .windows(2)
            .filter(|pair| pair[0].id != pair[1].id)
            .count() as u64;

        let average = |f: fn(&ProcessMetrics) -> Tick| -> f64 {
            if metrics.is_empty() {
                0.0
            } else {
                metrics.iter().map(|m| f(m) as f64).sum::<f64>() / metrics.len() as f64
            }
        };

        Self {
            dispatches,
            preemptions,
            context_switches,
            makespan,
            idle_time: makespan.saturating_sub(busy),
            avg_waiting: average(|m| m.waiting),
            avg_turnaround: average(|m| m.turnaround),
            avg_response: average(|m| m.response),
        }
    }

    /// Fraction of the makespan during which the CPU was busy
    pub fn utilization(&self) -> f64 {
        if self.makespan == 0 {
            0.0
        } else {
            (self.makespan - self.idle_time) as f64 / self.makespan as f64
        }
    }
}
