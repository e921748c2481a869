/*!
 * Run Recorder
 * Append-only timeline and metrics collection for a single run
 */

use super::metrics::ProcessMetrics;
use super::types::Segment;
use crate::core::types::{Pid, Tick};
use crate::process::Entry;
use tracing::{debug, trace};

/// Collects segments, completed-process metrics, and dispatch counters
///
/// Policies either emit whole segments ([`Recorder::segment`]) or open a
/// segment and close it later ([`Recorder::open`] / [`Recorder::close`]) so
/// that consecutive units run by the same process coalesce into one record.
#[derive(Debug, Default)]
pub struct Recorder {
    segments: Vec<Segment>,
    metrics: Vec<ProcessMetrics>,
    open: Option<(Pid, Tick)>,
    dispatches: u64,
    preemptions: u64,
}

impl Recorder {
    pub fn with_capacity(processes: usize) -> Self {
        Self {
            segments: Vec::with_capacity(processes),
            metrics: Vec::with_capacity(processes),
            ..Self::default()
        }
    }

    /// Emit a complete segment for one dispatch
    pub fn segment(&mut self, id: &str, start: Tick, end: Tick) {
        self.dispatches += 1;
        self.push(id, start, end);
    }

    /// Open a segment at `at`, closing any segment still open
    pub fn open(&mut self, id: &str, at: Tick) {
        self.close(at);
        self.dispatches += 1;
        self.open = Some((id.to_string(), at));
    }

    /// Close the open segment at `at` (no-op if none is open)
    pub fn close(&mut self, at: Tick) {
        if let Some((id, start)) = self.open.take() {
            self.push(&id, start, at);
        }
    }

    /// Note that the running process left the CPU with work remaining
    pub fn preempted(&mut self, entry: &Entry, at: Tick) {
        self.preemptions += 1;
        trace!(pid = %entry.id, at, remaining = entry.remaining, "preempted");
    }

    /// Record the metrics of a terminated process
    pub fn complete(&mut self, entry: &Entry) {
        if let Some(metrics) = ProcessMetrics::from_entry(entry) {
            debug!(
                pid = %metrics.id,
                completion = metrics.completion,
                waiting = metrics.waiting,
                turnaround = metrics.turnaround,
                response = metrics.response,
                "process completed"
            );
            self.metrics.push(metrics);
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consume the recorder; any open segment must already be closed
    pub fn finish(self) -> (Vec<Segment>, Vec<ProcessMetrics>, u64, u64) {
        debug_assert!(self.open.is_none(), "segment left open at end of run");
        (self.segments, self.metrics, self.dispatches, self.preemptions)
    }

    fn push(&mut self, id: &str, start: Tick, end: Tick) {
        if end <= start {
            return;
        }
        trace!(pid = %id, start, end, "segment");
        self.segments.push(Segment::new(id, start, end));
    }
}
