/*!
 * Simulator
 * Validates input, runs the selected policy, and packages the result
 */

use super::metrics::{ProcessMetrics, SimulationStats};
use super::policies::{Fcfs, Mlfq, RoundRobin, Sjf, Srt};
use super::recorder::Recorder;
use super::traits::SchedulingPolicy;
use super::types::{Algorithm, AlgorithmKind, Segment};
use crate::core::types::SimResult;
use crate::process::{validate_processes, Entry, ProcessSpec};
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, info};

/// Output of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub algorithm: AlgorithmKind,
    /// Execution timeline, sorted by start and non-overlapping
    pub segments: Vec<Segment>,
    /// Per-process metrics in completion order
    pub metrics: Vec<ProcessMetrics>,
    pub stats: SimulationStats,
}

impl SimulationResult {
    /// Metrics for one process
    pub fn metrics_for(&self, id: &str) -> Option<&ProcessMetrics> {
        self.metrics.iter().find(|m| m.id == id)
    }

    /// All segments run by one process, in time order
    pub fn segments_for<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Segment> + 'a {
        self.segments.iter().filter(move |s| s.id == id)
    }
}

/// Simulate `algorithm` over `processes`
///
/// The input slice is never mutated: each call builds and discards its own
/// working set. Fails before any scheduling happens if the process list is
/// invalid.
pub fn simulate(algorithm: &Algorithm, processes: &[ProcessSpec]) -> SimResult<SimulationResult> {
    validate_processes(processes)?;

    let kind = algorithm.kind();
    let span = debug_span!(
        "simulate",
        algorithm = %kind,
        preemptive = kind.is_preemptive(),
        processes = processes.len()
    );
    let _enter = span.enter();

    let mut entries = Entry::working_set(processes);
    let mut recorder = Recorder::with_capacity(entries.len());

    // Closed set of policies, dispatched statically
    match *algorithm {
        Algorithm::Fcfs => run_policy(Fcfs, &mut entries, &mut recorder),
        Algorithm::Sjf => run_policy(Sjf, &mut entries, &mut recorder),
        Algorithm::Srt => run_policy(Srt, &mut entries, &mut recorder),
        Algorithm::RoundRobin { quantum } => {
            run_policy(RoundRobin::new(quantum), &mut entries, &mut recorder)
        }
        Algorithm::Mlfq { quanta } => run_policy(Mlfq::new(quanta), &mut entries, &mut recorder),
    }

    let (segments, metrics, dispatches, preemptions) = recorder.finish();
    let stats = SimulationStats::from_run(&segments, &metrics, dispatches, preemptions);

    info!(
        algorithm = %kind,
        processes = metrics.len(),
        segments = segments.len(),
        makespan = stats.makespan,
        avg_waiting = stats.avg_waiting,
        avg_turnaround = stats.avg_turnaround,
        "Simulation complete"
    );

    Ok(SimulationResult {
        algorithm: kind,
        segments,
        metrics,
        stats,
    })
}

fn run_policy<P: SchedulingPolicy>(policy: P, entries: &mut [Entry], recorder: &mut Recorder) {
    debug!(policy = %policy.kind(), "Running policy");
    policy.schedule(entries, recorder);
}

/// Reusable handle bound to one configured algorithm
///
/// Holds no per-run state, so one instance can serve concurrent callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator {
    algorithm: Algorithm,
}

impl Simulator {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }

    pub fn run(&self, processes: &[ProcessSpec]) -> SimResult<SimulationResult> {
        simulate(&self.algorithm, processes)
    }
}
