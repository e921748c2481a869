/*!
 * Scheduler Module
 * Scheduling algorithms, timeline recording, and metric derivation
 */

pub mod metrics;
pub mod policies;
pub mod recorder;
pub mod simulator;
pub mod traits;
pub mod types;

// Re-export public API
pub use metrics::{derive as derive_metrics, ProcessMetrics, SimulationStats};
pub use policies::{Fcfs, Mlfq, RoundRobin, Sjf, Srt};
pub use recorder::Recorder;
pub use simulator::{simulate, SimulationResult, Simulator};
pub use traits::SchedulingPolicy;
pub use types::{
    Algorithm, AlgorithmKind, MlfqQuanta, SchedulerParams, Segment, TimeQuantum,
    DEFAULT_MLFQ_QUANTA, DEFAULT_QUANTUM, MLFQ_LEVELS,
};
