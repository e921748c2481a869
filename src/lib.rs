/*!
 * CPU Scheduling Simulator Library
 * Discrete-time simulation of classical CPU scheduling algorithms
 */

pub mod core;
pub mod io;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{ConfigError, InputError, IoError, SimulationError};
pub use crate::core::types::{Pid, Priority, SimResult, Tick};
pub use io::{load_processes, render_gantt, render_metrics_table, save_metrics};
pub use monitoring::init_tracing;
pub use process::{ProcessSpec, ProcessState};
pub use scheduler::{
    simulate, Algorithm, AlgorithmKind, MlfqQuanta, ProcessMetrics, SchedulerParams, Segment,
    SimulationResult, SimulationStats, Simulator, TimeQuantum,
};
