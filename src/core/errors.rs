/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export IoError from io module
pub use crate::io::IoError;

/// Configuration errors, raised before a simulation starts
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Invalid quantum {name}={value}: must be greater than zero")]
    #[diagnostic(
        code(config::non_positive_quantum),
        help("Every time quantum (RR quantum, MLFQ per-level quanta) must be a positive integer.")
    )]
    NonPositiveQuantum { name: String, value: i64 },

    #[error("Expected {expected} MLFQ quanta, got {found}")]
    #[diagnostic(
        code(config::level_count),
        help("MLFQ has a fixed number of levels; pass one quantum per level, e.g. 2,4,8.")
    )]
    LevelCount { expected: usize, found: usize },

    #[error("Unknown algorithm '{0}'")]
    #[diagnostic(
        code(config::unknown_algorithm),
        help("Valid algorithms: fcfs, sjf, srt, rr, mlfq.")
    )]
    UnknownAlgorithm(String),
}

/// Process list errors, raised before a simulation starts
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum InputError {
    #[error("Process list is empty")]
    #[diagnostic(
        code(input::empty_process_list),
        help("Add at least one process before running a simulation.")
    )]
    EmptyProcessList,

    #[error("Duplicate process id '{0}'")]
    #[diagnostic(
        code(input::duplicate_id),
        help("Process ids must be unique within a simulation run.")
    )]
    DuplicateId(Pid),

    #[error("Process at position {index} has an empty id")]
    #[diagnostic(code(input::empty_id))]
    EmptyId { index: usize },

    #[error("Process '{id}' has non-positive burst time {burst}")]
    #[diagnostic(
        code(input::non_positive_burst),
        help("Burst time is the CPU time a process needs and must be at least 1.")
    )]
    NonPositiveBurst { id: Pid, burst: i64 },

    #[error("Process '{id}' has negative arrival time {arrival}")]
    #[diagnostic(
        code(input::negative_arrival),
        help("Arrival times start at 0.")
    )]
    NegativeArrival { id: Pid, arrival: i64 },

    #[error("Latest arrival plus total burst time exceeds the tick range")]
    #[diagnostic(
        code(input::horizon_overflow),
        help("Reduce arrival or burst times so the whole run fits in a 64-bit clock.")
    )]
    HorizonOverflow,
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    #[diagnostic(transparent)]
    Input(#[from] InputError),
}

impl SimulationError {
    /// True for configuration failures (bad quantum, unknown selector)
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// True for process list failures
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}
