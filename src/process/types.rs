/*!
 * Process Types
 * Immutable process descriptors and lifecycle state
 */

use crate::core::serde::{is_zero_i64, string_or_number};
use crate::core::types::{Pid, Priority};
use serde::{Deserialize, Serialize};

/// Process descriptor as supplied by the caller
///
/// Fields are signed so that malformed input reaches validation and is
/// reported as an [`InputError`](crate::core::InputError) instead of being
/// rejected by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    #[serde(rename = "PID", alias = "pid", alias = "id", deserialize_with = "string_or_number")]
    pub id: Pid,
    #[serde(rename = "Arrival", alias = "arrival")]
    pub arrival: i64,
    #[serde(rename = "Burst", alias = "burst")]
    pub burst: i64,
    #[serde(
        rename = "Priority",
        alias = "priority",
        default,
        skip_serializing_if = "is_zero_i64"
    )]
    pub priority: Priority,
}

impl ProcessSpec {
    /// Create a descriptor with the default priority (0)
    pub fn new(id: impl Into<Pid>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Set priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Process lifecycle state during a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Arrival time not yet reached
    NotArrived,
    /// Eligible to run, waiting for the CPU
    Ready,
    /// Currently holding the CPU
    Running,
    /// All burst time consumed
    Terminated,
}

impl ProcessState {
    /// Check whether `self -> next` is a legal lifecycle transition
    pub const fn can_transition_to(self, next: ProcessState) -> bool {
        matches!(
            (self, next),
            (Self::NotArrived, Self::Ready)
                | (Self::NotArrived, Self::Running)
                | (Self::Ready, Self::Running)
                | (Self::Running, Self::Ready)
                | (Self::Running, Self::Terminated)
        )
    }
}
