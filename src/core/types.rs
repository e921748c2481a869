/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process identifier
///
/// Opaque label supplied by the caller. Used for display and grouping only,
/// never for ordering.
pub type Pid = String;

/// Simulated time in discrete ticks
pub type Tick = u64;

/// Priority value carried through from the input (unused by the built-in policies)
pub type Priority = i64;

/// Common result type for simulation operations
pub type SimResult<T> = Result<T, super::errors::SimulationError>;
