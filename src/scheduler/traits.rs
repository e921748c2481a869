/*!
 * Scheduler Traits
 * Interface shared by the scheduling policies
 */

use super::recorder::Recorder;
use super::types::AlgorithmKind;
use crate::process::Entry;

/// A scheduling policy drives a working set to completion
///
/// Implementations receive validated entries in input order and must leave
/// every entry `Terminated`, reporting each dispatch and completion to the
/// recorder. They never fail: configuration and input errors are rejected
/// before a policy runs.
pub trait SchedulingPolicy {
    /// Selector this policy implements
    fn kind(&self) -> AlgorithmKind;

    /// Run the simulation to completion
    fn schedule(&self, entries: &mut [Entry], recorder: &mut Recorder);
}
