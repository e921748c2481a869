/*!
 * First-Come-First-Served
 * Non-preemptive, ordered by arrival
 */

use super::run_to_completion;
use crate::process::entry::arrival_order;
use crate::process::Entry;
use crate::scheduler::recorder::Recorder;
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::AlgorithmKind;

#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Fcfs
    }

    fn schedule(&self, entries: &mut [Entry], recorder: &mut Recorder) {
        let mut clock = 0;
        for i in arrival_order(entries) {
            // Idle gaps are skipped inside run_to_completion
            clock = run_to_completion(entries, i, clock, recorder);
        }
    }
}
