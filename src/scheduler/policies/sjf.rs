/*!
 * Shortest-Job-First
 * Non-preemptive, smallest burst among arrived processes
 */

use super::run_to_completion;
use crate::process::entry::next_arrival;
use crate::process::Entry;
use crate::scheduler::recorder::Recorder;
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::AlgorithmKind;
use tracing::trace;

#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Sjf
    }

    fn schedule(&self, entries: &mut [Entry], recorder: &mut Recorder) {
        let mut clock = 0;
        let mut pending: Vec<usize> = (0..entries.len()).collect();

        while !pending.is_empty() {
            // Ties: earlier arrival, then input order
            let pick = pending
                .iter()
                .enumerate()
                .filter(|(_, &i)| entries[i].has_arrived(clock))
                .min_by_key(|(_, &i)| (entries[i].burst, entries[i].arrival, entries[i].index))
                .map(|(pos, &i)| (pos, i));

            match pick {
                Some((pos, i)) => {
                    pending.remove(pos);
                    clock = run_to_completion(entries, i, clock, recorder);
                }
                None => {
                    let next = next_arrival(entries, clock).unwrap_or(clock + 1);
                    trace!(from = clock, to = next, "cpu idle");
                    clock = next;
                }
            }
        }
    }
}
