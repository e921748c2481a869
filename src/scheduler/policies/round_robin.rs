/*!
 * Round-Robin
 * Preemptive FIFO rotation with a fixed quantum
 */

use crate::process::entry::arrival_order;
use crate::process::Entry;
use crate::scheduler::recorder::Recorder;
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::{AlgorithmKind, TimeQuantum};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: TimeQuantum,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::RoundRobin
    }

    fn schedule(&self, entries: &mut [Entry], recorder: &mut Recorder) {
        // Every process is queued up front in arrival order. Arrivals are not
        // re-checked mid-run: a dispatched process that has not arrived yet
        // moves the clock forward to its arrival.
        let mut queue: VecDeque<usize> = arrival_order(entries).into();
        let mut clock = 0;

        while let Some(i) = queue.pop_front() {
            let entry = &mut entries[i];
            let start = clock.max(entry.arrival);
            entry.dispatch(start);
            let end = start + entry.run_for(self.quantum.get());
            recorder.segment(&entry.id, start, end);
            clock = end;

            if entry.release(clock) {
                recorder.complete(entry);
            } else {
                recorder.preempted(entry, clock);
                queue.push_back(i);
            }
        }
    }
}
