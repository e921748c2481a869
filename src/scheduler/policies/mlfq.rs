/*!
 * Multi-Level Feedback Queue
 * Three fixed levels; quantum expiry demotes, the last level runs to completion
 */

use crate::process::entry::arrival_order;
use crate::process::Entry;
use crate::scheduler::recorder::Recorder;
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::{AlgorithmKind, MlfqQuanta, MLFQ_LEVELS};
use std::collections::VecDeque;
use tracing::trace;

const LAST_LEVEL: usize = MLFQ_LEVELS - 1;

#[derive(Debug, Clone, Copy)]
pub struct Mlfq {
    quanta: MlfqQuanta,
}

impl Mlfq {
    pub fn new(quanta: MlfqQuanta) -> Self {
        Self { quanta }
    }
}

impl SchedulingPolicy for Mlfq {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Mlfq
    }

    fn schedule(&self, entries: &mut [Entry], recorder: &mut Recorder) {
        let mut levels: [VecDeque<usize>; MLFQ_LEVELS] = Default::default();
        levels[0] = arrival_order(entries).into();
        let mut clock = 0;

        // All processes are preloaded, so an empty scan means all are done.
        // Not-yet-arrived heads move the clock forward to their arrival.
        while let Some((level, i)) = pop_highest(&mut levels) {
            let entry = &mut entries[i];
            let start = clock.max(entry.arrival);
            let slice = if level < LAST_LEVEL {
                self.quanta.level(level).get()
            } else {
                entry.remaining
            };

            entry.dispatch(start);
            let end = start + entry.run_for(slice);
            recorder.segment(&entry.id, start, end);
            clock = end;

            if entry.release(clock) {
                recorder.complete(entry);
            } else {
                let next = (level + 1).min(LAST_LEVEL);
                trace!(pid = %entry.id, from = level, to = next, "demoted");
                recorder.preempted(entry, clock);
                levels[next].push_back(i);
            }
        }
    }
}

/// Pop the head of the first non-empty level, scanning from level 0
fn pop_highest(levels: &mut [VecDeque<usize>; MLFQ_LEVELS]) -> Option<(usize, usize)> {
    levels
        .iter_mut()
        .enumerate()
        .find_map(|(level, queue)| queue.pop_front().map(|i| (level, i)))
}
