/*!
 * Shortest-Remaining-Time
 * Preemptive, re-evaluated every tick
 */

use crate::process::entry::next_arrival;
use crate::process::Entry;
use crate::scheduler::recorder::Recorder;
use crate::scheduler::traits::SchedulingPolicy;
use crate::scheduler::types::AlgorithmKind;
use tracing::trace;

#[derive(Debug, Clone, Copy, Default)]
pub struct Srt;

impl SchedulingPolicy for Srt {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Srt
    }

    fn schedule(&self, entries: &mut [Entry], recorder: &mut Recorder) {
        let mut clock = 0;
        let mut running: Option<usize> = None;
        let mut left = entries.len();

        while left > 0 {
            // Ties: input order
            let pick = (0..entries.len())
                .filter(|&i| entries[i].is_eligible(clock))
                .min_by_key(|&i| (entries[i].remaining, entries[i].index));

            let Some(i) = pick else {
                recorder.close(clock);
                running = None;
                let next = next_arrival(entries, clock).unwrap_or(clock + 1);
                trace!(from = clock, to = next, "cpu idle");
                clock = next;
                continue;
            };

            if running != Some(i) {
                if let Some(prev) = running {
                    entries[prev].release(clock);
                    recorder.preempted(&entries[prev], clock);
                }
                entries[i].dispatch(clock);
                recorder.open(&entries[i].id, clock);
                running = Some(i);
            }

            entries[i].run_for(1);
            clock += 1;

            if entries[i].is_done() {
                entries[i].release(clock);
                recorder.close(clock);
                recorder.complete(&entries[i]);
                running = None;
                left -= 1;
            }
        }
    }
}
