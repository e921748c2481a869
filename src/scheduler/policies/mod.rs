/*!
 * Scheduling Policies
 * One module per algorithm, all sharing the recorder and metric derivation
 */

mod fcfs;
mod mlfq;
mod round_robin;
mod sjf;
mod srt;

pub use fcfs::Fcfs;
pub use mlfq::Mlfq;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srt::Srt;

use super::recorder::Recorder;
use crate::core::types::Tick;
use crate::process::Entry;

/// Run `entries[i]` from `clock` until it terminates, as a single segment
///
/// Shared by the non-preemptive policies. Returns the completion time.
fn run_to_completion(
    entries: &mut [Entry],
    i: usize,
    clock: Tick,
    recorder: &mut Recorder,
) -> Tick {
    let entry = &mut entries[i];
    let start = clock.max(entry.arrival);
    entry.dispatch(start);
    let end = start + entry.run_for(entry.remaining);
    recorder.segment(&entry.id, start, end);
    entry.release(end);
    recorder.complete(entry);
    end
}
