/*!
 * Process Working Copy
 * Mutable per-run simulation state for one process
 */

use super::types::{ProcessSpec, ProcessState};
use crate::core::types::{Pid, Priority, Tick};

/// Working copy of a process owned by a single simulation run
///
/// Created fresh from a validated [`ProcessSpec`] for every run and
/// discarded afterwards. `index` is the position in the caller's list and is
/// the final tie-breaker for every policy.
#[derive(Debug, Clone)]
pub struct Entry {
    pub index: usize,
    pub id: Pid,
    pub arrival: Tick,
    pub burst: Tick,
    pub priority: Priority,
    pub remaining: Tick,
    pub start: Option<Tick>,
    pub completion: Option<Tick>,
    pub state: ProcessState,
}

impl Entry {
    /// Build a working copy from a validated descriptor
    pub fn from_spec(index: usize, spec: &ProcessSpec) -> Self {
        // Validation guarantees arrival >= 0 and burst > 0
        let arrival = spec.arrival.max(0) as Tick;
        let burst = spec.burst.max(1) as Tick;
        Self {
            index,
            id: spec.id.clone(),
            arrival,
            burst,
            priority: spec.priority,
            remaining: burst,
            start: None,
            completion: None,
            state: ProcessState::NotArrived,
        }
    }

    /// Build the full working set for one run, preserving input order
    pub fn working_set(specs: &[ProcessSpec]) -> Vec<Entry> {
        specs
            .iter()
            .enumerate()
            .map(|(index, spec)| Entry::from_spec(index, spec))
            .collect()
    }

    #[inline]
    pub fn has_arrived(&self, now: Tick) -> bool {
        self.arrival <= now
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Eligible to be picked at `now`
    #[inline]
    pub fn is_eligible(&self, now: Tick) -> bool {
        self.has_arrived(now) && !self.is_done()
    }

    /// Give the CPU to this process at `now`
    ///
    /// Records the first-dispatch time exactly once.
    pub fn dispatch(&mut self, now: Tick) {
        debug_assert!(now >= self.arrival, "dispatched before arrival");
        if self.start.is_none() {
            self.start = Some(now);
        }
        self.transition(ProcessState::Running);
    }

    /// Consume up to `units` of CPU time, returning the amount actually run
    pub fn run_for(&mut self, units: Tick) -> Tick {
        let ran = units.min(self.remaining);
        self.remaining -= ran;
        ran
    }

    /// Take the CPU away at `now`
    ///
    /// Returns `true` when the process terminated, in which case `completion`
    /// is set. Otherwise the process goes back to `Ready`.
    pub fn release(&mut self, now: Tick) -> bool {
        if self.is_done() {
            self.completion = Some(now);
            self.transition(ProcessState::Terminated);
            true
        } else {
            self.transition(ProcessState::Ready);
            false
        }
    }

    fn transition(&mut self, next: ProcessState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {:?} -> {:?} for {}",
            self.state,
            next,
            self.id
        );
        self.state = next;
    }
}

/// Indices of `entries` sorted by arrival, ties kept in input order
pub fn arrival_order(entries: &[Entry]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by_key(|&i| entries[i].arrival);
    order
}

/// Earliest arrival strictly after `now` among unfinished processes
pub fn next_arrival(entries: &[Entry], now: Tick) -> Option<Tick> {
    entries
        .iter()
        .filter(|e| !e.is_done() && e.arrival > now)
        .map(|e| e.arrival)
        .min()
}
