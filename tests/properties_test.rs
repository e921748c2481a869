/*!
 * Property Tests
 * Invariants that hold for every algorithm on arbitrary process lists
 */

use cpu_sched_sim::{
    simulate, Algorithm, MlfqQuanta, ProcessSpec, SimulationResult, TimeQuantum,
};
use proptest::prelude::*;
use std::collections::HashMap;

fn process_list() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0i64..25, 1i64..12), 1..10).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst))| ProcessSpec::new(format!("P{}", i), arrival, burst))
            .collect()
    })
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Fcfs),
        Just(Algorithm::Sjf),
        Just(Algorithm::Srt),
        (1i64..6).prop_map(|q| Algorithm::RoundRobin {
            quantum: TimeQuantum::new(q).unwrap()
        }),
        (1i64..5, 1i64..7, 1i64..9).prop_map(|(a, b, c)| Algorithm::Mlfq {
            quanta: MlfqQuanta::new(a, b, c).unwrap()
        }),
    ]
}

fn check_invariants(procs: &[ProcessSpec], result: &SimulationResult) -> Result<(), TestCaseError> {
    // Every process completes exactly once
    prop_assert_eq!(result.metrics.len(), procs.len());

    let by_id: HashMap<&str, &ProcessSpec> = procs.iter().map(|p| (p.id.as_str(), p)).collect();

    for m in &result.metrics {
        let spec = by_id[m.id.as_str()];
        prop_assert_eq!(m.arrival as i64, spec.arrival);
        prop_assert_eq!(m.burst as i64, spec.burst);
        prop_assert_eq!(m.turnaround, m.completion - m.arrival);
        prop_assert_eq!(m.waiting, m.turnaround - m.burst);
        prop_assert_eq!(m.response, m.start - m.arrival);
        prop_assert!(m.start >= m.arrival);
        prop_assert!(m.completion >= m.start + m.burst);

        let mine: Vec<_> = result.segments_for(&m.id).collect();
        let ran: u64 = mine.iter().map(|s| s.duration()).sum();
        prop_assert_eq!(ran, m.burst);
        prop_assert_eq!(mine.first().map(|s| s.start), Some(m.start));
        prop_assert_eq!(mine.last().map(|s| s.end), Some(m.completion));
    }

    for seg in &result.segments {
        prop_assert!(seg.end > seg.start);
        prop_assert!(seg.start >= by_id[seg.id.as_str()].arrival as u64);
    }

    // Sorted and non-overlapping
    for pair in result.segments.windows(2) {
        prop_assert!(pair[0].end <= pair[1].start);
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_invariants_hold(procs in process_list(), algorithm in algorithm()) {
        let result = simulate(&algorithm, &procs).unwrap();
        check_invariants(&procs, &result)?;
    }

    #[test]
    fn prop_runs_are_deterministic(procs in process_list(), algorithm in algorithm()) {
        let first = simulate(&algorithm, &procs).unwrap();
        let second = simulate(&algorithm, &procs).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_non_preemptive_single_segment(procs in process_list()) {
        for algorithm in [Algorithm::Fcfs, Algorithm::Sjf] {
            let result = simulate(&algorithm, &procs).unwrap();
            prop_assert_eq!(result.segments.len(), procs.len());
            prop_assert_eq!(result.stats.preemptions, 0);
            for m in &result.metrics {
                prop_assert_eq!(m.completion, m.start + m.burst);
            }
        }
    }

    #[test]
    fn prop_srt_segments_coalesce(procs in process_list()) {
        let result = simulate(&Algorithm::Srt, &procs).unwrap();
        for pair in result.segments.windows(2) {
            prop_assert!(
                !(pair[0].id == pair[1].id && pair[0].end == pair[1].start),
                "adjacent segments for {} were not merged",
                pair[0].id
            );
        }
    }

    #[test]
    fn prop_busy_time_matches_total_burst(procs in process_list(), algorithm in algorithm()) {
        let result = simulate(&algorithm, &procs).unwrap();
        let total: i64 = procs.iter().map(|p| p.burst).sum();
        let stats = &result.stats;
        prop_assert_eq!((stats.makespan - stats.idle_time) as i64, total);
    }
}
