/*!
 * Import/Export Tests
 * Load process files, simulate, and save metrics through the filesystem
 */

use cpu_sched_sim::io::{render_gantt, IoError};
use cpu_sched_sim::{
    load_processes, save_metrics, simulate, Algorithm, ProcessSpec, SchedulerParams,
};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_csv_load_simulate_save() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("procs.csv");
    fs::write(&input, "PID,Arrival,Burst,Priority\nA,0,4,\nB,1,3,2\n").unwrap();

    let procs = load_processes(&input).unwrap();
    assert_eq!(
        procs,
        vec![
            ProcessSpec::new("A", 0, 4),
            ProcessSpec::new("B", 1, 3).with_priority(2),
        ]
    );

    let algorithm = Algorithm::parse("rr", &SchedulerParams::default()).unwrap();
    let result = simulate(&algorithm, &procs).unwrap();

    let output = dir.path().join("metrics.csv");
    save_metrics(&output, &result.metrics).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "PID,Waiting,Turnaround,Response\nA,2,6,0\nB,3,6,1\n"
    );
}

#[test]
fn test_json_load_simulate_save() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("procs.json");
    fs::write(
        &input,
        r#"[
            {"PID": "A", "Arrival": 0, "Burst": 5},
            {"PID": "B", "Arrival": 1, "Burst": 3},
            {"PID": "C", "Arrival": 2, "Burst": 8}
        ]"#,
    )
    .unwrap();

    let procs = load_processes(&input).unwrap();
    let result = simulate(&Algorithm::Fcfs, &procs).unwrap();

    let output = dir.path().join("metrics.json");
    save_metrics(&output, &result.metrics).unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        saved,
        serde_json::json!([
            {"PID": "A", "Waiting": 0, "Turnaround": 5, "Response": 0},
            {"PID": "B", "Waiting": 4, "Turnaround": 7, "Response": 4},
            {"PID": "C", "Waiting": 6, "Turnaround": 14, "Response": 6}
        ])
    );

    let chart = render_gantt(&result.segments, 16);
    assert_eq!(chart.lines().count(), 2);
    assert!(chart.ends_with("16"));
}

#[test]
fn test_unsupported_and_missing_files() {
    let dir = TempDir::new().unwrap();

    let txt = dir.path().join("procs.txt");
    fs::write(&txt, "A 0 5").unwrap();
    assert!(matches!(
        load_processes(&txt),
        Err(IoError::UnsupportedFormat(_))
    ));

    let missing = dir.path().join("absent.csv");
    assert!(matches!(
        load_processes(&missing),
        Err(IoError::Access { .. })
    ));

    let bad_out = dir.path().join("metrics.xml");
    assert!(matches!(
        save_metrics(&bad_out, &[]),
        Err(IoError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_csv_ids_with_commas_survive_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("procs.csv");
    fs::write(&input, "PID,Arrival,Burst\n\"web,1\",0,2\n\"db \"\"main\"\"\",1,3\n").unwrap();

    let procs = load_processes(&input).unwrap();
    assert_eq!(
        procs,
        vec![
            ProcessSpec::new("web,1", 0, 2),
            ProcessSpec::new("db \"main\"", 1, 3),
        ]
    );

    let result = simulate(&Algorithm::Fcfs, &procs).unwrap();
    let output = dir.path().join("metrics.csv");
    save_metrics(&output, &result.metrics).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "PID,Waiting,Turnaround,Response\n\"web,1\",0,2,0\n\"db \"\"main\"\"\",1,4,1\n"
    );
}
