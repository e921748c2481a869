/*!
 * CPU Scheduling Simulator - Command Line Entry Point
 *
 * Loads a process list, runs one scheduling algorithm and prints:
 * - Gantt timeline
 * - Per-process metrics table
 * - Optional metrics export to CSV/JSON
 */

use clap::Parser;
use cpu_sched_sim::{
    init_tracing, load_processes, render_gantt, render_metrics_table, save_metrics, simulate,
    Algorithm, AlgorithmKind, ConfigError, SchedulerParams,
};
use cpu_sched_sim::scheduler::MLFQ_LEVELS;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tracing::info;

/// Simulate a CPU scheduling algorithm over a process list
#[derive(Debug, Parser)]
#[command(name = "schedsim", version, about)]
struct Cli {
    /// Process list (.csv or .json) with PID, Arrival, Burst and optional Priority
    #[arg(short, long, env = "SCHEDSIM_INPUT")]
    input: PathBuf,

    /// Scheduling algorithm: fcfs, sjf, srt, rr, mlfq
    #[arg(short, long, env = "SCHEDSIM_ALGORITHM", default_value = "fcfs")]
    algorithm: String,

    /// Round-Robin time quantum
    #[arg(
        short,
        long,
        env = "SCHEDSIM_QUANTUM",
        default_value_t = SchedulerParams::default().quantum,
        allow_negative_numbers = true
    )]
    quantum: i64,

    /// MLFQ per-level quanta (Q0,Q1,Q2)
    #[arg(
        long,
        env = "SCHEDSIM_MLFQ_QUANTA",
        value_delimiter = ',',
        default_values_t = SchedulerParams::default().mlfq_quanta,
        allow_negative_numbers = true
    )]
    mlfq_quanta: Vec<i64>,

    /// Export metrics to this file (.csv or .json)
    #[arg(short, long, env = "SCHEDSIM_OUTPUT")]
    output: Option<PathBuf>,

    /// Print the full result as JSON instead of the chart and table
    #[arg(long)]
    json: bool,

    /// Gantt chart width in columns
    #[arg(long, env = "SCHEDSIM_WIDTH", default_value_t = 60)]
    width: usize,

    /// Default log level when RUST_LOG is unset
    #[arg(long, env = "SCHEDSIM_LOG", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn params(&self) -> Result<SchedulerParams, ConfigError> {
        let mlfq_quanta: [i64; MLFQ_LEVELS] = self
            .mlfq_quanta
            .as_slice()
            .try_into()
            .map_err(|_| ConfigError::LevelCount {
                expected: MLFQ_LEVELS,
                found: self.mlfq_quanta.len(),
            })?;
        Ok(SchedulerParams {
            quantum: self.quantum,
            mlfq_quanta,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let kind: AlgorithmKind = cli.algorithm.parse()?;
    let algorithm = Algorithm::from_kind(kind, &cli.params()?)?;
    info!(algorithm = %kind, input = %cli.input.display(), "Starting simulation");

    let processes = load_processes(&cli.input)?;
    let result = simulate(&algorithm, &processes)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&result).into_diagnostic()?;
        println!("{}", json);
    } else {
        println!("Algorithm: {}", kind.as_str().to_uppercase());
        println!();
        println!("{}", render_gantt(&result.segments, cli.width));
        println!();
        println!("{}", render_metrics_table(&result));
        println!();
        println!(
            "Makespan: {}  Idle: {}  Utilization: {:.1}%  Context switches: {}",
            result.stats.makespan,
            result.stats.idle_time,
            result.stats.utilization() * 100.0,
            result.stats.context_switches
        );
    }

    if let Some(output) = &cli.output {
        save_metrics(output, &result.metrics)?;
        info!(path = %output.display(), "Metrics exported");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["schedsim", "--input", "procs.csv"]).unwrap();
        assert_eq!(cli.algorithm, "fcfs");
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.params().unwrap(), SchedulerParams::default());
    }

    #[test]
    fn test_cli_rejects_wrong_level_count() {
        let cli =
            Cli::try_parse_from(["schedsim", "-i", "p.csv", "--mlfq-quanta", "2,4"]).unwrap();
        assert_eq!(
            cli.params(),
            Err(ConfigError::LevelCount {
                expected: MLFQ_LEVELS,
                found: 2
            })
        );
    }
}
