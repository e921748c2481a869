/*!
 * Scheduler Types
 * Algorithm selection, quantum configuration, and timeline segments
 */

use crate::core::errors::ConfigError;
use crate::core::types::{Pid, Tick};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Default Round-Robin quantum
pub const DEFAULT_QUANTUM: i64 = 2;

/// Default MLFQ per-level quanta
pub const DEFAULT_MLFQ_QUANTA: [i64; MLFQ_LEVELS] = [2, 4, 8];

/// Number of MLFQ levels (fixed)
pub const MLFQ_LEVELS: usize = 3;

/// Parameterless algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    /// First-Come-First-Served
    Fcfs,
    /// Shortest-Job-First, non-preemptive
    Sjf,
    /// Shortest-Remaining-Time, preemptive
    Srt,
    /// Round-Robin with a fixed quantum
    RoundRobin,
    /// Three-level feedback queue
    Mlfq,
}

impl AlgorithmKind {
    /// All selectors in display order
    pub const ALL: [AlgorithmKind; 5] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Srt,
        Self::RoundRobin,
        Self::Mlfq,
    ];

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srt => "srt",
            Self::RoundRobin => "rr",
            Self::Mlfq => "mlfq",
        }
    }

    /// Whether a running process can lose the CPU before finishing
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srt | Self::RoundRobin | Self::Mlfq)
    }
}

impl FromStr for AlgorithmKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "srt" | "srtf" => Ok(Self::Srt),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "mlfq" => Ok(Self::Mlfq),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AlgorithmKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AlgorithmKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Positive time quantum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Tick);

impl TimeQuantum {
    /// Create a Round-Robin quantum
    pub fn new(value: i64) -> Result<Self, ConfigError> {
        Self::named("quantum", value)
    }

    /// Create a quantum, naming it in the error if it is not positive
    pub fn named(name: &str, value: i64) -> Result<Self, ConfigError> {
        if value <= 0 {
            return Err(ConfigError::NonPositiveQuantum {
                name: name.to_string(),
                value,
            });
        }
        Ok(Self(value as Tick))
    }

    #[inline(always)]
    pub const fn get(&self) -> Tick {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Per-level MLFQ quanta
///
/// The last level runs processes to completion, so its quantum is validated
/// but never limits a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MlfqQuanta([TimeQuantum; MLFQ_LEVELS]);

impl MlfqQuanta {
    pub fn new(q0: i64, q1: i64, q2: i64) -> Result<Self, ConfigError> {
        Ok(Self([
            TimeQuantum::named("q0", q0)?,
            TimeQuantum::named("q1", q1)?,
            TimeQuantum::named("q2", q2)?,
        ]))
    }

    pub fn from_array(quanta: [i64; MLFQ_LEVELS]) -> Result<Self, ConfigError> {
        Self::new(quanta[0], quanta[1], quanta[2])
    }

    /// Quantum of `level`, clamped to the last level
    #[inline]
    pub fn level(&self, level: usize) -> TimeQuantum {
        self.0[level.min(MLFQ_LEVELS - 1)]
    }
}

impl<'de> Deserialize<'de> for MlfqQuanta {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = <[i64; MLFQ_LEVELS]>::deserialize(deserializer)?;
        Self::from_array(raw).map_err(serde::de::Error::custom)
    }
}

/// Raw, unvalidated algorithm parameters
///
/// Values are signed so that a non-positive quantum reaches validation and
/// surfaces as [`ConfigError::NonPositiveQuantum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerParams {
    pub quantum: i64,
    pub mlfq_quanta: [i64; MLFQ_LEVELS],
}

impl Default for SchedulerParams {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            mlfq_quanta: DEFAULT_MLFQ_QUANTA,
        }
    }
}

/// Fully configured scheduling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Srt,
    RoundRobin { quantum: TimeQuantum },
    Mlfq { quanta: MlfqQuanta },
}

impl Algorithm {
    /// Build an algorithm from a selector, validating only the parameters it uses
    pub fn from_kind(kind: AlgorithmKind, params: &SchedulerParams) -> Result<Self, ConfigError> {
        Ok(match kind {
            AlgorithmKind::Fcfs => Self::Fcfs,
            AlgorithmKind::Sjf => Self::Sjf,
            AlgorithmKind::Srt => Self::Srt,
            AlgorithmKind::RoundRobin => Self::RoundRobin {
                quantum: TimeQuantum::new(params.quantum)?,
            },
            AlgorithmKind::Mlfq => Self::Mlfq {
                quanta: MlfqQuanta::from_array(params.mlfq_quanta)?,
            },
        })
    }

    /// Parse a selector string and build the algorithm
    pub fn parse(selector: &str, params: &SchedulerParams) -> Result<Self, ConfigError> {
        Self::from_kind(selector.parse()?, params)
    }

    pub const fn kind(&self) -> AlgorithmKind {
        match self {
            Self::Fcfs => AlgorithmKind::Fcfs,
            Self::Sjf => AlgorithmKind::Sjf,
            Self::Srt => AlgorithmKind::Srt,
            Self::RoundRobin { .. } => AlgorithmKind::RoundRobin,
            Self::Mlfq { .. } => AlgorithmKind::Mlfq,
        }
    }
}

/// One contiguous period during which a process held the CPU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub id: Pid,
    pub start: Tick,
    pub end: Tick,
}

impl Segment {
    pub fn new(id: impl Into<Pid>, start: Tick, end: Tick) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("FCFS".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Fcfs);
        assert_eq!("sjf".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Sjf);
        assert_eq!("srt".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Srt);
        assert_eq!(
            "round_robin".parse::<AlgorithmKind>().unwrap(),
            AlgorithmKind::RoundRobin
        );
        assert_eq!("MLFQ".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Mlfq);
        assert_eq!(
            "lottery".parse::<AlgorithmKind>(),
            Err(ConfigError::UnknownAlgorithm("lottery".into()))
        );
    }

    #[test]
    fn test_quantum_validation() {
        assert!(TimeQuantum::new(1).is_ok());
        assert_eq!(
            TimeQuantum::new(0),
            Err(ConfigError::NonPositiveQuantum {
                name: "quantum".into(),
                value: 0
            })
        );
        assert!(TimeQuantum::new(-3).is_err());
    }

    #[test]
    fn test_mlfq_quanta_names_offending_level() {
        assert_eq!(
            MlfqQuanta::new(2, 0, 8),
            Err(ConfigError::NonPositiveQuantum {
                name: "q1".into(),
                value: 0
            })
        );
        let quanta = MlfqQuanta::new(2, 4, 8).unwrap();
        assert_eq!(quanta.level(0).get(), 2);
        assert_eq!(quanta.level(5).get(), 8);
    }

    #[test]
    fn test_from_kind_only_validates_used_params() {
        let params = SchedulerParams {
            quantum: 0,
            mlfq_quanta: [0, 0, 0],
        };
        assert_eq!(
            Algorithm::from_kind(AlgorithmKind::Fcfs, &params),
            Ok(Algorithm::Fcfs)
        );
        assert!(Algorithm::from_kind(AlgorithmKind::RoundRobin, &params).is_err());
        assert!(Algorithm::from_kind(AlgorithmKind::Mlfq, &params).is_err());
    }

    #[test]
    fn test_quantum_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<TimeQuantum>("0").is_err());
        assert_eq!(serde_json::from_str::<TimeQuantum>("3").unwrap().get(), 3);
    }

    #[test]
    fn test_algorithm_serde() {
        let algo = Algorithm::parse("rr", &SchedulerParams::default()).unwrap();
        let json = serde_json::to_string(&algo).unwrap();
        assert_eq!(json, r#"{"algorithm":"round_robin","quantum":2}"#);
        assert_eq!(serde_json::from_str::<Algorithm>(&json).unwrap(), algo);
    }
}
