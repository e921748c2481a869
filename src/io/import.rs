/*!
 * Process Import
 * Load process descriptors from CSV or JSON
 */

use super::{FileFormat, IoError, IoResult};
use crate::process::ProcessSpec;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load processes from a `.csv` or `.json` file
pub fn load_processes(path: impl AsRef<Path>) -> IoResult<Vec<ProcessSpec>> {
    let path = path.as_ref();
    let format = FileFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|e| IoError::access(path, e))?;

    let processes = match format {
        FileFormat::Csv => parse_csv(&text)?,
        FileFormat::Json => parse_json(&text)?,
    };

    info!(path = %path.display(), count = processes.len(), "Loaded processes");
    Ok(processes)
}

/// Parse a JSON array of `{PID, Arrival, Burst, Priority?}` objects
pub fn parse_json(text: &str) -> IoResult<Vec<ProcessSpec>> {
    Ok(serde_json::from_str(text)?)
}

/// Column positions resolved from the header row
struct Columns {
    pid: usize,
    arrival: usize,
    burst: usize,
    priority: Option<usize>,
}

impl Columns {
    fn from_header(header: &StringRecord) -> IoResult<Self> {
        let names: Vec<String> = header.iter().map(str::to_lowercase).collect();
        let find = |name: &str| names.iter().position(|n| n == name);
        let require = |name: &str, label: &str| {
            find(name).ok_or_else(|| IoError::MissingColumn(label.to_string()))
        };

        Ok(Self {
            pid: require("pid", "PID")?,
            arrival: require("arrival", "Arrival")?,
            burst: require("burst", "Burst")?,
            priority: find("priority"),
        })
    }

    fn read(&self, record: &StringRecord, line: usize) -> IoResult<ProcessSpec> {
        let cell = |index: usize, label: &str| {
            record.get(index).ok_or_else(|| IoError::Parse {
                line,
                message: format!("missing {} value", label),
            })
        };
        let number = |index: usize, label: &str| -> IoResult<i64> {
            let raw = cell(index, label)?;
            raw.parse().map_err(|_| IoError::Parse {
                line,
                message: format!("{} '{}' is not an integer", label, raw),
            })
        };

        let priority = match self.priority {
            Some(index) if record.get(index).is_some_and(|c| !c.is_empty()) => {
                number(index, "Priority")?
            }
            _ => 0,
        };

        Ok(ProcessSpec {
            id: cell(self.pid, "PID")?.to_string(),
            arrival: number(self.arrival, "Arrival")?,
            burst: number(self.burst, "Burst")?,
            priority,
        })
    }
}

/// Parse delimited text with a `PID,Arrival,Burst[,Priority]` header
///
/// Fields follow RFC 4180 quoting, so a quoted id may contain commas. Header
/// names are case-insensitive and may come in any order. Blank lines are
/// skipped; a missing or empty priority cell means 0.
pub fn parse_csv(text: &str) -> IoResult<Vec<ProcessSpec>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let header = reader.headers().map_err(parse_error)?.clone();
    if header.iter().all(str::is_empty) {
        return Ok(Vec::new());
    }
    let columns = Columns::from_header(&header)?;

    let mut processes = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line() as usize);
        processes.push(columns.read(&record, line)?);
    }
    Ok(processes)
}

fn parse_error(err: csv::Error) -> IoError {
    IoError::Parse {
        line: err.position().map_or(0, |p| p.line() as usize),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_csv() {
        let text = "PID,Arrival,Burst,Priority\nA,0,5,1\n\nB,1,3,\n";
        let procs = parse_csv(text).unwrap();
        assert_eq!(
            procs,
            vec![
                ProcessSpec::new("A", 0, 5).with_priority(1),
                ProcessSpec::new("B", 1, 3),
            ]
        );
    }

    #[test]
    fn test_parse_csv_reordered_header() {
        let text = "burst, pid, arrival\n4,\"P1\", 2\n";
        let procs = parse_csv(text).unwrap();
        assert_eq!(procs, vec![ProcessSpec::new("P1", 2, 4)]);
    }

    #[test]
    fn test_parse_csv_quoted_comma() {
        let procs = parse_csv("PID,Arrival,Burst\n\"1,2\",3,4\n").unwrap();
        assert_eq!(procs, vec![ProcessSpec::new("1,2", 3, 4)]);
    }

    #[test]
    fn test_parse_csv_empty() {
        assert_eq!(parse_csv(""), Ok(Vec::new()));
        assert_eq!(parse_csv("PID,Arrival,Burst\n\n"), Ok(Vec::new()));
    }

    #[test]
    fn test_parse_csv_errors() {
        assert_eq!(
            parse_csv("PID,Burst\nA,3\n"),
            Err(IoError::MissingColumn("Arrival".into()))
        );

        let err = parse_csv("PID,Arrival,Burst\nA,0,5\nB,x,2\n").unwrap_err();
        assert_eq!(
            err,
            IoError::Parse {
                line: 3,
                message: "Arrival 'x' is not an integer".into()
            }
        );

        assert!(matches!(
            parse_csv("PID,Arrival,Burst\nA,0\n"),
            Err(IoError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_json() {
        let text = r#"[{"PID": "A", "Arrival": 0, "Burst": 5}, {"PID": 2, "Arrival": 1, "Burst": 3, "Priority": 2}]"#;
        let procs = parse_json(text).unwrap();
        assert_eq!(
            procs,
            vec![
                ProcessSpec::new("A", 0, 5),
                ProcessSpec::new("2", 1, 3).with_priority(2),
            ]
        );
        assert!(matches!(parse_json("{}"), Err(IoError::Json(_))));
    }
}
