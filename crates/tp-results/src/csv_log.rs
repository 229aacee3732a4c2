//! Append-only CSV result log.
//!
//! Creating the logger truncates the target and writes the header; failure
//! there is fatal. Every record then reopens the file in append mode, writes
//! one line and closes it again, so each append can fail on its own. A failed
//! append is reported through `tracing` and the record is dropped.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tp_core::Real;
use tp_sim::{AppendOutcome, RecordSink, SimRecord};
use tracing::{info, warn};

use crate::{ResultsError, ResultsResult};

/// Column names, in order.
pub const CSV_HEADER: &str = "time,temp,setpoint,control";

/// File-backed record sink.
#[derive(Clone, Debug)]
pub struct CsvLogger {
    path: PathBuf,
}

impl CsvLogger {
    /// Create or truncate `path` and write the header line.
    pub fn create(path: impl Into<PathBuf>) -> ResultsResult<Self> {
        let path = path.into();
        write_header(&path).map_err(|source| ResultsError::SinkInit {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "result log initialized");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line. Failures are reported and swallowed.
    pub fn log(
        &self,
        time: usize,
        temperature: Real,
        setpoint: Real,
        control: Real,
    ) -> AppendOutcome {
        match self.append_line(time, temperature, setpoint, control) {
            Ok(()) => AppendOutcome::Written,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    time,
                    error = %e,
                    "could not append record; dropping it"
                );
                AppendOutcome::Dropped
            }
        }
    }

    fn append_line(
        &self,
        time: usize,
        temperature: Real,
        setpoint: Real,
        control: Real,
    ) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{time},{temperature},{setpoint},{control}")
    }
}

impl RecordSink for CsvLogger {
    fn append(&mut self, record: &SimRecord) -> AppendOutcome {
        self.log(
            record.step_index,
            record.temperature,
            record.setpoint,
            record.control_output,
        )
    }
}

fn write_header(path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "{CSV_HEADER}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn create_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        CsvLogger::create(&path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "time,temp,setpoint,control\n"
        );
    }

    #[test]
    fn create_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "stale\nrows\n").unwrap();
        CsvLogger::create(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), format!("{CSV_HEADER}\n"));
    }

    #[test]
    fn log_uses_plain_number_formatting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let logger = CsvLogger::create(&path).unwrap();

        assert_eq!(logger.log(0, 20.1, 25000.0, 1.0), AppendOutcome::Written);
        assert_eq!(logger.log(1, 20.25, 25000.0, 0.5), AppendOutcome::Written);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec![CSV_HEADER, "0,20.1,25000,1", "1,20.25,25000,0.5"]);
    }

    #[test]
    fn create_fails_when_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("data.csv");
        let err = CsvLogger::create(&path).unwrap_err();
        assert!(matches!(err, ResultsError::SinkInit { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn append_failure_drops_record() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("run");
        fs::create_dir(&sub).unwrap();
        let mut logger = CsvLogger::create(sub.join("data.csv")).unwrap();

        fs::remove_dir_all(&sub).unwrap();
        let outcome = logger.append(&SimRecord {
            step_index: 3,
            temperature: 21.0,
            setpoint: 25.0,
            control_output: 1.0,
        });
        assert_eq!(outcome, AppendOutcome::Dropped);

        // Recovers on its own once the target is reachable again.
        fs::create_dir(&sub).unwrap();
        assert_eq!(logger.log(4, 21.5, 25.0, 1.0), AppendOutcome::Written);
        assert_eq!(
            fs::read_to_string(sub.join("data.csv")).unwrap(),
            "4,21.5,25,1\n"
        );
    }
}
