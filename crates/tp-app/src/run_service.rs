//! Run service: configuration in, result log and report out.

use std::path::{Path, PathBuf};

use tp_results::{CsvLogger, LogSummary, read_log, summarize};
use tp_sim::{RunReport, SimConfig, Simulation, run_sim};
use tracing::info;

use crate::error::AppResult;

/// What a completed run produced.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// Where the records were written.
    pub output: PathBuf,
    pub report: RunReport,
}

/// Execute one closed-loop run, logging every step to `config.output`.
///
/// Fails before the first step if the simulation cannot be built or the log
/// cannot be created. Per-record write failures only show up as
/// `report.dropped`.
pub fn run(config: &SimConfig) -> AppResult<RunOutcome> {
    let mut sim = Simulation::new(config)?;
    let mut logger = CsvLogger::create(&config.output)?;

    info!(
        path = %logger.path().display(),
        simulated_seconds = config.duration(),
        "logging run"
    );
    let report = run_sim(&mut sim, &mut logger);
    if report.dropped > 0 {
        info!(dropped = report.dropped, "some records were not written");
    }

    Ok(RunOutcome {
        output: logger.path().to_path_buf(),
        report,
    })
}

/// Read a result log and compute its column statistics.
///
/// Returns the number of records alongside the summary, which is `None` for
/// a header-only log.
pub fn load_summary(path: &Path) -> AppResult<(usize, Option<LogSummary>)> {
    let records = read_log(path)?;
    Ok((records.len(), summarize(&records)))
}
