//! Descriptive statistics over a result log.
//!
//! One [`ColumnStats`] per CSV column: count, mean, sample standard
//! deviation, min, quartiles and max. Quartiles interpolate linearly between
//! the two nearest ranks.

use std::fmt;

use serde::Serialize;
use tp_core::Real;
use tp_sim::SimRecord;

/// Statistics of one column.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: Real,
    /// Sample standard deviation (n - 1). `None` with fewer than two values.
    pub std: Option<Real>,
    pub min: Real,
    pub p25: Real,
    pub median: Real,
    pub p75: Real,
    pub max: Real,
}

impl ColumnStats {
    /// Statistics of a non-empty slice, or `None` when it is empty.
    pub fn from_values(values: &[Real]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let count = sorted.len();
        let mean = sorted.iter().sum::<Real>() / count as Real;
        let std = (count > 1).then(|| {
            let ss: Real = sorted.iter().map(|v| (v - mean) * (v - mean)).sum();
            (ss / (count - 1) as Real).sqrt()
        });

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            p25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            p75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }
}

/// Linear-interpolated quantile of sorted, non-empty data.
fn quantile(sorted: &[Real], q: Real) -> Real {
    let pos = q * (sorted.len() - 1) as Real;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as Real)
}

/// Statistics for every column of a log.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LogSummary {
    pub time: ColumnStats,
    pub temp: ColumnStats,
    pub setpoint: ColumnStats,
    pub control: ColumnStats,
}

/// Summarize records. `None` for an empty log.
pub fn summarize(records: &[SimRecord]) -> Option<LogSummary> {
    let column = |f: fn(&SimRecord) -> Real| {
        let values: Vec<Real> = records.iter().map(f).collect();
        ColumnStats::from_values(&values)
    };

    Some(LogSummary {
        time: column(|r| r.step_index as Real)?,
        temp: column(|r| r.temperature)?,
        setpoint: column(|r| r.setpoint)?,
        control: column(|r| r.control_output)?,
    })
}

impl fmt::Display for LogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = [
            ("time", &self.time),
            ("temp", &self.temp),
            ("setpoint", &self.setpoint),
            ("control", &self.control),
        ];

        write!(f, "{:>8}", "")?;
        for (name, _) in &columns {
            write!(f, "{name:>14}")?;
        }
        writeln!(f)?;

        let rows: [(&str, fn(&ColumnStats) -> Option<Real>); 8] = [
            ("count", |s| Some(s.count as Real)),
            ("mean", |s| Some(s.mean)),
            ("std", |s| s.std),
            ("min", |s| Some(s.min)),
            ("25%", |s| Some(s.p25)),
            ("50%", |s| Some(s.median)),
            ("75%", |s| Some(s.p75)),
            ("max", |s| Some(s.max)),
        ];
        for (label, get) in rows {
            write!(f, "{label:>8}")?;
            for (_, stats) in &columns {
                match get(stats) {
                    Some(v) => write!(f, "{v:>14.6}")?,
                    None => write!(f, "{:>14}", "NaN")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
