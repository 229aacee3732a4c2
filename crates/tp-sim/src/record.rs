//! Per-step records and the sink they are handed to.

use tp_core::Real;

/// One row of simulation output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimRecord {
    /// Zero-based step number.
    pub step_index: usize,
    /// Plant temperature after this step's update.
    pub temperature: Real,
    /// Setpoint in force during the step.
    pub setpoint: Real,
    /// Heater command applied during the step.
    pub control_output: Real,
}

/// Result of handing one record to a sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The record reached the sink.
    Written,
    /// The sink could not take the record. It has already reported why.
    Dropped,
}

/// Destination for simulation records.
///
/// Failures to accept a single record are handled inside the sink and never
/// propagate: the driver only learns whether the record was kept. Failing to
/// set a sink up at all belongs to the sink's constructor.
pub trait RecordSink {
    /// Take one record.
    fn append(&mut self, record: &SimRecord) -> AppendOutcome;
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn append(&mut self, record: &SimRecord) -> AppendOutcome {
        (**self).append(record)
    }
}

/// Sink that keeps every record in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    records: Vec<SimRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SimRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<SimRecord> {
        self.records
    }
}

impl RecordSink for MemorySink {
    fn append(&mut self, record: &SimRecord) -> AppendOutcome {
        self.records.push(*record);
        AppendOutcome::Written
    }
}
