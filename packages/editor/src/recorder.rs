//! # Operation Log
//!
//! Append-only record of every mutating call made against the mirror.
//!
//! - Append order is the only ordering guarantee
//! - Nothing is merged, deduplicated or validated; setting the same title
//!   twice yields two records
//! - `drain` empties the log so a record is transmitted at most once

use wavebridge_model::OperationRecord;

#[derive(Debug, Default)]
pub struct OperationLog {
    records: Vec<OperationRecord>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, operation: OperationRecord) {
        tracing::debug!(
            "[OperationLog] #{} {} wave={} wavelet={} blip={:?} index={}",
            self.records.len(),
            operation.op_type,
            operation.wave_id,
            operation.wavelet_id,
            operation.blip_id,
            operation.index
        );
        self.records.push(operation);
    }

    /// Take every record in append order, leaving the log empty
    pub fn drain(&mut self) -> Vec<OperationRecord> {
        std::mem::take(&mut self.records)
    }

    pub fn records(&self) -> &[OperationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
