use crate::blip::BlipData;
use crate::event::EventRecord;
use crate::operation::OperationRecord;
use crate::wavelet::WaveletData;
use std::collections::BTreeMap;

/// Inbound envelope: events plus the remote snapshot they refer to
#[derive(Debug, Clone, PartialEq)]
pub struct EventMessageBundle {
    pub events: Vec<EventRecord>,
    pub wavelet: WaveletData,
    /// Materialized blips by id; may omit blips referenced elsewhere
    pub blips: BTreeMap<String, BlipData>,
}

impl EventMessageBundle {
    pub fn new(wavelet: WaveletData) -> Self {
        Self {
            events: Vec::new(),
            wavelet,
            blips: BTreeMap::new(),
        }
    }
}

/// Outbound envelope: the ordered operation log
#[derive(Debug, Clone, PartialEq)]
pub struct OperationMessageBundle {
    pub version: String,
    pub operations: Vec<OperationRecord>,
}

impl OperationMessageBundle {
    pub fn new(version: impl Into<String>, operations: Vec<OperationRecord>) -> Self {
        Self {
            version: version.into(),
            operations,
        }
    }
}
