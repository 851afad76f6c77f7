use serde_json::{Map, Value};

/// Kinds of change notifications delivered inbound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    WaveletBlipCreated,
    WaveletBlipRemoved,
    WaveletParticipantsChanged,
    WaveletSelfAdded,
    WaveletSelfRemoved,
    WaveletTimestampChanged,
    WaveletTitleChanged,
    WaveletVersionChanged,
    BlipContributorsChanged,
    BlipDeleted,
    BlipSubmitted,
    BlipTimestampChanged,
    BlipVersionChanged,
    DocumentChanged,
    FormButtonClicked,
}

impl EventType {
    pub const ALL: [EventType; 15] = [
        EventType::WaveletBlipCreated,
        EventType::WaveletBlipRemoved,
        EventType::WaveletParticipantsChanged,
        EventType::WaveletSelfAdded,
        EventType::WaveletSelfRemoved,
        EventType::WaveletTimestampChanged,
        EventType::WaveletTitleChanged,
        EventType::WaveletVersionChanged,
        EventType::BlipContributorsChanged,
        EventType::BlipDeleted,
        EventType::BlipSubmitted,
        EventType::BlipTimestampChanged,
        EventType::BlipVersionChanged,
        EventType::DocumentChanged,
        EventType::FormButtonClicked,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::WaveletBlipCreated => "WAVELET_BLIP_CREATED",
            EventType::WaveletBlipRemoved => "WAVELET_BLIP_REMOVED",
            EventType::WaveletParticipantsChanged => "WAVELET_PARTICIPANTS_CHANGED",
            EventType::WaveletSelfAdded => "WAVELET_SELF_ADDED",
            EventType::WaveletSelfRemoved => "WAVELET_SELF_REMOVED",
            EventType::WaveletTimestampChanged => "WAVELET_TIMESTAMP_CHANGED",
            EventType::WaveletTitleChanged => "WAVELET_TITLE_CHANGED",
            EventType::WaveletVersionChanged => "WAVELET_VERSION_CHANGED",
            EventType::BlipContributorsChanged => "BLIP_CONTRIBUTORS_CHANGED",
            EventType::BlipDeleted => "BLIP_DELETED",
            EventType::BlipSubmitted => "BLIP_SUBMITTED",
            EventType::BlipTimestampChanged => "BLIP_TIMESTAMP_CHANGED",
            EventType::BlipVersionChanged => "BLIP_VERSION_CHANGED",
            EventType::DocumentChanged => "DOCUMENT_CHANGED",
            EventType::FormButtonClicked => "FORM_BUTTON_CLICKED",
        }
    }

    /// Look up a wire name regardless of case
    pub fn from_str_ignore_case(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|event_type| event_type.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A change that already happened on the remote side
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub event_type: EventType,
    pub modified_by: String,
    pub timestamp: i64,
    /// Event-specific fields, kept exactly as received
    pub properties: Map<String, Value>,
}

impl EventRecord {
    pub fn new(event_type: EventType, modified_by: impl Into<String>, timestamp: i64) -> Self {
        Self {
            event_type,
            modified_by: modified_by.into(),
            timestamp,
            properties: Map::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn string_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).and_then(Value::as_str)
    }

    /// Blip the event is about, if any
    pub fn blip_id(&self) -> Option<&str> {
        self.string_property("blipId")
    }

    /// Name of the clicked button for `FORM_BUTTON_CLICKED`
    pub fn button_name(&self) -> Option<&str> {
        self.string_property("button")
    }

    pub fn participants_added(&self) -> Vec<&str> {
        self.string_list("participantsAdded")
    }

    pub fn participants_removed(&self) -> Vec<&str> {
        self.string_list("participantsRemoved")
    }

    fn string_list(&self, name: &str) -> Vec<&str> {
        match self.properties.get(name) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }
}
