use crate::document::Document;

/// One message in the conversation tree.
///
/// Parent and child references are plain ids. The referenced blips may
/// have been trimmed from the bundle, which is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlipData {
    pub blip_id: String,
    pub wave_id: String,
    pub wavelet_id: String,
    pub parent_blip_id: Option<String>,
    pub child_blip_ids: Vec<String>,
    pub creator: String,
    /// Set semantics; order carries no meaning
    pub contributors: Vec<String>,
    pub last_modified_time: i64,
    pub version: i64,
    pub document: Document,
}

impl BlipData {
    pub fn new(wave_id: impl Into<String>, wavelet_id: impl Into<String>, blip_id: impl Into<String>) -> Self {
        Self {
            blip_id: blip_id.into(),
            wave_id: wave_id.into(),
            wavelet_id: wavelet_id.into(),
            ..Self::default()
        }
    }

    pub fn has_children(&self) -> bool {
        !self.child_blip_ids.is_empty()
    }

    pub fn has_contributor(&self, participant: &str) -> bool {
        self.contributors.iter().any(|c| c == participant)
    }
}
