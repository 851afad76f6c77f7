use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Metadata of one wavelet.
///
/// Blips are not embedded; they are stored by id next to the wavelet
/// because a bundle may reference blips it does not carry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveletData {
    pub wave_id: String,
    pub wavelet_id: String,
    pub root_blip_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub creator: String,
    #[serde(default)]
    pub creation_time: i64,
    #[serde(default)]
    pub last_modified_time: i64,
    #[serde(default)]
    pub version: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data_documents: BTreeMap<String, String>,
}

impl WaveletData {
    pub fn new(wave_id: impl Into<String>, wavelet_id: impl Into<String>, root_blip_id: impl Into<String>) -> Self {
        Self {
            wave_id: wave_id.into(),
            wavelet_id: wavelet_id.into(),
            root_blip_id: root_blip_id.into(),
            ..Self::default()
        }
    }

    pub fn key(&self) -> WaveletKey {
        WaveletKey::new(&self.wave_id, &self.wavelet_id)
    }

    pub fn data_document(&self, name: &str) -> Option<&str> {
        self.data_documents.get(name).map(String::as_str)
    }
}

/// Globally unique address of a wavelet
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaveletKey {
    pub wave_id: String,
    pub wavelet_id: String,
}

impl WaveletKey {
    pub fn new(wave_id: &str, wavelet_id: &str) -> Self {
        Self {
            wave_id: wave_id.to_string(),
            wavelet_id: wavelet_id.to_string(),
        }
    }
}

impl std::fmt::Display for WaveletKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.wave_id, self.wavelet_id)
    }
}

/// Treat an explicit `null` like a missing field
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
