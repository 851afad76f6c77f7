//! Wavelet and blip snapshots

use crate::element::{decode_element_at, encode_element};
use crate::error::{DecodeError, DecodeResult, EncodeError};
use crate::registry::CodecConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use wavebridge_model::wavelet::null_as_default;
use wavebridge_model::{Annotation, BlipData, Document, WaveletData};

/// Wire shape of a blip; elements stay untyped until the registry sees them
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlipWire {
    blip_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    wave_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    wavelet_id: String,
    #[serde(default)]
    parent_blip_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    child_blip_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    creator: String,
    #[serde(default, deserialize_with = "null_as_default")]
    contributors: Vec<String>,
    #[serde(default)]
    last_modified_time: i64,
    #[serde(default)]
    version: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    elements: BTreeMap<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    annotations: Vec<Annotation>,
}

pub fn decode_wavelet(value: &Value, path: &str) -> DecodeResult<WaveletData> {
    WaveletData::deserialize(value).map_err(|source| DecodeError::invalid(path, source))
}

pub fn encode_wavelet(wavelet: &WaveletData) -> Result<Value, EncodeError> {
    serde_json::to_value(wavelet).map_err(|source| EncodeError::json("wavelet", source))
}

/// Decode a blip. Parent and child ids are kept as plain ids; whether the
/// referenced blips are present anywhere is not checked.
pub fn decode_blip(value: &Value, config: &CodecConfig, path: &str) -> DecodeResult<BlipData> {
    let wire = BlipWire::deserialize(value).map_err(|source| DecodeError::invalid(path, source))?;

    let mut elements = BTreeMap::new();
    for (key, bag) in &wire.elements {
        let element_path = format!("{path}.elements.{key}");
        let position: usize = key
            .parse()
            .map_err(|_| DecodeError::type_mismatch(element_path.clone(), "position"))?;
        elements.insert(position, decode_element_at(bag, config, &element_path)?);
    }

    Ok(BlipData {
        blip_id: wire.blip_id,
        wave_id: wire.wave_id,
        wavelet_id: wire.wavelet_id,
        parent_blip_id: wire.parent_blip_id,
        child_blip_ids: wire.child_blip_ids,
        creator: wire.creator,
        contributors: wire.contributors,
        last_modified_time: wire.last_modified_time,
        version: wire.version,
        document: Document {
            content: wire.content,
            elements,
            annotations: wire.annotations,
        },
    })
}

pub fn encode_blip(blip: &BlipData, config: &CodecConfig) -> Result<Value, EncodeError> {
    let elements = blip
        .document
        .elements
        .iter()
        .map(|(position, element)| (position.to_string(), encode_element(element, config)))
        .collect();

    let wire = BlipWire {
        blip_id: blip.blip_id.clone(),
        wave_id: blip.wave_id.clone(),
        wavelet_id: blip.wavelet_id.clone(),
        parent_blip_id: blip.parent_blip_id.clone(),
        child_blip_ids: blip.child_blip_ids.clone(),
        creator: blip.creator.clone(),
        contributors: blip.contributors.clone(),
        last_modified_time: blip.last_modified_time,
        version: blip.version,
        content: blip.document.content.clone(),
        elements,
        annotations: blip.document.annotations.clone(),
    };

    serde_json::to_value(&wire).map_err(|source| EncodeError::json(format!("blip {}", blip.blip_id), source))
}

pub fn decode_blips(value: &Value, config: &CodecConfig, path: &str) -> DecodeResult<BTreeMap<String, BlipData>> {
    let object: &Map<String, Value> = value
        .as_object()
        .ok_or_else(|| DecodeError::type_mismatch(path, "object"))?;

    object
        .iter()
        .map(|(id, blip)| Ok((id.clone(), decode_blip(blip, config, &format!("{path}.{id}"))?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wavebridge_model::Range;

    #[test]
    fn test_blip_keeps_dangling_references() {
        let config = CodecConfig::new();
        let wire = json!({
            "blipId": "b2",
            "parentBlipId": "trimmed-parent",
            "childBlipIds": ["trimmed-child"],
            "content": "\nhi",
            "annotations": [
                { "name": "style/fontWeight", "value": "bold", "range": { "start": 1, "end": 3 } }
            ]
        });

        let blip = decode_blip(&wire, &config, "blips.b2").unwrap();
        assert_eq!(blip.parent_blip_id.as_deref(), Some("trimmed-parent"));
        assert_eq!(blip.child_blip_ids, vec!["trimmed-child"]);
        assert_eq!(blip.document.annotations[0].range, Range::new(1, 3));
    }

    #[test]
    fn test_bad_element_position() {
        let config = CodecConfig::new();
        let wire = json!({
            "blipId": "b1",
            "elements": {
                "first": { "javaClass": "com.google.wave.api.Gadget", "type": "GADGET", "properties": {} }
            }
        });

        match decode_blip(&wire, &config, "blips.b1") {
            Err(DecodeError::TypeMismatch { path, .. }) => assert_eq!(path, "blips.b1.elements.first"),
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_element_fails_whole_blip() {
        let config = CodecConfig::new();
        let wire = json!({
            "blipId": "b1",
            "content": "  ",
            "elements": {
                "0": { "javaClass": "com.google.wave.api.Gadget", "type": "GADGET", "properties": {} },
                "1": { "javaClass": "com.example.Unknown", "type": "X", "properties": {} }
            }
        });

        assert!(matches!(
            decode_blip(&wire, &config, "blips.b1"),
            Err(DecodeError::UnknownVariant(_))
        ));
    }
}
