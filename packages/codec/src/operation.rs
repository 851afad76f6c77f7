use crate::element::{decode_element_at, encode_element};
use crate::error::{DecodeError, DecodeResult, EncodeError};
use crate::registry::CodecConfig;
use crate::snapshot::{decode_blip, decode_wavelet, encode_blip, encode_wavelet};
use crate::wire::{as_object, field, optional_i64, optional_str, required_str};
use serde::Deserialize;
use serde_json::{json, Value};
use wavebridge_model::operation::NO_INDEX;
use wavebridge_model::{Annotation, OperationProperty, OperationRecord, OperationType, PropertyShape, Range};

/// Decode one operation; the payload is read according to the type's shape
pub fn decode_operation(value: &Value, config: &CodecConfig, path: &str) -> DecodeResult<OperationRecord> {
    let object = as_object(value, path)?;

    let type_name = required_str(object, "type", path)?;
    let op_type = OperationType::from_wire(type_name)
        .ok_or_else(|| DecodeError::UnknownOperationType(type_name.to_string()))?;

    let wave_id = required_str(object, "waveId", path)?;
    let wavelet_id = required_str(object, "waveletId", path)?;
    let blip_id = optional_str(object, "blipId", path)?.map(str::to_string);

    let index = match optional_i64(object, "index", path)? {
        None => NO_INDEX,
        Some(index) => i32::try_from(index)
            .map_err(|_| DecodeError::type_mismatch(format!("{path}.index"), "32-bit integer"))?,
    };

    let property_path = format!("{path}.property");
    let property = decode_property(op_type.property_shape(), field(object, "property"), config, &property_path)?;

    Ok(OperationRecord {
        op_type,
        wave_id: wave_id.to_string(),
        wavelet_id: wavelet_id.to_string(),
        blip_id,
        index,
        property,
    })
}

fn decode_property(
    shape: PropertyShape,
    value: Option<&Value>,
    config: &CodecConfig,
    path: &str,
) -> DecodeResult<OperationProperty> {
    let value = match (shape, value) {
        (PropertyShape::None, None) => return Ok(OperationProperty::None),
        (PropertyShape::None, Some(_)) => return Err(DecodeError::type_mismatch(path, "null")),
        (_, None) => return Err(DecodeError::type_mismatch(path, "payload")),
        (_, Some(value)) => value,
    };

    let property = match shape {
        PropertyShape::None => OperationProperty::None,
        PropertyShape::Text => OperationProperty::Text(
            value
                .as_str()
                .ok_or_else(|| DecodeError::type_mismatch(path, "string"))?
                .to_string(),
        ),
        PropertyShape::Wavelet => OperationProperty::Wavelet(Box::new(decode_wavelet(value, path)?)),
        PropertyShape::Blip => OperationProperty::Blip(Box::new(decode_blip(value, config, path)?)),
        PropertyShape::Element => OperationProperty::Element(decode_element_at(value, config, path)?),
        PropertyShape::Range => OperationProperty::Range(
            Range::deserialize(value).map_err(|source| DecodeError::invalid(path, source))?,
        ),
        PropertyShape::Annotation => OperationProperty::Annotation(
            Annotation::deserialize(value).map_err(|source| DecodeError::invalid(path, source))?,
        ),
    };

    Ok(property)
}

pub fn encode_operation(record: &OperationRecord, config: &CodecConfig) -> Result<Value, EncodeError> {
    let property = match &record.property {
        OperationProperty::None => Value::Null,
        OperationProperty::Text(text) => Value::String(text.clone()),
        OperationProperty::Wavelet(wavelet) => encode_wavelet(wavelet)?,
        OperationProperty::Blip(blip) => encode_blip(blip, config)?,
        OperationProperty::Element(element) => encode_element(element, config),
        OperationProperty::Range(range) => json!({ "start": range.start, "end": range.end }),
        OperationProperty::Annotation(annotation) => json!({
            "name": annotation.name,
            "value": annotation.value,
            "range": { "start": annotation.range.start, "end": annotation.range.end },
        }),
    };

    Ok(json!({
        "type": record.op_type.as_str(),
        "waveId": record.wave_id,
        "waveletId": record.wavelet_id,
        "blipId": record.blip_id,
        "index": record.index,
        "property": property,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_set_title() {
        let config = CodecConfig::new();
        let wire = json!({
            "type": "WAVELET_SET_TITLE",
            "waveId": "w1",
            "waveletId": "conv+root",
            "blipId": null,
            "index": -1,
            "property": "Hi"
        });

        let record = decode_operation(&wire, &config, "operations[0]").unwrap();
        assert_eq!(record.op_type, OperationType::WaveletSetTitle);
        assert_eq!(record.property, OperationProperty::Text("Hi".to_string()));
        assert_eq!(record.blip_id, None);
        assert_eq!(encode_operation(&record, &config).unwrap(), wire);
    }

    #[test]
    fn test_payload_must_match_shape() {
        let config = CodecConfig::new();
        let wire = json!({
            "type": "DOCUMENT_DELETE",
            "waveId": "w1",
            "waveletId": "conv+root",
            "blipId": "b1",
            "property": "not a range"
        });
        assert!(matches!(
            decode_operation(&wire, &config, "op"),
            Err(DecodeError::Invalid { .. })
        ));
    }

    #[test]
    fn test_unknown_operation_type() {
        let config = CodecConfig::new();
        let wire = json!({ "type": "WAVELET_EXPLODE", "waveId": "w1", "waveletId": "conv+root" });
        assert!(matches!(
            decode_operation(&wire, &config, "op"),
            Err(DecodeError::UnknownOperationType(_))
        ));
    }

    #[test]
    fn test_missing_index_means_unused() {
        let config = CodecConfig::new();
        let wire = json!({
            "type": "BLIP_DELETE",
            "waveId": "w1",
            "waveletId": "conv+root",
            "blipId": "b3"
        });
        let record = decode_operation(&wire, &config, "op").unwrap();
        assert_eq!(record.index, NO_INDEX);
        assert_eq!(record.property, OperationProperty::None);
    }

    #[test]
    fn test_sparse_wire_encodes_in_canonical_form() {
        let config = CodecConfig::new();
        let sparse = json!({ "type": "BLIP_DELETE", "waveId": "w1", "waveletId": "conv+root" });
        let record = decode_operation(&sparse, &config, "op").unwrap();

        let encoded = encode_operation(&record, &config).unwrap();
        assert_eq!(
            encoded,
            json!({
                "type": "BLIP_DELETE",
                "waveId": "w1",
                "waveletId": "conv+root",
                "blipId": null,
                "index": -1,
                "property": null
            })
        );
        assert_eq!(decode_operation(&encoded, &config, "op").unwrap(), record);
    }
}
