//! # Bundle Codec
//!
//! Top-level wire messages. Decoding is all-or-nothing: a bundle is either
//! returned whole or the first failure is reported with its path.

use crate::error::{DecodeError, DecodeResult, EncodeError};
use crate::event::{decode_event, encode_event};
use crate::operation::{decode_operation, encode_operation};
use crate::registry::CodecConfig;
use crate::snapshot::{decode_blips, decode_wavelet, encode_blip, encode_wavelet};
use crate::wire::{as_object, required, required_array, required_str};
use serde_json::{json, Map, Value};
use wavebridge_model::{EventMessageBundle, OperationMessageBundle};

const EVENT_BUNDLE: &str = "event bundle";
const OPERATION_BUNDLE: &str = "operation bundle";

/// Decode an inbound event bundle from message bytes
pub fn decode_bundle(bytes: &[u8], config: &CodecConfig) -> DecodeResult<EventMessageBundle> {
    let value: Value = serde_json::from_slice(bytes)?;
    decode_event_bundle(&value, config)
}

/// Encode an outbound operation bundle to message bytes
pub fn encode_bundle(bundle: &OperationMessageBundle, config: &CodecConfig) -> Result<Vec<u8>, EncodeError> {
    let value = encode_operation_bundle(bundle, config)?;
    serde_json::to_vec(&value).map_err(|source| EncodeError::json(OPERATION_BUNDLE, source))
}

pub fn decode_event_bundle(value: &Value, config: &CodecConfig) -> DecodeResult<EventMessageBundle> {
    let object = as_object(value, EVENT_BUNDLE)?;

    let events = required_array(object, "events", EVENT_BUNDLE)?
        .iter()
        .enumerate()
        .map(|(i, event)| decode_event(event, &format!("events[{i}]")))
        .collect::<DecodeResult<Vec<_>>>()?;

    let wavelet = decode_wavelet(required(object, "wavelet", EVENT_BUNDLE)?, "wavelet")?;
    let blips = decode_blips(required(object, "blips", EVENT_BUNDLE)?, config, "blips")?;

    tracing::debug!(
        "Decoded event bundle for {}: {} events, {} blips",
        wavelet.key(),
        events.len(),
        blips.len()
    );

    Ok(EventMessageBundle { events, wavelet, blips })
}

pub fn encode_event_bundle(bundle: &EventMessageBundle, config: &CodecConfig) -> Result<Value, EncodeError> {
    let events: Vec<Value> = bundle.events.iter().map(encode_event).collect();

    let mut blips = Map::new();
    for (id, blip) in &bundle.blips {
        blips.insert(id.clone(), encode_blip(blip, config)?);
    }

    Ok(json!({
        "events": events,
        "wavelet": encode_wavelet(&bundle.wavelet)?,
        "blips": Value::Object(blips),
    }))
}

pub fn decode_operation_bundle(value: &Value, config: &CodecConfig) -> DecodeResult<OperationMessageBundle> {
    let object = as_object(value, OPERATION_BUNDLE)?;

    let version = required_str(object, "version", OPERATION_BUNDLE)?.to_string();
    let operations = required_array(object, "operations", OPERATION_BUNDLE)?
        .iter()
        .enumerate()
        .map(|(i, op)| decode_operation(op, config, &format!("operations[{i}]")))
        .collect::<DecodeResult<Vec<_>>>()?;

    Ok(OperationMessageBundle { version, operations })
}

pub fn encode_operation_bundle(bundle: &OperationMessageBundle, config: &CodecConfig) -> Result<Value, EncodeError> {
    let operations = bundle
        .operations
        .iter()
        .map(|record| encode_operation(record, config))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(json!({
        "version": bundle.version,
        "operations": operations,
    }))
}

/// Decode operation bundle bytes, mostly useful for replaying captured responses
pub fn decode_operation_bytes(bytes: &[u8], config: &CodecConfig) -> DecodeResult<OperationMessageBundle> {
    let value: Value = serde_json::from_slice(bytes)?;
    decode_operation_bundle(&value, config)
}
