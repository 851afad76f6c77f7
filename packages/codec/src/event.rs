use crate::error::{DecodeError, DecodeResult};
use crate::wire::{as_object, field, required_i64, required_str};
use serde_json::{json, Map, Value};
use wavebridge_model::{EventRecord, EventType};

/// Decode one event; the type name is matched case-insensitively
pub fn decode_event(value: &Value, path: &str) -> DecodeResult<EventRecord> {
    let object = as_object(value, path)?;

    let type_name = required_str(object, "type", path)?;
    let event_type = EventType::from_str_ignore_case(type_name)
        .ok_or_else(|| DecodeError::UnknownEventType(type_name.to_string()))?;

    let modified_by = required_str(object, "modifiedBy", path)?.to_string();
    let timestamp = required_i64(object, "timestamp", path)?;

    let properties = match field(object, "properties") {
        None => Map::new(),
        Some(Value::Object(properties)) => properties.clone(),
        Some(_) => return Err(DecodeError::type_mismatch(format!("{path}.properties"), "object")),
    };

    Ok(EventRecord {
        event_type,
        modified_by,
        timestamp,
        properties,
    })
}

pub fn encode_event(event: &EventRecord) -> Value {
    json!({
        "type": event.event_type.as_str(),
        "modifiedBy": event.modified_by,
        "timestamp": event.timestamp,
        "properties": Value::Object(event.properties.clone()),
    })
}
