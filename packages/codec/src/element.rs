use crate::error::{DecodeError, DecodeResult};
use crate::registry::CodecConfig;
use crate::wire::{as_object, required, required_str};
use serde_json::{Map, Value};
use wavebridge_model::{ContentElement, ElementData, PropertyBag};

const CONTEXT: &str = "element";

/// Decode one element bag, picking the variant from its discriminator.
///
/// An unknown discriminator is an error; there is no fallback variant.
pub fn decode_element(bag: &Value, config: &CodecConfig) -> DecodeResult<ContentElement> {
    decode_element_at(bag, config, CONTEXT)
}

pub(crate) fn decode_element_at(bag: &Value, config: &CodecConfig, path: &str) -> DecodeResult<ContentElement> {
    let object = as_object(bag, path)?;

    let tag = required_str(object, config.discriminator_field(), path)?;
    let codec = config
        .lookup(tag)
        .ok_or_else(|| DecodeError::UnknownVariant(tag.to_string()))?;

    let element_type = required_str(object, "type", path)?.to_string();
    let properties = decode_properties(required(object, "properties", path)?, &format!("{path}.properties"))?;

    Ok((codec.decode)(ElementData {
        element_type,
        properties,
    }))
}

fn decode_properties(value: &Value, path: &str) -> DecodeResult<PropertyBag> {
    let object = as_object(value, path)?;
    let mut properties = PropertyBag::new();

    for (name, value) in object {
        let text = value
            .as_str()
            .ok_or_else(|| DecodeError::type_mismatch(format!("{path}.{name}"), "string"))?;
        properties.insert(name.clone(), text.to_string());
    }

    Ok(properties)
}

/// Encode an element bag; total for every variant
pub fn encode_element(element: &ContentElement, config: &CodecConfig) -> Value {
    let data = element.data();
    let properties: Map<String, Value> = data
        .properties
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect();

    let mut object = Map::new();
    object.insert(
        config.discriminator_field().to_string(),
        Value::String(config.tag_for(element.kind()).to_string()),
    );
    object.insert("type".to_string(), Value::String(data.element_type.clone()));
    object.insert("properties".to_string(), Value::Object(properties));
    Value::Object(object)
}
