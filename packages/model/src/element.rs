//! # Content Elements
//!
//! Rich content embedded inline in a blip document.
//!
//! Every element is a named-property bag. The variant only says which
//! family the element belongs to; the bag itself is never validated here,
//! so a decoded element always survives an encode unchanged.
//!
//! Numeric and boolean properties travel as text (`"320"`, `"true"`) and
//! are converted on read by the typed accessors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

/// Property name → string value
pub type PropertyBag = BTreeMap<String, String>;

pub const INLINE_BLIP: &str = "INLINE_BLIP";
pub const INPUT: &str = "INPUT";
pub const PASSWORD: &str = "PASSWORD";
pub const TEXTAREA: &str = "TEXTAREA";
pub const CHECK: &str = "CHECK";
pub const LABEL: &str = "LABEL";
pub const BUTTON: &str = "BUTTON";
pub const RADIO_BUTTON: &str = "RADIO_BUTTON";
pub const RADIO_BUTTON_GROUP: &str = "RADIO_BUTTON_GROUP";
pub const GADGET: &str = "GADGET";
pub const IMAGE: &str = "IMAGE";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    #[error("Property {name} has malformed value {value:?}")]
    Malformed { name: String, value: String },
}

/// Shared shape of every element variant
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementData {
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(default)]
    pub properties: PropertyBag,
}

impl ElementData {
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            properties: PropertyBag::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

/// Variant family of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Generic,
    FormControl,
    Gadget,
    Image,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Generic,
        ElementKind::FormControl,
        ElementKind::Gadget,
        ElementKind::Image,
    ];
}

/// Inline rich content of a blip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentElement {
    Generic(ElementData),
    FormControl(ElementData),
    Gadget(ElementData),
    Image(ElementData),
}

impl ContentElement {
    /// Wrap a property bag in the given variant
    pub fn from_parts(kind: ElementKind, data: ElementData) -> Self {
        match kind {
            ElementKind::Generic => ContentElement::Generic(data),
            ElementKind::FormControl => ContentElement::FormControl(data),
            ElementKind::Gadget => ContentElement::Gadget(data),
            ElementKind::Image => ContentElement::Image(data),
        }
    }

    pub fn image_from_url(url: &str, width: u32, height: u32, caption: &str) -> Self {
        ContentElement::Image(
            ElementData::new(IMAGE)
                .with_property("url", url)
                .with_property("width", width.to_string())
                .with_property("height", height.to_string())
                .with_property("caption", caption),
        )
    }

    pub fn image_from_attachment(attachment_id: &str, caption: &str) -> Self {
        ContentElement::Image(
            ElementData::new(IMAGE)
                .with_property("attachmentId", attachment_id)
                .with_property("caption", caption),
        )
    }

    pub fn gadget(url: &str) -> Self {
        ContentElement::Gadget(ElementData::new(GADGET).with_property("url", url))
    }

    /// Form control of the given element type (`BUTTON`, `INPUT`, ...)
    pub fn form_control(element_type: &str, name: &str, default_value: &str) -> Self {
        ContentElement::FormControl(
            ElementData::new(element_type)
                .with_property("name", name)
                .with_property("defaultValue", default_value)
                .with_property("value", default_value),
        )
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            ContentElement::Generic(_) => ElementKind::Generic,
            ContentElement::FormControl(_) => ElementKind::FormControl,
            ContentElement::Gadget(_) => ElementKind::Gadget,
            ContentElement::Image(_) => ElementKind::Image,
        }
    }

    pub fn data(&self) -> &ElementData {
        match self {
            ContentElement::Generic(data)
            | ContentElement::FormControl(data)
            | ContentElement::Gadget(data)
            | ContentElement::Image(data) => data,
        }
    }

    pub fn data_mut(&mut self) -> &mut ElementData {
        match self {
            ContentElement::Generic(data)
            | ContentElement::FormControl(data)
            | ContentElement::Gadget(data)
            | ContentElement::Image(data) => data,
        }
    }

    pub fn into_data(self) -> ElementData {
        match self {
            ContentElement::Generic(data)
            | ContentElement::FormControl(data)
            | ContentElement::Gadget(data)
            | ContentElement::Image(data) => data,
        }
    }

    pub fn element_type(&self) -> &str {
        &self.data().element_type
    }

    pub fn properties(&self) -> &PropertyBag {
        &self.data().properties
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.data().properties.get(name).map(String::as_str)
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.data_mut().properties.insert(name.into(), value.into());
    }

    /// Parse a text-carried property into a typed value
    pub fn property_as<T: FromStr>(&self, name: &str) -> Result<Option<T>, PropertyError> {
        match self.property(name) {
            None => Ok(None),
            Some(raw) => raw.parse::<T>().map(Some).map_err(|_| PropertyError::Malformed {
                name: name.to_string(),
                value: raw.to_string(),
            }),
        }
    }

    pub fn is_form_control(&self) -> bool {
        is_form_control(self)
    }

    pub fn is_gadget(&self) -> bool {
        matches!(self, ContentElement::Gadget(_))
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ContentElement::Image(_))
    }

    // Image

    pub fn url(&self) -> Option<&str> {
        self.property("url")
    }

    pub fn attachment_id(&self) -> Option<&str> {
        self.property("attachmentId")
    }

    pub fn caption(&self) -> Option<&str> {
        self.property("caption")
    }

    pub fn width(&self) -> Result<Option<u32>, PropertyError> {
        self.property_as("width")
    }

    pub fn height(&self) -> Result<Option<u32>, PropertyError> {
        self.property_as("height")
    }

    pub fn set_width(&mut self, width: u32) {
        self.set_property("width", width.to_string());
    }

    pub fn set_height(&mut self, height: u32) {
        self.set_property("height", height.to_string());
    }

    // Form controls

    pub fn name(&self) -> Option<&str> {
        self.property("name")
    }

    pub fn label(&self) -> Option<&str> {
        self.property("label")
    }

    pub fn value(&self) -> Option<&str> {
        self.property("value")
    }

    pub fn default_value(&self) -> Option<&str> {
        self.property("defaultValue")
    }

    /// Arbitrary gadget state field
    pub fn field(&self, name: &str) -> Option<&str> {
        self.property(name)
    }
}

/// Capability check replacing the form-element marker grouping
pub fn is_form_control(element: &ContentElement) -> bool {
    matches!(element, ContentElement::FormControl(_))
}
