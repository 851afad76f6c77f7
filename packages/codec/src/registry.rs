//! # Element Registry
//!
//! Maps the type-discriminator carried by every element bag to the variant
//! that decodes it, and back. Built once per assembler and passed by
//! reference; nothing here is global.

use wavebridge_model::{ContentElement, ElementData, ElementKind};

/// Discriminator field used by the robot wire protocol
pub const DEFAULT_DISCRIMINATOR_FIELD: &str = "javaClass";

/// Wire class tag of each variant
pub fn default_tag(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Generic => "com.google.wave.api.Element",
        ElementKind::FormControl => "com.google.wave.api.FormElement",
        ElementKind::Gadget => "com.google.wave.api.Gadget",
        ElementKind::Image => "com.google.wave.api.Image",
    }
}

/// Decode half of a registry entry
pub type ElementDecoder = fn(ElementData) -> ContentElement;

#[derive(Debug, Clone)]
pub struct ElementCodec {
    pub kind: ElementKind,
    pub tag: String,
    pub decode: ElementDecoder,
}

fn decoder_for(kind: ElementKind) -> ElementDecoder {
    match kind {
        ElementKind::Generic => ContentElement::Generic,
        ElementKind::FormControl => ContentElement::FormControl,
        ElementKind::Gadget => ContentElement::Gadget,
        ElementKind::Image => ContentElement::Image,
    }
}

/// Closed set of element codecs plus the discriminator field name
#[derive(Debug, Clone)]
pub struct CodecConfig {
    discriminator_field: String,
    entries: Vec<ElementCodec>,
}

impl CodecConfig {
    /// Registry with the standard wire tags
    pub fn new() -> Self {
        Self::with_discriminator(DEFAULT_DISCRIMINATOR_FIELD)
    }

    pub fn with_discriminator(field: impl Into<String>) -> Self {
        let entries = ElementKind::ALL
            .iter()
            .map(|&kind| ElementCodec {
                kind,
                tag: default_tag(kind).to_string(),
                decode: decoder_for(kind),
            })
            .collect();

        Self {
            discriminator_field: field.into(),
            entries,
        }
    }

    /// Override the wire tag of one variant
    pub fn with_tag(mut self, kind: ElementKind, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        for entry in &mut self.entries {
            if entry.kind == kind {
                entry.tag = tag.clone();
            }
        }
        self
    }

    pub fn discriminator_field(&self) -> &str {
        &self.discriminator_field
    }

    pub fn lookup(&self, tag: &str) -> Option<&ElementCodec> {
        self.entries.iter().find(|entry| entry.tag == tag)
    }

    pub fn tag_for(&self, kind: ElementKind) -> &str {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| entry.tag.as_str())
            .unwrap_or_else(|| default_tag(kind))
    }

    pub fn entries(&self) -> &[ElementCodec] {
        &self.entries
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}
