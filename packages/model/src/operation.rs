//! # Operations
//!
//! Recorded intents to mutate remote state. A record is built once by the
//! editor when the mutating call happens and never changes afterwards.

use crate::blip::BlipData;
use crate::document::{Annotation, Range};
use crate::element::ContentElement;
use crate::wavelet::WaveletData;

/// `index` value of records that carry no position
pub const NO_INDEX: i32 = -1;

/// Shape of the `property` payload for an operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyShape {
    None,
    Text,
    Wavelet,
    Blip,
    Element,
    Range,
    Annotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    WaveletAppendBlip,
    WaveletSetTitle,
    WaveletAddParticipant,
    WaveletRemoveParticipant,
    WaveletDatadocSet,
    WaveletDatadocAppend,
    WaveletCreate,
    BlipCreateChild,
    BlipDelete,
    DocumentAppend,
    DocumentInsert,
    DocumentDelete,
    DocumentReplace,
    DocumentElementAppend,
    DocumentElementInsert,
    DocumentElementDelete,
    DocumentElementReplace,
    DocumentAnnotationSet,
    DocumentAnnotationDelete,
}

impl OperationType {
    pub const ALL: [OperationType; 19] = [
        OperationType::WaveletAppendBlip,
        OperationType::WaveletSetTitle,
        OperationType::WaveletAddParticipant,
        OperationType::WaveletRemoveParticipant,
        OperationType::WaveletDatadocSet,
        OperationType::WaveletDatadocAppend,
        OperationType::WaveletCreate,
        OperationType::BlipCreateChild,
        OperationType::BlipDelete,
        OperationType::DocumentAppend,
        OperationType::DocumentInsert,
        OperationType::DocumentDelete,
        OperationType::DocumentReplace,
        OperationType::DocumentElementAppend,
        OperationType::DocumentElementInsert,
        OperationType::DocumentElementDelete,
        OperationType::DocumentElementReplace,
        OperationType::DocumentAnnotationSet,
        OperationType::DocumentAnnotationDelete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OperationType::WaveletAppendBlip => "WAVELET_APPEND_BLIP",
            OperationType::WaveletSetTitle => "WAVELET_SET_TITLE",
            OperationType::WaveletAddParticipant => "WAVELET_ADD_PARTICIPANT",
            OperationType::WaveletRemoveParticipant => "WAVELET_REMOVE_PARTICIPANT",
            OperationType::WaveletDatadocSet => "WAVELET_DATADOC_SET",
            OperationType::WaveletDatadocAppend => "WAVELET_DATADOC_APPEND",
            OperationType::WaveletCreate => "WAVELET_CREATE",
            OperationType::BlipCreateChild => "BLIP_CREATE_CHILD",
            OperationType::BlipDelete => "BLIP_DELETE",
            OperationType::DocumentAppend => "DOCUMENT_APPEND",
            OperationType::DocumentInsert => "DOCUMENT_INSERT",
            OperationType::DocumentDelete => "DOCUMENT_DELETE",
            OperationType::DocumentReplace => "DOCUMENT_REPLACE",
            OperationType::DocumentElementAppend => "DOCUMENT_ELEMENT_APPEND",
            OperationType::DocumentElementInsert => "DOCUMENT_ELEMENT_INSERT",
            OperationType::DocumentElementDelete => "DOCUMENT_ELEMENT_DELETE",
            OperationType::DocumentElementReplace => "DOCUMENT_ELEMENT_REPLACE",
            OperationType::DocumentAnnotationSet => "DOCUMENT_ANNOTATION_SET",
            OperationType::DocumentAnnotationDelete => "DOCUMENT_ANNOTATION_DELETE",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    pub fn property_shape(self) -> PropertyShape {
        match self {
            OperationType::WaveletAppendBlip | OperationType::BlipCreateChild => PropertyShape::Blip,
            OperationType::WaveletCreate => PropertyShape::Wavelet,
            OperationType::WaveletSetTitle
            | OperationType::WaveletAddParticipant
            | OperationType::WaveletRemoveParticipant
            | OperationType::WaveletDatadocSet
            | OperationType::WaveletDatadocAppend
            | OperationType::DocumentAppend
            | OperationType::DocumentInsert
            | OperationType::DocumentReplace => PropertyShape::Text,
            OperationType::DocumentDelete => PropertyShape::Range,
            OperationType::DocumentElementAppend
            | OperationType::DocumentElementInsert
            | OperationType::DocumentElementReplace => PropertyShape::Element,
            OperationType::DocumentAnnotationSet | OperationType::DocumentAnnotationDelete => {
                PropertyShape::Annotation
            }
            OperationType::BlipDelete | OperationType::DocumentElementDelete => PropertyShape::None,
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of an operation record
#[derive(Debug, Clone, PartialEq)]
pub enum OperationProperty {
    None,
    Text(String),
    Wavelet(Box<WaveletData>),
    Blip(Box<BlipData>),
    Element(ContentElement),
    Range(Range),
    Annotation(Annotation),
}

impl OperationProperty {
    pub fn shape(&self) -> PropertyShape {
        match self {
            OperationProperty::None => PropertyShape::None,
            OperationProperty::Text(_) => PropertyShape::Text,
            OperationProperty::Wavelet(_) => PropertyShape::Wavelet,
            OperationProperty::Blip(_) => PropertyShape::Blip,
            OperationProperty::Element(_) => PropertyShape::Element,
            OperationProperty::Range(_) => PropertyShape::Range,
            OperationProperty::Annotation(_) => PropertyShape::Annotation,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OperationProperty::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_blip(&self) -> Option<&BlipData> {
        match self {
            OperationProperty::Blip(blip) => Some(blip),
            _ => None,
        }
    }

    pub fn as_wavelet(&self) -> Option<&WaveletData> {
        match self {
            OperationProperty::Wavelet(wavelet) => Some(wavelet),
            _ => None,
        }
    }
}

/// One recorded mutation.
///
/// `blip_id` also carries the write-back document name for
/// `WAVELET_APPEND_BLIP`/`WAVELET_CREATE` and the data document name for
/// the `WAVELET_DATADOC_*` types.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    pub op_type: OperationType,
    pub wave_id: String,
    pub wavelet_id: String,
    pub blip_id: Option<String>,
    pub index: i32,
    pub property: OperationProperty,
}

impl OperationRecord {
    pub fn new(op_type: OperationType, wave_id: &str, wavelet_id: &str, property: OperationProperty) -> Self {
        Self {
            op_type,
            wave_id: wave_id.to_string(),
            wavelet_id: wavelet_id.to_string(),
            blip_id: None,
            index: NO_INDEX,
            property,
        }
    }

    pub fn with_blip_id(mut self, blip_id: Option<String>) -> Self {
        self.blip_id = blip_id;
        self
    }

    pub fn with_index(mut self, index: i32) -> Self {
        self.index = index;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for op in OperationType::ALL {
            assert_eq!(OperationType::from_wire(op.as_str()), Some(op));
        }
        assert_eq!(OperationType::from_wire("wavelet_set_title"), None);
    }

    #[test]
    fn test_wavelet_property_shapes() {
        assert_eq!(OperationType::WaveletAppendBlip.property_shape(), PropertyShape::Blip);
        assert_eq!(OperationType::WaveletCreate.property_shape(), PropertyShape::Wavelet);
        assert_eq!(OperationType::WaveletDatadocAppend.property_shape(), PropertyShape::Text);
        assert_eq!(OperationType::BlipDelete.property_shape(), PropertyShape::None);
    }

    #[test]
    fn test_record_defaults_to_no_index() {
        let record = OperationRecord::new(
            OperationType::WaveletSetTitle,
            "w1",
            "conv+root",
            OperationProperty::Text("Hi".to_string()),
        );
        assert_eq!(record.index, NO_INDEX);
        assert_eq!(record.blip_id, None);
        assert_eq!(record.property.as_text(), Some("Hi"));
    }
}
