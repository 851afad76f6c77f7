//! # Wave Model
//!
//! Plain data types shared by the codec and the editor: wavelets, blips,
//! inline content elements, inbound events and outbound operations.
//!
//! ```text
//! EventMessageBundle
//!   ├─ events: [EventRecord]
//!   ├─ wavelet: WaveletData ── rootBlipId
//!   └─ blips: { blipId → BlipData ── parent / children (ids only)
//!                                  └─ Document: text + elements + annotations }
//!
//! OperationMessageBundle
//!   ├─ version
//!   └─ operations: [OperationRecord]
//! ```

pub mod blip;
pub mod bundle;
pub mod document;
pub mod element;
pub mod event;
pub mod operation;
pub mod wavelet;

pub use blip::BlipData;
pub use bundle::{EventMessageBundle, OperationMessageBundle};
pub use document::{Annotation, Document, DocumentItem, Range, StyleType, StyledText};
pub use element::{
    is_form_control, ContentElement, ElementData, ElementKind, PropertyBag, PropertyError, BUTTON, CHECK, GADGET,
    IMAGE, INLINE_BLIP, INPUT, LABEL, PASSWORD, RADIO_BUTTON, RADIO_BUTTON_GROUP, TEXTAREA,
};
pub use event::{EventRecord, EventType};
pub use operation::{OperationProperty, OperationRecord, OperationType, PropertyShape, NO_INDEX};
pub use wavelet::{WaveletData, WaveletKey};
