//! # Wave Codec
//!
//! Converts between the robot wire protocol (JSON) and the model types.
//!
//! ```text
//! bytes ── decode_bundle ──▶ EventMessageBundle ──▶ editor
//! bytes ◀── encode_bundle ── OperationMessageBundle ◀── editor
//! ```
//!
//! Content elements share one wire shape and are told apart by a
//! discriminator field looked up in the [`CodecConfig`] registry. Property
//! values stay strings on decode; typed conversion happens in the model's
//! accessors.

mod bundle;
mod element;
mod error;
mod event;
mod operation;
mod registry;
mod snapshot;
mod wire;

pub use bundle::{
    decode_bundle, decode_event_bundle, decode_operation_bundle, decode_operation_bytes, encode_bundle,
    encode_event_bundle, encode_operation_bundle,
};
pub use element::{decode_element, encode_element};
pub use error::{DecodeError, DecodeResult, EncodeError};
pub use event::{decode_event, encode_event};
pub use operation::{decode_operation, encode_operation};
pub use registry::{default_tag, CodecConfig, ElementCodec, ElementDecoder, DEFAULT_DISCRIMINATOR_FIELD};
pub use snapshot::{decode_blip, decode_blips, decode_wavelet, encode_blip, encode_wavelet};
