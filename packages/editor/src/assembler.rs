//! # Bundle Assembler
//!
//! One request/response cycle: open an inbound event bundle into a mirror,
//! let the caller read events and mutate, then close into the outbound
//! operation bundle.
//!
//! ```text
//! bytes ─ decode ─▶ BundleAssembler { model, ids } ─ close ─▶ OperationMessageBundle
//!                       │
//!                       └─▶ events (returned to the caller)
//! ```
//!
//! The assembler owns the placeholder id counter for its cycle. Nothing is
//! carried over between cycles.

use crate::document::WaveModel;
use wavebridge_codec::{decode_bundle, encode_bundle, CodecConfig, DecodeError, EncodeError};
use wavebridge_common::{BridgeConfig, CommonResult};
use wavebridge_model::{EventMessageBundle, EventRecord, OperationMessageBundle};

pub struct BundleAssembler<'c> {
    config: &'c BridgeConfig,
    codec: CodecConfig,
    model: WaveModel,
}

impl<'c> BundleAssembler<'c> {
    /// Materialize the mirror of a decoded bundle
    pub fn open(config: &'c BridgeConfig, bundle: EventMessageBundle) -> (Self, Vec<EventRecord>) {
        let (model, events) = WaveModel::from_bundle(bundle, &config.placeholder_prefix, &config.root_wavelet_id);

        tracing::info!(
            "[Assembler] Opened {} with {} events, {} blips",
            model.wavelet_data().key(),
            events.len(),
            model.blips().count()
        );

        let assembler = Self {
            config,
            codec: config.codec_config(),
            model,
        };
        (assembler, events)
    }

    /// Decode message bytes and open the result
    pub fn decode(config: &'c BridgeConfig, bytes: &[u8]) -> Result<(Self, Vec<EventRecord>), DecodeError> {
        let codec = config.codec_config();
        let bundle = decode_bundle(bytes, &codec)?;
        Ok(Self::open(config, bundle))
    }

    pub fn model(&self) -> &WaveModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut WaveModel {
        &mut self.model
    }

    pub fn codec(&self) -> &CodecConfig {
        &self.codec
    }

    /// Drain the log into an outbound bundle stamped with the configured version
    pub fn close(mut self) -> OperationMessageBundle {
        let operations = self.model.drain();
        tracing::info!(
            "[Assembler] Closed {} with {} operations",
            self.model.wavelet_data().key(),
            operations.len()
        );
        OperationMessageBundle::new(self.config.version.clone(), operations)
    }

    pub fn close_to_bytes(self) -> Result<Vec<u8>, EncodeError> {
        let codec = self.codec.clone();
        let bundle = self.close();
        encode_bundle(&bundle, &codec)
    }
}

/// Run one whole cycle over message bytes: decode, hand the mirror and
/// events to `respond`, encode whatever it recorded
pub fn process<F>(config: &BridgeConfig, bytes: &[u8], respond: F) -> CommonResult<Vec<u8>>
where
    F: FnOnce(&mut WaveModel, &[EventRecord]),
{
    let (mut assembler, events) = BundleAssembler::decode(config, bytes)?;
    respond(assembler.model_mut(), &events);
    Ok(assembler.close_to_bytes()?)
}
