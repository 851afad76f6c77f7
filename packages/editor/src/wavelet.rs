//! # Wavelet Handle
//!
//! Wavelet-level mutations. Each call updates the mirror and records one
//! operation addressed to this wavelet.

use crate::blip::Blip;
use crate::document::{Resolved, WaveModel};
use crate::errors::EditorError;
use wavebridge_model::{
    BlipData, OperationProperty, OperationRecord, OperationType, StyledText, WaveletData, WaveletKey, NO_INDEX,
};

pub struct Wavelet<'m> {
    model: &'m mut WaveModel,
    index: usize,
}

impl<'m> Wavelet<'m> {
    pub(crate) fn new(model: &'m mut WaveModel, index: usize) -> Self {
        Self { model, index }
    }

    pub fn data(&self) -> &WaveletData {
        &self.model.wavelets[self.index]
    }

    fn data_mut(&mut self) -> &mut WaveletData {
        &mut self.model.wavelets[self.index]
    }

    pub fn key(&self) -> WaveletKey {
        self.data().key()
    }

    pub fn wave_id(&self) -> &str {
        &self.data().wave_id
    }

    pub fn wavelet_id(&self) -> &str {
        &self.data().wavelet_id
    }

    pub fn root_blip_id(&self) -> &str {
        &self.data().root_blip_id
    }

    pub fn root_blip(&self) -> Resolved<'_> {
        self.model.resolve(Some(self.data().root_blip_id.as_str()))
    }

    pub fn title(&self) -> &str {
        &self.data().title
    }

    pub fn creator(&self) -> &str {
        &self.data().creator
    }

    pub fn creation_time(&self) -> i64 {
        self.data().creation_time
    }

    pub fn last_modified_time(&self) -> i64 {
        self.data().last_modified_time
    }

    pub fn version(&self) -> i64 {
        self.data().version
    }

    pub fn participants(&self) -> &[String] {
        &self.data().participants
    }

    pub fn data_document(&self, name: &str) -> Option<&str> {
        self.data().data_document(name)
    }

    pub fn has_data_document(&self, name: &str) -> bool {
        self.data().data_documents.contains_key(name)
    }

    pub fn data_documents(&self) -> &std::collections::BTreeMap<String, String> {
        &self.data().data_documents
    }

    /// Edit handle for a blip of this wavelet
    pub fn blip(&mut self, blip_id: &str) -> Result<Blip<'_>, EditorError> {
        self.model.blip(blip_id)
    }

    /// Append a blip to the root thread; returns its placeholder id.
    ///
    /// Locally the new blip becomes the last child of the root blip.
    pub fn append_blip(&mut self) -> String {
        self.append_blip_inner(None)
    }

    /// Like [`Wavelet::append_blip`], asking the remote side to write the
    /// real blip id back into the named data document
    pub fn append_blip_with_writeback(&mut self, data_document: &str) -> String {
        self.append_blip_inner(Some(data_document.to_string()))
    }

    fn append_blip_inner(&mut self, writeback: Option<String>) -> String {
        let blip_id = self.model.new_id();
        let payload = BlipData::new(self.wave_id(), self.wavelet_id(), blip_id.clone());
        let root_id = self.root_blip_id().to_string();

        let mut local = payload.clone();
        if !root_id.is_empty() {
            local.parent_blip_id = Some(root_id.clone());
        }
        if let Some(root) = self.model.blips.get_mut(&root_id) {
            root.child_blip_ids.push(blip_id.clone());
        }
        self.model.blips.insert(blip_id.clone(), local);

        self.record(OperationType::WaveletAppendBlip, OperationProperty::Blip(Box::new(payload)), writeback);
        blip_id
    }

    pub fn set_title(&mut self, title: &str) {
        self.data_mut().title = title.to_string();
        self.record(OperationType::WaveletSetTitle, OperationProperty::Text(title.to_string()), None);
    }

    /// Set the title with a style; the first style's ordinal goes in `index`
    pub fn set_styled_title(&mut self, title: &StyledText) {
        self.data_mut().title = title.text.clone();
        let index = title.styles.first().map(|style| style.ordinal()).unwrap_or(NO_INDEX);
        let operation = self
            .operation(OperationType::WaveletSetTitle, OperationProperty::Text(title.text.clone()), None)
            .with_index(index);
        self.model.record(operation);
    }

    pub fn add_participant(&mut self, participant: &str) {
        let participants = &mut self.data_mut().participants;
        if !participants.iter().any(|p| p == participant) {
            participants.push(participant.to_string());
        }
        self.record(
            OperationType::WaveletAddParticipant,
            OperationProperty::Text(participant.to_string()),
            None,
        );
    }

    /// Records the removal only. Membership changes are authoritative on the
    /// remote side, so the local participant list keeps the participant
    /// until the next snapshot.
    pub fn remove_participant(&mut self, participant: &str) {
        self.record(
            OperationType::WaveletRemoveParticipant,
            OperationProperty::Text(participant.to_string()),
            None,
        );
    }

    pub fn set_data_document(&mut self, name: &str, data: &str) {
        self.data_mut()
            .data_documents
            .insert(name.to_string(), data.to_string());
        self.record(
            OperationType::WaveletDatadocSet,
            OperationProperty::Text(data.to_string()),
            Some(name.to_string()),
        );
    }

    pub fn append_data_document(&mut self, name: &str, data: &str) {
        self.data_mut()
            .data_documents
            .entry(name.to_string())
            .or_default()
            .push_str(data);
        self.record(
            OperationType::WaveletDatadocAppend,
            OperationProperty::Text(data.to_string()),
            Some(name.to_string()),
        );
    }

    /// Create a new wave with one root blip; returns the new wavelet's key.
    ///
    /// The record is addressed to this wavelet and carries the new wavelet
    /// as payload. `writeback` names a data document that receives the real
    /// ids once the remote side has created the wave.
    pub fn create_wavelet(&mut self, participants: &[String], writeback: Option<&str>) -> WaveletKey {
        let wave_id = self.model.new_id();
        let root_blip_id = self.model.new_id();
        let wavelet_id = self.model.root_wavelet_id.clone();

        let mut created = WaveletData::new(wave_id.clone(), wavelet_id.clone(), root_blip_id.clone());
        created.participants = participants.to_vec();
        let key = created.key();

        let root = BlipData::new(wave_id, wavelet_id, root_blip_id.clone());
        self.model.blips.insert(root_blip_id, root);
        self.model.wavelets.push(created.clone());

        self.record(
            OperationType::WaveletCreate,
            OperationProperty::Wavelet(Box::new(created)),
            writeback.map(str::to_string),
        );
        key
    }

    fn operation(
        &self,
        op_type: OperationType,
        property: OperationProperty,
        blip_id: Option<String>,
    ) -> OperationRecord {
        OperationRecord::new(op_type, self.wave_id(), self.wavelet_id(), property).with_blip_id(blip_id)
    }

    fn record(&mut self, op_type: OperationType, property: OperationProperty, blip_id: Option<String>) {
        let operation = self.operation(op_type, property, blip_id);
        self.model.record(operation);
    }
}
