//! # Blip Handle
//!
//! Reads and structural mutations on one materialized blip. Document
//! content edits go through [`Blip::document`].

use crate::document::{Resolved, WaveModel};
use crate::text_view::TextView;
use wavebridge_model::{BlipData, Document, OperationProperty, OperationRecord, OperationType};

pub struct Blip<'m> {
    model: &'m mut WaveModel,
    blip_id: String,
}

impl<'m> Blip<'m> {
    /// `blip_id` must be materialized in `model`
    pub(crate) fn new(model: &'m mut WaveModel, blip_id: String) -> Self {
        Self { model, blip_id }
    }

    pub fn data(&self) -> &BlipData {
        &self.model.blips[&self.blip_id]
    }

    pub fn blip_id(&self) -> &str {
        &self.blip_id
    }

    pub fn wave_id(&self) -> &str {
        &self.data().wave_id
    }

    pub fn wavelet_id(&self) -> &str {
        &self.data().wavelet_id
    }

    pub fn creator(&self) -> &str {
        &self.data().creator
    }

    pub fn contributors(&self) -> &[String] {
        &self.data().contributors
    }

    pub fn last_modified_time(&self) -> i64 {
        self.data().last_modified_time
    }

    pub fn version(&self) -> i64 {
        self.data().version
    }

    pub fn content(&self) -> &Document {
        &self.data().document
    }

    pub fn child_blip_ids(&self) -> &[String] {
        &self.data().child_blip_ids
    }

    pub fn has_children(&self) -> bool {
        self.data().has_children()
    }

    pub fn get_child(&self, index: usize) -> Resolved<'_> {
        self.model.get_child(&self.blip_id, index)
    }

    pub fn is_child_available(&self, index: usize) -> bool {
        self.model.is_child_available(&self.blip_id, index)
    }

    /// Materialized children only
    pub fn children(&self) -> Vec<&BlipData> {
        self.model.get_children(&self.blip_id)
    }

    pub fn parent(&self) -> Resolved<'_> {
        self.model.get_parent(&self.blip_id)
    }

    pub fn is_parent_available(&self) -> bool {
        self.model.is_parent_available(&self.blip_id)
    }

    /// Reply to this blip; returns the child's placeholder id
    pub fn create_child(&mut self) -> String {
        let child_id = self.model.new_id();
        let mut child = BlipData::new(self.wave_id(), self.wavelet_id(), child_id.clone());
        child.parent_blip_id = Some(self.blip_id.clone());

        if let Some(blip) = self.model.blips.get_mut(&self.blip_id) {
            blip.child_blip_ids.push(child_id.clone());
        }
        self.model.blips.insert(child_id.clone(), child.clone());

        self.record(OperationType::BlipCreateChild, OperationProperty::Blip(Box::new(child)));
        child_id
    }

    /// Delete this blip together with its materialized descendants
    pub fn delete(mut self) {
        self.record(OperationType::BlipDelete, OperationProperty::None);

        if let Some(parent_id) = self.data().parent_blip_id.clone() {
            if let Some(parent) = self.model.blips.get_mut(&parent_id) {
                parent.child_blip_ids.retain(|id| *id != self.blip_id);
            }
        }

        let mut pending = vec![self.blip_id.clone()];
        while let Some(id) = pending.pop() {
            if let Some(removed) = self.model.blips.remove(&id) {
                pending.extend(removed.child_blip_ids);
            }
        }
    }

    /// Content edit view of this blip's document
    pub fn document(&mut self) -> TextView<'_> {
        TextView::new(self.model, self.blip_id.clone())
    }

    fn record(&mut self, op_type: OperationType, property: OperationProperty) {
        let operation = OperationRecord::new(op_type, self.wave_id(), self.wavelet_id(), property)
            .with_blip_id(Some(self.blip_id.clone()));
        self.model.record(operation);
    }
}
