//! # Text View
//!
//! Content edits on one blip's document. Each edit is applied to the local
//! document and recorded as one `DOCUMENT_*` operation addressed to the blip.
//!
//! ```text
//! "Hi ␣ there"      position 3 holds an element
//!  0123456789
//! insert(0, ">> ")  → DOCUMENT_INSERT index=0 "…"  element moves to 6
//! delete(0..3)      → DOCUMENT_DELETE range {0,3}  element back at 3
//! ```

use crate::document::WaveModel;
use crate::form_view::FormView;
use wavebridge_model::{
    Annotation, ContentElement, Document, DocumentItem, OperationProperty, OperationRecord, OperationType, Range,
};

pub struct TextView<'m> {
    model: &'m mut WaveModel,
    blip_id: String,
}

impl<'m> TextView<'m> {
    pub(crate) fn new(model: &'m mut WaveModel, blip_id: String) -> Self {
        Self { model, blip_id }
    }

    pub fn blip_id(&self) -> &str {
        &self.blip_id
    }

    pub fn document(&self) -> &Document {
        &self.model.blips[&self.blip_id].document
    }

    pub fn text(&self) -> &str {
        &self.document().content
    }

    pub fn len(&self) -> usize {
        self.document().len()
    }

    pub fn is_empty(&self) -> bool {
        self.document().is_empty()
    }

    /// Elements keyed by position, in document order
    pub fn elements(&self) -> impl Iterator<Item = (usize, &ContentElement)> {
        self.document().elements.iter().map(|(&position, element)| (position, element))
    }

    pub fn element_at(&self, position: usize) -> Option<&ContentElement> {
        self.document().element_at(position)
    }

    pub fn items(&self) -> Vec<DocumentItem<'_>> {
        self.document().items()
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.document().annotations
    }

    pub fn position_of(&self, element: &ContentElement) -> Option<usize> {
        self.document().position_of(element)
    }

    /// Form-control view over the same document
    pub fn form(self) -> FormView<'m> {
        FormView::new(self)
    }

    pub fn append(&mut self, text: &str) {
        self.edit(|doc| doc.append_text(text));
        self.record(OperationType::DocumentAppend, None, OperationProperty::Text(text.to_string()));
    }

    pub fn insert(&mut self, position: usize, text: &str) {
        self.edit(|doc| doc.insert_text(position, text));
        self.record(
            OperationType::DocumentInsert,
            Some(position),
            OperationProperty::Text(text.to_string()),
        );
    }

    pub fn delete(&mut self, range: Range) {
        self.edit(|doc| doc.delete_range(range));
        self.record(OperationType::DocumentDelete, None, OperationProperty::Range(range));
    }

    /// Replace the whole document with plain text
    pub fn replace(&mut self, text: &str) {
        self.edit(|doc| doc.replace_all(text));
        self.record(OperationType::DocumentReplace, None, OperationProperty::Text(text.to_string()));
    }

    /// Returns the position the element was placed at
    pub fn append_element(&mut self, element: ContentElement) -> usize {
        let position = self.edit(|doc| doc.append_element(element.clone())).unwrap_or_default();
        self.record(OperationType::DocumentElementAppend, None, OperationProperty::Element(element));
        position
    }

    pub fn insert_element(&mut self, position: usize, element: ContentElement) -> usize {
        let placed = self
            .edit(|doc| doc.insert_element(position, element.clone()))
            .unwrap_or(position);
        self.record(
            OperationType::DocumentElementInsert,
            Some(position),
            OperationProperty::Element(element),
        );
        placed
    }

    /// Returns the removed element, if one was at `position`
    pub fn delete_element(&mut self, position: usize) -> Option<ContentElement> {
        let removed = self.edit(|doc| doc.remove_element(position)).flatten();
        self.record(OperationType::DocumentElementDelete, Some(position), OperationProperty::None);
        removed
    }

    /// Returns the element that was replaced, if one was at `position`
    pub fn replace_element(&mut self, position: usize, element: ContentElement) -> Option<ContentElement> {
        let replaced = self
            .edit(|doc| doc.replace_element(position, element.clone()))
            .flatten();
        self.record(
            OperationType::DocumentElementReplace,
            Some(position),
            OperationProperty::Element(element),
        );
        replaced
    }

    pub fn set_annotation(&mut self, name: &str, value: &str, range: Range) {
        let annotation = Annotation::new(name, value, range);
        self.edit(|doc| doc.set_annotation(annotation.clone()));
        self.record(OperationType::DocumentAnnotationSet, None, OperationProperty::Annotation(annotation));
    }

    /// Clear `name` over `range`; the record carries an empty value
    pub fn delete_annotation(&mut self, name: &str, range: Range) {
        self.edit(|doc| doc.delete_annotation(name, range));
        self.record(
            OperationType::DocumentAnnotationDelete,
            None,
            OperationProperty::Annotation(Annotation::new(name, "", range)),
        );
    }

    fn edit<T>(&mut self, apply: impl FnOnce(&mut Document) -> T) -> Option<T> {
        self.model
            .blips
            .get_mut(&self.blip_id)
            .map(|blip| apply(&mut blip.document))
    }

    fn record(&mut self, op_type: OperationType, position: Option<usize>, property: OperationProperty) {
        let blip = &self.model.blips[&self.blip_id];
        let mut operation = OperationRecord::new(op_type, &blip.wave_id, &blip.wavelet_id, property)
            .with_blip_id(Some(self.blip_id.clone()));
        if let Some(position) = position {
            operation = operation.with_index(i32::try_from(position).unwrap_or(i32::MAX));
        }
        self.model.record(operation);
    }
}
