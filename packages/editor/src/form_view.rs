//! # Form View
//!
//! Form controls of one blip document, addressed by their `name` property.
//! Mutations delegate to [`TextView`] so each still records one operation.

use crate::errors::EditorError;
use crate::text_view::TextView;
use wavebridge_model::ContentElement;

pub struct FormView<'m> {
    view: TextView<'m>,
}

impl<'m> FormView<'m> {
    pub(crate) fn new(view: TextView<'m>) -> Self {
        Self { view }
    }

    /// Form controls with their positions, in document order
    pub fn form_elements(&self) -> Vec<(usize, &ContentElement)> {
        self.view
            .elements()
            .filter(|(_, element)| element.is_form_control())
            .collect()
    }

    pub fn get_form_element(&self, name: &str) -> Option<&ContentElement> {
        self.find(name).and_then(|position| self.view.element_at(position))
    }

    pub fn append(&mut self, element: ContentElement) -> usize {
        self.view.append_element(element)
    }

    pub fn delete(&mut self, name: &str) -> Result<ContentElement, EditorError> {
        let position = self.position(name)?;
        self.view
            .delete_element(position)
            .ok_or_else(|| EditorError::FormElementNotFound(name.to_string()))
    }

    /// Insert directly after the control called `name`
    pub fn insert_after(&mut self, name: &str, element: ContentElement) -> Result<usize, EditorError> {
        let position = self.position(name)?;
        Ok(self.view.insert_element(position + 1, element))
    }

    pub fn insert_before(&mut self, name: &str, element: ContentElement) -> Result<usize, EditorError> {
        let position = self.position(name)?;
        Ok(self.view.insert_element(position, element))
    }

    pub fn replace(&mut self, name: &str, element: ContentElement) -> Result<ContentElement, EditorError> {
        let position = self.position(name)?;
        self.view
            .replace_element(position, element)
            .ok_or_else(|| EditorError::FormElementNotFound(name.to_string()))
    }

    pub fn into_text(self) -> TextView<'m> {
        self.view
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.view
            .elements()
            .find(|(_, element)| element.is_form_control() && element.name() == Some(name))
            .map(|(position, _)| position)
    }

    fn position(&self, name: &str) -> Result<usize, EditorError> {
        self.find(name)
            .ok_or_else(|| EditorError::FormElementNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::document::WaveModel;
    use crate::errors::EditorError;
    use std::collections::BTreeMap;
    use wavebridge_model::{BlipData, ContentElement, OperationType, WaveletData, BUTTON, CHECK, INPUT, LABEL};

    fn model() -> WaveModel {
        let wavelet = WaveletData::new("w1", "conv+root", "b1");
        let mut root = BlipData::new("w1", "conv+root", "b1");
        root.document.append_text("Form:");
        root.document.append_element(ContentElement::form_control(INPUT, "email", ""));
        root.document.append_element(ContentElement::gadget("http://g"));
        root.document.append_element(ContentElement::form_control(BUTTON, "submit", "Send"));
        let mut blips = BTreeMap::new();
        blips.insert("b1".to_string(), root);
        WaveModel::from_snapshot(wavelet, blips, "TBD_", "conv+root")
    }

    #[test]
    fn test_form_elements_skip_other_variants() {
        let mut model = model();
        let mut blip = model.blip("b1").unwrap();
        let form = blip.document().form();

        let names: Vec<Option<&str>> = form.form_elements().iter().map(|(_, e)| e.name()).collect();
        assert_eq!(names, vec![Some("email"), Some("submit")]);
        assert_eq!(form.get_form_element("submit").and_then(|e| e.value()), Some("Send"));
        assert!(form.get_form_element("missing").is_none());
    }

    #[test]
    fn test_insert_relative_to_named_control() {
        let mut model = model();
        {
            let mut blip = model.blip("b1").unwrap();
            let mut form = blip.document().form();
            let label = form
                .insert_before("email", ContentElement::form_control(LABEL, "email-label", "Email"))
                .unwrap();
            assert_eq!(label, 5);
            let check = form
                .insert_after("email", ContentElement::form_control(CHECK, "subscribe", "false"))
                .unwrap();
            assert_eq!(check, 7);
        }

        let ops = model.drain();
        assert_eq!(ops.len(), 2);
        assert!(ops.iter().all(|op| op.op_type == OperationType::DocumentElementInsert));
        assert_eq!(ops[0].index, 5);
        assert_eq!(ops[1].index, 7);
    }

    #[test]
    fn test_delete_and_replace_by_name() {
        let mut model = model();
        let mut blip = model.blip("b1").unwrap();
        let mut form = blip.document().form();

        let old = form
            .replace("submit", ContentElement::form_control(BUTTON, "submit", "Go"))
            .unwrap();
        assert_eq!(old.value(), Some("Send"));

        let removed = form.delete("email").unwrap();
        assert_eq!(removed.name(), Some("email"));
        assert_eq!(form.form_elements().len(), 1);

        assert_eq!(
            form.delete("email"),
            Err(EditorError::FormElementNotFound("email".to_string()))
        );
    }

    fn trailing_button() -> WaveModel {
        let wavelet = WaveletData::new("w1", "conv+root", "b1");
        let mut root = BlipData::new("w1", "conv+root", "b1");
        root.document.append_text("Vote: ");
        root.document
            .elements
            .insert(6, ContentElement::form_control(BUTTON, "submit", "Go"));
        let mut blips = BTreeMap::new();
        blips.insert("b1".to_string(), root);
        WaveModel::from_snapshot(wavelet, blips, "TBD_", "conv+root")
    }

    #[test]
    fn test_delete_control_at_end_of_text() {
        let mut model = trailing_button();
        {
            let mut blip = model.blip("b1").unwrap();
            let mut form = blip.document().form();
            assert_eq!(form.delete("submit").unwrap().name(), Some("submit"));
            assert!(form.get_form_element("submit").is_none());
        }

        let blip = model.get_blip("b1").unwrap();
        assert!(blip.document.elements.is_empty());
        assert_eq!(blip.document.content, "Vote: ");
        assert_eq!(model.pending_operations()[0].op_type, OperationType::DocumentElementDelete);
    }

    #[test]
    fn test_insert_after_control_at_end_of_text() {
        let mut model = trailing_button();
        let mut blip = model.blip("b1").unwrap();
        let mut form = blip.document().form();

        let placed = form
            .insert_after("submit", ContentElement::form_control(CHECK, "agree", "false"))
            .unwrap();

        assert_eq!(placed, 7);
        let names: Vec<Option<&str>> = form.form_elements().iter().map(|(_, e)| e.name()).collect();
        assert_eq!(names, vec![Some("submit"), Some("agree")]);
    }
}
