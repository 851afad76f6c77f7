//! Property-based tests for mutation sequences.

use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};
use wavebridge_editor::WaveModel;
use wavebridge_model::{BlipData, ContentElement, OperationType, Range, WaveletData};

/// One mutating call against the mirror
#[derive(Clone, Debug)]
enum Call {
    AppendBlip,
    SetTitle(String),
    AddParticipant(String),
    RemoveParticipant(String),
    SetDataDocument(String, String),
    AppendDataDocument(String, String),
    CreateWavelet,
    CreateChild,
    AppendText(String),
    DeleteRange(usize, usize),
    AppendGadget,
    SetAnnotation(usize, usize),
}

fn arbitrary_call() -> impl Strategy<Value = Call> {
    prop_oneof![
        Just(Call::AppendBlip),
        "[a-z]{0,8}".prop_map(Call::SetTitle),
        "[a-z]{1,5}@example\\.com".prop_map(Call::AddParticipant),
        "[a-z]{1,5}@example\\.com".prop_map(Call::RemoveParticipant),
        ("[a-z]{1,4}", "[a-z]{0,6}").prop_map(|(name, data)| Call::SetDataDocument(name, data)),
        ("[a-z]{1,4}", "[a-z]{0,6}").prop_map(|(name, data)| Call::AppendDataDocument(name, data)),
        Just(Call::CreateWavelet),
        Just(Call::CreateChild),
        "[a-z ]{0,10}".prop_map(Call::AppendText),
        (0usize..20, 0usize..20).prop_map(|(start, end)| Call::DeleteRange(start, end)),
        Just(Call::AppendGadget),
        (0usize..20, 0usize..20).prop_map(|(start, end)| Call::SetAnnotation(start, end)),
    ]
}

fn expected_type(call: &Call) -> OperationType {
    match call {
        Call::AppendBlip => OperationType::WaveletAppendBlip,
        Call::SetTitle(_) => OperationType::WaveletSetTitle,
        Call::AddParticipant(_) => OperationType::WaveletAddParticipant,
        Call::RemoveParticipant(_) => OperationType::WaveletRemoveParticipant,
        Call::SetDataDocument(..) => OperationType::WaveletDatadocSet,
        Call::AppendDataDocument(..) => OperationType::WaveletDatadocAppend,
        Call::CreateWavelet => OperationType::WaveletCreate,
        Call::CreateChild => OperationType::BlipCreateChild,
        Call::AppendText(_) => OperationType::DocumentAppend,
        Call::DeleteRange(..) => OperationType::DocumentDelete,
        Call::AppendGadget => OperationType::DocumentElementAppend,
        Call::SetAnnotation(..) => OperationType::DocumentAnnotationSet,
    }
}

/// Snapshot whose ids collide with the placeholder scheme
fn snapshot() -> WaveModel {
    let wavelet = WaveletData::new("TBD_2", "conv+root", "b1");
    let mut root = BlipData::new("TBD_2", "conv+root", "b1");
    root.child_blip_ids = vec!["TBD_1".to_string(), "TBD_4".to_string()];
    root.document.append_text("hello world");

    let mut blips = BTreeMap::new();
    blips.insert("b1".to_string(), root);
    WaveModel::from_snapshot(wavelet, blips, "TBD_", "conv+root")
}

/// Apply a call; returns the id it synthesized, if any
fn apply(model: &mut WaveModel, call: &Call) -> Vec<String> {
    match call {
        Call::AppendBlip => vec![model.wavelet().append_blip()],
        Call::SetTitle(title) => {
            model.wavelet().set_title(title);
            vec![]
        }
        Call::AddParticipant(p) => {
            model.wavelet().add_participant(p);
            vec![]
        }
        Call::RemoveParticipant(p) => {
            model.wavelet().remove_participant(p);
            vec![]
        }
        Call::SetDataDocument(name, data) => {
            model.wavelet().set_data_document(name, data);
            vec![]
        }
        Call::AppendDataDocument(name, data) => {
            model.wavelet().append_data_document(name, data);
            vec![]
        }
        Call::CreateWavelet => {
            let key = model.wavelet().create_wavelet(&[], None);
            let root = model
                .find_wavelet(&key)
                .map(|w| w.root_blip_id.clone())
                .unwrap_or_default();
            vec![key.wave_id, root]
        }
        Call::CreateChild => vec![model.blip("b1").unwrap().create_child()],
        Call::AppendText(text) => {
            model.blip("b1").unwrap().document().append(text);
            vec![]
        }
        Call::DeleteRange(start, end) => {
            model.blip("b1").unwrap().document().delete(Range::new(*start, *end));
            vec![]
        }
        Call::AppendGadget => {
            model
                .blip("b1")
                .unwrap()
                .document()
                .append_element(ContentElement::gadget("http://g"));
            vec![]
        }
        Call::SetAnnotation(start, end) => {
            model
                .blip("b1")
                .unwrap()
                .document()
                .set_annotation("style/bold", "true", Range::new(*start, *end));
            vec![]
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// N calls drain to N records, in call order
    #[test]
    fn log_matches_call_sequence(calls in prop::collection::vec(arbitrary_call(), 0..40)) {
        let mut model = snapshot();
        for call in &calls {
            apply(&mut model, call);
        }

        let recorded: Vec<OperationType> = model.drain().iter().map(|op| op.op_type).collect();
        let expected: Vec<OperationType> = calls.iter().map(expected_type).collect();
        prop_assert_eq!(recorded, expected);
        prop_assert!(model.drain().is_empty());
    }

    /// Synthesized ids never repeat and never shadow a snapshot id
    #[test]
    fn synthesized_ids_are_unique(calls in prop::collection::vec(arbitrary_call(), 0..40)) {
        let mut model = snapshot();
        let reserved: HashSet<&str> = ["TBD_1", "TBD_2", "TBD_4", "b1", "conv+root"].into_iter().collect();

        let mut seen = HashSet::new();
        for call in &calls {
            for id in apply(&mut model, call) {
                prop_assert!(!reserved.contains(id.as_str()), "reused snapshot id {}", id);
                prop_assert!(seen.insert(id.clone()), "duplicate id {}", id);
            }
        }
    }

    /// Reads right after a write observe it
    #[test]
    fn reads_follow_writes(title in "[a-z]{0,8}", name in "[a-z]{1,4}", data in "[a-z]{0,6}") {
        let mut model = snapshot();
        model.wavelet().set_title(&title);
        prop_assert_eq!(model.get_title(), title.as_str());

        model.wavelet().set_data_document(&name, &data);
        prop_assert_eq!(model.get_data_document(&name), Some(data.as_str()));
    }
}
