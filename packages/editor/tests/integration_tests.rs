//! Integration tests for editor crate

use serde_json::json;
use wavebridge_codec::{decode_operation_bytes, encode_bundle, CodecConfig};
use wavebridge_common::BridgeConfig;
use wavebridge_editor::{BundleAssembler, EditorError, Resolved};
use wavebridge_model::{ContentElement, EventType, OperationProperty, OperationType, Range, BUTTON};

fn inbound() -> Vec<u8> {
    json!({
        "events": [
            {
                "type": "form_button_clicked",
                "modifiedBy": "alice@example.com",
                "timestamp": 1700000000000i64,
                "properties": { "blipId": "b1", "button": "submit" }
            }
        ],
        "wavelet": {
            "waveId": "w1",
            "waveletId": "conv+root",
            "rootBlipId": "b1",
            "title": "Planning",
            "participants": ["alice@example.com", "bot@example.com"],
            "dataDocuments": { "state": "open" }
        },
        "blips": {
            "b1": {
                "blipId": "b1",
                "waveId": "w1",
                "waveletId": "conv+root",
                "childBlipIds": ["b2", "b9"],
                "content": "Vote: ",
                "elements": {
                    "6": {
                        "javaClass": "com.google.wave.api.FormElement",
                        "type": "BUTTON",
                        "properties": { "name": "submit", "value": "Go", "defaultValue": "Go" }
                    }
                }
            },
            "b2": {
                "blipId": "b2",
                "waveId": "w1",
                "waveletId": "conv+root",
                "parentBlipId": "b1",
                "content": "me too"
            }
        }
    })
    .to_string()
    .into_bytes()
}

#[test]
fn test_append_blip_then_set_title() {
    let bytes = json!({
        "events": [],
        "wavelet": { "waveId": "w1", "waveletId": "conv+root", "rootBlipId": "b1" },
        "blips": { "b1": { "blipId": "b1", "childBlipIds": [] } }
    })
    .to_string();
    let config = BridgeConfig::default();
    let (mut assembler, _) = BundleAssembler::decode(&config, bytes.as_bytes()).unwrap();

    let new_id = {
        let mut wavelet = assembler.model_mut().wavelet();
        let id = wavelet.append_blip();
        wavelet.set_title("Hi");
        id
    };

    let children: Vec<&str> = assembler
        .model()
        .get_children("b1")
        .iter()
        .map(|blip| blip.blip_id.as_str())
        .collect();
    assert_eq!(children, vec![new_id.as_str()]);

    let bundle = assembler.close();
    assert_eq!(bundle.operations.len(), 2);
    assert_eq!(bundle.operations[0].op_type, OperationType::WaveletAppendBlip);
    assert_eq!(bundle.operations[0].property.as_blip().unwrap().blip_id, new_id);
    assert_eq!(bundle.operations[1].op_type, OperationType::WaveletSetTitle);
    assert_eq!(bundle.operations[1].property, OperationProperty::Text("Hi".to_string()));
}

#[test]
fn test_events_and_trimmed_context() {
    let config = BridgeConfig::default();
    let (mut assembler, events) = BundleAssembler::decode(&config, &inbound()).unwrap();

    assert_eq!(events[0].event_type, EventType::FormButtonClicked);
    assert_eq!(events[0].button_name(), Some("submit"));

    let model = assembler.model();
    assert!(model.is_child_available("b1", 0));
    assert_eq!(model.get_child("b1", 1), Resolved::Unavailable("b9"));
    assert_eq!(model.get_child("b1", 2), Resolved::Missing);
    assert_eq!(model.get_data_document("state"), Some("open"));

    assert!(matches!(
        assembler.model_mut().blip("b9"),
        Err(EditorError::UnknownBlip(_))
    ));
}

#[test]
fn test_button_click_round_trip() {
    let config = BridgeConfig::default();
    let (mut assembler, events) = BundleAssembler::decode(&config, &inbound()).unwrap();
    let clicked = events[0].blip_id().unwrap().to_string();

    {
        let mut blip = assembler.model_mut().blip(&clicked).unwrap();
        let mut form = blip.document().form();
        form.replace("submit", ContentElement::form_control(BUTTON, "submit", "Thanks"))
            .unwrap();
        let mut text = form.into_text();
        text.append(" (voted)");
        text.set_annotation("style/fontWeight", "bold", Range::new(0, 4));
    }

    let model = assembler.model();
    let button = model.get_blip("b1").unwrap().document.element_at(6).unwrap();
    assert_eq!(button.value(), Some("Thanks"));
    assert!(model.get_blip("b1").unwrap().document.content.ends_with(" (voted)"));

    let types: Vec<OperationType> = model.pending_operations().iter().map(|op| op.op_type).collect();
    assert_eq!(
        types,
        vec![
            OperationType::DocumentElementReplace,
            OperationType::DocumentAppend,
            OperationType::DocumentAnnotationSet,
        ]
    );
}

#[test]
fn test_remove_participant_is_recorded_but_not_mirrored() {
    let config = BridgeConfig::default();
    let (mut assembler, _) = BundleAssembler::decode(&config, &inbound()).unwrap();

    assembler.model_mut().wavelet().remove_participant("alice@example.com");

    assert!(assembler
        .model()
        .get_participants()
        .iter()
        .any(|p| p == "alice@example.com"));
    let bundle = assembler.close();
    assert_eq!(bundle.operations.len(), 1);
    assert_eq!(bundle.operations[0].op_type, OperationType::WaveletRemoveParticipant);
}

#[test]
fn test_created_wavelet_accepts_edits() {
    let config = BridgeConfig::default();
    let (mut assembler, _) = BundleAssembler::decode(&config, &inbound()).unwrap();

    let key = assembler
        .model_mut()
        .wavelet()
        .create_wavelet(&["bot@example.com".to_string()], None);
    {
        let mut created = assembler.model_mut().wavelet_at(&key).unwrap();
        created.set_title("Spin-off");
        let root = created.root_blip_id().to_string();
        created.blip(&root).unwrap().document().append("hello");
    }

    let ops = assembler.model().pending_operations();
    assert_eq!(ops.len(), 3);
    assert_eq!(ops[1].wave_id, key.wave_id);
    assert_eq!(ops[2].op_type, OperationType::DocumentAppend);
    assert_eq!(ops[2].wave_id, key.wave_id);
}

#[test]
fn test_encoded_log_is_stable_across_decode() {
    let config = BridgeConfig::default();
    let (mut assembler, _) = BundleAssembler::decode(&config, &inbound()).unwrap();
    {
        let model = assembler.model_mut();
        let mut wavelet = model.wavelet();
        wavelet.append_blip_with_writeback("replies");
        wavelet.append_data_document("log", "x");
        model.blip("b2").unwrap().create_child();
        model.blip("b2").unwrap().document().append_element(ContentElement::gadget("http://g"));
        model.blip("b1").unwrap().document().delete(Range::cursor(0));
    }

    let first = assembler.close_to_bytes().unwrap();
    let codec = CodecConfig::new();
    let decoded = decode_operation_bytes(&first, &codec).unwrap();
    let second = encode_bundle(&decoded, &codec).unwrap();

    assert_eq!(decoded.operations.len(), 5);
    assert_eq!(first, second);
}
