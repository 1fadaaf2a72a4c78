use attestdoc_artifact::{embed, extract, extract_payload, EmbedError, ExtractError, FrameHeader, FrameKind};
use attestdoc_canonical::{
    invoice_date_from_calendar, AttestationRecord, DecodeError, Network, RecordDraft, Uint,
};
use serde_json::Value;

fn complete_record() -> AttestationRecord {
    RecordDraft::new(
        "Acme",
        "0xabc",
        invoice_date_from_calendar("2024-06-01").unwrap(),
        "0x00112233445566778899aabbccddeeff00112233",
        "Widget",
        "Hardware",
        Uint::from(5),
        Uint::parse("1000000000000000000").unwrap(),
        Network::Sepolia,
    )
    .unwrap()
    .into_record("42")
}

/// Builds a minimal artifact with a single subject frame holding `payload`.
fn artifact_with_subject(payload: &[u8]) -> Vec<u8> {
    let mut bytes = attestdoc_artifact::ArtifactHeader::new().to_bytes().to_vec();
    bytes.extend_from_slice(&FrameHeader::new(FrameKind::Subject, payload.len() as u32).to_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

#[test]
fn embed_then_extract_is_identity() {
    let record = complete_record();
    let bytes = embed(&record).unwrap();
    let extracted = extract(&bytes).unwrap();

    assert_eq!(extracted, record);
    assert_eq!(extracted.amount.as_str(), "1000000000000000000");
    assert_eq!(extracted.full_attestation_id, "onchain_evm_11155111_42");
}

#[test]
fn embed_refuses_incomplete_record() {
    let mut record = complete_record();
    record.attestation_id = String::new();
    assert!(matches!(embed(&record), Err(EmbedError::IncompleteRecord)));
}

#[test]
fn extract_rejects_garbage_bytes() {
    assert!(matches!(
        extract(b"this is not an artifact"),
        Err(ExtractError::UnreadableArtifact(_))
    ));
    assert!(matches!(
        extract(&[]),
        Err(ExtractError::UnreadableArtifact(_))
    ));
}

#[test]
fn extract_rejects_truncated_artifact() {
    let record = complete_record();
    let bytes = embed(&record).unwrap();
    let truncated = &bytes[..bytes.len() - 10];

    assert!(matches!(
        extract(truncated),
        Err(ExtractError::UnreadableArtifact(_))
    ));
}

#[test]
fn artifact_without_subject_has_no_payload() {
    let bytes = attestdoc_artifact::ArtifactHeader::new().to_bytes().to_vec();
    assert!(matches!(extract(&bytes), Err(ExtractError::NoEmbeddedPayload)));
}

#[test]
fn empty_subject_has_no_payload() {
    let bytes = artifact_with_subject(b"");
    assert!(matches!(extract(&bytes), Err(ExtractError::NoEmbeddedPayload)));
}

#[test]
fn non_json_subject_is_malformed_payload() {
    let bytes = artifact_with_subject(b"definitely not json");
    assert!(matches!(
        extract(&bytes),
        Err(ExtractError::Decode(DecodeError::MalformedPayload(_)))
    ));
}

#[test]
fn non_utf8_subject_is_malformed_payload() {
    let bytes = artifact_with_subject(&[0xff, 0xfe, 0xfd]);
    assert!(matches!(
        extract(&bytes),
        Err(ExtractError::Decode(DecodeError::MalformedPayload(_)))
    ));
}

#[test]
fn subject_missing_attestation_id_is_missing_field() {
    let record = complete_record();
    let payload = extract_payload(&embed(&record).unwrap()).unwrap();
    let mut value: Value = serde_json::from_str(&payload).unwrap();
    value.as_object_mut().unwrap().remove("attestationId");

    let bytes = artifact_with_subject(value.to_string().as_bytes());
    assert!(matches!(
        extract(&bytes),
        Err(ExtractError::Decode(DecodeError::MissingField(
            "attestationId"
        )))
    ));
}

#[test]
fn hand_edited_identifier_is_mismatch() {
    let record = complete_record();
    let payload = extract_payload(&embed(&record).unwrap()).unwrap();
    let mut value: Value = serde_json::from_str(&payload).unwrap();
    value["fullAttestationId"] = Value::String("onchain_evm_11155111_7".to_string());

    let bytes = artifact_with_subject(value.to_string().as_bytes());
    assert!(matches!(
        extract(&bytes),
        Err(ExtractError::Decode(DecodeError::IdentifierMismatch { .. }))
    ));
}

#[test]
fn duplicate_subject_frames_are_unreadable() {
    let record = complete_record();
    let payload = extract_payload(&embed(&record).unwrap()).unwrap();
    let mut bytes = embed(&record).unwrap();
    bytes.extend_from_slice(
        &FrameHeader::new(FrameKind::Subject, payload.len() as u32).to_bytes(),
    );
    bytes.extend_from_slice(payload.as_bytes());

    assert!(matches!(
        extract(&bytes),
        Err(ExtractError::UnreadableArtifact(_))
    ));
}

#[test]
fn unknown_frames_are_skipped() {
    let record = complete_record();
    let mut bytes = embed(&record).unwrap();
    bytes.extend_from_slice(&FrameHeader::new(FrameKind::Unknown(0x7f), 4).to_bytes());
    bytes.extend_from_slice(b"\x01\x02\x03\x04");

    assert_eq!(extract(&bytes).unwrap(), record);
}

#[test]
fn text_blocks_are_not_a_data_source() {
    // An artifact whose only content is rendered text must not decode.
    let record = complete_record();
    let bytes = embed(&record).unwrap();

    let mut stripped = attestdoc_artifact::ArtifactHeader::new().to_bytes().to_vec();
    let mut reader_pos = 16;
    while reader_pos < bytes.len() {
        let header = FrameHeader::from_bytes(&bytes[reader_pos..reader_pos + 8]).unwrap();
        let end = reader_pos + 8 + header.len as usize;
        if header.kind != FrameKind::Subject {
            stripped.extend_from_slice(&bytes[reader_pos..end]);
        }
        reader_pos = end;
    }

    assert!(matches!(
        extract(&stripped),
        Err(ExtractError::NoEmbeddedPayload)
    ));
}
