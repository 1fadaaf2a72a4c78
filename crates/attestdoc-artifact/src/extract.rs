//! Extractor: recovers the embedded record from untrusted artifact bytes.

use attestdoc_canonical::{decode, AttestationRecord, DecodeError};

use crate::errors::ExtractError;
use crate::frame::{ArtifactHeader, FrameHeader, FrameKind, FRAME_HEADER_SIZE, HEADER_SIZE};

/// Recovers the attestation record embedded in an artifact.
///
/// Only the subject frame is authoritative; text blocks and doc-info tags
/// are never consulted. Codec failures propagate unchanged as
/// [`ExtractError::Decode`].
pub fn extract(bytes: &[u8]) -> Result<AttestationRecord, ExtractError> {
    let payload = extract_payload(bytes)?;
    Ok(decode(&payload)?)
}

/// Recovers the raw canonical payload from an artifact without decoding it.
pub fn extract_payload(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut reader = ArtifactReader::new(bytes)?;
    let mut subject: Option<&[u8]> = None;

    while let Some((kind, payload)) = reader.next_frame()? {
        match kind {
            FrameKind::Subject => {
                if subject.is_some() {
                    return Err(ExtractError::UnreadableArtifact(
                        "more than one subject frame".to_string(),
                    ));
                }
                subject = Some(payload);
            }
            // Presentation and informational frames are not data sources;
            // unknown kinds tolerate format additions.
            FrameKind::TextBlock | FrameKind::DocInfo | FrameKind::Unknown(_) => {}
        }
    }

    let payload = subject.ok_or(ExtractError::NoEmbeddedPayload)?;
    if payload.is_empty() {
        return Err(ExtractError::NoEmbeddedPayload);
    }

    let text = std::str::from_utf8(payload).map_err(|err| {
        ExtractError::Decode(DecodeError::MalformedPayload(format!(
            "subject is not valid UTF-8: {}",
            err
        )))
    })?;
    Ok(text.to_string())
}

/// Cursor over an immutable artifact byte buffer.
struct ArtifactReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ArtifactReader<'a> {
    fn new(bytes: &'a [u8]) -> Result<Self, ExtractError> {
        ArtifactHeader::from_bytes(bytes)?;
        Ok(Self {
            bytes,
            position: HEADER_SIZE,
        })
    }

    fn next_frame(&mut self) -> Result<Option<(FrameKind, &'a [u8])>, ExtractError> {
        if self.position >= self.bytes.len() {
            return Ok(None);
        }

        let remaining = &self.bytes[self.position..];
        if remaining.len() < FRAME_HEADER_SIZE {
            return Err(ExtractError::UnreadableArtifact(format!(
                "truncated frame header at offset {}",
                self.position
            )));
        }

        let header = FrameHeader::from_bytes(&remaining[..FRAME_HEADER_SIZE]).map_err(|err| {
            match err {
                ExtractError::UnreadableArtifact(reason) => ExtractError::UnreadableArtifact(
                    format!("invalid frame at offset {}: {}", self.position, reason),
                ),
                other => other,
            }
        })?;

        let start = FRAME_HEADER_SIZE;
        let end = start + header.len as usize;
        if remaining.len() < end {
            return Err(ExtractError::UnreadableArtifact(format!(
                "truncated frame payload at offset {}",
                self.position
            )));
        }

        self.position += end;
        Ok(Some((header.kind, &remaining[start..end])))
    }
}
