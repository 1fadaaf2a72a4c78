//! Embedder: renders a record into artifact bytes.

use attestdoc_canonical::{encode, AttestationRecord, Uint};
use chrono::DateTime;

use crate::errors::EmbedError;
use crate::frame::{ArtifactHeader, FrameHeader, FrameKind};

/// Informational document title tag.
pub const DOC_TITLE: &str = "Purchase Invoice";

/// Informational author/creator tag.
pub const DOC_AUTHOR: &str = "attestdoc";

/// Informational producer tag.
pub const DOC_PRODUCER: &str = "attestdoc artifact writer";

/// Maximum canonical payload size accepted by the subject frame: 64 KiB.
///
/// Well under the container's frame limit; a canonical record payload is a
/// few hundred bytes, so hitting this bound indicates a logic error upstream.
pub const MAX_SUBJECT_SIZE: usize = 64 * 1024;

const PAGE_TOP: u32 = 742;
const LABEL_X: u32 = 50;
const VALUE_X: u32 = 200;
const LINE_HEIGHT: u32 = 20;
const TITLE_SIZE: u16 = 24;
const BODY_SIZE: u16 = 10;
const SMALL_SIZE: u16 = 8;

/// Produces an artifact embedding the record.
///
/// The artifact carries doc-info tags, a human-legible rendering of the
/// record as positioned text blocks, and a single subject frame holding the
/// canonical encoding. The input record is not mutated.
///
/// Fails with [`EmbedError::IncompleteRecord`] if the record has no
/// ledger-assigned attestation id.
pub fn embed(record: &AttestationRecord) -> Result<Vec<u8>, EmbedError> {
    if !record.is_complete() {
        return Err(EmbedError::IncompleteRecord);
    }

    let payload = encode(record)?;
    if payload.len() > MAX_SUBJECT_SIZE {
        return Err(EmbedError::PayloadTooLarge {
            size: payload.len(),
            max: MAX_SUBJECT_SIZE,
        });
    }

    let mut writer = ArtifactWriter::new();
    writer.doc_info("title", DOC_TITLE);
    writer.doc_info("author", DOC_AUTHOR);
    writer.doc_info("creator", DOC_AUTHOR);
    writer.doc_info("producer", DOC_PRODUCER);
    writer.doc_info("keywords", "attestation, blockchain, transaction, invoice");

    render_invoice(&mut writer, record);

    writer.frame(FrameKind::Subject, payload.as_bytes());
    Ok(writer.into_bytes())
}

/// Writes the invoice title and label/value detail lines at fixed positions.
fn render_invoice(writer: &mut ArtifactWriter, record: &AttestationRecord) {
    let mut y = PAGE_TOP;
    writer.text_block(LABEL_X, y, TITLE_SIZE, "Sales Purchase Invoice");
    y -= LINE_HEIGHT * 2;

    let details: [(&str, String, u16); 11] = [
        ("Business Name", record.business_name.clone(), BODY_SIZE),
        ("Invoice Date", format_epoch_date(&record.invoice_date), BODY_SIZE),
        ("Customer Address", record.customer.clone(), BODY_SIZE),
        ("Product Name", record.product_name.clone(), BODY_SIZE),
        ("Category", record.category.clone(), BODY_SIZE),
        ("Quantity", record.quantity.to_string(), BODY_SIZE),
        ("Amount", format!("{} wei", record.amount), BODY_SIZE),
        ("Transaction Hash", record.transaction_hash.to_hex(), SMALL_SIZE),
        ("Network", record.network.to_string(), BODY_SIZE),
        ("Attestation ID", record.attestation_id.clone(), BODY_SIZE),
        ("Full Attestation ID", record.full_attestation_id.clone(), SMALL_SIZE),
    ];

    for (label, value, size) in details {
        writer.text_block(LABEL_X, y, BODY_SIZE, &format!("{}:", label));
        writer.text_block(VALUE_X, y, size, &value);
        y -= LINE_HEIGHT;
    }
}

/// Renders epoch seconds as a `YYYY-MM-DD` date for display. Falls back to
/// the raw digit string for values outside chrono's range.
fn format_epoch_date(seconds: &Uint) -> String {
    seconds
        .as_str()
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| seconds.to_string())
}

/// In-memory artifact writer.
struct ArtifactWriter {
    buf: Vec<u8>,
}

impl ArtifactWriter {
    fn new() -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(&ArtifactHeader::new().to_bytes());
        Self { buf }
    }

    fn frame(&mut self, kind: FrameKind, payload: &[u8]) {
        let header = FrameHeader::new(kind, payload.len() as u32);
        self.buf.extend_from_slice(&header.to_bytes());
        self.buf.extend_from_slice(payload);
    }

    fn text_block(&mut self, x: u32, y: u32, size: u16, text: &str) {
        let mut payload = Vec::with_capacity(10 + text.len());
        payload.extend_from_slice(&x.to_le_bytes());
        payload.extend_from_slice(&y.to_le_bytes());
        payload.extend_from_slice(&size.to_le_bytes());
        payload.extend_from_slice(text.as_bytes());
        self.frame(FrameKind::TextBlock, &payload);
    }

    fn doc_info(&mut self, key: &str, value: &str) {
        let mut payload = Vec::with_capacity(2 + key.len() + value.len());
        payload.extend_from_slice(&(key.len() as u16).to_le_bytes());
        payload.extend_from_slice(key.as_bytes());
        payload.extend_from_slice(value.as_bytes());
        self.frame(FrameKind::DocInfo, &payload);
    }

    fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
