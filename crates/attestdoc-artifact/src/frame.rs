use crate::errors::ExtractError;

/// Artifact file magic bytes: `b"ATF1"`.
pub const MAGIC: &[u8; 4] = b"ATF1";

/// Current artifact format version: `0x0001`.
pub const VERSION: u16 = 0x0001;

/// Header size in bytes: 16 bytes.
pub const HEADER_SIZE: usize = 16;

/// Frame header size in bytes: 8 bytes.
pub const FRAME_HEADER_SIZE: usize = 8;

/// Maximum frame payload size: 1 MiB.
pub const MAX_PAYLOAD_SIZE: u32 = 1024 * 1024;

/// Frame kind: positioned text block (presentation only).
pub const FRAME_KIND_TEXT_BLOCK: u8 = 0x01;

/// Frame kind: informational doc-info tag (never consulted on extract).
pub const FRAME_KIND_DOC_INFO: u8 = 0x02;

/// Frame kind: subject metadata holding the canonical encoding.
pub const FRAME_KIND_SUBJECT: u8 = 0x03;

/// Artifact file header (16 bytes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactHeader {
    /// Magic bytes: `"ATF1"`.
    pub magic: [u8; 4],
    /// Format version: `0x0001`.
    pub version: u16,
    /// Reserved flags (must be 0).
    pub flags: u16,
    /// Reserved bytes (must be all zeros).
    pub reserved: [u8; 8],
}

impl ArtifactHeader {
    /// Creates a new header with default values.
    pub fn new() -> Self {
        Self {
            magic: *MAGIC,
            version: VERSION,
            flags: 0,
            reserved: [0; 8],
        }
    }

    /// Serializes the header to bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4..6].copy_from_slice(&self.version.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.flags.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.reserved);
        bytes
    }

    /// Deserializes a header from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExtractError> {
        if bytes.len() < HEADER_SIZE {
            return Err(ExtractError::UnreadableArtifact(format!(
                "header too short: {} bytes",
                bytes.len()
            )));
        }

        let magic = [bytes[0], bytes[1], bytes[2], bytes[3]];
        if magic != *MAGIC {
            return Err(ExtractError::UnreadableArtifact(format!(
                "invalid magic: {:?}, expected {:?}",
                magic, MAGIC
            )));
        }

        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version != VERSION {
            return Err(ExtractError::UnreadableArtifact(format!(
                "unsupported version: 0x{:04x}, expected 0x{:04x}",
                version, VERSION
            )));
        }

        let flags = u16::from_le_bytes([bytes[6], bytes[7]]);
        if flags != 0 {
            return Err(ExtractError::UnreadableArtifact(format!(
                "non-zero flags: 0x{:04x}",
                flags
            )));
        }

        let mut reserved = [0u8; 8];
        reserved.copy_from_slice(&bytes[8..16]);
        if reserved != [0u8; 8] {
            return Err(ExtractError::UnreadableArtifact(
                "non-zero reserved bytes".to_string(),
            ));
        }

        Ok(Self {
            magic,
            version,
            flags,
            reserved,
        })
    }
}

impl Default for ArtifactHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Frame kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Positioned text block (presentation only).
    TextBlock,
    /// Informational doc-info tag.
    DocInfo,
    /// Subject metadata: the canonical encoding. Exactly one per artifact.
    Subject,
    /// Unknown/unsupported frame kind; skipped on read.
    Unknown(u8),
}

impl FrameKind {
    /// Creates a FrameKind from a byte value.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            FRAME_KIND_TEXT_BLOCK => FrameKind::TextBlock,
            FRAME_KIND_DOC_INFO => FrameKind::DocInfo,
            FRAME_KIND_SUBJECT => FrameKind::Subject,
            _ => FrameKind::Unknown(byte),
        }
    }

    /// Returns the byte value for this kind.
    pub fn to_byte(self) -> u8 {
        match self {
            FrameKind::TextBlock => FRAME_KIND_TEXT_BLOCK,
            FrameKind::DocInfo => FRAME_KIND_DOC_INFO,
            FrameKind::Subject => FRAME_KIND_SUBJECT,
            FrameKind::Unknown(b) => b,
        }
    }
}

/// Frame header (8 bytes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    /// Frame kind.
    pub kind: FrameKind,
    /// Reserved bytes (must be all zeros).
    pub reserved: [u8; 3],
    /// Payload length in bytes (little-endian).
    pub len: u32,
}

impl FrameHeader {
    /// Creates a new frame header.
    pub fn new(kind: FrameKind, len: u32) -> Self {
        Self {
            kind,
            reserved: [0; 3],
            len,
        }
    }

    /// Serializes the frame header to bytes.
    pub fn to_bytes(&self) -> [u8; FRAME_HEADER_SIZE] {
        let mut bytes = [0u8; FRAME_HEADER_SIZE];
        bytes[0] = self.kind.to_byte();
        bytes[1..4].copy_from_slice(&self.reserved);
        bytes[4..8].copy_from_slice(&self.len.to_le_bytes());
        bytes
    }

    /// Deserializes a frame header from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExtractError> {
        if bytes.len() < FRAME_HEADER_SIZE {
            return Err(ExtractError::UnreadableArtifact(format!(
                "frame header too short: {} bytes",
                bytes.len()
            )));
        }

        let kind = FrameKind::from_byte(bytes[0]);
        let reserved = [bytes[1], bytes[2], bytes[3]];
        if reserved != [0u8; 3] {
            return Err(ExtractError::UnreadableArtifact(
                "non-zero reserved frame bytes".to_string(),
            ));
        }
        let len = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);

        if len > MAX_PAYLOAD_SIZE {
            return Err(ExtractError::UnreadableArtifact(format!(
                "payload size {} exceeds maximum {}",
                len, MAX_PAYLOAD_SIZE
            )));
        }

        Ok(Self {
            kind,
            reserved,
            len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_round_trip() {
        let header = ArtifactHeader::new();
        let bytes = header.to_bytes();
        let restored = ArtifactHeader::from_bytes(&bytes).unwrap();
        assert_eq!(header, restored);
    }

    #[test]
    fn header_rejects_invalid_magic() {
        let mut bytes = ArtifactHeader::new().to_bytes();
        bytes[0] = b'X';
        assert!(ArtifactHeader::from_bytes(&bytes).is_err());
    }

    #[test]
    fn header_rejects_unsupported_version() {
        let mut bytes = ArtifactHeader::new().to_bytes();
        bytes[4] = 0x02;
        bytes[5] = 0x00;
        let err = ArtifactHeader::from_bytes(&bytes).unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn header_rejects_non_zero_flags() {
        let mut bytes = ArtifactHeader::new().to_bytes();
        bytes[6] = 0x01;
        assert!(ArtifactHeader::from_bytes(&bytes).is_err());
    }

    #[test]
    fn header_rejects_non_zero_reserved() {
        let mut bytes = ArtifactHeader::new().to_bytes();
        bytes[8] = 0x01;
        assert!(ArtifactHeader::from_bytes(&bytes).is_err());
    }

    #[test]
    fn frame_round_trip() {
        let frame = FrameHeader::new(FrameKind::Subject, 1024);
        let restored = FrameHeader::from_bytes(&frame.to_bytes()).unwrap();
        assert_eq!(frame, restored);
    }

    #[test]
    fn frame_rejects_oversized_payload() {
        let mut bytes = FrameHeader::new(FrameKind::Subject, 0).to_bytes();
        bytes[4..8].copy_from_slice(&(MAX_PAYLOAD_SIZE + 1).to_le_bytes());
        assert!(FrameHeader::from_bytes(&bytes).is_err());
    }

    #[test]
    fn frame_rejects_non_zero_reserved() {
        let mut bytes = FrameHeader::new(FrameKind::TextBlock, 100).to_bytes();
        bytes[1] = 0x01;
        assert!(FrameHeader::from_bytes(&bytes).is_err());
    }

    #[test]
    fn frame_kind_unknown_round_trips() {
        let kind = FrameKind::from_byte(0xFF);
        assert_eq!(kind.to_byte(), 0xFF);
    }
}
