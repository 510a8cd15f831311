//! Decoded record type

use crate::constants::{RECORD_MAGIC, RECORD_VERSION};
use crate::error::{Field, RecordError};
use alloc::borrow::Cow;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Outcome of decoding a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextStatus {
    /// Field bytes were valid UTF-8
    Valid,
    /// Invalid sequences were replaced with U+FFFD
    Lossy,
}

impl TextStatus {
    /// True when the text was decoded without substitution
    pub fn is_valid(&self) -> bool {
        matches!(self, TextStatus::Valid)
    }
}

/// WiFi credential record as stored in a firmware image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    /// Magic signature
    pub magic: u32,

    /// Layout version
    pub version: u16,

    /// Checksum stored in the header
    pub checksum: u16,

    /// Checksum recomputed over the record bytes
    pub expected_checksum: u16,

    /// Declared SSID length in bytes
    pub ssid_length: u8,

    /// Declared password length in bytes
    pub password_length: u8,

    /// Unused, passed through
    pub flags: u8,

    /// Unused, passed through
    pub reserved: u8,

    /// SSID text
    pub ssid: String,

    /// Password text
    pub password: String,

    /// Whether the SSID decoded cleanly
    pub ssid_status: TextStatus,

    /// Whether the password decoded cleanly
    pub password_status: TextStatus,
}

impl ConfigRecord {
    /// Build a record for the given credentials with a checksum matching its encoding
    pub fn new(ssid: &str, password: &str) -> Result<Self, RecordError> {
        let block = crate::encoder::encode_record(ssid, password)?;
        crate::decoder::decode_record(&block, 0)
    }

    /// True when the stored checksum matches the record contents
    pub fn checksum_valid(&self) -> bool {
        self.checksum == self.expected_checksum
    }

    /// Turn a checksum mismatch into an error
    pub fn ensure_checksum(&self, offset: usize) -> Result<(), RecordError> {
        if self.checksum_valid() {
            Ok(())
        } else {
            Err(RecordError::ChecksumMismatch {
                offset,
                stored: self.checksum,
                computed: self.expected_checksum,
            })
        }
    }

    /// Header sanity as the firmware checks it
    pub fn is_valid(&self) -> bool {
        self.magic == RECORD_MAGIC && self.version == RECORD_VERSION && self.checksum_valid()
    }

    /// Status of a text field
    pub fn text_status(&self, field: Field) -> TextStatus {
        match field {
            Field::Ssid => self.ssid_status,
            Field::Password => self.password_status,
        }
    }

    /// True when both credentials decoded without substitution
    pub fn text_intact(&self) -> bool {
        self.ssid_status.is_valid() && self.password_status.is_valid()
    }
}

/// Decode field bytes as text, replacing invalid sequences
pub(crate) fn decode_text(bytes: &[u8]) -> (String, TextStatus) {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => (String::from(text), TextStatus::Valid),
        Cow::Owned(text) => (text, TextStatus::Lossy),
    }
}
