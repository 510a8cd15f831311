//! Error types for record operations

use core::fmt;
use serde::{Deserialize, Serialize};

/// Variable-length field of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// The SSID field
    Ssid,
    /// The password field
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Ssid => f.write_str("SSID"),
            Field::Password => f.write_str("password"),
        }
    }
}

/// Errors that can occur while locating, decoding or encoding a record
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// No magic signature in the buffer
    #[cfg_attr(feature = "std", error("WiFi configuration record not found"))]
    NotFound,

    /// Magic found but the buffer ends before the record does
    #[cfg_attr(
        feature = "std",
        error("Incomplete record at offset {offset:#x}: expected {expected} bytes, got {actual}")
    )]
    IncompleteRecord {
        /// Offset of the record
        offset: usize,
        /// The number of bytes a record needs.
        expected: usize,
        /// The number of bytes actually available.
        actual: usize,
    },

    /// Header does not start with the magic signature
    #[cfg_attr(feature = "std", error("Invalid magic at offset {offset:#x}: {found:#010x}"))]
    InvalidMagic {
        /// Offset of the record
        offset: usize,
        /// The value found in the magic field
        found: u32,
    },

    /// Unknown record version
    #[cfg_attr(feature = "std", error("Unsupported version {version} at offset {offset:#x}"))]
    UnsupportedVersion {
        /// Offset of the record
        offset: usize,
        /// The version found in the header
        version: u16,
    },

    /// Declared length exceeds the field capacity
    #[cfg_attr(
        feature = "std",
        error("{field} length {length} exceeds capacity {capacity} at offset {offset:#x}")
    )]
    FieldLengthOverflow {
        /// Offset of the record
        offset: usize,
        /// The offending field
        field: Field,
        /// Length declared in the header
        length: usize,
        /// Field capacity
        capacity: usize,
    },

    /// Caller-supplied text does not fit its field
    #[cfg_attr(feature = "std", error("{field} too long: {length} bytes (max {capacity})"))]
    FieldTooLong {
        /// The offending field
        field: Field,
        /// Encoded byte length of the supplied text
        length: usize,
        /// Field capacity
        capacity: usize,
    },

    /// Stored checksum does not match the recomputed one
    #[cfg_attr(
        feature = "std",
        error("Checksum mismatch at offset {offset:#x}: stored {stored:#06x}, computed {computed:#06x}")
    )]
    ChecksumMismatch {
        /// Offset of the record
        offset: usize,
        /// Checksum stored in the header
        stored: u16,
        /// Checksum computed over the record
        computed: u16,
    },

    /// Padding beyond the declared length is not zero (strict decoding only)
    #[cfg_attr(
        feature = "std",
        error("Non-zero padding in {field} field at offset {offset:#x}")
    )]
    NonZeroPadding {
        /// Offset of the record
        offset: usize,
        /// The field with dirty padding
        field: Field,
    },
}

impl RecordError {
    /// Offset of the record this error refers to, if any
    pub fn offset(&self) -> Option<usize> {
        match self {
            RecordError::NotFound | RecordError::FieldTooLong { .. } => None,
            RecordError::IncompleteRecord { offset, .. }
            | RecordError::InvalidMagic { offset, .. }
            | RecordError::UnsupportedVersion { offset, .. }
            | RecordError::FieldLengthOverflow { offset, .. }
            | RecordError::ChecksumMismatch { offset, .. }
            | RecordError::NonZeroPadding { offset, .. } => Some(*offset),
        }
    }
}
