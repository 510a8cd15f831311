//! Record decoding

use crate::constants::{
    RecordBytes, HEADER_SIZE, PASSWORD_CAPACITY, PASSWORD_OFFSET, RECORD_MAGIC, RECORD_SIZE, RECORD_VERSION,
    SSID_CAPACITY, SSID_OFFSET,
};
use crate::crc::record_checksum;
use crate::error::{Field, RecordError};
use crate::types::{decode_text, ConfigRecord};
use bytes::Buf;

#[cfg(feature = "logging")]
use tracing::warn;

/// Extra validation applied on top of the default decode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject records whose padding beyond the declared lengths is not zero
    pub strict_padding: bool,
}

/// Record header fields in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    /// Magic signature
    pub magic: u32,
    /// Layout version
    pub version: u16,
    /// Stored checksum
    pub checksum: u16,
    /// Declared SSID length
    pub ssid_length: u8,
    /// Declared password length
    pub password_length: u8,
    /// Flags byte
    pub flags: u8,
    /// Reserved byte
    pub reserved: u8,
}

impl RecordHeader {
    /// Parse the 12 header bytes of a record (little-endian)
    pub fn parse(block: &RecordBytes) -> Self {
        let mut bytes = &block[..HEADER_SIZE];
        Self {
            magic: bytes.get_u32_le(),
            version: bytes.get_u16_le(),
            checksum: bytes.get_u16_le(),
            ssid_length: bytes.get_u8(),
            password_length: bytes.get_u8(),
            flags: bytes.get_u8(),
            reserved: bytes.get_u8(),
        }
    }
}

/// Borrow the 108 bytes of a record starting at `offset`
pub fn record_slice(data: &[u8], offset: usize) -> Result<&[u8; RECORD_SIZE], RecordError> {
    let available = data.len().saturating_sub(offset);
    data.get(offset..)
        .and_then(|rest| rest.get(..RECORD_SIZE))
        .and_then(|slice| <&[u8; RECORD_SIZE]>::try_from(slice).ok())
        .ok_or(RecordError::IncompleteRecord {
            offset,
            expected: RECORD_SIZE,
            actual: available,
        })
}

/// Decode the record at `offset`
///
/// Checks run in this order and stop at the first failure:
/// - enough bytes for a full record
/// - magic signature
/// - version
/// - SSID and password lengths within their fields
///
/// Text that is not valid UTF-8 is decoded lossily and flagged on the
/// record. A checksum mismatch is reported through
/// [`ConfigRecord::checksum_valid`], not as an error.
pub fn decode_record(data: &[u8], offset: usize) -> Result<ConfigRecord, RecordError> {
    decode_record_with(data, offset, DecodeOptions::default())
}

/// Decode the record at `offset` with extra validation
pub fn decode_record_with(
    data: &[u8],
    offset: usize,
    options: DecodeOptions,
) -> Result<ConfigRecord, RecordError> {
    let block = record_slice(data, offset)?;
    let header = RecordHeader::parse(block);

    if header.magic != RECORD_MAGIC {
        return Err(RecordError::InvalidMagic {
            offset,
            found: header.magic,
        });
    }

    if header.version != RECORD_VERSION {
        return Err(RecordError::UnsupportedVersion {
            offset,
            version: header.version,
        });
    }

    let ssid_len = header.ssid_length as usize;
    if ssid_len > SSID_CAPACITY {
        return Err(RecordError::FieldLengthOverflow {
            offset,
            field: Field::Ssid,
            length: ssid_len,
            capacity: SSID_CAPACITY,
        });
    }

    let password_len = header.password_length as usize;
    if password_len > PASSWORD_CAPACITY {
        return Err(RecordError::FieldLengthOverflow {
            offset,
            field: Field::Password,
            length: password_len,
            capacity: PASSWORD_CAPACITY,
        });
    }

    let ssid_field = &block[SSID_OFFSET..SSID_OFFSET + SSID_CAPACITY];
    let password_field = &block[PASSWORD_OFFSET..PASSWORD_OFFSET + PASSWORD_CAPACITY];

    if options.strict_padding {
        if ssid_field[ssid_len..].iter().any(|&b| b != 0) {
            return Err(RecordError::NonZeroPadding {
                offset,
                field: Field::Ssid,
            });
        }
        if password_field[password_len..].iter().any(|&b| b != 0) {
            return Err(RecordError::NonZeroPadding {
                offset,
                field: Field::Password,
            });
        }
    }

    let (ssid, ssid_status) = decode_text(&ssid_field[..ssid_len]);
    let (password, password_status) = decode_text(&password_field[..password_len]);

    #[cfg(feature = "logging")]
    {
        if !ssid_status.is_valid() {
            warn!("SSID at offset {:#x} is not valid UTF-8", offset);
        }
        if !password_status.is_valid() {
            warn!("Password at offset {:#x} is not valid UTF-8", offset);
        }
    }

    let expected_checksum = record_checksum(block);

    #[cfg(feature = "logging")]
    {
        if expected_checksum != header.checksum {
            warn!(
                "Checksum mismatch at offset {:#x}: stored {:#06x}, computed {:#06x}",
                offset, header.checksum, expected_checksum
            );
        }
    }

    Ok(ConfigRecord {
        magic: header.magic,
        version: header.version,
        checksum: header.checksum,
        expected_checksum,
        ssid_length: header.ssid_length,
        password_length: header.password_length,
        flags: header.flags,
        reserved: header.reserved,
        ssid,
        password,
        ssid_status,
        password_status,
    })
}
