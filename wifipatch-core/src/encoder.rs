//! Record encoding

use crate::constants::{
    RecordBytes, CHECKSUM_OFFSET, CHECKSUM_SIZE, PASSWORD_CAPACITY, PASSWORD_OFFSET, RECORD_MAGIC,
    RECORD_SIZE, RECORD_VERSION, SSID_CAPACITY, SSID_OFFSET,
};
use crate::crc::record_checksum;
use crate::decoder::record_slice;
use crate::error::{Field, RecordError};
use crate::types::ConfigRecord;
use bytes::BufMut;

/// Encode a record for the given credentials
///
/// The record is laid out little-endian as:
/// 1. Magic (4 bytes)
/// 2. Version (2 bytes)
/// 3. Checksum (2 bytes), CRC16 over every other byte of the record
/// 4. SSID length, password length, flags, reserved (1 byte each)
/// 5. SSID, zero-padded to 32 bytes
/// 6. Password, zero-padded to 64 bytes
///
/// Flags and reserved are zero; use [`RecordBuilder`] to set them.
pub fn encode_record(ssid: &str, password: &str) -> Result<RecordBytes, RecordError> {
    RecordBuilder::new(ssid, password).build()
}

/// Re-encode a decoded record, keeping its flags and reserved byte
///
/// The checksum is recomputed, so this also repairs a record whose stored
/// checksum was wrong.
pub fn encode_config(record: &ConfigRecord) -> Result<RecordBytes, RecordError> {
    RecordBuilder::new(&record.ssid, &record.password)
        .flags(record.flags)
        .reserved(record.reserved)
        .build()
}

/// Overwrite the record at `offset` with an encoded block
pub fn write_record_at(
    data: &mut [u8],
    offset: usize,
    block: &RecordBytes,
) -> Result<(), RecordError> {
    record_slice(data, offset)?;
    data[offset..offset + RECORD_SIZE].copy_from_slice(block);
    Ok(())
}

fn check_len(field: Field, bytes: &[u8], capacity: usize) -> Result<(), RecordError> {
    if bytes.len() > capacity {
        return Err(RecordError::FieldTooLong {
            field,
            length: bytes.len(),
            capacity,
        });
    }
    Ok(())
}

/// Builder for records with non-default header bytes
pub struct RecordBuilder<'a> {
    ssid: &'a str,
    password: &'a str,
    flags: u8,
    reserved: u8,
}

impl<'a> RecordBuilder<'a> {
    /// Create a new record builder
    pub fn new(ssid: &'a str, password: &'a str) -> Self {
        Self {
            ssid,
            password,
            flags: 0,
            reserved: 0,
        }
    }

    /// Set the flags byte
    pub fn flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    /// Set the reserved byte
    pub fn reserved(mut self, reserved: u8) -> Self {
        self.reserved = reserved;
        self
    }

    /// Build and encode the record
    pub fn build(self) -> Result<RecordBytes, RecordError> {
        let ssid = self.ssid.as_bytes();
        let password = self.password.as_bytes();
        check_len(Field::Ssid, ssid, SSID_CAPACITY)?;
        check_len(Field::Password, password, PASSWORD_CAPACITY)?;

        let mut block = [0u8; RECORD_SIZE];
        {
            let mut buf = &mut block[..];
            buf.put_u32_le(RECORD_MAGIC);
            buf.put_u16_le(RECORD_VERSION);
            // checksum is patched below
            buf.put_u16_le(0);
            buf.put_u8(ssid.len() as u8);
            buf.put_u8(password.len() as u8);
            buf.put_u8(self.flags);
            buf.put_u8(self.reserved);
        }
        block[SSID_OFFSET..SSID_OFFSET + ssid.len()].copy_from_slice(ssid);
        block[PASSWORD_OFFSET..PASSWORD_OFFSET + password.len()].copy_from_slice(password);

        let checksum = record_checksum(&block);
        block[CHECKSUM_OFFSET..CHECKSUM_OFFSET + CHECKSUM_SIZE]
            .copy_from_slice(&checksum.to_le_bytes());

        Ok(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FLAGS_OFFSET, MAGIC_BYTES, RESERVED_OFFSET};
    use crate::decoder::decode_record;

    #[test]
    fn test_encode_layout() {
        let block = encode_record("abc", "xy").unwrap();

        assert_eq!(&block[0..4], &MAGIC_BYTES);
        assert_eq!(&block[4..6], &[1, 0]);
        assert_eq!(&block[8..12], &[3, 2, 0, 0]);
        assert_eq!(&block[SSID_OFFSET..SSID_OFFSET + 3], b"abc");
        assert!(block[SSID_OFFSET + 3..PASSWORD_OFFSET].iter().all(|&b| b == 0));
        assert_eq!(&block[PASSWORD_OFFSET..PASSWORD_OFFSET + 2], b"xy");
        assert!(block[PASSWORD_OFFSET + 2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_checksum_embedded() {
        let block = encode_record("abc", "xy").unwrap();
        let stored = u16::from_le_bytes([block[6], block[7]]);
        assert_eq!(stored, record_checksum(&block));
    }

    #[test]
    fn test_field_capacity_limits() {
        let ssid = "s".repeat(SSID_CAPACITY);
        let password = "p".repeat(PASSWORD_CAPACITY);
        assert!(encode_record(&ssid, &password).is_ok());

        let long_ssid = "s".repeat(SSID_CAPACITY + 1);
        assert_eq!(
            encode_record(&long_ssid, ""),
            Err(RecordError::FieldTooLong {
                field: Field::Ssid,
                length: 33,
                capacity: 32,
            })
        );

        let long_password = "p".repeat(PASSWORD_CAPACITY + 1);
        assert!(matches!(
            encode_record("", &long_password),
            Err(RecordError::FieldTooLong {
                field: Field::Password,
                ..
            })
        ));
    }

    #[test]
    fn test_capacity_counts_bytes_not_chars() {
        // 11 three-byte characters = 33 bytes
        let ssid = "\u{20AC}".repeat(11);
        assert!(matches!(
            encode_record(&ssid, ""),
            Err(RecordError::FieldTooLong { length: 33, .. })
        ));
    }

    #[test]
    fn test_builder_overrides() {
        let block = RecordBuilder::new("net", "pw")
            .flags(0x80)
            .reserved(0x01)
            .build()
            .unwrap();

        assert_eq!(block[FLAGS_OFFSET], 0x80);
        assert_eq!(block[RESERVED_OFFSET], 0x01);

        let record = decode_record(&block, 0).unwrap();
        assert!(record.checksum_valid());
        assert_eq!(record.flags, 0x80);
    }

    #[test]
    fn test_encode_config_repairs_checksum() {
        let mut block = RecordBuilder::new("net", "pw").flags(3).build().unwrap();
        block[6] ^= 0xFF;
        let broken = decode_record(&block, 0).unwrap();
        assert!(!broken.checksum_valid());

        let repaired = encode_config(&broken).unwrap();
        let record = decode_record(&repaired, 0).unwrap();
        assert!(record.checksum_valid());
        assert_eq!(record.flags, 3);
    }

    #[test]
    fn test_write_record_at() {
        let block = encode_record("net", "pw").unwrap();
        let mut image = vec![0xFFu8; 200];
        write_record_at(&mut image, 50, &block).unwrap();
        assert_eq!(&image[50..50 + RECORD_SIZE], &block[..]);
        assert_eq!(image[49], 0xFF);
        assert_eq!(image[50 + RECORD_SIZE], 0xFF);

        let before = image.clone();
        let result = write_record_at(&mut image, 150, &block);
        assert!(matches!(
            result,
            Err(RecordError::IncompleteRecord { offset: 150, .. })
        ));
        assert_eq!(image, before);
    }
}
