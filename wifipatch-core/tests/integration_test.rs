//! Integration tests for the locate → decode → re-encode → patch flow

use wifipatch_core::{
    constants::{MAGIC_BYTES, RECORD_SIZE},
    decode_record,
    encoder::encode_config,
    encode_record, locate,
    locator::scan_records,
    write_record_at, RecordError,
};

fn firmware_with(block: &[u8], lead: usize, tail: usize) -> Vec<u8> {
    let mut image = vec![0u8; lead];
    image.extend_from_slice(block);
    image.extend(std::iter::repeat(0xFF).take(tail));
    image
}

#[test]
fn test_full_workflow_patch_in_place() {
    // Step 1: an image as the firmware build leaves it
    let original = encode_record("", "").unwrap();
    let mut image = firmware_with(&original, 1024, 2048);
    let len_before = image.len();

    // Step 2: locate and read the placeholder
    let location = locate(&image).unwrap();
    assert_eq!(location.offset, 1024);
    assert!(!location.has_duplicate());

    let record = decode_record(&image, location.offset).unwrap();
    assert_eq!(record.ssid, "");
    assert_eq!(record.password, "");
    assert!(record.checksum_valid());

    // Step 3: splice new credentials
    let block = encode_record("Workshop", "correct horse battery").unwrap();
    write_record_at(&mut image, location.offset, &block).unwrap();

    // Step 4: read back
    assert_eq!(image.len(), len_before);
    let location = locate(&image).unwrap();
    let record = decode_record(&image, location.offset).unwrap();
    assert_eq!(record.ssid, "Workshop");
    assert_eq!(record.password, "correct horse battery");
    assert!(record.is_valid());
    assert!(image[..1024].iter().all(|&b| b == 0));
    assert!(image[1024 + RECORD_SIZE..].iter().all(|&b| b == 0xFF));
}

#[test]
fn test_workflow_with_corruption() {
    let block = encode_record("Garage", "p4ssw0rd").unwrap();
    let mut image = firmware_with(&block, 333, 77);

    // Flip a bit in the password
    image[333 + 50] ^= 0x04;

    let location = locate(&image).unwrap();
    let record = decode_record(&image, location.offset).unwrap();
    assert!(!record.checksum_valid());
    assert!(matches!(
        record.ensure_checksum(location.offset),
        Err(RecordError::ChecksumMismatch { offset: 333, .. })
    ));

    // Re-encoding the decoded record repairs the checksum
    let repaired = encode_config(&record).unwrap();
    write_record_at(&mut image, location.offset, &repaired).unwrap();
    assert!(decode_record(&image, location.offset)
        .unwrap()
        .checksum_valid());
}

#[test]
fn test_stale_copy_detected() {
    let current = encode_record("Current", "new").unwrap();
    let stale = encode_record("Stale", "old").unwrap();

    let mut image = firmware_with(&current, 64, 512);
    image[400..400 + RECORD_SIZE].copy_from_slice(&stale);

    let location = locate(&image).unwrap();
    assert_eq!(location.offset, 64);
    assert_eq!(location.duplicate, Some(400));

    let (found, stats) = scan_records(&image);
    assert_eq!(stats.signatures_found, 2);
    assert_eq!(stats.valid_records(), 2);
    assert_eq!(found[1].record().unwrap().ssid, "Stale");
}

#[test]
fn test_truncated_image() {
    let block = encode_record("Cut", "short").unwrap();
    let image = firmware_with(&block[..60], 100, 0);

    assert_eq!(
        locate(&image),
        Err(RecordError::IncompleteRecord {
            offset: 100,
            expected: RECORD_SIZE,
            actual: 60,
        })
    );
}

#[test]
fn test_first_signature_wins_even_if_broken() {
    // A bare signature before the real record
    let block = encode_record("Real", "record").unwrap();
    let mut image = vec![0u8; 16];
    image[4..8].copy_from_slice(&MAGIC_BYTES);
    image.extend_from_slice(&block);
    image.extend_from_slice(&[0u8; 200]);

    let location = locate(&image).unwrap();
    assert_eq!(location.offset, 4);
    assert_eq!(location.duplicate, Some(16));
    assert!(matches!(
        decode_record(&image, location.offset),
        Err(RecordError::UnsupportedVersion { offset: 4, version: 0 })
    ));
}

#[test]
fn test_error_offsets() {
    assert_eq!(RecordError::NotFound.offset(), None);
    let err = locate(&MAGIC_BYTES).unwrap_err();
    assert_eq!(err.offset(), Some(0));
}
