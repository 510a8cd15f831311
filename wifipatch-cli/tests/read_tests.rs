use std::fs;
use tempfile::tempdir;

use wifipatch_cli::commands::{create::build_image, read};
use wifipatch_core::constants::{MAGIC_BYTES, RECORD_SIZE};

#[test]
fn test_inspect_test_image() {
    let image = build_image("TestWiFi", "TestPassword123", 1024, 2048).unwrap();
    let report = read::inspect(&image).unwrap();

    assert_eq!(report.offset, 1024);
    assert_eq!(report.duplicate, None);
    assert!(report.checksum_valid);
    assert_eq!(report.record.ssid, "TestWiFi");
    assert_eq!(report.record.password, "TestPassword123");
    assert_eq!(report.header_hex, "494649570100c3f5080f0000");
}

#[test]
fn test_inspect_reports_duplicate() {
    let mut image = build_image("First", "pw1", 0, 300).unwrap();
    let second = build_image("Second", "pw2", 0, 0).unwrap();
    image[200..200 + RECORD_SIZE].copy_from_slice(&second);

    let report = read::inspect(&image).unwrap();
    assert_eq!(report.offset, 0);
    assert_eq!(report.duplicate, Some(200));
    assert_eq!(report.record.ssid, "First");
}

#[test]
fn test_inspect_bad_checksum_still_reads() {
    let mut image = build_image("Net", "pw", 16, 16).unwrap();
    image[16 + 12] = b'M';

    let report = read::inspect(&image).unwrap();
    assert!(!report.checksum_valid);
    assert_eq!(report.record.ssid, "Met");
}

#[test]
fn test_inspect_missing_record() {
    let image = vec![0u8; 4096];
    let err = read::inspect(&image).unwrap_err();
    assert!(format!("{:#}", err).contains("not found"));
}

#[test]
fn test_inspect_incomplete_record() {
    let mut image = vec![0u8; 256];
    image[250..254].copy_from_slice(&MAGIC_BYTES);
    let err = read::inspect(&image).unwrap_err();
    assert!(format!("{:#}", err).contains("Incomplete record"));
}

#[test]
fn test_read_execute_text_and_json() {
    let td = tempdir().unwrap();
    let path = td.path().join("fw.bin");
    fs::write(&path, build_image("Home", "secret", 64, 64).unwrap()).unwrap();

    read::execute(path.to_str().unwrap(), false, false).unwrap();
    read::execute(path.to_str().unwrap(), true, false).unwrap();
    read::execute(path.to_str().unwrap(), true, true).unwrap();
}

#[test]
fn test_read_missing_file() {
    let td = tempdir().unwrap();
    let path = td.path().join("missing.bin");
    let result = read::execute(path.to_str().unwrap(), false, false);
    assert!(result.is_err());
}
