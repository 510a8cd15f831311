use std::fs;
use tempfile::tempdir;

use wifipatch_cli::commands::create;
use wifipatch_core::{constants::RECORD_SIZE, decode_record, locate};

#[test]
fn test_create_default_layout() {
    let td = tempdir().unwrap();
    let path = td.path().join("test-firmware.bin");

    create::execute(
        path.to_str().unwrap(),
        "TestWiFi",
        "TestPassword123",
        create::DEFAULT_LEAD,
        create::DEFAULT_TAIL,
    )
    .unwrap();

    let image = fs::read(&path).unwrap();
    assert_eq!(image.len(), 1024 + RECORD_SIZE + 2048);
    assert!(image[..1024].iter().all(|&b| b == 0x00));
    assert!(image[1024 + RECORD_SIZE..].iter().all(|&b| b == 0xFF));

    let location = locate(&image).unwrap();
    assert_eq!(location.offset, 1024);
    assert!(!location.has_duplicate());

    let record = decode_record(&image, location.offset).unwrap();
    assert_eq!(record.ssid, "TestWiFi");
    assert_eq!(record.password, "TestPassword123");
    assert!(record.checksum_valid());
}

#[test]
fn test_create_rejects_long_password() {
    let td = tempdir().unwrap();
    let path = td.path().join("bad.bin");
    let password = "p".repeat(65);

    let result = create::execute(path.to_str().unwrap(), "Net", &password, 0, 0);
    assert!(result.is_err());
    assert!(!path.exists());
}
