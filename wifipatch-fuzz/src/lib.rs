//! Fuzzing entry points for wifipatch-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decode

pub fn fuzz_decode(data: &[u8]) {
    use wifipatch_core::decoder::decode_record;

    // Try every offset up to the first few - should never panic
    for offset in 0..data.len().min(8) {
        let _ = decode_record(data, offset);
    }
}

pub fn fuzz_locate(data: &[u8]) {
    use wifipatch_core::locator::locate;

    if let Ok(location) = locate(data) {
        // A located record always has room for a full decode
        assert!(location.offset + wifipatch_core::RECORD_SIZE <= data.len());
    }
}

pub fn fuzz_scan(data: &[u8]) {
    use wifipatch_core::locator::scan_records;

    // Try to scan - should never panic
    let _ = scan_records(data);
}

pub fn fuzz_encode(ssid: &str, password: &str) {
    use wifipatch_core::{decode_record, encode_record};

    if let Ok(block) = encode_record(ssid, password) {
        let record = decode_record(&block, 0).expect("encoded record must decode");
        assert!(record.checksum_valid());
        assert_eq!(record.ssid, ssid);
        assert_eq!(record.password, password);
    }
}
