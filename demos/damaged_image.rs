//! Inspect an image with a corrupted record and a stale copy

use wifipatch_core::{encode_record, locate, locator::scan_records, RECORD_SIZE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Wifipatch Damaged Image Example\n");

    let mut image = vec![0u8; 4096];
    let current = encode_record("Office", "n3wpassword")?;
    let stale = encode_record("Office", "oldpassword")?;
    image[512..512 + RECORD_SIZE].copy_from_slice(&current);
    image[2048..2048 + RECORD_SIZE].copy_from_slice(&stale);

    // Simulate a flipped bit in the current record's password
    image[512 + 50] ^= 0x10;

    let location = locate(&image)?;
    println!("First record at {:#x}", location.offset);
    if let Some(dup) = location.duplicate {
        println!("Warning: another record signature at {:#x}", dup);
    }

    let (found, stats) = scan_records(&image);
    for candidate in &found {
        match &candidate.result {
            Ok(record) => println!(
                "  {:#06x}: ssid='{}' checksum {}",
                candidate.offset,
                record.ssid,
                if record.checksum_valid() { "ok" } else { "BAD" }
            ),
            Err(e) => println!("  {:#06x}: {}", candidate.offset, e),
        }
    }

    println!(
        "\n{} signatures, {} decoded, {} with valid checksum",
        stats.signatures_found,
        stats.records_decoded,
        stats.valid_records()
    );

    Ok(())
}
