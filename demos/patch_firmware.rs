//! Patch the WiFi credentials of a firmware image in memory

use wifipatch_core::{decode_record, encode_record, locate, write_record_at};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Wifipatch Firmware Patching Example\n");

    // Stand-in for a firmware image: code, the record, erased flash
    let mut image = vec![0u8; 1024];
    image.extend_from_slice(&encode_record("", "")?);
    image.extend(std::iter::repeat(0xFF).take(2048));

    let location = locate(&image)?;
    println!("Record found at offset {:#x}", location.offset);

    let before = decode_record(&image, location.offset)?;
    println!(
        "Before: ssid='{}' checksum={:#06x} valid={}",
        before.ssid,
        before.checksum,
        before.checksum_valid()
    );

    let block = encode_record("Workshop", "correct horse battery")?;
    write_record_at(&mut image, location.offset, &block)?;

    let after = decode_record(&image, location.offset)?;
    println!(
        "After:  ssid='{}' checksum={:#06x} valid={}",
        after.ssid,
        after.checksum,
        after.checksum_valid()
    );

    std::fs::write("example_firmware.bin", &image)?;
    println!("\nWrote {} bytes to example_firmware.bin", image.len());
    println!("Use 'wifipatch read --input example_firmware.bin' to read it back");

    Ok(())
}
