use anyhow::{Context, Result};
use std::fs;
use tracing::info;
use wifipatch_core::encode_record;

/// Default number of zero bytes before the record
pub const DEFAULT_LEAD: usize = 1024;

/// Default number of 0xFF bytes after the record
pub const DEFAULT_TAIL: usize = 2048;

/// Build a synthetic image: `lead` zero bytes, the record, `tail` 0xFF bytes
pub fn build_image(ssid: &str, password: &str, lead: usize, tail: usize) -> Result<Vec<u8>> {
    let block = encode_record(ssid, password).context("Invalid credentials")?;

    let mut image = Vec::with_capacity(lead + block.len() + tail);
    image.resize(lead, 0x00);
    image.extend_from_slice(&block);
    image.resize(lead + block.len() + tail, 0xFF);
    Ok(image)
}

/// Write a test firmware image containing one record
pub fn execute(output: &str, ssid: &str, password: &str, lead: usize, tail: usize) -> Result<()> {
    let image = build_image(ssid, password, lead, tail)?;

    fs::write(output, &image)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    info!("Record placed at offset {:#x}", lead);
    println!("Test firmware created: {}", output);
    println!("File size: {} bytes", image.len());

    Ok(())
}
