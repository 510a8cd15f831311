use crate::read_input;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fs;
use tracing::info;
use wifipatch_core::{constants::RECORD_SIZE, locator::scan_records};

/// Bytes shown by `--hexdump` for each candidate
const DUMP_LEN: usize = 64;

#[derive(Debug, Serialize)]
pub struct Candidate {
    pub offset: usize,
    pub decoded: bool,
    pub checksum_valid: bool,
    pub ssid: Option<String>,
    pub error: Option<String>,
}

/// Hex and ASCII dump, 16 bytes per line, addresses relative to `base`
pub fn hexdump(data: &[u8], base: usize) -> Vec<String> {
    data.chunks(16)
        .enumerate()
        .map(|(i, chunk)| {
            let hex_part = chunk
                .iter()
                .map(|b| hex::encode([*b]))
                .collect::<Vec<_>>()
                .join(" ");
            let ascii: String = chunk
                .iter()
                .map(|&b| if (32..=126).contains(&b) { b as char } else { '.' })
                .collect();
            format!("{:08x}: {:<48} |{}|", base + i * 16, hex_part, ascii)
        })
        .collect()
}

pub fn execute(input: &str, output: Option<&str>, dump: bool) -> Result<()> {
    info!("Scanning file: {}", input);

    let data = read_input(input)?;
    info!("File size: {} bytes", data.len());

    let (located, stats) = scan_records(&data);

    println!("\n=== Scan Results ===");
    println!("Bytes scanned:     {} bytes", stats.bytes_scanned);
    println!("Signatures found:  {}", stats.signatures_found);
    println!("Records decoded:   {}", stats.records_decoded);
    println!("Decode failures:   {}", stats.decode_failures);
    println!("Checksum failures: {}", stats.checksum_failures);
    println!();

    let mut candidates = Vec::with_capacity(located.len());
    for lr in &located {
        match &lr.result {
            Ok(record) => {
                let status = if record.checksum_valid() {
                    "valid".green()
                } else {
                    "checksum mismatch".red()
                };
                println!(
                    "Record @ {:#010x}: v{} ssid_len={} password_len={} flags={:#04x} [{}]",
                    lr.offset,
                    record.version,
                    record.ssid_length,
                    record.password_length,
                    record.flags,
                    status
                );
            }
            Err(e) => println!("Signature @ {:#010x}: {}", lr.offset, e.to_string().red()),
        }

        if dump {
            let end = (lr.offset + RECORD_SIZE.min(DUMP_LEN)).min(data.len());
            for line in hexdump(&data[lr.offset..end], lr.offset) {
                println!("   {}", line);
            }
        }

        candidates.push(Candidate {
            offset: lr.offset,
            decoded: lr.result.is_ok(),
            checksum_valid: lr.record().is_some_and(|r| r.checksum_valid()),
            ssid: lr.record().map(|r| r.ssid.clone()),
            error: lr.result.as_ref().err().map(|e| e.to_string()),
        });
    }

    if stats.signatures_found > 1 {
        println!(
            "\n{} {} configuration signatures found; this may indicate duplicate structures",
            "!".yellow(),
            stats.signatures_found
        );
    }

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&candidates)
            .with_context(|| "Failed to serialize scan results")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        info!("Scan results written to: {}", output_path);
    }

    Ok(())
}
