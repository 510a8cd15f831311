use crate::{mask_password, read_input};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use tracing::{info, warn};
use wifipatch_core::{
    constants::HEADER_SIZE, decode_record, decoder::record_slice, locate, ConfigRecord, TextStatus,
};

/// The record found in an image, with where it was found
#[derive(Debug, Clone, Serialize)]
pub struct RecordReport {
    pub offset: usize,
    pub duplicate: Option<usize>,
    pub header_hex: String,
    pub checksum_valid: bool,
    pub record: ConfigRecord,
}

/// Locate and decode the record in a firmware image
pub fn inspect(data: &[u8]) -> Result<RecordReport> {
    let location = locate(data).context("Failed to locate WiFi configuration")?;
    let record = decode_record(data, location.offset)
        .with_context(|| format!("Failed to decode record at offset {:#x}", location.offset))?;
    let block = record_slice(data, location.offset)?;

    Ok(RecordReport {
        offset: location.offset,
        duplicate: location.duplicate,
        header_hex: hex::encode(&block[..HEADER_SIZE]),
        checksum_valid: record.checksum_valid(),
        record,
    })
}

/// Print a report the way `read` and `verify` show it
pub fn print_report(report: &RecordReport, show_password: bool) {
    let record = &report.record;
    let password = if show_password {
        record.password.clone()
    } else {
        mask_password(&record.password)
    };

    println!("\n=== WiFi Configuration ===");
    println!("Offset:    {:#010x} ({} bytes)", report.offset, report.offset);
    println!("Magic:     {:#010x}", record.magic);
    println!("Version:   {}", record.version);
    println!("SSID:      '{}'", record.ssid);
    println!("Password:  {}", password);
    println!("Flags:     {:#04x}", record.flags);
    println!(
        "Checksum:  {:#06x} (expected: {:#06x})",
        record.checksum, record.expected_checksum
    );
    if report.checksum_valid {
        println!("Valid:     {}", "true".green());
    } else {
        println!("Valid:     {}", "false".red());
    }

    if record.ssid_status == TextStatus::Lossy {
        println!("{} SSID is not valid UTF-8", "!".yellow());
    }
    if record.password_status == TextStatus::Lossy {
        println!("{} Password is not valid UTF-8", "!".yellow());
    }
    if let Some(dup) = report.duplicate {
        println!(
            "{} Found additional configuration at offset {:#010x}",
            "!".yellow(),
            dup
        );
    }
}

pub fn execute(input: &str, json: bool, show_password: bool) -> Result<()> {
    info!("Reading WiFi configuration from {}", input);

    let data = read_input(input)?;
    let mut report = inspect(&data)?;

    if report.duplicate.is_some() {
        warn!("Firmware contains more than one configuration signature");
    }

    if json {
        if !show_password {
            report.record.password = mask_password(&report.record.password);
        }
        let out = serde_json::to_string_pretty(&report)
            .context("Failed to serialize configuration")?;
        println!("{}", out);
    } else {
        print_report(&report, show_password);
    }

    Ok(())
}
