use crate::{mask_password, read_input};
use anyhow::{bail, Context, Result};
use colored::*;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use wifipatch_core::{encode_record, locate, write_record_at};

/// Options for rewriting the record in an image
#[derive(Debug, Clone, Default)]
pub struct WriteOptions<'a> {
    /// Destination file; the input is rewritten in place when `None`
    pub output: Option<&'a str>,
    /// Copy the input to `<input>.backup` before rewriting it in place
    pub backup: bool,
    /// Write the first record even when a duplicate signature exists
    pub allow_duplicate: bool,
}

/// Path of the backup copy for an image
pub fn backup_path(input: &str) -> String {
    format!("{}.backup", input)
}

/// True when both paths name the same existing file
fn same_file(a: &str, b: &str) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Encode new credentials and splice them over the existing record
///
/// The image is only modified after the new record has been encoded and the
/// location checked, so a rejected write leaves the file untouched. An
/// existing backup is never overwritten.
pub fn execute(input: &str, ssid: &str, password: &str, opts: &WriteOptions<'_>) -> Result<()> {
    let mut data = read_input(input)?;

    let location = locate(&data).context("Failed to locate WiFi configuration")?;
    if let Some(dup) = location.duplicate {
        if !opts.allow_duplicate {
            bail!(
                "Refusing to write: additional configuration at offset {:#x} (first at {:#x})",
                dup,
                location.offset
            );
        }
        warn!(
            "Duplicate configuration at offset {:#x}; writing the first at {:#x}",
            dup, location.offset
        );
    }

    let block = encode_record(ssid, password).context("Invalid credentials")?;
    write_record_at(&mut data, location.offset, &block)?;

    let destination = opts.output.unwrap_or(input);
    if destination == "-" {
        bail!("Cannot write firmware to stdin");
    }

    if opts.backup && (destination == input || same_file(destination, input)) {
        let backup = backup_path(input);
        if Path::new(&backup).exists() {
            info!("Backup already exists: {}", backup);
        } else {
            fs::copy(input, &backup)
                .with_context(|| format!("Failed to create backup: {}", backup))?;
            println!("Backup created: {}", backup);
        }
    }

    fs::write(destination, &data)
        .with_context(|| format!("Failed to write firmware file: {}", destination))?;

    info!(
        "Wrote {} byte record at offset {:#x} to {}",
        block.len(),
        location.offset,
        destination
    );

    println!("{} WiFi configuration updated successfully", "✓".green());
    println!("SSID:      {}", ssid);
    println!("Password:  {}", mask_password(password));

    Ok(())
}
