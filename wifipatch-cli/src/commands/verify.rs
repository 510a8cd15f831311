use super::read::{inspect, print_report};
use crate::read_input;
use anyhow::{bail, Result};
use colored::*;
use tracing::{info, warn};

/// Check the record's integrity
///
/// Fails if the record cannot be located or decoded, or if its checksum
/// does not match. With `strict`, a duplicate signature or text that is not
/// valid UTF-8 also fails verification.
pub fn execute(input: &str, strict: bool) -> Result<()> {
    info!("Verifying file: {}", input);

    let data = read_input(input)?;
    let report = inspect(&data)?;

    print_report(&report, false);

    println!("\n=== Summary ===");
    if let Err(e) = report.record.ensure_checksum(report.offset) {
        println!("{} Configuration checksum mismatch!", "✗".red());
        bail!(e);
    }

    if strict {
        if let Some(dup) = report.duplicate {
            println!("{} Duplicate configuration present", "✗".red());
            bail!("Duplicate configuration signature at offset {:#x}", dup);
        }
        if !report.record.text_intact() {
            println!("{} Credentials are not valid UTF-8", "✗".red());
            bail!("Credentials at offset {:#x} are not valid UTF-8", report.offset);
        }
    } else if report.duplicate.is_some() {
        warn!("Duplicate configuration signature ignored");
    }

    println!("{} Configuration is valid", "✓".green());
    Ok(())
}
