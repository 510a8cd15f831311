//! Library entry for wifipatch-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};

/// Read a firmware image from a file, or from stdin when `input` is "-"
pub fn read_input(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read firmware from stdin")?;
        Ok(buf)
    } else {
        fs::read(input).with_context(|| format!("Failed to read firmware file: {}", input))
    }
}

/// Replace every character of a password with '*'
pub fn mask_password(password: &str) -> String {
    "*".repeat(password.chars().count())
}
