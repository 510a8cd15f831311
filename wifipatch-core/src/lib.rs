//! # Wifipatch Core
//!
//! Locate, validate, decode and re-encode the WiFi credential record embedded
//! in firmware images.
//!
//! ## Modules
//!
//! - `constants`: Record layout constants
//! - `crc`: Bit-at-a-time CRC16 used by the record checksum
//! - `types`: The decoded `ConfigRecord`
//! - `locator`: Magic signature search and duplicate detection
//! - `decoder`: Record decoding
//! - `encoder`: Record encoding and in-place patching

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod constants;
pub mod crc;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod locator;
pub mod types;

// Re-export commonly used types
pub use constants::{RecordBytes, RECORD_SIZE};
pub use decoder::decode_record;
pub use encoder::{encode_record, write_record_at, RecordBuilder};
pub use error::{Field, RecordError};
pub use locator::{find_record, locate, Location};
pub use types::{ConfigRecord, TextStatus};

/// Result type alias for record operations
pub type Result<T> = core::result::Result<T, RecordError>;
