//! Locating records inside a firmware image

use crate::constants::{MAGIC_BYTES, RECORD_SIZE};
use crate::decoder::{decode_record, record_slice};
use crate::error::RecordError;
use crate::types::ConfigRecord;
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Where the record lives in a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Offset of the first complete record
    pub offset: usize,

    /// Offset of a second magic signature, if any
    ///
    /// Bytes inside a record that decodes are skipped, so a signature in
    /// its SSID or password is not reported.
    pub duplicate: Option<usize>,
}

impl Location {
    /// True when more than one magic signature is present
    pub fn has_duplicate(&self) -> bool {
        self.duplicate.is_some()
    }
}

/// Find the next occurrence of the magic signature at or after `from`
pub fn find_magic(data: &[u8], from: usize) -> Option<usize> {
    let haystack = data.get(from..)?;
    memchr::memmem::find(haystack, &MAGIC_BYTES).map(|pos| from + pos)
}

/// Find the first record in `data`
///
/// Fails with [`RecordError::NotFound`] if the magic signature is absent and
/// with [`RecordError::IncompleteRecord`] if the first match is too close to
/// the end of the buffer to hold a whole record.
pub fn find_record(data: &[u8]) -> Result<usize, RecordError> {
    let offset = find_magic(data, 0).ok_or(RecordError::NotFound)?;
    record_slice(data, offset)?;
    Ok(offset)
}

/// Find the first record and check for a second one
///
/// A duplicate is not an error; callers decide whether to refuse a write
/// or carry on with the first occurrence.
pub fn locate(data: &[u8]) -> Result<Location, RecordError> {
    #[cfg(feature = "logging")]
    debug!("Searching {} bytes for a WiFi record", data.len());

    let offset = find_record(data)?;
    let next = if decode_record(data, offset).is_ok() {
        offset + RECORD_SIZE
    } else {
        offset + MAGIC_BYTES.len()
    };
    let duplicate = find_magic(data, next);

    #[cfg(feature = "logging")]
    {
        debug!("Found record at offset {:#x}", offset);
        if let Some(dup) = duplicate {
            warn!(
                "Additional record signature at offset {:#x} (first at {:#x})",
                dup, offset
            );
        }
    }

    Ok(Location { offset, duplicate })
}

/// A record candidate found while scanning
#[derive(Debug, Clone)]
pub struct LocatedRecord {
    /// Byte offset where the magic signature was found
    pub offset: usize,

    /// Decode outcome at this offset
    pub result: Result<ConfigRecord, RecordError>,
}

impl LocatedRecord {
    /// The decoded record, if decoding succeeded
    pub fn record(&self) -> Option<&ConfigRecord> {
        self.result.as_ref().ok()
    }
}

/// Scan statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Total bytes scanned
    pub bytes_scanned: usize,

    /// Number of magic signatures found
    pub signatures_found: usize,

    /// Number of candidates that decoded
    pub records_decoded: usize,

    /// Number of candidates that failed to decode
    pub decode_failures: usize,

    /// Number of decoded records with a bad checksum
    pub checksum_failures: usize,
}

impl ScanStats {
    /// Number of decoded records with a good checksum
    pub fn valid_records(&self) -> usize {
        self.records_decoded - self.checksum_failures
    }
}

/// Try to decode a record at every magic signature in `data`
///
/// Diagnostic view of an image: unlike [`locate`], nothing is treated as
/// fatal and every candidate is reported with its decode outcome. After a
/// successful decode scanning resumes past the record, otherwise past the
/// signature.
pub fn scan_records(data: &[u8]) -> (Vec<LocatedRecord>, ScanStats) {
    let mut stats = ScanStats {
        bytes_scanned: data.len(),
        ..Default::default()
    };
    let mut results = Vec::new();
    let mut pos = 0;

    while let Some(offset) = find_magic(data, pos) {
        stats.signatures_found += 1;

        let result = decode_record(data, offset);
        match &result {
            Ok(record) => {
                stats.records_decoded += 1;
                if !record.checksum_valid() {
                    stats.checksum_failures += 1;
                }
                pos = offset + RECORD_SIZE;
            }
            Err(_e) => {
                #[cfg(feature = "logging")]
                warn!("Failed to decode record at offset {:#x}: {:?}", offset, _e);

                stats.decode_failures += 1;
                pos = offset + MAGIC_BYTES.len();
            }
        }

        results.push(LocatedRecord { offset, result });
    }

    #[cfg(feature = "logging")]
    debug!(
        "Scan complete: {} signatures, {} records in {} bytes",
        stats.signatures_found,
        stats.records_decoded,
        data.len()
    );

    (results, stats)
}
