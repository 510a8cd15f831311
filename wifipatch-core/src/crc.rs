//! CRC16 used by the record checksum
//!
//! Reflected polynomial 0xA001, initial value 0xFFFF, no final XOR
//! (the CRC-16/MODBUS parameter set). Firmware already in the field
//! computes it bit by bit, so this does the same.

use crate::constants::{CHECKSUM_OFFSET, CHECKSUM_SIZE, RECORD_SIZE};

/// Reflected form of polynomial 0x8005
pub const CRC16_POLY: u16 = 0xA001;

/// Initial accumulator value
pub const CRC16_INIT: u16 = 0xFFFF;

/// Streaming CRC16 state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc16 {
    crc: u16,
}

impl Crc16 {
    /// Start a new checksum
    pub const fn new() -> Self {
        Self { crc: CRC16_INIT }
    }

    /// Feed bytes into the checksum
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.crc ^= byte as u16;
            for _ in 0..8 {
                if self.crc & 1 != 0 {
                    self.crc = (self.crc >> 1) ^ CRC16_POLY;
                } else {
                    self.crc >>= 1;
                }
            }
        }
    }

    /// Current checksum value
    pub const fn finalize(self) -> u16 {
        self.crc
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot CRC16 over `data`
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc = Crc16::new();
    crc.update(data);
    crc.finalize()
}

/// Checksum of a record: bytes [0,6) followed by [8,108)
pub fn record_checksum(record: &[u8; RECORD_SIZE]) -> u16 {
    let mut crc = Crc16::new();
    crc.update(&record[..CHECKSUM_OFFSET]);
    crc.update(&record[CHECKSUM_OFFSET + CHECKSUM_SIZE..]);
    crc.finalize()
}
