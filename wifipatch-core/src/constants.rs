//! Constants and field layout for the WiFi credential record

/// Magic signature identifying the start of a record ("WIFI" read as a little-endian u32)
pub const RECORD_MAGIC: u32 = 0x5749_4649;

/// The magic signature as it appears in a firmware image
pub const MAGIC_BYTES: [u8; 4] = RECORD_MAGIC.to_le_bytes();

/// The only record layout version understood by this crate
pub const RECORD_VERSION: u16 = 1;

/// Header size: magic (4) + version (2) + checksum (2) + ssid_len (1) + password_len (1) + flags (1) + reserved (1)
pub const HEADER_SIZE: usize = 12;

/// Capacity of the SSID field in bytes
pub const SSID_CAPACITY: usize = 32;

/// Capacity of the password field in bytes
pub const PASSWORD_CAPACITY: usize = 64;

/// Total on-wire record size
pub const RECORD_SIZE: usize = HEADER_SIZE + SSID_CAPACITY + PASSWORD_CAPACITY;

/// Offset of the version field
pub const VERSION_OFFSET: usize = 4;

/// Offset of the 2-byte checksum field, excluded from the CRC
pub const CHECKSUM_OFFSET: usize = 6;

/// Size of the checksum field
pub const CHECKSUM_SIZE: usize = 2;

/// Offset of the SSID length byte
pub const SSID_LEN_OFFSET: usize = 8;

/// Offset of the password length byte
pub const PASSWORD_LEN_OFFSET: usize = 9;

/// Offset of the flags byte
pub const FLAGS_OFFSET: usize = 10;

/// Offset of the reserved byte
pub const RESERVED_OFFSET: usize = 11;

/// Offset of the SSID field
pub const SSID_OFFSET: usize = HEADER_SIZE;

/// Offset of the password field
pub const PASSWORD_OFFSET: usize = SSID_OFFSET + SSID_CAPACITY;

const _: () = assert!(RECORD_SIZE == 108);
const _: () = assert!(PASSWORD_OFFSET + PASSWORD_CAPACITY == RECORD_SIZE);

/// A fully encoded record
pub type RecordBytes = [u8; RECORD_SIZE];
