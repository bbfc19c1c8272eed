/// Engine error code reported for a successful meta request.
pub const ENGINE_SUCCESS: i32 = 0;

/// Width of each length prefix in a marshalled header blob (u32, big-endian).
pub const HEADER_LEN_PREFIX: usize = 4;

/// Checksum algorithm wire codes (mirrored by the native engine).
/// These values are a versioned contract; never renumber.
pub mod checksum_ids {
    pub const NONE: i32      = 0;
    pub const CRC32C: i32    = 1;
    pub const CRC32: i32     = 2;
    pub const SHA1: i32      = 3;
    pub const SHA256: i32    = 4;
    pub const CRC64NVME: i32 = 5;
}

/// Checksum location wire codes (where the engine puts the checksum on upload).
pub mod location_ids {
    pub const NONE: i32    = 0;
    pub const HEADER: i32  = 1;
    pub const TRAILER: i32 = 2;
}
