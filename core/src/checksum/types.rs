//! checksum/types.rs
//! FFI-safe enums for checksum identifiers.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{checksum_ids, location_ids};

/// Checksum algorithms understood by the native engine.
#[repr(i32)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash,
    TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChecksumAlgorithm {
    None      = checksum_ids::NONE,
    Crc32c    = checksum_ids::CRC32C,
    Crc32     = checksum_ids::CRC32,
    Sha1      = checksum_ids::SHA1,
    Sha256    = checksum_ids::SHA256,
    Crc64Nvme = checksum_ids::CRC64NVME,
}

impl ChecksumAlgorithm {
    /// Every variant, in wire-code order.
    pub const ALL: [ChecksumAlgorithm; 6] = [
        ChecksumAlgorithm::None,
        ChecksumAlgorithm::Crc32c,
        ChecksumAlgorithm::Crc32,
        ChecksumAlgorithm::Sha1,
        ChecksumAlgorithm::Sha256,
        ChecksumAlgorithm::Crc64Nvme,
    ];

    /// Canonical upper-case name, as used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            ChecksumAlgorithm::None      => "NONE",
            ChecksumAlgorithm::Crc32c    => "CRC32C",
            ChecksumAlgorithm::Crc32     => "CRC32",
            ChecksumAlgorithm::Sha1      => "SHA1",
            ChecksumAlgorithm::Sha256    => "SHA256",
            ChecksumAlgorithm::Crc64Nvme => "CRC64NVME",
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the engine places the checksum of an upload.
#[repr(i32)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash,
    TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChecksumLocation {
    #[default]
    None    = location_ids::NONE,
    Header  = location_ids::HEADER,
    Trailer = location_ids::TRAILER,
}

impl ChecksumLocation {
    pub const fn name(self) -> &'static str {
        match self {
            ChecksumLocation::None    => "NONE",
            ChecksumLocation::Header  => "HEADER",
            ChecksumLocation::Trailer => "TRAILER",
        }
    }
}

impl fmt::Display for ChecksumLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// Wire code outside the algorithm registry.
    #[error("unknown checksum algorithm wire code: {code}")]
    UnknownAlgorithm { code: i32 },

    /// Wire code outside the location registry.
    #[error("unknown checksum location wire code: {code}")]
    UnknownLocation { code: i32 },
}
