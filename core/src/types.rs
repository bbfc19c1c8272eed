use thiserror::Error;

use crate::{checksum::ChecksumError, headers::HeaderBlobError};

/// Unified translation error for one inbound engine call.
/// - `From<HeaderBlobError>` lets `?` flow from the decoder. Checksum failures
///   are mapped explicitly: only an unknown algorithm code is an adapter error.
/// - Engine-reported request failures are never represented here; they are data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// The engine sent a checksum code this side does not know (version skew).
    #[error(transparent)]
    UnknownChecksumCode(ChecksumError),

    /// The engine sent a header blob that does not decode.
    #[error("malformed header blob: {0}")]
    MalformedHeaderBlob(#[from] HeaderBlobError),
}
