//! checksum/mod.rs
//! Checksum vocabulary shared with the native engine.
//!
//! Notes:
//! - The wire code is the only thing both sides agree on.
//! - Unknown codes are protocol skew and surface as `ChecksumError`, never as `None`.
//! - Everything here is immutable and `Copy`; safe to read from any engine thread.

pub mod types;
pub mod registry;

pub use types::*;
pub use registry::*;
