//! headers/mod.rs
//! Marshalled HTTP header blobs exchanged with the native engine.
//!
//! Wire notes:
//! - A blob is a flat run of records, no count prefix, no trailer.
//! - Record: `[name_len u32 BE][name][value_len u32 BE][value]`.
//! - Order is wire order; duplicate names are legal and all kept.
//! - Empty blob = no headers.
//! - Bytes are carried as-is; no charset assumptions, no semantic checks.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
