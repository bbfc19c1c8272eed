//! response/mod.rs
//! Translation of native meta-request callbacks into typed handler calls.
//!
//! Calling contract (documented, not enforced):
//! - For one meta request the engine delivers headers (if any) before body
//!   chunks, and body chunks before a single finished event.
//! - Calls arrive on engine-owned threads and may overlap (e.g. a body chunk
//!   and a progress update for the same request).
//! - The adapter keeps no memory across calls. It never reorders, buffers or
//!   deduplicates. A second finished call is translated like the first;
//!   wrap the handler in [`FinishOnce`] to drop repeats.
//! - Inbound buffers are borrowed for the call only. Anything a handler
//!   keeps must be copied out (`ResponseBody::to_bytes`).

pub mod types;
pub mod handler;
pub mod adapter;
pub mod combinators;

pub use types::*;
pub use handler::*;
pub use adapter::*;
pub use combinators::*;
