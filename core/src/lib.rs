//! s3-bridge-core
//!
//! Translation layer between a native S3 transfer engine and response consumers.
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;
pub mod logging;

// Wire vocabulary
pub mod checksum;
pub mod headers;

// Callback translation
pub mod response;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::checksum::{encode_list, ChecksumAlgorithm, ChecksumError, ChecksumLocation};
    pub use crate::config::ChecksumConfig;
    pub use crate::headers::{decode_headers, marshal_headers, HeaderBlobError, HttpHeader};
    pub use crate::response::{
        ChannelHandler, FinishOnce, FinishedResponseContext, NativeFinishedEvent,
        NativeResponseAdapter, ResponseBody, ResponseEvent, ResponseHandler, ResponseProgress,
    };
    pub use crate::types::AdapterError;
}
