//! response/types.rs
//! Events handed to response handlers, and the raw finished record the engine supplies.

use std::error::Error;
use std::sync::Arc;

use bytes::Bytes;

use crate::checksum::ChecksumAlgorithm;
use crate::constants::ENGINE_SUCCESS;
use crate::headers::{decode_optional_headers, HttpHeader};
use crate::types::AdapterError;

/// Underlying failure detail attached by the engine. Opaque to the adapter.
pub type ErrorCause = Arc<dyn Error + Send + Sync + 'static>;

/// Zero-copy view of one body chunk. Valid for the duration of the callback only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseBody<'a> {
    pub data: &'a [u8],
    /// First byte of this chunk within the object.
    pub range_start: u64,
    /// Last byte of this chunk within the object (inclusive).
    pub range_end: u64,
}

impl<'a> ResponseBody<'a> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Owned copy of the chunk data, for handlers that keep it past the call.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.data)
    }
}

/// Transfer progress, already assembled by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseProgress {
    /// Bytes transferred since the previous progress update.
    pub bytes_transferred: u64,
    /// Total object size, 0 if unknown.
    pub content_length: u64,
}

/// Raw arguments of the engine's finished callback, borrowed for the call.
#[derive(Debug, Clone, Default)]
pub struct NativeFinishedEvent<'a> {
    pub error_code: i32,
    pub response_status: i32,
    pub error_payload: Option<&'a [u8]>,
    pub error_operation_name: Option<&'a str>,
    pub checksum_algorithm: i32,
    pub did_validate_checksum: bool,
    pub cause: Option<ErrorCause>,
    pub error_headers_blob: Option<&'a [u8]>,
}

/// Terminal outcome of a meta request.
///
/// The optional fields are independent: any subset may be present, and an
/// absent payload is distinct from an empty one.
#[derive(Debug, Clone)]
pub struct FinishedResponseContext {
    /// Engine error code; 0 means the engine considers the request successful.
    pub error_code: i32,
    /// HTTP status, meaningful only if a response was received.
    pub response_status: i32,
    pub error_payload: Option<Bytes>,
    /// Sub-operation that failed, for composite (multipart) transfers.
    pub error_operation_name: Option<String>,
    pub checksum_algorithm: ChecksumAlgorithm,
    /// True only if the engine validated a checksum and it matched.
    pub did_validate_checksum: bool,
    pub cause: Option<ErrorCause>,
    pub error_headers: Option<Vec<HttpHeader>>,
}

impl FinishedResponseContext {
    /// Assemble the context from the engine's raw fields.
    ///
    /// All-or-nothing: fails on an unknown checksum code or a malformed
    /// header blob, copying nothing out in that case.
    pub fn from_native(event: NativeFinishedEvent<'_>) -> Result<Self, AdapterError> {
        let checksum_algorithm = ChecksumAlgorithm::from_wire_code(event.checksum_algorithm)
            .map_err(AdapterError::UnknownChecksumCode)?;
        let error_headers = decode_optional_headers(event.error_headers_blob)?;

        Ok(Self {
            error_code: event.error_code,
            response_status: event.response_status,
            error_payload: event.error_payload.map(Bytes::copy_from_slice),
            error_operation_name: event.error_operation_name.map(str::to_owned),
            checksum_algorithm,
            did_validate_checksum: event.did_validate_checksum,
            cause: event.cause,
            error_headers,
        })
    }

    /// Engine-level success. Says nothing about the HTTP status.
    pub fn is_success(&self) -> bool {
        self.error_code == ENGINE_SUCCESS
    }

    /// Error payload as UTF-8 (S3 error bodies are XML), if present and valid.
    pub fn error_payload_str(&self) -> Option<&str> {
        self.error_payload
            .as_deref()
            .and_then(|p| std::str::from_utf8(p).ok())
    }
}

/// Owned form of every handler event, for consumers that move events off engine threads.
#[derive(Debug, Clone)]
pub enum ResponseEvent {
    Body {
        data: Bytes,
        range_start: u64,
        range_end: u64,
    },
    Headers {
        status_code: i32,
        headers: Vec<HttpHeader>,
    },
    Progress(ResponseProgress),
    Finished(FinishedResponseContext),
}

impl From<ResponseBody<'_>> for ResponseEvent {
    fn from(body: ResponseBody<'_>) -> Self {
        ResponseEvent::Body {
            data: body.to_bytes(),
            range_start: body.range_start,
            range_end: body.range_end,
        }
    }
}
