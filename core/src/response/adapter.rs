//! response/adapter.rs
//!
//! Engine-facing entry points.
//!
//! Design notes:
//! - One inbound call -> at most one handler call, synchronously, on the caller's thread.
//! - The only field is the handler; nothing is mutated, so no locks.
//! - Translation failures return before the handler is touched.
//! - Engine error codes and HTTP statuses are forwarded untouched.

use tracing::{debug, trace};

use crate::headers::decode_optional_headers;
use crate::response::handler::ResponseHandler;
use crate::response::types::{
    FinishedResponseContext, NativeFinishedEvent, ResponseBody, ResponseProgress,
};
use crate::types::AdapterError;

/// Translates raw engine callbacks for one meta request into `H` calls.
#[derive(Debug)]
pub struct NativeResponseAdapter<H> {
    handler: H,
}

impl<H: ResponseHandler> NativeResponseAdapter<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Body chunk. Returns the handler's flow-control value unchanged.
    ///
    /// Ranges are passed through as given; contiguity and order are not checked.
    /// Offsets are unsigned: the engine never reports a negative byte position.
    pub fn on_response_body(&self, body: &[u8], range_start: u64, range_end: u64) -> i32 {
        let signal = self.handler.on_response_body(ResponseBody {
            data: body,
            range_start,
            range_end,
        });
        trace!(len = body.len(), range_start, range_end, signal, "response body forwarded");
        signal
    }

    /// Status line and headers. An absent blob means no headers.
    pub fn on_response_headers(
        &self,
        status_code: i32,
        headers_blob: Option<&[u8]>,
    ) -> Result<(), AdapterError> {
        let headers = decode_optional_headers(headers_blob)
            .inspect_err(|e| debug!(status_code, error = %e, "response headers rejected"))?
            .unwrap_or_default();

        trace!(status_code, count = headers.len(), "response headers forwarded");
        self.handler.on_response_headers(status_code, headers);
        Ok(())
    }

    pub fn on_progress(&self, progress: ResponseProgress) {
        trace!(
            bytes_transferred = progress.bytes_transferred,
            content_length = progress.content_length,
            "progress forwarded"
        );
        self.handler.on_progress(progress);
    }

    /// Terminal event.
    ///
    /// # Errors
    /// - `UnknownChecksumCode` if the checksum code is outside the registry.
    /// - `MalformedHeaderBlob` if the error header blob does not decode.
    ///
    /// A non-zero engine error code is not an error here; it is forwarded as data.
    pub fn on_finished(&self, event: NativeFinishedEvent<'_>) -> Result<(), AdapterError> {
        let error_code = event.error_code;
        let context = FinishedResponseContext::from_native(event)
            .inspect_err(|e| debug!(error_code, error = %e, "finished event rejected"))?;

        trace!(
            error_code = context.error_code,
            response_status = context.response_status,
            checksum = %context.checksum_algorithm,
            validated = context.did_validate_checksum,
            "finished forwarded"
        );
        self.handler.on_finished(context);
        Ok(())
    }
}
