//! response/handler.rs
//! Consumer-side callback surface.

use std::sync::Arc;

use crate::headers::HttpHeader;
use crate::response::types::{FinishedResponseContext, ResponseBody, ResponseProgress};

/// Receives translated meta-request events.
///
/// Methods take `&self` and the trait requires `Send + Sync` because the
/// engine may call from several of its threads at once. Any cross-call state
/// (e.g. "finished already seen") belongs to the implementation.
pub trait ResponseHandler: Send + Sync {
    /// A chunk of the response body.
    ///
    /// The return value is handed straight back to the engine as its
    /// flow-control signal (read-window increment when backpressure is on).
    fn on_response_body(&self, _body: ResponseBody<'_>) -> i32 {
        0
    }

    /// Response status and headers, in wire order.
    fn on_response_headers(&self, _status_code: i32, _headers: Vec<HttpHeader>) {}

    fn on_progress(&self, _progress: ResponseProgress) {}

    /// Terminal notification for the meta request.
    fn on_finished(&self, _context: FinishedResponseContext) {}
}

impl<H: ResponseHandler + ?Sized> ResponseHandler for Arc<H> {
    fn on_response_body(&self, body: ResponseBody<'_>) -> i32 {
        (**self).on_response_body(body)
    }

    fn on_response_headers(&self, status_code: i32, headers: Vec<HttpHeader>) {
        (**self).on_response_headers(status_code, headers)
    }

    fn on_progress(&self, progress: ResponseProgress) {
        (**self).on_progress(progress)
    }

    fn on_finished(&self, context: FinishedResponseContext) {
        (**self).on_finished(context)
    }
}

impl<H: ResponseHandler + ?Sized> ResponseHandler for Box<H> {
    fn on_response_body(&self, body: ResponseBody<'_>) -> i32 {
        (**self).on_response_body(body)
    }

    fn on_response_headers(&self, status_code: i32, headers: Vec<HttpHeader>) {
        (**self).on_response_headers(status_code, headers)
    }

    fn on_progress(&self, progress: ResponseProgress) {
        (**self).on_progress(progress)
    }

    fn on_finished(&self, context: FinishedResponseContext) {
        (**self).on_finished(context)
    }
}
