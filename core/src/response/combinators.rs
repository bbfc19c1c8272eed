//! response/combinators.rs
//! Reusable handler wrappers. These hold consumer-side state; the adapter holds none.

use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam::channel::{self, Receiver, Sender};
use tracing::{debug, warn};

use crate::headers::HttpHeader;
use crate::response::handler::ResponseHandler;
use crate::response::types::{
    FinishedResponseContext, ResponseBody, ResponseEvent, ResponseProgress,
};

/// Forwards everything to `H`, but at most one finished event.
///
/// Later finished events are dropped and logged. Lock-free: one atomic swap.
#[derive(Debug)]
pub struct FinishOnce<H> {
    inner: H,
    finished: AtomicBool,
}

impl<H: ResponseHandler> FinishOnce<H> {
    pub fn new(inner: H) -> Self {
        Self { inner, finished: AtomicBool::new(false) }
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }

    pub fn has_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }
}

impl<H: ResponseHandler> ResponseHandler for FinishOnce<H> {
    fn on_response_body(&self, body: ResponseBody<'_>) -> i32 {
        self.inner.on_response_body(body)
    }

    fn on_response_headers(&self, status_code: i32, headers: Vec<HttpHeader>) {
        self.inner.on_response_headers(status_code, headers)
    }

    fn on_progress(&self, progress: ResponseProgress) {
        self.inner.on_progress(progress)
    }

    fn on_finished(&self, context: FinishedResponseContext) {
        if self.finished.swap(true, Ordering::AcqRel) {
            warn!(
                error_code = context.error_code,
                response_status = context.response_status,
                "duplicate finished event dropped"
            );
            return;
        }
        self.inner.on_finished(context)
    }
}

/// Pushes owned [`ResponseEvent`]s into a channel.
///
/// Body chunks are copied out of the engine's buffer. Each body call returns
/// the configured window increment (0 by default). With a bounded sender a
/// full channel blocks the engine thread; prefer [`ChannelHandler::unbounded`].
#[derive(Debug, Clone)]
pub struct ChannelHandler {
    tx: Sender<ResponseEvent>,
    window_increment: i32,
}

impl ChannelHandler {
    pub fn new(tx: Sender<ResponseEvent>) -> Self {
        Self { tx, window_increment: 0 }
    }

    pub fn unbounded() -> (Self, Receiver<ResponseEvent>) {
        let (tx, rx) = channel::unbounded();
        (Self::new(tx), rx)
    }

    pub fn with_window_increment(mut self, window_increment: i32) -> Self {
        self.window_increment = window_increment;
        self
    }

    fn send(&self, event: ResponseEvent) {
        if self.tx.send(event).is_err() {
            debug!("response event receiver dropped; event discarded");
        }
    }
}

impl ResponseHandler for ChannelHandler {
    fn on_response_body(&self, body: ResponseBody<'_>) -> i32 {
        self.send(body.into());
        self.window_increment
    }

    fn on_response_headers(&self, status_code: i32, headers: Vec<HttpHeader>) {
        self.send(ResponseEvent::Headers { status_code, headers });
    }

    fn on_progress(&self, progress: ResponseProgress) {
        self.send(ResponseEvent::Progress(progress));
    }

    fn on_finished(&self, context: FinishedResponseContext) {
        self.send(ResponseEvent::Finished(context));
    }
}
