// Shared test helpers: a handler that records every event it receives.

#![allow(dead_code)]

use std::sync::Mutex;

use s3_bridge_core::headers::{marshal_headers, HttpHeader};
use s3_bridge_core::response::{
    FinishedResponseContext, ResponseBody, ResponseEvent, ResponseHandler, ResponseProgress,
};

pub struct RecordingHandler {
    events: Mutex<Vec<ResponseEvent>>,
    window: fn(&ResponseBody<'_>) -> i32,
}

impl Default for RecordingHandler {
    fn default() -> Self {
        Self::with_window(|_| 0)
    }
}

impl RecordingHandler {
    pub fn with_window(window: fn(&ResponseBody<'_>) -> i32) -> Self {
        Self { events: Mutex::new(Vec::new()), window }
    }

    pub fn events(&self) -> Vec<ResponseEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn finished(&self) -> Vec<FinishedResponseContext> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ResponseEvent::Finished(ctx) => Some(ctx),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl ResponseHandler for RecordingHandler {
    fn on_response_body(&self, body: ResponseBody<'_>) -> i32 {
        let signal = (self.window)(&body);
        self.events.lock().unwrap().push(body.into());
        signal
    }

    fn on_response_headers(&self, status_code: i32, headers: Vec<HttpHeader>) {
        self.events
            .lock()
            .unwrap()
            .push(ResponseEvent::Headers { status_code, headers });
    }

    fn on_progress(&self, progress: ResponseProgress) {
        self.events.lock().unwrap().push(ResponseEvent::Progress(progress));
    }

    fn on_finished(&self, context: FinishedResponseContext) {
        self.events.lock().unwrap().push(ResponseEvent::Finished(context));
    }
}

/// Marshal `(name, value)` string pairs the way the engine does.
pub fn blob(pairs: &[(&str, &str)]) -> Vec<u8> {
    let headers: Vec<HttpHeader> = pairs
        .iter()
        .map(|(n, v)| HttpHeader::new(n.to_string(), v.to_string()))
        .collect();
    marshal_headers(&headers).unwrap().to_vec()
}

/// Hand-built record, independent of the encoder.
pub fn raw_record(name: &[u8], value: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&(name.len() as u32).to_be_bytes());
    out.extend_from_slice(name);
    out.extend_from_slice(&(value.len() as u32).to_be_bytes());
    out.extend_from_slice(value);
    out
}
