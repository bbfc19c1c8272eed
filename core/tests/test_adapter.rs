// Adapter tests. The engine is simulated directly: each test makes the raw
// calls the engine would make, including out-of-order and repeated ones.

mod common;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bytes::Bytes;
    use s3_bridge_core::checksum::{ChecksumAlgorithm, ChecksumError};
    use s3_bridge_core::headers::{HeaderBlobError, HeaderField};
    use s3_bridge_core::response::{
        NativeFinishedEvent, NativeResponseAdapter, ResponseEvent, ResponseProgress,
    };
    use s3_bridge_core::types::AdapterError;

    use crate::common::{blob, RecordingHandler};

    fn adapter() -> NativeResponseAdapter<RecordingHandler> {
        NativeResponseAdapter::new(RecordingHandler::default())
    }

    #[derive(Debug)]
    struct ConnectionReset;

    impl std::fmt::Display for ConnectionReset {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("connection reset by peer")
        }
    }

    impl std::error::Error for ConnectionReset {}

// ## 1. Finished event assembly

    #[test]
    fn successful_finish_resolves_checksum_and_keeps_payload_absent() {
        let a = adapter();
        a.on_finished(NativeFinishedEvent {
            error_code: 0,
            response_status: 200,
            error_payload: None,
            checksum_algorithm: 1,
            did_validate_checksum: true,
            ..Default::default()
        })
        .unwrap();

        let finished = a.handler().finished();
        assert_eq!(finished.len(), 1);
        let ctx = &finished[0];
        assert!(ctx.is_success());
        assert_eq!(ctx.response_status, 200);
        assert_eq!(ctx.checksum_algorithm, ChecksumAlgorithm::Crc32c);
        assert!(ctx.did_validate_checksum);
        assert!(ctx.error_payload.is_none());
        assert!(ctx.error_operation_name.is_none());
        assert!(ctx.cause.is_none());
        assert!(ctx.error_headers.is_none());
    }

    #[test]
    fn empty_payload_is_not_absent_payload() {
        let a = adapter();
        a.on_finished(NativeFinishedEvent {
            error_code: 14343,
            response_status: 500,
            error_payload: Some(&[]),
            ..Default::default()
        })
        .unwrap();

        let finished = a.handler().finished();
        let ctx = &finished[0];
        assert_eq!(ctx.error_payload, Some(Bytes::new()));
    }

    #[test]
    fn failure_fields_are_carried_independently() {
        let a = adapter();
        let payload = b"<Error><Code>NoSuchKey</Code></Error>";
        let headers = blob(&[("x-amz-request-id", "R1"), ("x-amz-id-2", "H2")]);

        a.on_finished(NativeFinishedEvent {
            error_code: 14343,
            response_status: 404,
            error_payload: Some(&payload[..]),
            error_operation_name: Some("GetObject"),
            checksum_algorithm: 0,
            did_validate_checksum: false,
            cause: Some(Arc::new(ConnectionReset)),
            error_headers_blob: Some(headers.as_slice()),
        })
        .unwrap();

        let finished = a.handler().finished();
        let ctx = &finished[0];
        assert!(!ctx.is_success());
        assert_eq!(ctx.error_code, 14343);
        assert_eq!(ctx.error_payload_str(), Some("<Error><Code>NoSuchKey</Code></Error>"));
        assert_eq!(ctx.error_operation_name.as_deref(), Some("GetObject"));
        assert_eq!(ctx.checksum_algorithm, ChecksumAlgorithm::None);
        assert_eq!(ctx.cause.as_ref().unwrap().to_string(), "connection reset by peer");

        let error_headers = ctx.error_headers.as_ref().unwrap();
        assert_eq!(error_headers.len(), 2);
        assert_eq!(error_headers[0].value_str(), Some("R1"));
        assert_eq!(error_headers[1].value_str(), Some("H2"));
    }

    #[test]
    fn cause_without_payload_or_headers_is_legal() {
        let a = adapter();
        a.on_finished(NativeFinishedEvent {
            error_code: 1049,
            cause: Some(Arc::new(ConnectionReset)),
            ..Default::default()
        })
        .unwrap();

        let finished = a.handler().finished();
        let ctx = &finished[0];
        assert!(ctx.cause.is_some());
        assert!(ctx.error_payload.is_none());
        assert!(ctx.error_headers.is_none());
        assert_eq!(ctx.response_status, 0);
    }

    #[test]
    fn empty_error_header_blob_is_present_but_empty() {
        let a = adapter();
        a.on_finished(NativeFinishedEvent {
            error_headers_blob: Some(&[]),
            ..Default::default()
        })
        .unwrap();

        let finished = a.handler().finished();
        let ctx = &finished[0];
        assert_eq!(ctx.error_headers.as_ref().map(Vec::len), Some(0));
    }

    #[test]
    fn engine_success_with_http_failure_is_not_reinterpreted() {
        let a = adapter();
        a.on_finished(NativeFinishedEvent {
            error_code: 0,
            response_status: 503,
            ..Default::default()
        })
        .unwrap();

        let finished = a.handler().finished();
        let ctx = &finished[0];
        assert_eq!(ctx.error_code, 0);
        assert_eq!(ctx.response_status, 503);
        assert!(ctx.is_success());
    }

// ## 2. Translation failures never reach the handler

    #[test]
    fn unknown_checksum_code_fails_and_skips_handler() {
        let a = adapter();
        let err = a
            .on_finished(NativeFinishedEvent {
                checksum_algorithm: 99,
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(
            err,
            AdapterError::UnknownChecksumCode(ChecksumError::UnknownAlgorithm { code: 99 })
        );
        assert_eq!(a.handler().len(), 0);
    }

    #[test]
    fn unknown_checksum_message_names_the_algorithm_code_once() {
        let err = adapter()
            .on_finished(NativeFinishedEvent {
                checksum_algorithm: 7,
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(err.to_string(), "unknown checksum algorithm wire code: 7");
        assert!(!err.to_string().contains("location"));
    }

    #[test]
    fn malformed_error_headers_fail_and_skip_handler() {
        let a = adapter();
        let mut headers = blob(&[("x-a", "1")]);
        headers.pop();

        let err = a
            .on_finished(NativeFinishedEvent {
                checksum_algorithm: 4,
                error_headers_blob: Some(headers.as_slice()),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(
            err,
            AdapterError::MalformedHeaderBlob(HeaderBlobError::Truncated {
                field: HeaderField::Value,
                ..
            })
        ));
        assert_eq!(a.handler().len(), 0);
    }

    #[test]
    fn malformed_response_headers_fail_and_skip_handler() {
        let a = adapter();
        let err = a.on_response_headers(200, Some(&[0, 0, 0, 9, b'x'])).unwrap_err();
        assert!(matches!(err, AdapterError::MalformedHeaderBlob(_)));
        assert_eq!(a.handler().len(), 0);
    }

    #[test]
    fn engine_failure_is_data_not_an_error() {
        let a = adapter();
        let result = a.on_finished(NativeFinishedEvent {
            error_code: 2058,
            response_status: 403,
            ..Default::default()
        });
        assert!(result.is_ok());
        assert_eq!(a.handler().finished().len(), 1);
    }

// ## 3. Headers and progress

    #[test]
    fn response_headers_are_forwarded_in_order() {
        let a = adapter();
        let wire = blob(&[("Content-Type", "text/plain"), ("Content-Length", "4")]);
        a.on_response_headers(206, Some(wire.as_slice())).unwrap();

        match &a.handler().events()[0] {
            ResponseEvent::Headers { status_code, headers } => {
                assert_eq!(*status_code, 206);
                assert_eq!(headers[0].name_str(), Some("Content-Type"));
                assert_eq!(headers[1].name_str(), Some("Content-Length"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn absent_response_header_blob_is_empty_headers() {
        let a = adapter();
        a.on_response_headers(200, None).unwrap();

        match &a.handler().events()[0] {
            ResponseEvent::Headers { status_code, headers } => {
                assert_eq!(*status_code, 200);
                assert!(headers.is_empty());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn progress_passes_through_unchanged() {
        let a = adapter();
        let progress = ResponseProgress { bytes_transferred: 8 * 1024 * 1024, content_length: 1 << 30 };
        a.on_progress(progress);

        assert!(matches!(
            a.handler().events()[0],
            ResponseEvent::Progress(p) if p == progress
        ));
    }

// ## 4. Body chunks and flow control

    #[test]
    fn body_returns_handler_signal_for_out_of_order_ranges() {
        let a = NativeResponseAdapter::new(RecordingHandler::with_window(|body| {
            (body.range_start / 1024) as i32 * 100 + body.len() as i32
        }));
        let chunk = vec![7u8; 1024];

        assert_eq!(a.on_response_body(&chunk, 1024, 2047), 100 + 1024);
        assert_eq!(a.on_response_body(&chunk, 0, 1023), 1024);

        let events = a.handler().events();
        assert!(matches!(
            &events[0],
            ResponseEvent::Body { range_start: 1024, range_end: 2047, data } if data.len() == 1024
        ));
        assert!(matches!(
            &events[1],
            ResponseEvent::Body { range_start: 0, range_end: 1023, .. }
        ));
    }

    #[test]
    fn negative_signal_is_returned_verbatim() {
        let a = NativeResponseAdapter::new(RecordingHandler::with_window(|_| -1));
        assert_eq!(a.on_response_body(b"abc", 0, 2), -1);
    }

    #[test]
    fn overlapping_ranges_are_not_validated() {
        let a = adapter();
        a.on_response_body(b"abcd", 0, 3);
        a.on_response_body(b"cd", 2, 3);
        assert_eq!(a.handler().len(), 2);
    }

// ## 5. Ordering is the engine's job

    #[test]
    fn calls_are_forwarded_in_arrival_order_even_when_wrong() {
        let a = adapter();
        a.on_finished(NativeFinishedEvent::default()).unwrap();
        a.on_response_body(b"late", 0, 3);
        a.on_response_headers(200, None).unwrap();

        let events = a.handler().events();
        assert!(matches!(events[0], ResponseEvent::Finished(_)));
        assert!(matches!(events[1], ResponseEvent::Body { .. }));
        assert!(matches!(events[2], ResponseEvent::Headers { .. }));
    }

    #[test]
    fn duplicate_finished_is_translated_each_time() {
        let a = adapter();
        a.on_finished(NativeFinishedEvent { response_status: 200, ..Default::default() }).unwrap();
        a.on_finished(NativeFinishedEvent { response_status: 500, ..Default::default() }).unwrap();

        let finished = a.handler().finished();
        assert_eq!(finished.len(), 2);
        assert_eq!(finished[0].response_status, 200);
        assert_eq!(finished[1].response_status, 500);
    }

// ## 6. Concurrency

    #[test]
    fn adapter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NativeResponseAdapter<RecordingHandler>>();
    }

    #[test]
    fn concurrent_engine_threads_each_get_their_own_translation() {
        let a = adapter();
        let threads = 8u64;
        let chunks_per_thread = 64u64;

        crossbeam::scope(|s| {
            for t in 0..threads {
                let a = &a;
                s.spawn(move |_| {
                    for c in 0..chunks_per_thread {
                        let start = (t * chunks_per_thread + c) * 16;
                        a.on_response_body(&[t as u8; 16], start, start + 15);
                        a.on_progress(ResponseProgress { bytes_transferred: 16, content_length: 0 });
                    }
                });
            }
        })
        .unwrap();

        let events = a.handler().events();
        let bodies: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                ResponseEvent::Body { data, range_start, .. } => Some((data.clone(), *range_start)),
                _ => None,
            })
            .collect();
        assert_eq!(bodies.len() as u64, threads * chunks_per_thread);
        assert_eq!(events.len() as u64, 2 * threads * chunks_per_thread);

        // Each chunk carries the data of the thread that owns its range.
        for (data, start) in bodies {
            let owner = (start / 16 / chunks_per_thread) as u8;
            assert!(data.iter().all(|&b| b == owner));
        }
    }
}
