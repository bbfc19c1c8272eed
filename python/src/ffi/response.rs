//! ffi/response.rs
//! `ResponseAdapter`: drives a Python handler object from engine callbacks.
//!
//! The Python handler may define any of:
//! - `on_response_body(data: bytes, range_start: int, range_end: int) -> int | None`
//! - `on_response_headers(status_code: int, headers: list[HttpHeader])`
//! - `on_progress(progress: ResponseProgress)`
//! - `on_finished(context: FinishedResponseContext)`
//!
//! Missing methods are skipped. Exceptions raised by the handler cannot
//! travel back into the engine; they are reported through
//! `sys.unraisablehook` and logged, and a failed body callback returns 0.

use std::sync::Arc;

use pyo3::exceptions::{PyBaseException, PyRuntimeError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyTuple};
use tracing::error;

use s3_bridge_core::headers::HttpHeader;
use s3_bridge_core::response::{
    ErrorCause, FinishedResponseContext, NativeFinishedEvent, NativeResponseAdapter, ResponseBody,
    ResponseHandler, ResponseProgress,
};

use super::adapter_err;
use super::checksum::PyChecksumAlgorithm;
use super::headers::PyHttpHeader;

#[pyclass(name = "ResponseProgress", module = "s3_bridge", frozen)]
#[derive(Clone, Copy)]
pub struct PyResponseProgress {
    #[pyo3(get)]
    bytes_transferred: u64,
    #[pyo3(get)]
    content_length: u64,
}

impl From<ResponseProgress> for PyResponseProgress {
    fn from(p: ResponseProgress) -> Self {
        Self {
            bytes_transferred: p.bytes_transferred,
            content_length: p.content_length,
        }
    }
}

#[pymethods]
impl PyResponseProgress {
    #[new]
    #[pyo3(signature = (bytes_transferred, content_length = 0))]
    fn new(bytes_transferred: u64, content_length: u64) -> Self {
        Self { bytes_transferred, content_length }
    }

    fn __repr__(&self) -> String {
        format!(
            "ResponseProgress(bytes_transferred={}, content_length={})",
            self.bytes_transferred, self.content_length
        )
    }
}

#[pyclass(name = "FinishedResponseContext", module = "s3_bridge", frozen)]
pub struct PyFinishedResponseContext {
    inner: FinishedResponseContext,
}

#[pymethods]
impl PyFinishedResponseContext {
    #[getter]
    fn error_code(&self) -> i32 {
        self.inner.error_code
    }

    #[getter]
    fn response_status(&self) -> i32 {
        self.inner.response_status
    }

    /// `None` when the engine supplied no body; `b""` for an empty one.
    #[getter]
    fn error_payload<'py>(&self, py: Python<'py>) -> Option<Bound<'py, PyBytes>> {
        self.inner
            .error_payload
            .as_ref()
            .map(|p| PyBytes::new_bound(py, p))
    }

    #[getter]
    fn error_operation_name(&self) -> Option<String> {
        self.inner.error_operation_name.clone()
    }

    #[getter]
    fn checksum_algorithm(&self) -> PyChecksumAlgorithm {
        self.inner.checksum_algorithm.into()
    }

    #[getter]
    fn did_validate_checksum(&self) -> bool {
        self.inner.did_validate_checksum
    }

    /// The original exception if the cause came from Python, else a `RuntimeError`.
    #[getter]
    fn cause(&self, py: Python<'_>) -> Option<PyObject> {
        self.inner.cause.as_ref().map(|cause| match cause.downcast_ref::<PyErr>() {
            Some(err) => err.value_bound(py).clone().into_py(py),
            None => PyRuntimeError::new_err(cause.to_string()).into_value(py).into_py(py),
        })
    }

    #[getter]
    fn error_headers(&self) -> Option<Vec<PyHttpHeader>> {
        self.inner
            .error_headers
            .as_ref()
            .map(|headers| headers.iter().cloned().map(PyHttpHeader::from).collect())
    }

    fn is_success(&self) -> bool {
        self.inner.is_success()
    }

    fn __repr__(&self) -> String {
        format!(
            "FinishedResponseContext(error_code={}, response_status={}, checksum_algorithm={}, did_validate_checksum={})",
            self.inner.error_code,
            self.inner.response_status,
            self.inner.checksum_algorithm,
            self.inner.did_validate_checksum,
        )
    }
}

/// Bridges core handler calls to a Python object.
struct PyHandler {
    handler: PyObject,
}

impl PyHandler {
    /// Call `method` if the handler defines it. Errors are reported, not raised.
    fn call(&self, py: Python<'_>, method: &str, args: impl IntoPy<Py<PyTuple>>) -> Option<PyObject> {
        let bound = self.handler.bind(py);
        match bound.hasattr(method) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                self.report(py, method, err);
                return None;
            }
        }
        match bound.call_method1(method, args) {
            Ok(ret) => Some(ret.unbind()),
            Err(err) => {
                self.report(py, method, err);
                None
            }
        }
    }

    fn report(&self, py: Python<'_>, method: &str, err: PyErr) {
        error!(method, error = %err, "python response handler raised");
        err.write_unraisable_bound(py, Some(self.handler.bind(py)));
    }
}

impl ResponseHandler for PyHandler {
    fn on_response_body(&self, body: ResponseBody<'_>) -> i32 {
        Python::with_gil(|py| {
            let data = PyBytes::new_bound(py, body.data);
            let Some(ret) = self.call(py, "on_response_body", (data, body.range_start, body.range_end)) else {
                return 0;
            };
            if ret.is_none(py) {
                return 0;
            }
            ret.extract::<i32>(py).unwrap_or_else(|err| {
                self.report(py, "on_response_body", err);
                0
            })
        })
    }

    fn on_response_headers(&self, status_code: i32, headers: Vec<HttpHeader>) {
        Python::with_gil(|py| {
            let headers: Vec<PyHttpHeader> = headers.into_iter().map(PyHttpHeader::from).collect();
            self.call(py, "on_response_headers", (status_code, headers));
        })
    }

    fn on_progress(&self, progress: ResponseProgress) {
        Python::with_gil(|py| {
            self.call(py, "on_progress", (PyResponseProgress::from(progress),));
        })
    }

    fn on_finished(&self, context: FinishedResponseContext) {
        Python::with_gil(|py| {
            self.call(py, "on_finished", (PyFinishedResponseContext { inner: context },));
        })
    }
}

/// Engine-facing adapter with a Python handler.
#[pyclass(name = "ResponseAdapter", module = "s3_bridge", frozen)]
pub struct PyResponseAdapter {
    inner: NativeResponseAdapter<PyHandler>,
}

#[pymethods]
impl PyResponseAdapter {
    #[new]
    fn new(handler: PyObject) -> Self {
        Self { inner: NativeResponseAdapter::new(PyHandler { handler }) }
    }

    #[getter]
    fn handler(&self, py: Python<'_>) -> PyObject {
        self.inner.handler().handler.clone_ref(py)
    }

    /// Returns the handler's flow-control value (0 if it returned nothing or raised).
    ///
    /// `range_start` and `range_end` are unsigned 64-bit byte offsets; a
    /// negative value raises `OverflowError` before the handler is called.
    fn on_response_body(&self, body: &[u8], range_start: u64, range_end: u64) -> i32 {
        self.inner.on_response_body(body, range_start, range_end)
    }

    #[pyo3(signature = (status_code, headers_blob = None))]
    fn on_response_headers(
        &self,
        status_code: i32,
        headers_blob: Option<Bound<'_, PyBytes>>,
    ) -> PyResult<()> {
        self.inner
            .on_response_headers(status_code, headers_blob.as_ref().map(|b| b.as_bytes()))
            .map_err(adapter_err)
    }

    #[pyo3(signature = (bytes_transferred, content_length = 0))]
    fn on_progress(&self, bytes_transferred: u64, content_length: u64) {
        self.inner.on_progress(ResponseProgress { bytes_transferred, content_length });
    }

    /// Raises `UnknownChecksumCode` / `MalformedHeaderBlob` without calling the handler.
    #[pyo3(signature = (
        error_code,
        response_status,
        error_payload = None,
        error_operation_name = None,
        checksum_algorithm = 0,
        did_validate_checksum = false,
        cause = None,
        error_headers_blob = None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn on_finished(
        &self,
        error_code: i32,
        response_status: i32,
        error_payload: Option<Bound<'_, PyBytes>>,
        error_operation_name: Option<String>,
        checksum_algorithm: i32,
        did_validate_checksum: bool,
        cause: Option<Bound<'_, PyBaseException>>,
        error_headers_blob: Option<Bound<'_, PyBytes>>,
    ) -> PyResult<()> {
        let cause = cause.map(|c| Arc::new(PyErr::from_value_bound(c.into_any())) as ErrorCause);

        self.inner
            .on_finished(NativeFinishedEvent {
                error_code,
                response_status,
                error_payload: error_payload.as_ref().map(|p| p.as_bytes()),
                error_operation_name: error_operation_name.as_deref(),
                checksum_algorithm,
                did_validate_checksum,
                cause,
                error_headers_blob: error_headers_blob.as_ref().map(|b| b.as_bytes()),
            })
            .map_err(adapter_err)
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyResponseProgress>()?;
    m.add_class::<PyFinishedResponseContext>()?;
    m.add_class::<PyResponseAdapter>()?;
    Ok(())
}
