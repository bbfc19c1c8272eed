//! ffi/headers.rs
//! `HttpHeader` class plus blob decode/marshal functions.

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use s3_bridge_core::headers::{decode_optional_headers, marshal_headers as core_marshal, HttpHeader};

use super::MalformedHeaderBlob;

/// Header name or value as given from Python: `str` (UTF-8) or `bytes`.
#[derive(FromPyObject)]
enum HeaderText {
    Str(String),
    Bytes(Vec<u8>),
}

impl From<HeaderText> for Vec<u8> {
    fn from(text: HeaderText) -> Self {
        match text {
            HeaderText::Str(s) => s.into_bytes(),
            HeaderText::Bytes(b) => b,
        }
    }
}

#[pyclass(name = "HttpHeader", module = "s3_bridge", eq, frozen)]
#[derive(Clone, PartialEq)]
pub struct PyHttpHeader {
    pub(crate) inner: HttpHeader,
}

impl From<HttpHeader> for PyHttpHeader {
    fn from(inner: HttpHeader) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyHttpHeader {
    #[new]
    fn new(name: HeaderText, value: HeaderText) -> Self {
        let name: Vec<u8> = name.into();
        let value: Vec<u8> = value.into();
        Self { inner: HttpHeader::new(name, value) }
    }

    #[getter]
    fn name<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, &self.inner.name)
    }

    #[getter]
    fn value<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, &self.inner.value)
    }

    /// Name decoded as UTF-8, or `None`.
    fn name_str(&self) -> Option<String> {
        self.inner.name_str().map(str::to_owned)
    }

    /// Value decoded as UTF-8, or `None`.
    fn value_str(&self) -> Option<String> {
        self.inner.value_str().map(str::to_owned)
    }

    fn __repr__(&self) -> String {
        format!("HttpHeader({})", self.inner)
    }
}

/// Decode an engine header blob. `None` and `b""` both give `[]`.
#[pyfunction]
#[pyo3(signature = (blob))]
fn decode_headers(blob: Option<Bound<'_, PyBytes>>) -> PyResult<Vec<PyHttpHeader>> {
    let headers = decode_optional_headers(blob.as_ref().map(|b| b.as_bytes()))
        .map_err(|e| MalformedHeaderBlob::new_err(e.to_string()))?
        .unwrap_or_default();
    Ok(headers.into_iter().map(PyHttpHeader::from).collect())
}

/// Marshal headers into the engine's blob layout.
#[pyfunction]
fn marshal_headers<'py>(py: Python<'py>, headers: Vec<PyHttpHeader>) -> PyResult<Bound<'py, PyBytes>> {
    let headers: Vec<HttpHeader> = headers.into_iter().map(|h| h.inner).collect();
    let blob = core_marshal(&headers).map_err(|e| MalformedHeaderBlob::new_err(e.to_string()))?;
    Ok(PyBytes::new_bound(py, &blob))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyHttpHeader>()?;
    m.add_function(wrap_pyfunction!(decode_headers, m)?)?;
    m.add_function(wrap_pyfunction!(marshal_headers, m)?)?;
    Ok(())
}
