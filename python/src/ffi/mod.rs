//! ffi/mod.rs
//! Python surface: classes, functions and exceptions.
//!
//! Error mapping:
//! - `AdapterError::UnknownChecksumCode` -> `s3_bridge.UnknownChecksumCode`
//! - `AdapterError::MalformedHeaderBlob` -> `s3_bridge.MalformedHeaderBlob`
//! Both subclass `ValueError`.

use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use s3_bridge_core::logging::{init_logging as core_init_logging, LogFormat};
use s3_bridge_core::types::AdapterError;

mod checksum;
mod headers;
mod response;

create_exception!(
    s3_bridge,
    UnknownChecksumCode,
    PyValueError,
    "Checksum wire code outside the registry."
);
create_exception!(
    s3_bridge,
    MalformedHeaderBlob,
    PyValueError,
    "Marshalled header blob does not decode."
);

pub(crate) fn adapter_err(e: AdapterError) -> PyErr {
    match e {
        AdapterError::UnknownChecksumCode(inner) => UnknownChecksumCode::new_err(inner.to_string()),
        AdapterError::MalformedHeaderBlob(inner) => MalformedHeaderBlob::new_err(inner.to_string()),
    }
}

/// Install a stderr tracing subscriber for the Rust side.
#[pyfunction]
#[pyo3(signature = (verbosity = 2, json = false))]
fn init_logging(verbosity: u8, json: bool) -> PyResult<()> {
    let format = if json { LogFormat::Json } else { LogFormat::Text };
    core_init_logging(verbosity, format).map_err(|e| PyValueError::new_err(e.to_string()))
}

pub fn register(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("UnknownChecksumCode", py.get_type_bound::<UnknownChecksumCode>())?;
    m.add("MalformedHeaderBlob", py.get_type_bound::<MalformedHeaderBlob>())?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;

    checksum::register(m)?;
    headers::register(m)?;
    response::register(m)?;
    Ok(())
}
