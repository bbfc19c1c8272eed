//! ffi/checksum.rs
//! Python mirrors of the checksum enums. Values equal the engine wire codes.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use s3_bridge_core::checksum::{encode_list, ChecksumAlgorithm, ChecksumLocation};

use super::UnknownChecksumCode;

#[pyclass(name = "ChecksumAlgorithm", module = "s3_bridge", eq, eq_int, frozen)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PyChecksumAlgorithm {
    #[pyo3(name = "NONE")]
    None = 0,
    #[pyo3(name = "CRC32C")]
    Crc32c = 1,
    #[pyo3(name = "CRC32")]
    Crc32 = 2,
    #[pyo3(name = "SHA1")]
    Sha1 = 3,
    #[pyo3(name = "SHA256")]
    Sha256 = 4,
    #[pyo3(name = "CRC64NVME")]
    Crc64Nvme = 5,
}

impl From<ChecksumAlgorithm> for PyChecksumAlgorithm {
    fn from(alg: ChecksumAlgorithm) -> Self {
        match alg {
            ChecksumAlgorithm::None      => PyChecksumAlgorithm::None,
            ChecksumAlgorithm::Crc32c    => PyChecksumAlgorithm::Crc32c,
            ChecksumAlgorithm::Crc32     => PyChecksumAlgorithm::Crc32,
            ChecksumAlgorithm::Sha1      => PyChecksumAlgorithm::Sha1,
            ChecksumAlgorithm::Sha256    => PyChecksumAlgorithm::Sha256,
            ChecksumAlgorithm::Crc64Nvme => PyChecksumAlgorithm::Crc64Nvme,
        }
    }
}

impl From<PyChecksumAlgorithm> for ChecksumAlgorithm {
    fn from(alg: PyChecksumAlgorithm) -> Self {
        match alg {
            PyChecksumAlgorithm::None      => ChecksumAlgorithm::None,
            PyChecksumAlgorithm::Crc32c    => ChecksumAlgorithm::Crc32c,
            PyChecksumAlgorithm::Crc32     => ChecksumAlgorithm::Crc32,
            PyChecksumAlgorithm::Sha1      => ChecksumAlgorithm::Sha1,
            PyChecksumAlgorithm::Sha256    => ChecksumAlgorithm::Sha256,
            PyChecksumAlgorithm::Crc64Nvme => ChecksumAlgorithm::Crc64Nvme,
        }
    }
}

#[pymethods]
impl PyChecksumAlgorithm {
    /// Raises `UnknownChecksumCode` for codes outside the registry.
    #[staticmethod]
    fn from_wire_code(code: i32) -> PyResult<Self> {
        ChecksumAlgorithm::from_wire_code(code)
            .map(Self::from)
            .map_err(|e| UnknownChecksumCode::new_err(e.to_string()))
    }

    #[getter]
    fn wire_code(&self) -> i32 {
        ChecksumAlgorithm::from(*self).wire_code()
    }

    /// `None` -> `None`, otherwise a list of wire codes in the given order.
    #[staticmethod]
    #[pyo3(signature = (algorithms))]
    fn marshal_list(algorithms: Option<Vec<PyChecksumAlgorithm>>) -> Option<Vec<i32>> {
        let algorithms: Option<Vec<ChecksumAlgorithm>> =
            algorithms.map(|list| list.into_iter().map(ChecksumAlgorithm::from).collect());
        encode_list(algorithms.as_deref())
    }

    fn __str__(&self) -> &'static str {
        ChecksumAlgorithm::from(*self).name()
    }
}

#[pyclass(name = "ChecksumLocation", module = "s3_bridge", eq, eq_int, frozen)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PyChecksumLocation {
    #[pyo3(name = "NONE")]
    None = 0,
    #[pyo3(name = "HEADER")]
    Header = 1,
    #[pyo3(name = "TRAILER")]
    Trailer = 2,
}

impl From<ChecksumLocation> for PyChecksumLocation {
    fn from(loc: ChecksumLocation) -> Self {
        match loc {
            ChecksumLocation::None    => PyChecksumLocation::None,
            ChecksumLocation::Header  => PyChecksumLocation::Header,
            ChecksumLocation::Trailer => PyChecksumLocation::Trailer,
        }
    }
}

impl From<PyChecksumLocation> for ChecksumLocation {
    fn from(loc: PyChecksumLocation) -> Self {
        match loc {
            PyChecksumLocation::None    => ChecksumLocation::None,
            PyChecksumLocation::Header  => ChecksumLocation::Header,
            PyChecksumLocation::Trailer => ChecksumLocation::Trailer,
        }
    }
}

#[pymethods]
impl PyChecksumLocation {
    #[staticmethod]
    fn from_wire_code(code: i32) -> PyResult<Self> {
        ChecksumLocation::from_wire_code(code)
            .map(Self::from)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn wire_code(&self) -> i32 {
        ChecksumLocation::from(*self).wire_code()
    }

    fn __str__(&self) -> &'static str {
        ChecksumLocation::from(*self).name()
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyChecksumAlgorithm>()?;
    m.add_class::<PyChecksumLocation>()?;
    Ok(())
}
