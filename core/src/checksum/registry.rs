//! checksum/registry.rs
//! Wire code <-> enum mapping and list marshalling.

use num_enum::TryFromPrimitive;

use crate::checksum::types::{ChecksumAlgorithm, ChecksumError, ChecksumLocation};

impl ChecksumAlgorithm {
    /// Resolve a wire code received from the engine.
    ///
    /// Fails for any code outside the registry. `NONE` has its own code (0),
    /// so an unknown code is never treated as "no checksum".
    #[inline]
    pub fn from_wire_code(code: i32) -> Result<Self, ChecksumError> {
        Self::try_from_primitive(code)
            .map_err(|e| ChecksumError::UnknownAlgorithm { code: e.number })
    }

    #[inline]
    pub fn wire_code(self) -> i32 {
        self.into()
    }
}

impl ChecksumLocation {
    #[inline]
    pub fn from_wire_code(code: i32) -> Result<Self, ChecksumError> {
        Self::try_from_primitive(code)
            .map_err(|e| ChecksumError::UnknownLocation { code: e.number })
    }

    #[inline]
    pub fn wire_code(self) -> i32 {
        self.into()
    }
}

/// Marshal a list of algorithms into wire codes for the engine.
///
/// - `None` stays `None`; an empty list stays an empty list.
/// - Order and duplicates are kept verbatim (the engine may treat position as priority).
pub fn encode_list(algorithms: Option<&[ChecksumAlgorithm]>) -> Option<Vec<i32>> {
    algorithms.map(|list| list.iter().map(|alg| alg.wire_code()).collect())
}
