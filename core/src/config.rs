//! config.rs
//! Checksum configuration of a meta request, and its wire form for the engine.
//!
//! JSON shape:
//! ```json
//! {
//!   "location": "TRAILER",
//!   "algorithm": "CRC32C",
//!   "validate_response": true,
//!   "validate_algorithms": ["CRC32C", "SHA256"]
//! }
//! ```
//! Every field is optional; missing fields take the defaults below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::checksum::{encode_list, ChecksumAlgorithm, ChecksumLocation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChecksumConfig {
    /// Where to put the upload checksum. `NONE` disables upload checksums.
    pub location: ChecksumLocation,
    /// Algorithm for upload checksums. Must be set iff `location` is.
    pub algorithm: ChecksumAlgorithm,
    /// Ask the engine to validate response checksums on download.
    pub validate_response: bool,
    /// Algorithms the engine may validate, in priority order.
    /// `None` lets the engine pick from everything it supports.
    pub validate_algorithms: Option<Vec<ChecksumAlgorithm>>,
}

impl Default for ChecksumConfig {
    fn default() -> Self {
        Self {
            location: ChecksumLocation::None,
            algorithm: ChecksumAlgorithm::None,
            validate_response: false,
            validate_algorithms: None,
        }
    }
}

/// Checksum configuration as integers, ready to hand to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarshalledChecksumConfig {
    pub location: i32,
    pub algorithm: i32,
    pub validate_response: bool,
    pub validate_algorithms: Option<Vec<i32>>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("checksum location {location} requires an algorithm")]
    LocationWithoutAlgorithm { location: ChecksumLocation },

    #[error("checksum algorithm {algorithm} requires a location")]
    AlgorithmWithoutLocation { algorithm: ChecksumAlgorithm },

    #[error("NONE is not a validation algorithm (position {index})")]
    NoneInValidationList { index: usize },

    #[error("invalid checksum config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ChecksumConfig {
    /// Upload checksum in the trailer, response validation on.
    pub fn trailer(algorithm: ChecksumAlgorithm) -> Self {
        Self {
            location: ChecksumLocation::Trailer,
            algorithm,
            validate_response: true,
            validate_algorithms: None,
        }
    }

    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.location, self.algorithm) {
            (ChecksumLocation::None, ChecksumAlgorithm::None) => {}
            (ChecksumLocation::None, algorithm) => {
                return Err(ConfigError::AlgorithmWithoutLocation { algorithm });
            }
            (location, ChecksumAlgorithm::None) => {
                return Err(ConfigError::LocationWithoutAlgorithm { location });
            }
            _ => {}
        }

        if let Some(list) = &self.validate_algorithms {
            if let Some(index) = list.iter().position(|a| *a == ChecksumAlgorithm::None) {
                return Err(ConfigError::NoneInValidationList { index });
            }
        }

        Ok(())
    }

    /// Validate, then project to wire integers.
    pub fn marshal(&self) -> Result<MarshalledChecksumConfig, ConfigError> {
        self.validate()?;
        Ok(MarshalledChecksumConfig {
            location: self.location.wire_code(),
            algorithm: self.algorithm.wire_code(),
            validate_response: self.validate_response,
            validate_algorithms: encode_list(self.validate_algorithms.as_deref()),
        })
    }
}
