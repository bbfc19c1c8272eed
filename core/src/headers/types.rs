//! headers/types.rs
//! Decoded header entries and blob errors.

use std::fmt;

use bytes::Bytes;
use thiserror::Error;

/// A single HTTP header as the engine saw it.
///
/// Name case is preserved; compare with [`HttpHeader::name_eq`] for
/// HTTP-style case-insensitive matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HttpHeader {
    pub name: Bytes,
    pub value: Bytes,
}

impl HttpHeader {
    pub fn new(name: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    /// Name as UTF-8, if it is valid UTF-8.
    pub fn name_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.name).ok()
    }

    /// Value as UTF-8, if it is valid UTF-8.
    pub fn value_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.value).ok()
    }

    /// ASCII case-insensitive name comparison.
    pub fn name_eq(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.as_bytes())
    }

    /// Encoded size of this header inside a blob (prefixes included).
    pub fn marshalled_len(&self) -> usize {
        2 * crate::constants::HEADER_LEN_PREFIX + self.name.len() + self.value.len()
    }
}

impl fmt::Display for HttpHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", fmt_bytes(&self.name), fmt_bytes(&self.value))
    }
}

/// First header matching `name` (case-insensitive), in wire order.
pub fn find_header<'a>(headers: &'a [HttpHeader], name: &str) -> Option<&'a HttpHeader> {
    headers.iter().find(|h| h.name_eq(name))
}

/// Printable ASCII as text, anything else as hex.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        String::from_utf8_lossy(b).into_owned()
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Which part of a header record a decode failure hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    NameLength,
    Name,
    ValueLength,
    Value,
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HeaderField::NameLength  => "name length",
            HeaderField::Name        => "name",
            HeaderField::ValueLength => "value length",
            HeaderField::Value       => "value",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderBlobError {
    /// Blob ends inside a record.
    #[error("header blob truncated in {field} of header #{index} at offset {offset}: need {need} bytes, have {have}")]
    Truncated {
        index: usize,
        field: HeaderField,
        offset: usize,
        need: usize,
        have: usize,
    },

    /// Header does not fit the u32 length prefix.
    #[error("header {field} too long to marshal: {len} bytes")]
    FieldTooLong { field: HeaderField, len: usize },
}
