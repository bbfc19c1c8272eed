//! headers/decode.rs
//!
//! Header blob decoding (engine -> consumer).
//!
//! Design notes:
//! - Pure and allocation-only: each name/value is copied out, the blob itself is never kept.
//! - Layout must match `encode.rs` and the engine's marshaller exactly.
//! - Any record cut short is an error; there is no partial result.

use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;

use crate::constants::HEADER_LEN_PREFIX;
use crate::headers::types::{HeaderBlobError, HeaderField, HttpHeader};

/// Decode a marshalled header blob into headers, in wire order.
///
/// # Returns
/// - `Ok(vec![])` for an empty blob.
/// - `Err(HeaderBlobError::Truncated)` if the blob ends inside a record.
pub fn decode_headers(blob: &[u8]) -> Result<Vec<HttpHeader>, HeaderBlobError> {
    let mut headers = Vec::new();
    let mut off = 0usize;

    while off < blob.len() {
        let index = headers.len();
        let name = read_field(blob, &mut off, index, HeaderField::NameLength, HeaderField::Name)?;
        let value = read_field(blob, &mut off, index, HeaderField::ValueLength, HeaderField::Value)?;

        headers.push(HttpHeader {
            name: Bytes::copy_from_slice(name),
            value: Bytes::copy_from_slice(value),
        });
    }

    Ok(headers)
}

/// Decode a blob that the engine may omit entirely.
///
/// `None` means "no headers were supplied" and stays `None`;
/// `Some(&[])` decodes to `Some(vec![])`.
pub fn decode_optional_headers(
    blob: Option<&[u8]>,
) -> Result<Option<Vec<HttpHeader>>, HeaderBlobError> {
    blob.map(decode_headers).transpose()
}

/// Read one length-prefixed field and advance the cursor past it.
#[inline]
fn read_field<'a>(
    blob: &'a [u8],
    off: &mut usize,
    index: usize,
    len_field: HeaderField,
    field: HeaderField,
) -> Result<&'a [u8], HeaderBlobError> {
    let have = blob.len() - *off;
    if have < HEADER_LEN_PREFIX {
        return Err(HeaderBlobError::Truncated {
            index,
            field: len_field,
            offset: *off,
            need: HEADER_LEN_PREFIX,
            have,
        });
    }
    let len = BigEndian::read_u32(&blob[*off..*off + HEADER_LEN_PREFIX]) as usize;
    *off += HEADER_LEN_PREFIX;

    let have = blob.len() - *off;
    if have < len {
        return Err(HeaderBlobError::Truncated {
            index,
            field,
            offset: *off,
            need: len,
            have,
        });
    }
    let bytes = &blob[*off..*off + len];
    *off += len;

    Ok(bytes)
}
