//! headers/encode.rs
//!
//! Header blob encoding (consumer -> engine).
//!
//! Produces the same layout the engine marshals: big-endian u32 length
//! prefixes, name then value, records back to back.

use byteorder::{BigEndian, ByteOrder};
use bytes::{Bytes, BytesMut};

use crate::constants::HEADER_LEN_PREFIX;
use crate::headers::types::{HeaderBlobError, HeaderField, HttpHeader};

/// Marshal headers into a blob, preserving order and duplicates.
///
/// # Returns
/// - An empty blob for an empty slice.
/// - `Err(HeaderBlobError::FieldTooLong)` if a name or value exceeds `u32::MAX` bytes.
pub fn marshal_headers(headers: &[HttpHeader]) -> Result<Bytes, HeaderBlobError> {
    let total: usize = headers.iter().map(HttpHeader::marshalled_len).sum();
    let mut out = BytesMut::with_capacity(total);

    for h in headers {
        put_field(&mut out, &h.name, HeaderField::Name)?;
        put_field(&mut out, &h.value, HeaderField::Value)?;
    }

    debug_assert_eq!(out.len(), total, "marshalled incorrect length");
    Ok(out.freeze())
}

fn put_field(out: &mut BytesMut, data: &[u8], field: HeaderField) -> Result<(), HeaderBlobError> {
    let len = u32::try_from(data.len())
        .map_err(|_| HeaderBlobError::FieldTooLong { field, len: data.len() })?;

    let mut prefix = [0u8; HEADER_LEN_PREFIX];
    BigEndian::write_u32(&mut prefix, len);
    out.extend_from_slice(&prefix);
    out.extend_from_slice(data);
    Ok(())
}
