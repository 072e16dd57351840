//! Variable-length integers: 7-bit groups, least significant first, high bit
//! set on every byte but the last. Signed values are written as their unsigned
//! bit pattern, so negative numbers always take the maximum length.

use crate::error::CodecError;
use crate::io::byte_source::read_byte;
use std::io::{Read, Write};

const CONTINUE: u8 = 0x80;
const PAYLOAD: u32 = 0x7F;

/// 5 groups carry 35 bits; the writer never sets the top 3.
const MAX_GROUPS: u32 = 5;

pub(crate) fn write_u32<W: Write + ?Sized>(w: &mut W, mut value: u32) -> Result<(), CodecError> {
    while value > PAYLOAD {
        w.write_all(&[(value & PAYLOAD) as u8 | CONTINUE])?;
        value >>= 7;
    }
    w.write_all(&[value as u8])?;
    Ok(())
}

#[inline]
pub(crate) fn write_i32<W: Write + ?Sized>(w: &mut W, value: i32) -> Result<(), CodecError> {
    write_u32(w, value as u32)
}

/// Accumulate groups until one without the continuation bit. Bits past the
/// 32nd in the fifth group are dropped.
pub(crate) fn read_u32<R: Read + ?Sized>(r: &mut R) -> Result<u32, CodecError> {
    let mut result = 0u32;
    let mut shift = 0u32;
    for _ in 0..MAX_GROUPS {
        let Some(b) = read_byte(r)? else {
            tracing::trace!(shift, "varint ended mid-value");
            return Err(CodecError::Truncated("varint"));
        };
        result |= (u32::from(b) & PAYLOAD) << shift;
        if b & CONTINUE == 0 {
            return Ok(result);
        }
        shift += 7;
    }
    Err(CodecError::Corrupt("varint longer than its type"))
}

#[inline]
pub(crate) fn read_i32<R: Read + ?Sized>(r: &mut R) -> Result<i32, CodecError> {
    read_u32(r).map(|v| v as i32)
}
