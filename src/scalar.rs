//! Scalars that are a reinterpretation of a fixed-width integer, a single raw
//! byte, a varint, or a 16-byte copy.

use crate::codec::Serializer;
use crate::error::{CodecError, Result};
use crate::format::{BOOL_FALSE, BOOL_TRUE, GUID_LEN, varint};
use crate::io::byte_source::{read_byte, read_full};
use crate::serializer::PrimitiveSerializer;
use crate::time::{TimeSpan, Timestamp};
use std::io::{Read, Write};
use uuid::Uuid;

impl PrimitiveSerializer {
    fn read_checked_byte<R: Read + ?Sized>(&self, r: &mut R, what: &'static str) -> Result<u8> {
        read_byte(r)?.ok_or(CodecError::Truncated(what))
    }
}

impl Serializer<bool> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, value: &bool, w: &mut W) -> Result<()> {
        w.write_all(&[if *value { BOOL_TRUE } else { BOOL_FALSE }])?;
        Ok(())
    }

    /// Only `1` is true; every other readable byte is false.
    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<bool> {
        Ok(self.read_checked_byte(r, "bool")? == BOOL_TRUE)
    }
}

impl Serializer<u8> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, value: &u8, w: &mut W) -> Result<()> {
        w.write_all(&[*value])?;
        Ok(())
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<u8> {
        self.read_checked_byte(r, "u8")
    }
}

impl Serializer<i8> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, value: &i8, w: &mut W) -> Result<()> {
        w.write_all(&[*value as u8])?;
        Ok(())
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<i8> {
        Ok(self.read_checked_byte(r, "i8")? as i8)
    }
}

impl Serializer<char> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, value: &char, w: &mut W) -> Result<()> {
        varint::write_i32(w, u32::from(*value) as i32)
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<char> {
        let code = varint::read_i32(r)?;
        char::from_u32(code as u32).ok_or(CodecError::Corrupt("not a unicode scalar value"))
    }
}

impl Serializer<f64> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, value: &f64, w: &mut W) -> Result<()> {
        self.encode_into(&(value.to_bits() as i64), w)
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<f64> {
        let bits: i64 = self.decode_from(r)?;
        Ok(f64::from_bits(bits as u64))
    }
}

/// Widened to `f64` and written as eight bytes.
impl Serializer<f32> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, value: &f32, w: &mut W) -> Result<()> {
        self.encode_into(&f64::from(*value), w)
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<f32> {
        let wide: f64 = self.decode_from(r)?;
        Ok(wide as f32)
    }
}

impl Serializer<Timestamp> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, value: &Timestamp, w: &mut W) -> Result<()> {
        self.encode_into(&value.to_binary(), w)
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<Timestamp> {
        let bits: i64 = self.decode_from(r)?;
        Timestamp::from_binary(bits).ok_or(CodecError::Corrupt("timestamp ticks out of range"))
    }
}

impl Serializer<TimeSpan> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, value: &TimeSpan, w: &mut W) -> Result<()> {
        self.encode_into(&value.ticks(), w)
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<TimeSpan> {
        let ticks: i64 = self.decode_from(r)?;
        Ok(TimeSpan(ticks))
    }
}

/// Sixteen bytes in GUID order: the first three fields little-endian, the
/// trailing eight bytes as-is.
impl Serializer<Uuid> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, value: &Uuid, w: &mut W) -> Result<()> {
        w.write_all(&value.to_bytes_le())?;
        Ok(())
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<Uuid> {
        let mut buf = [0u8; GUID_LEN];
        let got = read_full(r, &mut buf)?;
        if got != GUID_LEN {
            tracing::debug!(got, "truncated identifier");
            return Err(CodecError::Truncated("uuid"));
        }
        Ok(Uuid::from_bytes_le(buf))
    }
}

/// Always 64-bit on the wire.
impl Serializer<isize> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, value: &isize, w: &mut W) -> Result<()> {
        self.encode_into(&(*value as i64), w)
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<isize> {
        let v: i64 = self.decode_from(r)?;
        isize::try_from(v).map_err(|_| CodecError::Corrupt("isize out of range"))
    }
}

/// Always 64-bit on the wire.
impl Serializer<usize> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, value: &usize, w: &mut W) -> Result<()> {
        self.encode_into(&(*value as u64), w)
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<usize> {
        let v: u64 = self.decode_from(r)?;
        usize::try_from(v).map_err(|_| CodecError::Corrupt("usize out of range"))
    }
}
