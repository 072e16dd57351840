//! Length-prefixed byte buffers and strings.
//!
//! Layout: varint i32 length, then the payload. A length of `-1` marks null.
//! Byte buffers carry raw bytes; strings carry one varint per UTF-16 code unit
//! and their length counts code units.

use crate::codec::Serializer;
use crate::error::{CodecError, Result};
use crate::format::{NULL_LENGTH, varint};
use crate::io::byte_source::read_bounded;
use crate::serializer::PrimitiveSerializer;
use std::io::{Read, Write};

impl PrimitiveSerializer {
    fn write_len<W: Write + ?Sized>(&self, w: &mut W, len: usize) -> Result<()> {
        let max = self.config().max_blob_len;
        if len > max {
            return Err(CodecError::LengthLimit { len, max });
        }
        // max_blob_len never exceeds i32::MAX
        varint::write_i32(w, len as i32)
    }

    /// `Ok(None)` for the null marker.
    fn read_len<R: Read + ?Sized>(&self, r: &mut R) -> Result<Option<usize>> {
        let len = varint::read_i32(r)?;
        if len == NULL_LENGTH {
            return Ok(None);
        }
        let len = usize::try_from(len).map_err(|_| CodecError::Corrupt("negative blob length"))?;
        let max = self.config().max_blob_len;
        if len > max {
            return Err(CodecError::LengthLimit { len, max });
        }
        Ok(Some(len))
    }

    pub(crate) fn write_blob<W: Write + ?Sized>(&self, w: &mut W, bytes: Option<&[u8]>) -> Result<()> {
        let Some(bytes) = bytes else {
            return varint::write_i32(w, NULL_LENGTH);
        };
        self.write_len(w, bytes.len())?;
        w.write_all(bytes)?;
        Ok(())
    }

    pub(crate) fn read_blob<R: Read + ?Sized>(&self, r: &mut R) -> Result<Option<Vec<u8>>> {
        let Some(len) = self.read_len(r)? else {
            return Ok(None);
        };
        let bytes = read_bounded(r, len)?;
        if bytes.len() != len {
            tracing::debug!(expected = len, got = bytes.len(), "truncated blob");
            return Err(CodecError::Truncated("blob payload"));
        }
        Ok(Some(bytes))
    }

    /// Blob that the caller requires to be present.
    pub(crate) fn read_required_blob<R: Read + ?Sized>(&self, r: &mut R) -> Result<Vec<u8>> {
        self.read_blob(r)?
            .ok_or(CodecError::Corrupt("null where a value is required"))
    }

    fn write_str<W: Write + ?Sized>(&self, w: &mut W, s: Option<&str>) -> Result<()> {
        let Some(s) = s else {
            return varint::write_i32(w, NULL_LENGTH);
        };
        self.write_len(w, s.encode_utf16().count())?;
        for unit in s.encode_utf16() {
            varint::write_i32(w, i32::from(unit))?;
        }
        Ok(())
    }

    fn read_str<R: Read + ?Sized>(&self, r: &mut R) -> Result<Option<String>> {
        let Some(len) = self.read_len(r)? else {
            return Ok(None);
        };
        let mut units = Vec::with_capacity(len.min(4096));
        for _ in 0..len {
            let unit = varint::read_i32(r)?;
            let unit = u16::try_from(unit).map_err(|_| CodecError::Corrupt("code unit above 0xFFFF"))?;
            units.push(unit);
        }
        String::from_utf16(&units)
            .map(Some)
            .map_err(|_| CodecError::Corrupt("invalid utf-16"))
    }
}

impl Serializer<Option<Vec<u8>>> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, value: &Option<Vec<u8>>, w: &mut W) -> Result<()> {
        self.write_blob(w, value.as_deref())
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<Option<Vec<u8>>> {
        self.read_blob(r)
    }
}

impl Serializer<Vec<u8>> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, value: &Vec<u8>, w: &mut W) -> Result<()> {
        self.write_blob(w, Some(value.as_slice()))
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<Vec<u8>> {
        self.read_required_blob(r)
    }
}

impl Serializer<Option<String>> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, value: &Option<String>, w: &mut W) -> Result<()> {
        self.write_str(w, value.as_deref())
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<Option<String>> {
        self.read_str(r)
    }
}

impl Serializer<String> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, value: &String, w: &mut W) -> Result<()> {
        self.write_str(w, Some(value.as_str()))
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<String> {
        self.read_str(r)?
            .ok_or(CodecError::Corrupt("null where a value is required"))
    }
}
