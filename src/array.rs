//! Arrays travel as one blob.
//!
//! Homogeneous arrays concatenate fixed-width element bytes (little-endian
//! integers, GUID-ordered identifiers); the element count is the blob length
//! divided by the element width.
//!
//! Nested byte arrays are a run of `[len: u8][len bytes]` records. Null
//! entries are skipped on encode, so they never come back on decode.

use crate::codec::Serializer;
use crate::config::{NullEntries, RaggedArrays, SubArrayOverflow};
use crate::error::{CodecError, Result};
use crate::format::{GUID_LEN, MAX_SUB_ARRAY_LEN};
use crate::serializer::PrimitiveSerializer;
use std::io::{Read, Write};
use uuid::Uuid;

impl PrimitiveSerializer {
    /// Read an array blob and split it into `width`-byte elements.
    fn read_elements<R: Read + ?Sized, T>(
        &self,
        r: &mut R,
        width: usize,
        decode: impl Fn(&[u8]) -> T,
    ) -> Result<Vec<T>> {
        let bytes = self.read_required_blob(r)?;
        let chunks = bytes.chunks_exact(width);
        let tail = chunks.remainder().len();
        if tail != 0 {
            if self.config().ragged_arrays == RaggedArrays::Reject {
                return Err(CodecError::RaggedArray {
                    len: bytes.len(),
                    width,
                });
            }
            tracing::debug!(len = bytes.len(), width, tail, "ignoring partial trailing element");
        }
        Ok(chunks.map(decode).collect())
    }

    fn write_nested<'a, W, I>(&self, w: &mut W, entries: I) -> Result<()>
    where
        W: Write + ?Sized,
        I: IntoIterator<Item = Option<&'a [u8]>>,
    {
        let cfg = self.config();
        let mut blob = Vec::new();
        for (index, entry) in entries.into_iter().enumerate() {
            let Some(sub) = entry else {
                if cfg.null_entries == NullEntries::Reject {
                    return Err(CodecError::NullEntry { index });
                }
                tracing::debug!(index, "dropping null sub-array");
                continue;
            };
            if sub.len() > MAX_SUB_ARRAY_LEN {
                if cfg.sub_array_overflow == SubArrayOverflow::Reject {
                    return Err(CodecError::SubArrayTooLong {
                        index,
                        len: sub.len(),
                    });
                }
                tracing::debug!(index, len = sub.len(), "sub-array length byte wraps");
            }
            blob.push(sub.len() as u8);
            blob.extend_from_slice(sub);
        }
        self.write_blob(w, Some(blob.as_slice()))
    }

    fn read_nested<R: Read + ?Sized>(&self, r: &mut R) -> Result<Vec<Vec<u8>>> {
        let Some(blob) = self.read_blob(r)? else {
            return Ok(Vec::new());
        };
        let mut out = Vec::new();
        let mut rest = &blob[..];
        while let Some((&len, tail)) = rest.split_first() {
            let len = usize::from(len);
            if len > tail.len() {
                return Err(CodecError::Corrupt("nested sub-array overruns its blob"));
            }
            let (sub, tail) = tail.split_at(len);
            out.push(sub.to_vec());
            rest = tail;
        }
        Ok(out)
    }
}

impl Serializer<Vec<i32>> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, values: &Vec<i32>, w: &mut W) -> Result<()> {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.write_blob(w, Some(bytes.as_slice()))
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<Vec<i32>> {
        self.read_elements(r, size_of::<i32>(), |c| {
            i32::from_le_bytes([c[0], c[1], c[2], c[3]])
        })
    }
}

impl Serializer<Vec<i64>> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, values: &Vec<i64>, w: &mut W) -> Result<()> {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.write_blob(w, Some(bytes.as_slice()))
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<Vec<i64>> {
        self.read_elements(r, size_of::<i64>(), |c| {
            let mut b = [0u8; 8];
            b.copy_from_slice(c);
            i64::from_le_bytes(b)
        })
    }
}

impl Serializer<Vec<Uuid>> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, values: &Vec<Uuid>, w: &mut W) -> Result<()> {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_bytes_le()).collect();
        self.write_blob(w, Some(bytes.as_slice()))
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<Vec<Uuid>> {
        self.read_elements(r, GUID_LEN, |c| {
            let mut b = [0u8; GUID_LEN];
            b.copy_from_slice(c);
            Uuid::from_bytes_le(b)
        })
    }
}

/// Entries may be null; decode always yields `Some` for what survived.
impl Serializer<Vec<Option<Vec<u8>>>> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, values: &Vec<Option<Vec<u8>>>, w: &mut W) -> Result<()> {
        self.write_nested(w, values.iter().map(|v| v.as_deref()))
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<Vec<Option<Vec<u8>>>> {
        Ok(self.read_nested(r)?.into_iter().map(Some).collect())
    }
}

impl Serializer<Vec<Vec<u8>>> for PrimitiveSerializer {
    fn encode_into<W: Write + ?Sized>(&self, values: &Vec<Vec<u8>>, w: &mut W) -> Result<()> {
        self.write_nested(w, values.iter().map(|v| Some(v.as_slice())))
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<Vec<Vec<u8>>> {
        self.read_nested(r)
    }
}
