//! Big-endian fixed-width integers. Every other numeric codec bottoms out here.

use crate::codec::Serializer;
use crate::config::EofPolicy;
use crate::error::{CodecError, Result};
use crate::format::FixedWidth;
use crate::io::byte_source::read_byte;
use crate::serializer::PrimitiveSerializer;
use std::io::{Read, Write};

/// What a missing, unchecked byte contributes: `-1` widened, i.e. all ones.
const EOF_SENTINEL: u64 = u64::MAX;

impl PrimitiveSerializer {
    /// Write the low `width` bytes of `value`, most significant first, one
    /// write call per byte.
    pub(crate) fn write_be<W: Write + ?Sized>(
        &self,
        w: &mut W,
        value: u64,
        width: FixedWidth,
    ) -> Result<()> {
        for i in (0..width.bytes()).rev() {
            w.write_all(&[(value >> (8 * i)) as u8])?;
        }
        Ok(())
    }

    /// Read `width` bytes one at a time and reassemble them big-endian.
    ///
    /// Under `EofPolicy::FinalByte` only the last byte is checked for end of
    /// stream. A leading byte that comes back empty is folded in as
    /// `EOF_SENTINEL`, so a source that runs dry and then recovers yields a
    /// value with those positions set to `0xFF`. Callers narrow the result to
    /// the target width.
    pub(crate) fn read_be<R: Read + ?Sized>(
        &self,
        r: &mut R,
        width: FixedWidth,
        what: &'static str,
    ) -> Result<u64> {
        let n = width.bytes();
        let mut acc = 0u64;
        for i in 0..n {
            let shift = 8 * (n - 1 - i);
            let byte = match read_byte(r)? {
                Some(b) => u64::from(b),
                None if i + 1 == n || self.config().eof_policy == EofPolicy::EveryByte => {
                    tracing::debug!(what, read = i, "truncated fixed-width integer");
                    return Err(CodecError::Truncated(what));
                }
                None => {
                    tracing::trace!(what, position = i, "unchecked end of stream, using sentinel");
                    EOF_SENTINEL
                }
            };
            acc |= byte << shift;
        }
        Ok(acc)
    }
}

macro_rules! fixed_width {
    ($ty:ty, $unsigned:ty, $width:expr) => {
        impl Serializer<$ty> for PrimitiveSerializer {
            #[inline]
            fn encode_into<W: Write + ?Sized>(&self, value: &$ty, w: &mut W) -> Result<()> {
                self.write_be(w, u64::from(*value as $unsigned), $width)
            }

            #[inline]
            fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<$ty> {
                let raw = self.read_be(r, $width, stringify!($ty))?;
                Ok(raw as $unsigned as $ty)
            }
        }
    };
}

fixed_width!(u16, u16, FixedWidth::Two);
fixed_width!(i16, u16, FixedWidth::Two);
fixed_width!(u32, u32, FixedWidth::Four);
fixed_width!(i32, u32, FixedWidth::Four);
fixed_width!(u64, u64, FixedWidth::Eight);
fixed_width!(i64, u64, FixedWidth::Eight);
