//! Per-type (de)serialization contract, streaming-friendly.

use crate::error::CodecError;
use std::io::{Read, Write};

/// The capability to write a `T` to a byte sink and read one back.
///
/// A single type may implement this for many `T`; `PrimitiveSerializer` does so
/// for every primitive in the catalogue. Pick the impl by the value type on
/// encode and by the expected type on decode:
///
/// ```
/// use primser::{PRIMITIVE, Serializer};
///
/// let mut buf = Vec::new();
/// PRIMITIVE.encode_into(&0x1234_5678u32, &mut buf).unwrap();
/// assert_eq!(buf, [0x12, 0x34, 0x56, 0x78]);
///
/// let back: u32 = PRIMITIVE.decode_from(&mut &buf[..]).unwrap();
/// assert_eq!(back, 0x1234_5678);
/// ```
pub trait Serializer<T> {
    /// Write the wire bytes of `value` **into the provided writer**. No framing is
    /// added beyond what the type's own format defines.
    fn encode_into<W: Write + ?Sized>(&self, value: &T, w: &mut W) -> Result<(), CodecError>;

    /// Read exactly one `T` **from the provided reader**.
    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<T, CodecError>;
}

#[cfg(feature = "serde-bincode")]
pub mod serde_bincode;

#[cfg(feature = "serde-bincode")]
pub use serde_bincode::SerdeBincode;
