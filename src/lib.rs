//! Bit-exact binary codec for primitive values.
//!
//! Every supported type has its own `Serializer<T>` impl on the stateless
//! [`PrimitiveSerializer`]. Fixed-width scalars are big-endian; byte buffers,
//! strings and arrays are length-prefixed blobs. The format is raw and
//! unversioned: what is written today must decode identically forever.

mod array;
mod blob;
pub mod codec;
mod config;
mod error;
mod fixed;
pub mod format;
mod io;
mod scalar;
mod serializer;
mod tests;
mod time;

pub use crate::codec::Serializer;
pub use crate::config::{
    EofPolicy, NullEntries, RaggedArrays, SerializerConfig, SerializerConfigBuilder,
    SubArrayOverflow,
};
pub use crate::error::{CodecError, Result};
pub use crate::serializer::{PRIMITIVE, PrimitiveSerializer};
pub use crate::time::{
    DateTimeKind, MAX_TICKS, TICKS_PER_SECOND, TimeSpan, Timestamp, UNIX_EPOCH_TICKS,
};

#[cfg(feature = "serde-bincode")]
pub use crate::codec::serde_bincode::SerdeBincode;

pub use uuid::Uuid;

/// Encode `value` with the shared compat instance.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    PrimitiveSerializer: Serializer<T>,
{
    PRIMITIVE.to_vec(value)
}

/// Decode a `T` that spans all of `bytes` with the shared compat instance.
pub fn from_slice<T>(bytes: &[u8]) -> Result<T>
where
    PrimitiveSerializer: Serializer<T>,
{
    PRIMITIVE.from_slice(bytes)
}

/// Wire size of `value`, without allocating its bytes.
pub fn encoded_len<T>(value: &T) -> Result<u64>
where
    PrimitiveSerializer: Serializer<T>,
{
    PRIMITIVE.encoded_len(value)
}
