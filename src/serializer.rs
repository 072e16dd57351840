//! serializer.rs: the one stateless type that carries every primitive codec.
//! - Each supported type is a separate `Serializer<T>` impl (see fixed.rs,
//!   scalar.rs, blob.rs, array.rs); there is no runtime type dispatch.
//! - The only state is an immutable `SerializerConfig`, so a shared instance
//!   can serve any number of threads.

use crate::codec::Serializer;
use crate::config::SerializerConfig;
use crate::error::{CodecError, Result};
use crate::io::counting_sink::CountingSink;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrimitiveSerializer {
    cfg: SerializerConfig,
}

/// Process-wide instance with the compat configuration.
pub static PRIMITIVE: PrimitiveSerializer = PrimitiveSerializer::new();

impl PrimitiveSerializer {
    pub const fn new() -> Self {
        Self::with_config(SerializerConfig::compat())
    }

    pub const fn with_config(cfg: SerializerConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &SerializerConfig {
        &self.cfg
    }

    /// Encode `value` into a fresh buffer.
    pub fn to_vec<T>(&self, value: &T) -> Result<Vec<u8>>
    where
        Self: Serializer<T>,
    {
        let mut buf = Vec::new();
        <Self as Serializer<T>>::encode_into(self, value, &mut buf)?;
        Ok(buf)
    }

    /// Decode one `T` that must span all of `bytes`.
    pub fn from_slice<T>(&self, bytes: &[u8]) -> Result<T>
    where
        Self: Serializer<T>,
    {
        let mut rest = bytes;
        let value = <Self as Serializer<T>>::decode_from(self, &mut rest)?;
        if !rest.is_empty() {
            return Err(CodecError::TrailingBytes(rest.len()));
        }
        Ok(value)
    }

    /// Number of bytes `value` occupies on the wire.
    pub fn encoded_len<T>(&self, value: &T) -> Result<u64>
    where
        Self: Serializer<T>,
    {
        let mut sink = CountingSink::new();
        <Self as Serializer<T>>::encode_into(self, value, &mut sink)?;
        Ok(sink.written())
    }
}
