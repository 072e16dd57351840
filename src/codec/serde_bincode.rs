//! Fallback for values outside the primitive catalogue: serde + bincode,
//! configured to the same big-endian, fixed-width integer layout as the
//! primitive codecs so a struct of `u32`s reads like the `u32`s themselves.

use super::Serializer;
use crate::error::CodecError;
use std::io::{Read, Write};
use std::marker::PhantomData;

#[derive(Debug)]
pub struct SerdeBincode<T>(PhantomData<fn() -> T>);

impl<T> SerdeBincode<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for SerdeBincode<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SerdeBincode<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SerdeBincode<T> {}

#[derive(thiserror::Error, Debug)]
pub enum BincodeError {
    #[error("decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),
    #[error("encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),
}

impl From<BincodeError> for CodecError {
    fn from(e: BincodeError) -> Self {
        CodecError::Codec(Box::new(e))
    }
}

#[inline]
fn wire_config() -> impl bincode::config::Config {
    bincode::config::standard()
        .with_big_endian()
        .with_fixed_int_encoding()
}

impl<T> Serializer<T> for SerdeBincode<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    fn encode_into<W: Write + ?Sized>(&self, value: &T, w: &mut W) -> Result<(), CodecError> {
        let mut w = w;
        bincode::serde::encode_into_std_write(value, &mut w, wire_config())
            .map_err(BincodeError::from)?;
        Ok(())
    }

    fn decode_from<R: Read + ?Sized>(&self, r: &mut R) -> Result<T, CodecError> {
        let mut r = r;
        let val = bincode::serde::decode_from_std_read(&mut r, wire_config())
            .map_err(BincodeError::from)?;
        Ok(val)
    }
}
