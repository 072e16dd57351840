//! Wire format constants and the low-level framing codecs.
//!
//! All fixed-width scalars are big-endian. Array element payloads are the
//! little-endian block-copy layout. Nothing here is versioned.

pub(crate) mod varint;
mod tests;

pub const BOOL_TRUE: u8 = 1;
pub const BOOL_FALSE: u8 = 0;

/// Length prefix written for a null byte buffer or string.
pub const NULL_LENGTH: i32 = -1;

/// Largest sub-array the nested byte-array length byte can describe.
pub const MAX_SUB_ARRAY_LEN: usize = u8::MAX as usize;

pub const GUID_LEN: usize = 16;

/// Width of a big-endian integer on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum FixedWidth {
    Two = 2,
    Four = 4,
    Eight = 8,
}

impl FixedWidth {
    pub(crate) const fn bytes(self) -> usize {
        self as usize
    }
}
