// src/config.rs

/// How fixed-width integer decoding reacts to a byte read that hits end of stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EofPolicy {
    /// Only the last byte of a 2/4/8-byte integer is checked. A missing leading
    /// byte contributes the `-1` sentinel (all bits set) to the value.
    FinalByte,
    /// Every byte is checked.
    EveryByte,
}

/// What nested byte-array encoding does with `None` entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NullEntries {
    /// Skip them; they do not come back on decode.
    Drop,
    Reject,
}

/// What nested byte-array encoding does with sub-arrays longer than 255 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubArrayOverflow {
    /// Write `len mod 256` as the length byte followed by every byte.
    Wrap,
    Reject,
}

/// What array decoding does with a blob that is not a whole number of elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaggedArrays {
    /// Decode the whole elements, ignore the remainder.
    Ignore,
    Reject,
}

/// Serializer policy knobs. None of them change the bytes written for valid
/// input; they only decide whether the legacy edge cases are tolerated.
/// Build with `SerializerConfig::builder().foo(...).build()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerializerConfig {
    pub eof_policy: EofPolicy,
    pub null_entries: NullEntries,
    pub sub_array_overflow: SubArrayOverflow,
    pub ragged_arrays: RaggedArrays,

    /// Largest byte buffer / string (in bytes or UTF-16 units) accepted by the
    /// length-prefixed blob codec, in both directions.
    pub max_blob_len: usize,
}

impl SerializerConfig {
    pub const UNLIMITED: usize = i32::MAX as usize;

    /// Bit-for-bit compatible with existing encoded data, quirks included.
    pub const fn compat() -> Self {
        Self {
            eof_policy: EofPolicy::FinalByte,
            null_entries: NullEntries::Drop,
            sub_array_overflow: SubArrayOverflow::Wrap,
            ragged_arrays: RaggedArrays::Ignore,
            max_blob_len: Self::UNLIMITED,
        }
    }

    /// Same wire format, every quirk turned into an error.
    pub const fn strict() -> Self {
        Self {
            eof_policy: EofPolicy::EveryByte,
            null_entries: NullEntries::Reject,
            sub_array_overflow: SubArrayOverflow::Reject,
            ragged_arrays: RaggedArrays::Reject,
            max_blob_len: Self::UNLIMITED,
        }
    }

    /// Start building from the compat defaults.
    pub fn builder() -> SerializerConfigBuilder {
        SerializerConfigBuilder {
            cfg: Self::compat(),
        }
    }
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self::compat()
    }
}

/// Fluent builder for `SerializerConfig`.
#[derive(Clone, Debug)]
pub struct SerializerConfigBuilder {
    cfg: SerializerConfig,
}

impl SerializerConfigBuilder {
    pub fn eof_policy(mut self, p: EofPolicy) -> Self {
        self.cfg.eof_policy = p;
        self
    }
    pub fn null_entries(mut self, p: NullEntries) -> Self {
        self.cfg.null_entries = p;
        self
    }
    pub fn sub_array_overflow(mut self, p: SubArrayOverflow) -> Self {
        self.cfg.sub_array_overflow = p;
        self
    }
    pub fn ragged_arrays(mut self, p: RaggedArrays) -> Self {
        self.cfg.ragged_arrays = p;
        self
    }
    pub fn max_blob_len(mut self, len: usize) -> Self {
        self.cfg.max_blob_len = len;
        self
    }

    /// Finalize and return the config. Limits above `i32::MAX` are clamped,
    /// the length prefix cannot express more.
    pub fn build(self) -> SerializerConfig {
        let mut cfg = self.cfg;
        cfg.max_blob_len = cfg.max_blob_len.min(SerializerConfig::UNLIMITED);
        cfg
    }
}
