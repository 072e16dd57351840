#[cfg(test)]
mod tests {
    use crate::{
        EofPolicy, NullEntries, PRIMITIVE, PrimitiveSerializer, RaggedArrays, SerializerConfig,
        SubArrayOverflow,
    };

    #[test]
    fn defaults_are_compat() {
        let cfg = SerializerConfig::builder().build();
        assert_eq!(cfg, SerializerConfig::compat());
        assert_eq!(cfg, SerializerConfig::default());
        assert_eq!(*PRIMITIVE.config(), cfg);
        assert_eq!(cfg.eof_policy, EofPolicy::FinalByte);
        assert_eq!(cfg.max_blob_len, i32::MAX as usize);
    }

    #[test]
    fn strict_preset_hardens_everything() {
        let cfg = SerializerConfig::strict();
        assert_eq!(cfg.eof_policy, EofPolicy::EveryByte);
        assert_eq!(cfg.null_entries, NullEntries::Reject);
        assert_eq!(cfg.sub_array_overflow, SubArrayOverflow::Reject);
        assert_eq!(cfg.ragged_arrays, RaggedArrays::Reject);
    }

    #[test]
    fn builder_clamps_blob_limit() {
        let cfg = SerializerConfig::builder().max_blob_len(usize::MAX).build();
        assert_eq!(cfg.max_blob_len, SerializerConfig::UNLIMITED);
    }

    #[test]
    fn strict_writes_the_same_bytes_for_valid_input() {
        let strict = PrimitiveSerializer::with_config(SerializerConfig::strict());
        let nested = vec![vec![1u8, 2, 3], vec![255; 255]];
        assert_eq!(strict.to_vec(&nested).unwrap(), PRIMITIVE.to_vec(&nested).unwrap());
        assert_eq!(
            strict.to_vec(&-12345i64).unwrap(),
            PRIMITIVE.to_vec(&-12345i64).unwrap()
        );
        assert_eq!(
            strict.to_vec(&"key".to_string()).unwrap(),
            PRIMITIVE.to_vec(&"key".to_string()).unwrap()
        );
    }
}
