#[cfg(test)]
mod tests {
    use crate::{
        CodecError, NullEntries, PrimitiveSerializer, RaggedArrays, SerializerConfig,
        SubArrayOverflow, Uuid, from_slice, to_vec,
    };

    #[test]
    fn int32_array_element_count_from_blob_length() {
        let values = vec![1i32, 2, 3];
        let wire = to_vec(&values).unwrap();
        assert_eq!(wire, [12, 1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0]);

        let back: Vec<i32> = from_slice(&wire).unwrap();
        assert_eq!(back.len(), 3);
        assert_eq!(back, values);
    }

    #[test]
    fn int64_array_roundtrip() {
        let values = vec![i64::MIN, -1, 0, 1 << 40, i64::MAX];
        let wire = to_vec(&values).unwrap();
        assert_eq!(wire[0], 40);
        assert_eq!(&wire[1..9], &i64::MIN.to_le_bytes());
        assert_eq!(from_slice::<Vec<i64>>(&wire).unwrap(), values);
    }

    #[test]
    fn empty_arrays() {
        assert_eq!(to_vec(&Vec::<i32>::new()).unwrap(), [0]);
        assert!(from_slice::<Vec<i64>>(&[0]).unwrap().is_empty());
        assert!(from_slice::<Vec<Uuid>>(&[0]).unwrap().is_empty());
    }

    #[test]
    fn uuid_array_roundtrip() {
        let ids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let wire = to_vec(&ids).unwrap();
        assert_eq!(wire.len(), 1 + 5 * 16);
        assert_eq!(&wire[1..17], &ids[0].to_bytes_le());
        assert_eq!(from_slice::<Vec<Uuid>>(&wire).unwrap(), ids);
    }

    #[test]
    fn ragged_array_tail_is_ignored_by_default() {
        // five payload bytes: one whole i32 plus one stray byte
        let wire = [5u8, 7, 0, 0, 0, 0xEE];
        assert_eq!(from_slice::<Vec<i32>>(&wire).unwrap(), vec![7]);
    }

    #[test]
    fn ragged_array_rejected_when_configured() {
        let ser = PrimitiveSerializer::with_config(
            SerializerConfig::builder()
                .ragged_arrays(RaggedArrays::Reject)
                .build(),
        );
        let err = ser.from_slice::<Vec<i32>>(&[5, 7, 0, 0, 0, 0xEE]).unwrap_err();
        assert!(
            matches!(err, CodecError::RaggedArray { len: 5, width: 4 }),
            "{err}"
        );
    }

    #[test]
    fn null_array_blob_is_corrupt() {
        let null = [0xFF, 0xFF, 0xFF, 0xFF, 0x0F];
        let err = from_slice::<Vec<i32>>(&null).unwrap_err();
        assert!(matches!(err, CodecError::Corrupt(_)), "{err}");
    }

    #[test]
    fn nested_arrays_use_length_bytes() {
        let values = vec![vec![1u8, 2], vec![], vec![3]];
        let wire = to_vec(&values).unwrap();
        assert_eq!(wire, [6, 2, 1, 2, 0, 1, 3]);
        assert_eq!(from_slice::<Vec<Vec<u8>>>(&wire).unwrap(), values);
    }

    #[test]
    fn nested_null_entries_vanish() {
        let a = vec![1u8, 2];
        let b = vec![3u8];
        let values = vec![Some(a.clone()), None, Some(b.clone())];
        let wire = to_vec(&values).unwrap();
        assert_eq!(wire, [5, 2, 1, 2, 1, 3]);

        let back: Vec<Vec<u8>> = from_slice(&wire).unwrap();
        assert_eq!(back, vec![a.clone(), b.clone()]);

        let back: Vec<Option<Vec<u8>>> = from_slice(&wire).unwrap();
        assert_eq!(back, vec![Some(a), Some(b)]);
    }

    #[test]
    fn nested_sub_array_of_255_bytes_is_lossless() {
        let big: Vec<u8> = (0..255u32).map(|i| (i * 7) as u8).collect();
        let values = vec![big.clone(), vec![9]];
        let wire = to_vec(&values).unwrap();
        assert_eq!(from_slice::<Vec<Vec<u8>>>(&wire).unwrap(), values);
    }

    #[test]
    fn nested_sub_array_over_255_bytes_silently_corrupts() {
        // 256 zero bytes: the length byte wraps to 0, then every zero reads as
        // another empty sub-array
        let values = vec![vec![0u8; 256]];
        let wire = to_vec(&values).unwrap();
        let back: Vec<Vec<u8>> = from_slice(&wire).unwrap();
        assert_eq!(back.len(), 257);
        assert!(back.iter().all(|v| v.is_empty()));
        assert_ne!(back, values);
    }

    #[test]
    fn nested_strict_policies() {
        let ser = PrimitiveSerializer::with_config(
            SerializerConfig::builder()
                .null_entries(NullEntries::Reject)
                .sub_array_overflow(SubArrayOverflow::Reject)
                .build(),
        );
        let err = ser
            .to_vec(&vec![Some(vec![1u8]), None])
            .unwrap_err();
        assert!(matches!(err, CodecError::NullEntry { index: 1 }), "{err}");

        let err = ser.to_vec(&vec![vec![0u8; 3], vec![0u8; 300]]).unwrap_err();
        assert!(
            matches!(err, CodecError::SubArrayTooLong { index: 1, len: 300 }),
            "{err}"
        );

        // the boundary itself is fine
        let ok = ser.to_vec(&vec![vec![0u8; 255]]).unwrap();
        assert_eq!(ok.len(), 2 + 1 + 255);
    }

    #[test]
    fn nested_null_blob_decodes_empty() {
        let null = [0xFF, 0xFF, 0xFF, 0xFF, 0x0F];
        assert!(from_slice::<Vec<Vec<u8>>>(&null).unwrap().is_empty());
    }

    #[test]
    fn nested_length_past_blob_end_is_corrupt() {
        let err = from_slice::<Vec<Vec<u8>>>(&[2, 3, 1]).unwrap_err();
        assert!(matches!(err, CodecError::Corrupt(_)), "{err}");
    }
}
