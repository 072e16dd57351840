#[cfg(test)]
mod tests {
    use crate::error::CodecError;
    use crate::format::varint::{read_i32, read_u32, write_i32, write_u32};
    use crate::format::{FixedWidth, MAX_SUB_ARRAY_LEN, NULL_LENGTH};

    fn encode_u32(v: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        write_u32(&mut buf, v).unwrap();
        buf
    }

    #[test]
    fn varint_golden_vectors() {
        assert_eq!(encode_u32(0), [0x00]);
        assert_eq!(encode_u32(0x7F), [0x7F]);
        assert_eq!(encode_u32(0x80), [0x80, 0x01]);
        assert_eq!(encode_u32(300), [0xAC, 0x02]);
        assert_eq!(encode_u32(0x3FFF), [0xFF, 0x7F]);
        assert_eq!(encode_u32(0x4000), [0x80, 0x80, 0x01]);
        assert_eq!(encode_u32(u32::MAX), [0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
    }

    #[test]
    fn negative_varints_take_five_bytes() {
        let mut buf = Vec::new();
        write_i32(&mut buf, NULL_LENGTH).unwrap();
        assert_eq!(buf, [0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
        assert_eq!(read_i32(&mut &buf[..]).unwrap(), -1);

        let mut buf = Vec::new();
        write_i32(&mut buf, i32::MIN).unwrap();
        assert_eq!(buf.len(), 5);
        assert_eq!(read_i32(&mut &buf[..]).unwrap(), i32::MIN);
    }

    #[test]
    fn varint_reads_stop_at_the_last_group() {
        let bytes = [0xAC, 0x02, 0x99];
        let mut r = &bytes[..];
        assert_eq!(read_u32(&mut r).unwrap(), 300);
        assert_eq!(r, [0x99]);
    }

    #[test]
    fn overlong_varint_is_corrupt() {
        let bytes = [0x80, 0x80, 0x80, 0x80, 0x80, 0x01];
        let err = read_u32(&mut &bytes[..]).unwrap_err();
        assert!(matches!(err, CodecError::Corrupt(_)), "{err}");
    }

    #[test]
    fn five_groups_is_the_ceiling() {
        let max = encode_u32(u32::MAX);
        assert_eq!(read_u32(&mut &max[..]).unwrap(), u32::MAX);

        // a fifth group still ending the value is accepted, its high bits dropped
        let wide = [0xFF, 0xFF, 0xFF, 0xFF, 0x7F];
        assert_eq!(read_u32(&mut &wide[..]).unwrap(), u32::MAX);

        // a continuation bit on the fifth group is rejected without a sixth read
        let bytes = [0x80, 0x80, 0x80, 0x80, 0x80];
        let err = read_u32(&mut &bytes[..]).unwrap_err();
        assert!(matches!(err, CodecError::Corrupt(_)), "{err}");
    }

    #[test]
    fn unfinished_varint_is_truncated() {
        let err = read_u32(&mut &[0xFFu8, 0xFF][..]).unwrap_err();
        assert!(matches!(err, CodecError::Truncated(_)), "{err}");
    }

    #[test]
    fn fixed_widths() {
        assert_eq!(FixedWidth::Two.bytes(), 2);
        assert_eq!(FixedWidth::Four.bytes(), 4);
        assert_eq!(FixedWidth::Eight.bytes(), 8);
        assert_eq!(MAX_SUB_ARRAY_LEN, 255);
    }
}
