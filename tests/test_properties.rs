#[cfg(test)]
mod tests {
    use deflate_codec::{CompressionLevel, ZlibCodec};
    use proptest::collection::vec;
    use proptest::prelude::*;

    // Property-based coverage: arbitrary binary payloads survive the
    // pack/unpack cycle exactly when buffers are sized by the bound and the
    // original length.
    proptest! {
        #[test]
        fn prop_roundtrip_arbitrary_bytes(data in vec(any::<u8>(), 0..8192)) {
            let mut codec = ZlibCodec::new().unwrap();

            let bound = codec.max_pack_size(data.len());
            let mut compressed = vec![0u8; bound];
            let n = codec.pack(&mut compressed, &data).unwrap();
            prop_assert!(n > 0);
            prop_assert!(n <= bound);

            let mut out = vec![0u8; data.len()];
            let m = codec.unpack(&mut out, &compressed[..n]).unwrap();
            prop_assert_eq!(m, data.len());
            prop_assert_eq!(&out[..m], &data[..]);
        }

        #[test]
        fn prop_bound_monotonic_in_input_len(a in 0usize..(1 << 20), b in 0usize..(1 << 20)) {
            let codec = ZlibCodec::with_level(CompressionLevel::High).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(codec.max_pack_size(lo) <= codec.max_pack_size(hi));
        }

        #[test]
        fn prop_truncated_stream_never_decodes(data in vec(any::<u8>(), 64..2048)) {
            let mut codec = ZlibCodec::new().unwrap();
            let compressed = codec.pack_to_vec(&data);

            let mut out = vec![0u8; data.len()];
            let short = &compressed[..compressed.len() - 1];
            prop_assert!(codec.unpack(&mut out, short).is_err());
        }

        #[test]
        fn prop_undersized_destination_never_reports_success(data in vec(any::<u8>(), 256..4096)) {
            let mut codec = ZlibCodec::new().unwrap();
            let compressed = codec.pack_to_vec(&data);

            // One byte short of the real decompressed size.
            let mut out = vec![0u8; data.len() - 1];
            prop_assert!(codec.unpack(&mut out, &compressed).is_err());
        }
    }
}
