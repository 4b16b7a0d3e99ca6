#[cfg(test)]
mod tests {
    use std::io::{self, Read, Write};

    use crate::inference_pipeline::bmp::bmp_decoder::row_padding;
    use crate::inference_pipeline::bmp::{
        decode, decode_file, BmpDecoder, ChannelCount, ImageDecoder, BMP_HEADER_SIZE,
    };
    use crate::inference_pipeline::common::error::{ClassifyError, DecodeError};

    const PAD_BYTE: u8 = 0xEE;

    fn header(width: i32, height: i32, bits_per_pixel: u16, compression: u32, data_offset: u32) -> Vec<u8> {
        let mut buf = vec![0u8; BMP_HEADER_SIZE];
        buf[0..2].copy_from_slice(b"BM");
        buf[10..14].copy_from_slice(&data_offset.to_le_bytes());
        buf[14..18].copy_from_slice(&40u32.to_le_bytes());
        buf[18..22].copy_from_slice(&width.to_le_bytes());
        buf[22..26].copy_from_slice(&height.to_le_bytes());
        buf[26..28].copy_from_slice(&1u16.to_le_bytes());
        buf[28..30].copy_from_slice(&bits_per_pixel.to_le_bytes());
        buf[30..34].copy_from_slice(&compression.to_le_bytes());
        buf
    }

    /// Stores canonical top-down RGB (or gray) pixels as a bitmap file.
    fn encode(width: usize, height: usize, channels: usize, canonical: &[u8], top_down: bool, gap: usize) -> Vec<u8> {
        let row_bytes = width * channels;
        let signed_height = if top_down { -(height as i32) } else { height as i32 };
        let mut file = header(
            width as i32,
            signed_height,
            (channels * 8) as u16,
            0,
            (BMP_HEADER_SIZE + gap) as u32,
        );
        file.extend(std::iter::repeat(0u8).take(gap));

        let rows: Vec<&[u8]> = if row_bytes == 0 {
            vec![&[][..]; height]
        } else {
            canonical.chunks_exact(row_bytes).collect()
        };
        let ordered: Vec<&[u8]> = if top_down {
            rows
        } else {
            rows.into_iter().rev().collect()
        };
        for row in ordered {
            let mut stored = row.to_vec();
            if channels == 3 {
                for pixel in stored.chunks_exact_mut(3) {
                    pixel.swap(0, 2);
                }
            }
            file.extend_from_slice(&stored);
            file.extend(std::iter::repeat(PAD_BYTE).take(row_padding(row_bytes)));
        }
        file
    }

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 7 + 3) as u8).collect()
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn test_bottom_up_rgb_rows_are_flipped_and_swapped() {
        let mut file = header(2, 2, 24, 0, 54);
        // Bottom row first, stored as BGR, padded to 8 bytes.
        file.extend_from_slice(&[10, 20, 30, 40, 50, 60, PAD_BYTE, PAD_BYTE]);
        file.extend_from_slice(&[70, 80, 90, 100, 110, 120, PAD_BYTE, PAD_BYTE]);

        let image = decode(file.as_slice()).unwrap();

        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.channels(), ChannelCount::Rgb);
        assert_eq!(&image.pixels()[..6], &[90, 80, 70, 120, 110, 100]);
        assert_eq!(&image.pixels()[6..], &[30, 20, 10, 60, 50, 40]);
    }

    #[test]
    fn test_top_down_rows_keep_order() {
        let mut file = header(1, -2, 8, 0, 54);
        file.extend_from_slice(&[1, PAD_BYTE, PAD_BYTE, PAD_BYTE]);
        file.extend_from_slice(&[2, PAD_BYTE, PAD_BYTE, PAD_BYTE]);

        let image = decode(file.as_slice()).unwrap();

        assert_eq!(image.channels(), ChannelCount::Gray);
        assert_eq!(image.pixels(), &[1, 2]);
    }

    #[test]
    fn test_round_trip_preserves_pixels() {
        for &channels in &[1usize, 3] {
            for &(width, height) in &[(1, 1), (2, 3), (3, 2), (5, 4), (7, 1), (0, 3)] {
                for &top_down in &[false, true] {
                    let canonical = pattern(width * height * channels);
                    let file = encode(width, height, channels, &canonical, top_down, 0);

                    let image = decode(file.as_slice()).unwrap();

                    assert_eq!(image.width(), width);
                    assert_eq!(image.height(), height);
                    assert_eq!(image.channels().count(), channels);
                    assert_eq!(image.pixels(), canonical.as_slice());
                    assert_eq!(image.pixels().len(), width * channels * height);
                }
            }
        }
    }

    #[test]
    fn test_gap_before_pixel_data_is_skipped() {
        let canonical = pattern(3 * 2);
        let file = encode(3, 2, 1, &canonical, false, 1024);

        let image = decode(file.as_slice()).unwrap();

        assert_eq!(image.pixels(), canonical.as_slice());
    }

    #[test]
    fn test_short_streams_are_truncated() {
        let file = encode(2, 2, 3, &pattern(12), false, 0);
        for len in 0..BMP_HEADER_SIZE {
            let result = decode(&file[..len]);
            assert!(matches!(result, Err(DecodeError::Truncated)), "length {}", len);
        }
    }

    #[test]
    fn test_bad_signature() {
        let mut file = encode(2, 2, 3, &pattern(12), false, 0);
        file[0] = b'P';
        assert!(matches!(decode(file.as_slice()), Err(DecodeError::BadSignature)));
    }

    #[test]
    fn test_unsupported_depths() {
        for &bits in &[1u16, 4, 16, 32] {
            let mut file = header(1, 1, bits, 0, 54);
            file.extend_from_slice(&[0u8; 4]);
            let result = decode(file.as_slice());
            assert!(
                matches!(result, Err(DecodeError::UnsupportedChannelCount(b)) if b == bits),
                "bits {}",
                bits
            );
        }
    }

    #[test]
    fn test_compressed_bitmaps_rejected() {
        for &method in &[1u32, 2, 3] {
            let mut file = header(1, 1, 8, method, 54);
            file.extend_from_slice(&[0u8; 4]);
            assert!(matches!(
                decode(file.as_slice()),
                Err(DecodeError::UnsupportedCompression(m)) if m == method
            ));
        }
    }

    #[test]
    fn test_negative_width_rejected() {
        let file = header(-4, 1, 24, 0, 54);
        assert!(matches!(decode(file.as_slice()), Err(DecodeError::InvalidWidth(-4))));
    }

    #[test]
    fn test_gap_past_end_of_stream() {
        let file = header(1, 1, 8, 0, 4096);
        assert!(matches!(decode(file.as_slice()), Err(DecodeError::SeekFailed)));
    }

    #[test]
    fn test_missing_row_data() {
        let mut file = encode(3, 3, 3, &pattern(27), false, 0);
        let row_stride = 9 + row_padding(9);
        file.truncate(BMP_HEADER_SIZE + row_stride + 4);
        assert!(matches!(decode(file.as_slice()), Err(DecodeError::Truncated)));
    }

    #[test]
    fn test_missing_row_padding() {
        let mut file = encode(3, 1, 3, &pattern(9), false, 0);
        file.truncate(BMP_HEADER_SIZE + 9 + 1);
        assert!(matches!(decode(file.as_slice()), Err(DecodeError::SeekFailed)));
    }

    #[test]
    fn test_overstated_height_fails_without_panicking() {
        let mut file = header(4, i32::MAX, 24, 0, 54);
        file.extend_from_slice(&pattern(64));
        assert!(matches!(decode(file.as_slice()), Err(DecodeError::Truncated)));

        let file = header(1, i32::MIN, 8, 0, 54);
        assert!(matches!(decode(file.as_slice()), Err(DecodeError::Truncated)));
    }

    #[test]
    fn test_overstated_width_fails_on_short_read() {
        let mut file = header(i32::MAX, 1, 24, 0, 54);
        file.extend_from_slice(&pattern(32));

        let result = decode(file.as_slice());

        assert!(matches!(
            result,
            Err(DecodeError::Truncated) | Err(DecodeError::DimensionsTooLarge(_, _))
        ));
    }

    #[test]
    fn test_zero_width_with_huge_height_returns_immediately() {
        let file = header(0, i32::MIN, 8, 0, 54);
        let started = std::time::Instant::now();

        let image = decode(file.as_slice()).unwrap();

        assert_eq!(image.width(), 0);
        assert_eq!(image.height(), 1usize << 31);
        assert!(image.pixels().is_empty());
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_io_errors_are_not_truncation() {
        assert!(matches!(decode(FailingReader), Err(DecodeError::Io(_))));
    }

    #[test]
    fn test_row_padding_matches_bit_formula() {
        for channels in [1usize, 3] {
            for width in 0..64usize {
                let row_bytes = width * channels;
                let formula = 4 * ((8 * channels * width + 31) / 32) - row_bytes;
                assert_eq!(row_padding(row_bytes), formula);
                assert_eq!((row_bytes + row_padding(row_bytes)) % 4, 0);
            }
        }
    }

    #[test]
    fn test_decoder_trait_wraps_decode_errors() {
        let result = BmpDecoder.decode_image(b"not a bitmap");
        assert!(matches!(result, Err(ClassifyError::Decode(DecodeError::Truncated))));

        let canonical = pattern(4 * 4 * 3);
        let file = encode(4, 4, 3, &canonical, true, 0);
        let image = BmpDecoder.decode_image(&file).unwrap();
        assert_eq!(image.into_pixels(), canonical);
    }

    #[test]
    fn test_decode_file() {
        let canonical = pattern(5 * 3);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&encode(5, 3, 1, &canonical, false, 0)).unwrap();
        file.flush().unwrap();

        let image = decode_file(file.path()).unwrap();
        assert_eq!(image.pixels(), canonical.as_slice());

        let dir = tempfile::tempdir().unwrap();
        let missing = decode_file(dir.path().join("missing.bmp"));
        assert!(matches!(missing, Err(ClassifyError::InputReadError(_))));
    }
}
