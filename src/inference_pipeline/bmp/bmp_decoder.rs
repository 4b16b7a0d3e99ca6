//! Uncompressed bitmap decoder.
//!
//! Reads strictly forward: the fixed header, an optional gap up to the pixel
//! data offset, then one padded row at a time. Any short read aborts the
//! decode; a partially filled image is never returned.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::Path;

use tracing::debug;

use crate::inference_pipeline::bmp::header::{BmpHeader, BMP_HEADER_SIZE};
use crate::inference_pipeline::bmp::reader::ImageDecoder;
use crate::inference_pipeline::bmp::types::{ChannelCount, RawImage};
use crate::inference_pipeline::common::error::{ClassifyError, DecodeError, Result};

/// Decoder for 8-bit grayscale and 24-bit BGR bitmaps.
pub struct BmpDecoder;

impl ImageDecoder for BmpDecoder {
    fn decode_image(&self, data: &[u8]) -> Result<RawImage> {
        debug!("Decoding bitmap, {} bytes", data.len());
        Ok(decode(Cursor::new(data))?)
    }
}

/// Decodes a bitmap from any forward-only byte stream.
pub fn decode<R: Read>(mut reader: R) -> std::result::Result<RawImage, DecodeError> {
    let mut header_buf = [0u8; BMP_HEADER_SIZE];
    read_exact_or(&mut reader, &mut header_buf, DecodeError::Truncated)?;
    let header = BmpHeader::parse(&header_buf)?;

    skip(&mut reader, header.gap_before_pixels())?;

    if header.width < 0 {
        return Err(DecodeError::InvalidWidth(header.width));
    }
    let width = header.width as usize;
    let height = header.height.unsigned_abs() as usize;
    let channels = header.channels;

    let row_bytes = width
        .checked_mul(channels.count())
        .ok_or(DecodeError::DimensionsTooLarge(width, height))?;
    row_bytes
        .checked_mul(height)
        .ok_or(DecodeError::DimensionsTooLarge(width, height))?;
    let padding = row_padding(row_bytes);

    debug!(
        width,
        height,
        channels = channels.count(),
        top_down = header.top_down(),
        padding,
        "Bitmap header accepted"
    );

    // Rows accumulate in file order and the buffer only grows by bytes
    // actually read, so a header that overstates the geometry fails on the
    // short read before the claimed size is allocated. Zero-length rows
    // consume nothing, so there is nothing to loop over.
    let mut stored = Vec::new();
    if row_bytes > 0 {
        for _ in 0..height {
            let start = stored.len();
            let read = reader
                .by_ref()
                .take(row_bytes as u64)
                .read_to_end(&mut stored)
                .map_err(DecodeError::Io)?;
            if read < row_bytes {
                return Err(DecodeError::Truncated);
            }
            skip(&mut reader, padding as u64)?;
            if channels == ChannelCount::Rgb {
                for pixel in stored[start..].chunks_exact_mut(3) {
                    pixel.swap(0, 2);
                }
            }
        }
    }

    let pixels = if header.top_down() || row_bytes == 0 {
        stored
    } else {
        stored
            .chunks_exact(row_bytes)
            .rev()
            .flatten()
            .copied()
            .collect()
    };

    RawImage::new(width, height, channels, pixels)
        .ok_or(DecodeError::DimensionsTooLarge(width, height))
}

/// Reads and decodes a bitmap file from disk.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<RawImage> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        ClassifyError::InputReadError(format!("{}: {}", path.display(), e))
    })?;
    Ok(decode(BufReader::new(file))?)
}

/// Padding appended to a stored row so its length is a multiple of 4.
///
/// Equal to `4 * ceil(8 * row_bytes / 32) - row_bytes` without the
/// intermediate bit count overflowing.
pub(crate) fn row_padding(row_bytes: usize) -> usize {
    (4 - row_bytes % 4) % 4
}

fn read_exact_or<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    on_eof: DecodeError,
) -> std::result::Result<(), DecodeError> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => on_eof,
        _ => DecodeError::Io(e),
    })
}

fn skip<R: Read>(reader: &mut R, count: u64) -> std::result::Result<(), DecodeError> {
    if count == 0 {
        return Ok(());
    }
    let skipped = io::copy(&mut reader.by_ref().take(count), &mut io::sink())
        .map_err(DecodeError::Io)?;
    if skipped < count {
        return Err(DecodeError::SeekFailed);
    }
    Ok(())
}
