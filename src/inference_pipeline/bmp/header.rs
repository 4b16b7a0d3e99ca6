//! Fixed-size bitmap header parsing.
//!
//! Fields are pulled out with bounds-checked little-endian readers; a field
//! that would extend past the buffer yields `DecodeError::Truncated`.

use crate::inference_pipeline::bmp::types::ChannelCount;
use crate::inference_pipeline::common::error::DecodeError;

pub const BMP_FILE_HEADER_SIZE: usize = 14;
pub const BMP_INFO_HEADER_SIZE: usize = 40;
/// File header plus info header, consumed before any pixel data.
pub const BMP_HEADER_SIZE: usize = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE;

const SIGNATURE: [u8; 2] = *b"BM";
const DATA_OFFSET_FIELD: usize = 10;
const WIDTH_FIELD: usize = BMP_FILE_HEADER_SIZE + 4;
const HEIGHT_FIELD: usize = BMP_FILE_HEADER_SIZE + 8;
const BITS_PER_PIXEL_FIELD: usize = BMP_FILE_HEADER_SIZE + 14;
const COMPRESSION_FIELD: usize = BMP_FILE_HEADER_SIZE + 16;

fn field<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N], DecodeError> {
    let end = offset.checked_add(N).ok_or(DecodeError::Truncated)?;
    buf.get(offset..end)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(DecodeError::Truncated)
}

fn read_u16_le(buf: &[u8], offset: usize) -> Result<u16, DecodeError> {
    field::<2>(buf, offset).map(u16::from_le_bytes)
}

fn read_u32_le(buf: &[u8], offset: usize) -> Result<u32, DecodeError> {
    field::<4>(buf, offset).map(u32::from_le_bytes)
}

fn read_i32_le(buf: &[u8], offset: usize) -> Result<i32, DecodeError> {
    field::<4>(buf, offset).map(i32::from_le_bytes)
}

/// Header fields relevant to decoding, after signature, depth and
/// compression have been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    /// Byte offset of the first pixel row from the start of the file
    pub data_offset: u32,
    /// Raw signed width; validated by the decoder after the data offset is honored
    pub width: i32,
    /// Raw signed height; negative means rows are stored top-down
    pub height: i32,
    pub channels: ChannelCount,
}

impl BmpHeader {
    pub fn parse(buf: &[u8]) -> Result<Self, DecodeError> {
        if buf.len() < BMP_HEADER_SIZE {
            return Err(DecodeError::Truncated);
        }

        if field::<2>(buf, 0)? != SIGNATURE {
            return Err(DecodeError::BadSignature);
        }

        let bits_per_pixel = read_u16_le(buf, BITS_PER_PIXEL_FIELD)?;
        let channels = ChannelCount::from_bits_per_pixel(bits_per_pixel)
            .ok_or(DecodeError::UnsupportedChannelCount(bits_per_pixel))?;

        let compression = read_u32_le(buf, COMPRESSION_FIELD)?;
        if compression != 0 {
            return Err(DecodeError::UnsupportedCompression(compression));
        }

        Ok(Self {
            data_offset: read_u32_le(buf, DATA_OFFSET_FIELD)?,
            width: read_i32_le(buf, WIDTH_FIELD)?,
            height: read_i32_le(buf, HEIGHT_FIELD)?,
            channels,
        })
    }

    /// Bytes between the end of the fixed header and the first pixel row.
    pub fn gap_before_pixels(&self) -> u64 {
        (self.data_offset as u64).saturating_sub(BMP_HEADER_SIZE as u64)
    }

    pub fn top_down(&self) -> bool {
        self.height < 0
    }
}
