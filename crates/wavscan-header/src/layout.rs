//! Canonical 44-byte WAV header layout.
//!
//! Offsets assume the `fmt ` chunk directly follows the RIFF/WAVE preamble and
//! has the 16-byte PCM body, with `data` right after it. Files that deviate are
//! still readable here; the fields simply hold whatever bytes sit at those
//! positions.

use std::ops::Range;

use crate::error::{HeaderError, HeaderResult};

/// Size of the canonical PCM header in bytes.
pub const HEADER_LEN: usize = 44;

/// Byte ranges of the named header fields.
pub mod offsets {
    use std::ops::Range;

    /// `RIFF` container id.
    pub const CONTAINER_ID: Range<usize> = 0..4;
    /// RIFF chunk size (u32 LE).
    pub const RIFF_SIZE: Range<usize> = 4..8;
    /// `WAVE` form type.
    pub const FORM_TYPE: Range<usize> = 8..12;
    /// Id of the first sub-chunk, `fmt ` in a canonical file.
    pub const CHUNK_ID: Range<usize> = 12..16;
    /// Size of the first sub-chunk (u32 LE).
    pub const CHUNK_SIZE: Range<usize> = 16..20;
    /// Format tag (u16 LE). 1 = PCM, 0xFFFE = extensible.
    pub const FORMAT_TAG: Range<usize> = 20..22;
    /// Channel count (u16 LE).
    pub const CHANNELS: Range<usize> = 22..24;
    /// Sample rate in Hz (u32 LE).
    pub const SAMPLE_RATE: Range<usize> = 24..28;
    /// Byte rate (u32 LE).
    pub const BYTE_RATE: Range<usize> = 28..32;
    /// Block align (u16 LE).
    pub const BLOCK_ALIGN: Range<usize> = 32..34;
    /// Bits per sample (u16 LE).
    pub const BITS_PER_SAMPLE: Range<usize> = 34..36;
    /// `data` chunk id.
    pub const DATA_ID: Range<usize> = 36..40;
    /// Size of the data chunk (u32 LE).
    pub const DATA_SIZE: Range<usize> = 40..44;
}

/// The first [`HEADER_LEN`] bytes of a WAV file, with named field access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    bytes: [u8; HEADER_LEN],
}

impl WavHeader {
    /// Copies the header out of `data`.
    ///
    /// Bytes past [`HEADER_LEN`] are ignored. Shorter input is rejected with
    /// [`HeaderError::Truncated`] rather than padded.
    pub fn from_bytes(data: &[u8]) -> HeaderResult<Self> {
        let bytes: [u8; HEADER_LEN] = data
            .get(..HEADER_LEN)
            .and_then(|head| head.try_into().ok())
            .ok_or_else(|| HeaderError::truncated(data.len()))?;
        Ok(Self { bytes })
    }

    /// Raw header bytes.
    pub fn as_bytes(&self) -> &[u8; HEADER_LEN] {
        &self.bytes
    }

    /// Single byte at `offset`.
    pub fn byte(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }

    pub fn container_id(&self) -> [u8; 4] {
        self.fourcc(offsets::CONTAINER_ID)
    }

    pub fn riff_size(&self) -> u32 {
        self.u32_le(offsets::RIFF_SIZE)
    }

    pub fn form_type(&self) -> [u8; 4] {
        self.fourcc(offsets::FORM_TYPE)
    }

    pub fn chunk_id(&self) -> [u8; 4] {
        self.fourcc(offsets::CHUNK_ID)
    }

    pub fn chunk_size(&self) -> u32 {
        self.u32_le(offsets::CHUNK_SIZE)
    }

    pub fn format_tag(&self) -> u16 {
        self.u16_le(offsets::FORMAT_TAG)
    }

    pub fn channels(&self) -> u16 {
        self.u16_le(offsets::CHANNELS)
    }

    pub fn sample_rate(&self) -> u32 {
        self.u32_le(offsets::SAMPLE_RATE)
    }

    pub fn byte_rate(&self) -> u32 {
        self.u32_le(offsets::BYTE_RATE)
    }

    pub fn block_align(&self) -> u16 {
        self.u16_le(offsets::BLOCK_ALIGN)
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.u16_le(offsets::BITS_PER_SAMPLE)
    }

    pub fn data_id(&self) -> [u8; 4] {
        self.fourcc(offsets::DATA_ID)
    }

    pub fn data_size(&self) -> u32 {
        self.u32_le(offsets::DATA_SIZE)
    }

    fn fourcc(&self, range: Range<usize>) -> [u8; 4] {
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.bytes[range]);
        out
    }

    fn u16_le(&self, range: Range<usize>) -> u16 {
        let mut raw = [0u8; 2];
        raw.copy_from_slice(&self.bytes[range]);
        u16::from_le_bytes(raw)
    }

    fn u32_le(&self, range: Range<usize>) -> u32 {
        u32::from_le_bytes(self.fourcc(range))
    }
}

/// Render a four-character code for display, escaping non-printable bytes.
pub fn fourcc_to_string(code: &[u8; 4]) -> String {
    code.iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                (b as char).to_string()
            } else {
                format!("\\x{:02x}", b)
            }
        })
        .collect()
}
