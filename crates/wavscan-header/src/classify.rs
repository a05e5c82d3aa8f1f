//! Header classification.
//!
//! Checks run in a fixed order and the first match wins. A header can carry a
//! `JUNK` chunk and a bad bit depth at the same time; only `JunkPadding` is
//! reported for it.

use crate::layout::{offsets, WavHeader};
use crate::outcome::Outcome;

/// Low byte of WAVE_FORMAT_EXTENSIBLE (0xFFFE).
pub const FORMAT_EXTENSIBLE_LOW: u8 = 0xFE;

/// Bit depths accepted by the target players.
pub const SUPPORTED_BIT_DEPTHS: [u8; 2] = [16, 24];

/// Classify a complete 44-byte header.
///
/// Bit depth and format tag are compared on their low byte only.
pub fn classify(header: &WavHeader) -> Outcome {
    if &header.container_id() != b"RIFF" {
        return Outcome::InvalidContainer;
    }

    if &header.form_type() != b"WAVE" {
        return Outcome::InvalidContainer;
    }

    if &header.chunk_id() == b"JUNK" {
        return Outcome::JunkPadding;
    }

    let bits = header.byte(offsets::BITS_PER_SAMPLE.start);
    if !SUPPORTED_BIT_DEPTHS.contains(&bits) {
        return Outcome::UnsupportedBitDepth;
    }

    if header.byte(offsets::FORMAT_TAG.start) == FORMAT_EXTENSIBLE_LOW {
        return Outcome::UnsupportedFormatExtensible;
    }

    Outcome::Ok
}
