//! Per-file check outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of checking one file. Exactly one outcome is reported per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Canonical 16 or 24 bit PCM header.
    Ok,
    /// Missing `RIFF` or `WAVE` marker.
    InvalidContainer,
    /// A `JUNK` chunk sits in front of the format chunk.
    JunkPadding,
    /// Bits per sample is neither 16 nor 24.
    UnsupportedBitDepth,
    /// Format tag is WAVE_FORMAT_EXTENSIBLE.
    UnsupportedFormatExtensible,
    /// The file is shorter than the canonical header.
    Truncated,
    /// The file could not be opened or read.
    Unreadable,
}

impl Outcome {
    /// All outcomes, in report order.
    pub const ALL: [Outcome; 7] = [
        Outcome::Ok,
        Outcome::InvalidContainer,
        Outcome::JunkPadding,
        Outcome::UnsupportedBitDepth,
        Outcome::UnsupportedFormatExtensible,
        Outcome::Truncated,
        Outcome::Unreadable,
    ];

    pub fn is_ok(self) -> bool {
        self == Outcome::Ok
    }

    /// Stable snake_case code, identical to the serialized form.
    pub fn code(self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::InvalidContainer => "invalid_container",
            Outcome::JunkPadding => "junk_padding",
            Outcome::UnsupportedBitDepth => "unsupported_bit_depth",
            Outcome::UnsupportedFormatExtensible => "unsupported_format_extensible",
            Outcome::Truncated => "truncated",
            Outcome::Unreadable => "unreadable",
        }
    }

    /// Short column label.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Ok => "OK",
            Outcome::InvalidContainer => "INVALID",
            Outcome::JunkPadding => "JUNK",
            Outcome::UnsupportedBitDepth => "BITDEPTH",
            Outcome::UnsupportedFormatExtensible => "EXTENSIBLE",
            Outcome::Truncated => "TRUNCATED",
            Outcome::Unreadable => "UNREADABLE",
        }
    }

    /// One-line explanation for reports.
    pub fn description(self) -> &'static str {
        match self {
            Outcome::Ok => "Header is compatible",
            Outcome::InvalidContainer => "Not a RIFF/WAVE file",
            Outcome::JunkPadding => "JUNK chunk before the format chunk",
            Outcome::UnsupportedBitDepth => "Bit depth is not 16 or 24",
            Outcome::UnsupportedFormatExtensible => "WAVE_FORMAT_EXTENSIBLE is not supported",
            Outcome::Truncated => "File is shorter than a 44-byte header",
            Outcome::Unreadable => "File could not be read",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
