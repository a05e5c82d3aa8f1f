//! wavscan header checks
//!
//! Inspects the first 44 bytes of a WAV file and decides whether the file is
//! playable on DJ players that only understand the canonical PCM header.
//!
//! # Overview
//!
//! The checks do not walk RIFF chunks. They read fixed byte
//! offsets of the canonical header layout:
//!
//! | Offset | Field            |
//! |--------|------------------|
//! | 0      | `RIFF`           |
//! | 4      | RIFF size        |
//! | 8      | `WAVE`           |
//! | 12     | first chunk id   |
//! | 20     | format tag       |
//! | 34     | bits per sample  |
//!
//! A file with a `JUNK` chunk in front of `fmt ` shifts every later field, so
//! it is reported as such instead of being checked further.
//!
//! # Example
//!
//! ```no_run
//! use wavscan_header::{inspect_file, Outcome};
//!
//! let inspection = inspect_file("set/intro.wav");
//! if inspection.outcome != Outcome::Ok {
//!     println!("{}", inspection.outcome.description());
//! }
//! ```

pub mod classify;
pub mod error;
pub mod layout;
pub mod outcome;
pub mod read;

pub use classify::classify;
pub use error::{HeaderError, HeaderResult};
pub use layout::{WavHeader, HEADER_LEN};
pub use outcome::Outcome;
pub use read::{inspect_file, read_header, Inspection};
