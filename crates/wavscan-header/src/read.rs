//! Reading headers from disk.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::classify::classify;
use crate::error::{HeaderError, HeaderResult};
use crate::layout::{WavHeader, HEADER_LEN};
use crate::outcome::Outcome;

/// Read the first [`HEADER_LEN`] bytes of `path`.
///
/// The file is opened read-only and closed before this returns.
pub fn read_header(path: impl AsRef<Path>) -> HeaderResult<WavHeader> {
    let mut file = File::open(path.as_ref())?;
    let mut buf = [0u8; HEADER_LEN];
    let len = read_up_to(&mut file, &mut buf)?;
    WavHeader::from_bytes(&buf[..len])
}

/// Fill `buf` until it is full or the reader hits EOF. Returns the byte count.
fn read_up_to(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Outcome of inspecting one file, plus whatever could be read.
#[derive(Debug, Clone)]
pub struct Inspection {
    pub outcome: Outcome,
    /// Extra context for `Truncated` and `Unreadable`.
    pub detail: Option<String>,
    /// The header, when 44 bytes could be read.
    pub header: Option<WavHeader>,
}

/// Inspect a single file. Never fails: read problems become outcomes.
pub fn inspect_file(path: impl AsRef<Path>) -> Inspection {
    match read_header(path) {
        Ok(header) => Inspection {
            outcome: classify(&header),
            detail: None,
            header: Some(header),
        },
        Err(HeaderError::Truncated { len, .. }) => Inspection {
            outcome: Outcome::Truncated,
            detail: Some(format!("only {} of {} header bytes present", len, HEADER_LEN)),
            header: None,
        },
        Err(HeaderError::Io(e)) => Inspection {
            outcome: Outcome::Unreadable,
            detail: Some(e.to_string()),
            header: None,
        },
    }
}
