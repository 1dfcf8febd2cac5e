//! RTF signature detection.
//!
//! RTF files start with `{\rtf`, usually followed by the version number.

use std::io::{Read, Seek, SeekFrom};

const RTF_SIGNATURE: &[u8] = b"{\\rtf";

/// Check whether `bytes` begins with the RTF signature.
///
/// ```rust
/// use rtfkit::common::detection::is_rtf;
///
/// assert!(is_rtf(b"{\\rtf1\\ansi\\deff0 Hello World}"));
/// assert!(!is_rtf(b"Plain text file"));
/// ```
#[inline]
pub fn is_rtf(bytes: &[u8]) -> bool {
    bytes.starts_with(RTF_SIGNATURE)
}

/// Check a seekable reader for the RTF signature, then rewind it.
pub fn is_rtf_reader<R: Read + Seek>(reader: &mut R) -> std::io::Result<bool> {
    let mut head = [0u8; RTF_SIGNATURE.len()];
    let start = reader.stream_position()?;
    let mut filled = 0;
    while filled < head.len() {
        let n = reader.read(&mut head[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    reader.seek(SeekFrom::Start(start))?;
    Ok(is_rtf(&head[..filled]))
}
