//! PDF header detection.
//!
//! Every PDF starts with `%PDF-x.y`. Checking the magic before handing the
//! file to the parser gives a clear [`Error::UnknownFormat`] for files that
//! are not PDFs at all, instead of an opaque parser failure.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"
const HEADER_PROBE_LEN: u64 = 16;

/// Format information read from a PDF header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// Detect the PDF format of a file by reading its header.
///
/// Files shorter than a PDF header are reported as [`Error::UnknownFormat`],
/// not as an I/O error.
///
/// # Example
/// ```no_run
/// use pdfprobe::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("document.pdf").unwrap();
/// println!("PDF version: {}", format.version);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<PdfFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_PROBE_LEN as usize);
    file.take(HEADER_PROBE_LEN).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the PDF format from the leading bytes of a file.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<PdfFormat> {
    let rest = data.strip_prefix(PDF_MAGIC).ok_or(Error::UnknownFormat)?;
    let version_bytes = rest.get(..VERSION_LEN).ok_or(Error::UnknownFormat)?;
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(version_bytes) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PdfFormat { version })
}

/// `d.d` where both `d` are ASCII digits.
fn is_valid_version(version: &[u8]) -> bool {
    matches!(version, [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit())
}

/// Check whether a file starts with a valid PDF header.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}
