//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for the page operations the inspector
//! needs, isolating the concrete PDF library (lopdf) from the inspection loop.

use std::io::Read;
use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};

/// Abstract interface for page enumeration and text extraction.
pub trait PdfBackend {
    /// 1-based page numbers in document order.
    fn page_numbers(&self) -> Vec<u32>;

    /// Number of pages in the document.
    fn page_count(&self) -> usize {
        self.page_numbers().len()
    }

    /// Extract the text of one page. Image-only pages yield an empty or
    /// whitespace-only string, not an error.
    fn extract_page_text(&self, page: u32) -> Result<String>;

    /// PDF version from the file header, if known.
    fn version(&self) -> Option<String> {
        None
    }
}

/// Concrete [`PdfBackend`] backed by `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
}

impl LopdfBackend {
    /// Load from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        detect_format_from_path(path)?;
        let doc = LopdfDocument::load(path)?;
        Ok(Self::from_document(doc))
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        detect_format_from_bytes(data)?;
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self::from_document(doc))
    }

    /// Load from a reader.
    pub fn load_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::load_bytes(&data)
    }

    fn from_document(doc: LopdfDocument) -> Self {
        if doc.is_encrypted() {
            log::warn!("Document is encrypted; extracted text may be unreadable");
        }
        log::debug!(
            "Loaded PDF {} with {} pages",
            doc.version,
            doc.get_pages().len()
        );
        Self { doc }
    }
}

impl PdfBackend for LopdfBackend {
    fn page_numbers(&self) -> Vec<u32> {
        self.doc.get_pages().into_keys().collect()
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        self.doc
            .extract_text(&[page])
            .map_err(|e| Error::TextExtract(e.to_string()))
    }

    fn version(&self) -> Option<String> {
        Some(self.doc.version.clone())
    }
}
