//! Inspection report types and JSON output.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Outcome of extracting the text of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum PageText {
    /// Non-blank text, kept verbatim
    Text(String),
    /// Blank text; the page most likely holds only images or vector art
    Empty,
    /// Extraction failed with this message
    Error(String),
}

impl PageText {
    /// Classify the result of a text extraction.
    pub fn from_extraction(result: Result<String>) -> Self {
        match result {
            Ok(text) if text.trim().is_empty() => PageText::Empty,
            Ok(text) => PageText::Text(text),
            Err(Error::TextExtract(detail)) => PageText::Error(detail),
            Err(e) => PageText::Error(e.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PageText::Empty)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PageText::Error(_))
    }
}

/// One inspected page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    /// Page number (1-indexed)
    pub number: u32,

    /// Extraction outcome
    pub text: PageText,
}

/// Result of inspecting a whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionReport {
    /// Inspected file, as displayed
    pub path: String,

    /// PDF version from the file header
    pub pdf_version: Option<String>,

    /// Number of pages; always equal to `pages.len()`
    pub page_count: usize,

    /// Pages in document order
    pub pages: Vec<PageReport>,

    /// When the inspection ran
    pub inspected_at: DateTime<Utc>,
}

impl InspectionReport {
    /// Create an empty report for a document.
    pub fn new(path: &Path, pdf_version: Option<String>) -> Self {
        Self {
            path: path.display().to_string(),
            pdf_version,
            page_count: 0,
            pages: Vec::new(),
            inspected_at: Utc::now(),
        }
    }

    /// Append a page, keeping `page_count` in step.
    pub fn push(&mut self, page: PageReport) {
        self.pages.push(page);
        self.page_count = self.pages.len();
    }

    /// Number of pages without extractable text.
    pub fn empty_pages(&self) -> usize {
        self.pages.iter().filter(|p| p.text.is_empty()).count()
    }

    /// Number of pages whose extraction failed.
    pub fn failed_pages(&self) -> usize {
        self.pages.iter().filter(|p| p.text.is_error()).count()
    }
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a report to JSON.
pub fn to_json(report: &InspectionReport, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report),
        JsonFormat::Compact => serde_json::to_string(report),
    };

    result.map_err(|e| Error::Serialize(format!("JSON serialization error: {}", e)))
}
