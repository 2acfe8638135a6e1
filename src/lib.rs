//! # pdfprobe
//!
//! Quick inspection of a PDF asset: print the text of every page, or write
//! every page out as a PNG image.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfprobe::{export_file, inspect_file};
//!
//! fn main() -> std::io::Result<()> {
//!     let mut stdout = std::io::stdout().lock();
//!
//!     // Page count, then each page's text or a placeholder
//!     inspect_file("document.pdf", &mut stdout)?;
//!
//!     // public/logos/速読ゴリラ_page_<N>.png, one per page
//!     export_file("document.pdf", &mut stdout)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Components
//!
//! - **Text inspector** ([`TextInspector`]): per-page text through `lopdf`.
//!   A failing page is reported and skipped; the rest are still printed.
//! - **Image exporter** ([`ImageExporter`]): per-page PNG through PDFium.
//!   All pages are rasterized before anything is written.
//!
//! Neither component returns document errors to the caller. Missing files,
//! unreadable documents and rasterizer failures are printed on the output
//! sink in the configured [`Locale`].

pub mod detect;
pub mod error;
pub mod export;
pub mod inspect;
pub mod locale;
pub mod options;
pub mod parser;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use error::{Error, Result};
pub use export::{ExportOutcome, ImageExporter, PageRasterizer, PdfiumRasterizer};
pub use inspect::{
    to_json, InspectOutcome, InspectionReport, JsonFormat, PageReport, PageText, TextInspector,
};
pub use locale::{Locale, Messages};
pub use options::{
    page_image_path, ExportOptions, InspectOptions, DEFAULT_DPI, DEFAULT_IMAGE_BASE_NAME,
    DEFAULT_OUTPUT_DIR, DEFAULT_PDF_PATH,
};
pub use parser::{LopdfBackend, PdfBackend};

use std::io::{self, Write};
use std::path::Path;

/// Print the text of every page of a PDF with default options.
///
/// # Example
///
/// ```no_run
/// use pdfprobe::{inspect_file, InspectOutcome};
///
/// let outcome = inspect_file("document.pdf", &mut std::io::stdout()).unwrap();
/// if let InspectOutcome::Inspected(report) = outcome {
///     println!("{} pages without text", report.empty_pages());
/// }
/// ```
pub fn inspect_file<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> io::Result<InspectOutcome> {
    let options = InspectOptions::new().with_input(path.as_ref());
    TextInspector::new(options).inspect(out)
}

/// Write every page of a PDF as PNG into the default output directory.
///
/// # Example
///
/// ```no_run
/// use pdfprobe::{export_file, ExportOutcome};
///
/// let outcome = export_file("document.pdf", &mut std::io::stdout()).unwrap();
/// if let ExportOutcome::Exported(paths) = outcome {
///     println!("{} files", paths.len());
/// }
/// ```
pub fn export_file<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> io::Result<ExportOutcome> {
    let options = ExportOptions::new().with_input(path.as_ref());
    ImageExporter::new(options).export(out)
}
