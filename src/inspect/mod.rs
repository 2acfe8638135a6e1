//! Text inspector: prints the extracted text of every page.
//!
//! Output goes to any [`Write`] sink. Failures are reported on that sink and
//! never abort the caller: a missing file, an unreadable document and a page
//! whose text cannot be extracted each end in a printed diagnostic.
//!
//! # Example
//!
//! ```no_run
//! use pdfprobe::{InspectOptions, TextInspector};
//!
//! let inspector = TextInspector::new(InspectOptions::new().with_input("document.pdf"));
//! inspector.inspect(&mut std::io::stdout().lock())?;
//! # Ok::<(), std::io::Error>(())
//! ```

mod report;

pub use report::{to_json, InspectionReport, JsonFormat, PageReport, PageText};

use std::io::{self, Write};
use std::path::Path;

use crate::error::Error;
use crate::options::InspectOptions;
use crate::parser::{LopdfBackend, PdfBackend};

/// Separator printed after the document header.
const HEADER_RULE_WIDTH: usize = 50;
/// Separator printed after every page.
const PAGE_RULE_WIDTH: usize = 30;

/// How an inspection ended.
#[derive(Debug)]
pub enum InspectOutcome {
    /// The input path does not exist; nothing was read
    NotFound,
    /// The document was read and every page visited
    Inspected(InspectionReport),
    /// The document could not be opened or parsed
    Failed(Error),
}

/// Prints per-page text of a PDF.
#[derive(Debug, Clone, Default)]
pub struct TextInspector {
    options: InspectOptions,
}

impl TextInspector {
    /// Create an inspector.
    pub fn new(options: InspectOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &InspectOptions {
        &self.options
    }

    /// Inspect the configured file.
    ///
    /// Only errors writing to `out` are returned; everything else is printed
    /// and reflected in the [`InspectOutcome`].
    pub fn inspect<W: Write>(&self, out: &mut W) -> io::Result<InspectOutcome> {
        let path = self.options.input.as_path();
        let messages = self.options.locale.messages();

        if !path.exists() {
            writeln!(out, "{}", messages.not_found(path.display()))?;
            return Ok(InspectOutcome::NotFound);
        }

        let backend = match LopdfBackend::open(path) {
            Ok(backend) => backend,
            Err(e) => {
                log::warn!("Failed to load {}: {}", path.display(), e);
                writeln!(out, "{}", messages.load_error(&e))?;
                return Ok(InspectOutcome::Failed(e));
            }
        };

        let report = self.inspect_backend(&backend, path, out)?;
        Ok(InspectOutcome::Inspected(report))
    }

    /// Run the per-page loop against an already opened document.
    ///
    /// `source` is only used for display.
    pub fn inspect_backend<B, W>(
        &self,
        backend: &B,
        source: &Path,
        out: &mut W,
    ) -> io::Result<InspectionReport>
    where
        B: PdfBackend + ?Sized,
        W: Write,
    {
        let messages = self.options.locale.messages();
        let page_numbers = backend.page_numbers();
        let mut report = InspectionReport::new(source, backend.version());

        writeln!(out, "{}", messages.file(source.display()))?;
        writeln!(out, "{}", messages.page_count(page_numbers.len()))?;
        writeln!(out, "{}", "-".repeat(HEADER_RULE_WIDTH))?;

        for (index, &page) in page_numbers.iter().enumerate() {
            let number = index as u32 + 1;
            writeln!(out, "{}", messages.page_header(number))?;

            let text = PageText::from_extraction(backend.extract_page_text(page));
            match &text {
                PageText::Text(content) => writeln!(out, "{}", content)?,
                PageText::Empty => writeln!(out, "{}", messages.no_text())?,
                PageText::Error(detail) => {
                    log::warn!("Failed to extract text from page {}: {}", number, detail);
                    writeln!(out, "{}", messages.extract_error(detail))?;
                }
            }
            writeln!(out, "{}", "-".repeat(PAGE_RULE_WIDTH))?;

            report.push(PageReport { number, text });
        }

        log::debug!(
            "Inspected {} pages ({} without text, {} failed)",
            report.page_count,
            report.empty_pages(),
            report.failed_pages()
        );
        Ok(report)
    }
}
