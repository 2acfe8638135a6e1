//! Image exporter: writes every page of a PDF as a PNG file.
//!
//! Export is all-or-nothing. Every page is rasterized in memory before the
//! first file is written, so a rasterizer failure leaves the output directory
//! untouched.
//!
//! # Example
//!
//! ```no_run
//! use pdfprobe::{ExportOptions, ImageExporter};
//!
//! let exporter = ImageExporter::new(ExportOptions::new().with_output_dir("pages"));
//! exporter.export(&mut std::io::stdout().lock())?;
//! # Ok::<(), std::io::Error>(())
//! ```

mod pdfium;

pub use pdfium::PdfiumRasterizer;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};
use crate::options::ExportOptions;

/// Converts every page of a PDF into an in-memory raster image.
pub trait PageRasterizer {
    /// Rasterize all pages in document order.
    fn rasterize(&self, path: &Path) -> Result<Vec<RgbaImage>>;
}

impl<R: PageRasterizer + ?Sized> PageRasterizer for &R {
    fn rasterize(&self, path: &Path) -> Result<Vec<RgbaImage>> {
        (**self).rasterize(path)
    }
}

/// How an export ended.
#[derive(Debug)]
pub enum ExportOutcome {
    /// The input path does not exist; nothing was read or written
    NotFound,
    /// Every page was written; paths in page order
    Exported(Vec<PathBuf>),
    /// Rasterization or writing failed
    Failed(Error),
}

/// Writes the pages of a PDF as `<base>_page_<N>.png`.
#[derive(Debug, Clone)]
pub struct ImageExporter<R = PdfiumRasterizer> {
    options: ExportOptions,
    rasterizer: R,
}

impl ImageExporter<PdfiumRasterizer> {
    /// Create an exporter that binds PDFium from the system library path.
    pub fn new(options: ExportOptions) -> Self {
        Self::with_rasterizer(options, PdfiumRasterizer::new())
    }
}

impl<R: PageRasterizer> ImageExporter<R> {
    /// Create an exporter with a specific rasterizer.
    pub fn with_rasterizer(options: ExportOptions, rasterizer: R) -> Self {
        Self {
            options,
            rasterizer,
        }
    }

    /// Options in effect.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export the configured file.
    ///
    /// Only errors writing to `out` are returned; everything else is printed
    /// and reflected in the [`ExportOutcome`].
    pub fn export<W: Write>(&self, out: &mut W) -> io::Result<ExportOutcome> {
        let path = self.options.input.as_path();
        let messages = self.options.locale.messages();

        if !path.exists() {
            writeln!(out, "{}", messages.not_found(path.display()))?;
            return Ok(ExportOutcome::NotFound);
        }

        match self.write_pages(path, out) {
            Ok(Ok(written)) => Ok(ExportOutcome::Exported(written)),
            Ok(Err(e)) => {
                log::warn!("Export of {} failed: {}", path.display(), e);
                writeln!(out, "{}", messages.convert_error(&e))?;
                for line in messages.dependency_hint() {
                    writeln!(out, "{}", line)?;
                }
                Ok(ExportOutcome::Failed(e))
            }
            Err(e) => Err(e),
        }
    }

    /// Outer result: writing to `out`. Inner result: the export itself.
    fn write_pages<W: Write>(
        &self,
        path: &Path,
        out: &mut W,
    ) -> io::Result<Result<Vec<PathBuf>>> {
        let messages = self.options.locale.messages();

        let images = match self.rasterizer.rasterize(path) {
            Ok(images) => images,
            Err(e) => return Ok(Err(e)),
        };

        writeln!(out, "{}", messages.file(path.display()))?;
        writeln!(out, "{}", messages.image_count(images.len()))?;

        if let Err(e) = fs::create_dir_all(&self.options.output_dir) {
            return Ok(Err(e.into()));
        }

        let mut written = Vec::with_capacity(images.len());
        for (index, image) in images.iter().enumerate() {
            let number = index as u32 + 1;
            let output_path = self.options.output_path_for(number);
            if let Err(e) = image.save_with_format(&output_path, ImageFormat::Png) {
                return Ok(Err(e.into()));
            }
            writeln!(out, "{}", messages.saved(number, output_path.display()))?;
            written.push(output_path);
        }

        Ok(Ok(written))
    }
}
