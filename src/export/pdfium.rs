//! Page rasterization through PDFium.
//!
//! `pdfium-render` loads the PDFium shared library at runtime, so a machine
//! without libpdfium fails here with [`Error::Render`] instead of at link
//! time.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use pdfium_render::prelude::*;

use crate::error::{Error, Result};
use crate::options::DEFAULT_DPI;

use super::PageRasterizer;

/// Points per inch in PDF user space.
const POINTS_PER_INCH: f32 = 72.0;

/// [`PageRasterizer`] backed by the PDFium library.
#[derive(Debug, Clone, Default)]
pub struct PdfiumRasterizer {
    library_dir: Option<PathBuf>,
}

impl PdfiumRasterizer {
    /// Bind PDFium from the system library search path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind PDFium from the given directory instead of the system path.
    pub fn with_library_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.library_dir = Some(dir.into());
        self
    }

    /// Directory PDFium is loaded from, if not the system path.
    pub fn library_dir(&self) -> Option<&Path> {
        self.library_dir.as_deref()
    }

    fn bind(&self) -> Result<Pdfium> {
        let bindings = match &self.library_dir {
            Some(dir) => {
                log::debug!("Binding PDFium from {}", dir.display());
                let dir = dir.to_string_lossy();
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&*dir))?
            }
            None => Pdfium::bind_to_system_library()?,
        };
        Ok(Pdfium::new(bindings))
    }
}

impl PageRasterizer for PdfiumRasterizer {
    fn rasterize(&self, path: &Path) -> Result<Vec<RgbaImage>> {
        let pdfium = self.bind()?;
        let document = pdfium.load_pdf_from_file(path, None)?;
        let config = PdfRenderConfig::new().scale_page_by_factor(DEFAULT_DPI / POINTS_PER_INCH);

        let mut images = Vec::with_capacity(document.pages().len() as usize);
        for (index, page) in document.pages().iter().enumerate() {
            let bitmap = page.render_with_config(&config)?;
            let (width, height) = (bitmap.width() as u32, bitmap.height() as u32);
            let image = RgbaImage::from_raw(width, height, bitmap.as_rgba_bytes())
                .ok_or_else(|| {
                    Error::Render(format!(
                        "page {} bitmap does not match {}x{}",
                        index + 1,
                        width,
                        height
                    ))
                })?;
            log::debug!("Rasterized page {} at {}x{}", index + 1, width, height);
            images.push(image);
        }

        Ok(images)
    }
}
