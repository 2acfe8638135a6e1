//! Options for the text inspector and the image exporter.
//!
//! Defaults point at the bundled logo asset, so both components run without
//! any configuration.

use std::path::{Path, PathBuf};

use crate::locale::Locale;

/// PDF inspected and exported when no path is given.
pub const DEFAULT_PDF_PATH: &str = "public/logos/速読ゴリラ_イラスト.pdf";

/// Directory receiving exported page images.
pub const DEFAULT_OUTPUT_DIR: &str = "public/logos";

/// Filename stem of exported page images (`<base>_page_<N>.png`).
pub const DEFAULT_IMAGE_BASE_NAME: &str = "速読ゴリラ";

/// Rasterization resolution in dots per inch.
pub const DEFAULT_DPI: f32 = 200.0;

/// Options for [`TextInspector`](crate::TextInspector).
#[derive(Debug, Clone)]
pub struct InspectOptions {
    /// PDF to inspect
    pub input: PathBuf,

    /// Language of console output
    pub locale: Locale,
}

impl InspectOptions {
    /// Create new inspect options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PDF to inspect.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Set the output language.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_PDF_PATH),
            locale: Locale::default(),
        }
    }
}

/// Options for [`ImageExporter`](crate::ImageExporter).
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// PDF to export
    pub input: PathBuf,

    /// Directory receiving PNG files
    pub output_dir: PathBuf,

    /// Filename stem of PNG files
    pub base_name: String,

    /// Language of console output
    pub locale: Locale,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PDF to export.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the filename stem.
    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    /// Set the output language.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Path of the PNG for a 1-based page number.
    pub fn output_path_for(&self, page_number: u32) -> PathBuf {
        page_image_path(&self.output_dir, &self.base_name, page_number)
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_PDF_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            base_name: DEFAULT_IMAGE_BASE_NAME.to_string(),
            locale: Locale::default(),
        }
    }
}

/// `<dir>/<base>_page_<N>.png`
pub fn page_image_path(dir: &Path, base_name: &str, page_number: u32) -> PathBuf {
    dir.join(format!("{}_page_{}.png", base_name, page_number))
}
