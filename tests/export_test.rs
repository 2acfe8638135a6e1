//! Integration tests for the image exporter.

mod common;

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use pdfprobe::{
    Error, ExportOptions, ExportOutcome, ImageExporter, Locale, PageRasterizer, PdfiumRasterizer,
    Result,
};

/// Rasterizer producing one solid image per page; page N is N pixels wide so
/// the files can be told apart after writing.
struct CountingRasterizer {
    pages: u32,
}

impl PageRasterizer for CountingRasterizer {
    fn rasterize(&self, _path: &Path) -> Result<Vec<RgbaImage>> {
        Ok((1..=self.pages)
            .map(|n| RgbaImage::from_pixel(n, 2, Rgba([0, 0, 0, 255])))
            .collect())
    }
}

/// Rasterizer standing in for a machine without libpdfium.
struct UnavailableRasterizer;

impl PageRasterizer for UnavailableRasterizer {
    fn rasterize(&self, _path: &Path) -> Result<Vec<RgbaImage>> {
        Err(Error::Render("LoadLibraryError: libpdfium.so not found".to_string()))
    }
}

fn options_for(dir: &Path) -> ExportOptions {
    let input = common::write_pdf(dir, "logo.pdf", &["one", "two", "three"]);
    ExportOptions::new()
        .with_input(input)
        .with_output_dir(dir.join("out"))
        .with_base_name("logo")
}

fn export<R: PageRasterizer>(options: ExportOptions, rasterizer: R) -> (ExportOutcome, String) {
    let mut out = Vec::new();
    let outcome = ImageExporter::with_rasterizer(options, rasterizer)
        .export(&mut out)
        .unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

fn png_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .map(|e| e.unwrap().path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "png"))
                .collect()
        })
        .unwrap_or_default();
    files.sort();
    files
}

#[test]
fn test_writes_one_png_per_page() {
    let dir = tempfile::tempdir().unwrap();
    let options = options_for(dir.path());
    let out_dir = options.output_dir.clone();

    let (outcome, output) = export(options, CountingRasterizer { pages: 3 });

    let written = match outcome {
        ExportOutcome::Exported(paths) => paths,
        other => panic!("unexpected outcome: {:?}", other),
    };
    assert_eq!(
        written,
        vec![
            out_dir.join("logo_page_1.png"),
            out_dir.join("logo_page_2.png"),
            out_dir.join("logo_page_3.png"),
        ]
    );
    assert_eq!(png_files(&out_dir).len(), 3);

    for (index, path) in written.iter().enumerate() {
        let decoded = image::open(path).unwrap();
        assert_eq!(decoded.width(), index as u32 + 1);
    }

    assert!(output.contains("変換された画像数: 3"));
    assert_eq!(output.matches(" を保存: ").count(), 3);
}

#[test]
fn test_saved_lines_follow_page_order() {
    let dir = tempfile::tempdir().unwrap();
    let options = options_for(dir.path()).with_locale(Locale::En);

    let (_, output) = export(options, CountingRasterizer { pages: 2 });
    let saved: Vec<_> = output
        .lines()
        .filter(|l| l.starts_with("Saved page "))
        .collect();

    assert_eq!(saved.len(), 2);
    assert!(saved[0].starts_with("Saved page 1: ") && saved[0].ends_with("logo_page_1.png"));
    assert!(saved[1].starts_with("Saved page 2: ") && saved[1].ends_with("logo_page_2.png"));
}

#[test]
fn test_unavailable_rasterizer_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let options = options_for(dir.path()).with_locale(Locale::En);
    let out_dir = options.output_dir.clone();

    let (outcome, output) = export(options, UnavailableRasterizer);

    assert!(matches!(outcome, ExportOutcome::Failed(Error::Render(_))));
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("PDF conversion error: Rendering error: LoadLibraryError"));
    assert!(lines[1].contains("PDFium"));
    assert!(lines[2].starts_with("Install: "));
    assert!(png_files(&out_dir).is_empty());
}

#[test]
fn test_rerun_overwrites_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    let options = options_for(dir.path());
    let out_dir = options.output_dir.clone();

    fs::create_dir_all(&out_dir).unwrap();
    fs::write(out_dir.join("logo_page_1.png"), b"stale").unwrap();

    let (first, _) = export(options.clone(), CountingRasterizer { pages: 2 });
    let (second, _) = export(options, CountingRasterizer { pages: 2 });

    assert!(matches!(first, ExportOutcome::Exported(_)));
    assert!(matches!(second, ExportOutcome::Exported(_)));
    assert_eq!(png_files(&out_dir).len(), 2);
    assert_eq!(image::open(out_dir.join("logo_page_1.png")).unwrap().width(), 1);
}

#[test]
fn test_missing_input_prints_only_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.pdf");
    let options = ExportOptions::new()
        .with_input(&input)
        .with_output_dir(dir.path().join("out"));

    let (outcome, output) = export(options, CountingRasterizer { pages: 1 });

    assert!(matches!(outcome, ExportOutcome::NotFound));
    assert_eq!(output, format!("ファイルが見つかりません: {}\n", input.display()));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_pdfium_missing_from_library_dir() {
    let dir = tempfile::tempdir().unwrap();
    let options = options_for(dir.path());
    let out_dir = options.output_dir.clone();
    let rasterizer = PdfiumRasterizer::new().with_library_dir(dir.path().join("no-pdfium"));

    let (outcome, output) = export(options, rasterizer);

    assert!(matches!(outcome, ExportOutcome::Failed(_)));
    assert!(output.starts_with("PDF変換エラー: "));
    assert!(output.contains("PDFium"));
    assert!(png_files(&out_dir).is_empty());
}
