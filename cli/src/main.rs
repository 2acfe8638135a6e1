//! pdfprobe CLI - PDF page text inspection and PNG export

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use pdfprobe::{
    to_json, ExportOptions, ExportOutcome, ImageExporter, InspectOptions, InspectOutcome,
    JsonFormat, Locale, PdfiumRasterizer, TextInspector, DEFAULT_IMAGE_BASE_NAME,
    DEFAULT_OUTPUT_DIR, DEFAULT_PDF_PATH,
};

#[derive(Parser)]
#[command(name = "pdfprobe")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Print PDF page text and export PDF pages as PNG", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the extracted text of every page
    #[command(alias = "check")]
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE", default_value = DEFAULT_PDF_PATH)]
        input: PathBuf,

        /// Output language (ja, en)
        #[arg(long, env = "PDFPROBE_LOCALE", default_value = "ja")]
        locale: Locale,

        /// Also write the inspection report as JSON to this file
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,

        /// Write compact JSON
        #[arg(long, requires = "json")]
        compact: bool,
    },

    /// Write every page as a PNG image
    #[command(alias = "png")]
    Images {
        /// Input PDF file
        #[arg(value_name = "FILE", default_value = DEFAULT_PDF_PATH)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Filename stem of the images (<BASE>_page_<N>.png)
        #[arg(long, value_name = "BASE", default_value = DEFAULT_IMAGE_BASE_NAME)]
        base: String,

        /// Directory containing the PDFium shared library
        #[arg(long, value_name = "DIR", env = "PDFIUM_LIBRARY_DIR")]
        pdfium_dir: Option<PathBuf>,

        /// Output language (ja, en)
        #[arg(long, env = "PDFPROBE_LOCALE", default_value = "ja")]
        locale: Locale,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Text {
            input,
            locale,
            json,
            compact,
        }) => cmd_text(&input, locale, json.as_deref(), compact),
        Some(Commands::Images {
            input,
            output,
            base,
            pdfium_dir,
            locale,
        }) => cmd_images(&input, &output, &base, pdfium_dir.as_deref(), locale),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: pdfprobe <text|images> [FILE]".yellow());
            println!("       pdfprobe --help for more information");
            Ok(())
        }
    };

    // Document problems are reported on stdout by the commands themselves;
    // only failures of stdout or the report file end up here.
    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
    }
}

fn cmd_text(
    input: &Path,
    locale: Locale,
    json: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = InspectOptions::new().with_input(input).with_locale(locale);
    let inspector = TextInspector::new(options);

    let mut stdout = io::stdout().lock();
    let outcome = inspector.inspect(&mut stdout)?;
    stdout.flush()?;

    if let (Some(path), InspectOutcome::Inspected(report)) = (json, &outcome) {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        fs::write(path, to_json(report, format)?)?;
        log::info!("Wrote inspection report to {}", path.display());
    }

    Ok(())
}

fn cmd_images(
    input: &Path,
    output: &Path,
    base: &str,
    pdfium_dir: Option<&Path>,
    locale: Locale,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ExportOptions::new()
        .with_input(input)
        .with_output_dir(output)
        .with_base_name(base)
        .with_locale(locale);
    let rasterizer = match pdfium_dir {
        Some(dir) => PdfiumRasterizer::new().with_library_dir(dir),
        None => PdfiumRasterizer::new(),
    };
    let exporter = ImageExporter::with_rasterizer(options, rasterizer);

    let mut stdout = io::stdout().lock();
    let outcome = exporter.export(&mut stdout)?;
    stdout.flush()?;

    if let ExportOutcome::Exported(paths) = outcome {
        log::info!("Exported {} pages to {}", paths.len(), output.display());
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfprobe".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF page text inspection and PNG export");
    println!();
    println!("Default input: {}", DEFAULT_PDF_PATH.dimmed());
    println!("License: MIT");
}
