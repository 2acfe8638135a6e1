//! Localized console messages.
//!
//! Both components print a fixed set of lines. The wording lives here so the
//! inspection and export code only decides *which* line to print.

use std::fmt::Display;
use std::str::FromStr;

/// Language of the console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Japanese
    #[default]
    Ja,
    /// English
    En,
}

impl Locale {
    /// Message table for this locale.
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Ja => &JA,
            Locale::En => &EN,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "ja-jp" | "ja_jp" => Ok(Locale::Ja),
            "en" | "en-us" | "en_us" | "en-gb" | "en_gb" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

/// Fixed strings for one locale. Formatting of the variable parts is done by
/// the methods below.
#[derive(Debug)]
pub struct Messages {
    file_label: &'static str,
    page_count_label: &'static str,
    image_count_label: &'static str,
    not_found: &'static str,
    page_header: (&'static str, &'static str),
    no_text: &'static str,
    extract_error: &'static str,
    load_error: &'static str,
    saved: (&'static str, &'static str, &'static str),
    convert_error: &'static str,
    dependency_note: &'static str,
    dependency_install: &'static str,
}

static JA: Messages = Messages {
    file_label: "PDFファイル",
    page_count_label: "ページ数",
    image_count_label: "変換された画像数",
    not_found: "ファイルが見つかりません",
    page_header: ("ページ ", ":"),
    no_text: "(テキストなし - 画像のみの可能性)",
    extract_error: "テキスト抽出エラー",
    load_error: "PDFファイルの読み込みエラー",
    saved: ("ページ ", " を保存", ": "),
    convert_error: "PDF変換エラー",
    dependency_note: "注意: ページの画像変換にはPDFiumライブラリ (libpdfium) が必要です",
    dependency_install:
        "インストール: https://github.com/bblanchon/pdfium-binaries からlibpdfiumを取得し、--pdfium-dir または PDFIUM_LIBRARY_DIR で配置先を指定してください",
};

static EN: Messages = Messages {
    file_label: "PDF file",
    page_count_label: "Pages",
    image_count_label: "Converted images",
    not_found: "File not found",
    page_header: ("Page ", ":"),
    no_text: "(no text - the page is likely image-only)",
    extract_error: "Text extraction error",
    load_error: "Failed to read PDF file",
    saved: ("Saved page ", "", ": "),
    convert_error: "PDF conversion error",
    dependency_note: "Note: converting pages to images requires the PDFium library (libpdfium)",
    dependency_install:
        "Install: download libpdfium from https://github.com/bblanchon/pdfium-binaries and point --pdfium-dir or PDFIUM_LIBRARY_DIR at its directory",
};

impl Messages {
    pub fn file(&self, path: impl Display) -> String {
        format!("{}: {}", self.file_label, path)
    }

    pub fn page_count(&self, count: usize) -> String {
        format!("{}: {}", self.page_count_label, count)
    }

    pub fn image_count(&self, count: usize) -> String {
        format!("{}: {}", self.image_count_label, count)
    }

    pub fn not_found(&self, path: impl Display) -> String {
        format!("{}: {}", self.not_found, path)
    }

    /// 1-based page header.
    pub fn page_header(&self, number: u32) -> String {
        format!("{}{}{}", self.page_header.0, number, self.page_header.1)
    }

    pub fn no_text(&self) -> &'static str {
        self.no_text
    }

    pub fn extract_error(&self, detail: impl Display) -> String {
        format!("{}: {}", self.extract_error, detail)
    }

    pub fn load_error(&self, detail: impl Display) -> String {
        format!("{}: {}", self.load_error, detail)
    }

    pub fn saved(&self, number: u32, path: impl Display) -> String {
        format!(
            "{}{}{}{}{}",
            self.saved.0, number, self.saved.1, self.saved.2, path
        )
    }

    pub fn convert_error(&self, detail: impl Display) -> String {
        format!("{}: {}", self.convert_error, detail)
    }

    /// Two lines: what is missing, then how to install it.
    pub fn dependency_hint(&self) -> [&'static str; 2] {
        [self.dependency_note, self.dependency_install]
    }
}
