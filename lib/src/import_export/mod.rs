pub mod export;
pub mod import;

pub use export::{export_bookmarks, export_file_name, ExportArtifact, CSV_HEADER};
pub use import::{parse_bookmarks, BookmarkImporter, CsvImporter, HtmlImporter, JsonImporter};

use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// CSV grammar used on import and export.
///
/// `Legacy` splits on bare commas and never quotes, so values containing a
/// comma or semicolon do not survive a round-trip. `Quoted` follows RFC 4180
/// quoting with the same column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvDialect {
    #[default]
    Legacy,
    Quoted,
}

impl FromStr for CsvDialect {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "quoted" => Ok(Self::Quoted),
            other => Err(ShelfError::UnsupportedFormat(format!("csv dialect '{}'", other))),
        }
    }
}

/// Formats accepted by `import_from`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    /// Anchor scrape of an HTML document
    Html,
    /// JSON array of bookmark-shaped objects
    Json,
    /// Positional CSV with a header line
    Csv,
}

impl ImportFormat {
    /// Pick the format from a file extension (without the dot)
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ShelfError::UnsupportedFormat(format!(
                "cannot import '.{}' files",
                other
            ))),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(extension)
    }
}

impl FromStr for ImportFormat {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s.trim())
    }
}

/// Formats produced by `export_as`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv; charset=utf-8",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ShelfError::UnsupportedFormat(format!(
                "cannot export as '{}'",
                other
            ))),
        }
    }
}
