use super::{CsvDialect, ExportFormat};
use crate::error::{Result, ShelfError};
use crate::models::Bookmark;
use crate::tags::CSV_TAG_SEPARATOR;
use chrono::{NaiveDate, SecondsFormat};

/// Header row written by every CSV export
pub const CSV_HEADER: [&str; 7] = [
    "URL",
    "Title",
    "Description",
    "Thumbnail",
    "Category",
    "Tags",
    "CreatedAt",
];

/// A rendered export, ready to be written or offered as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub content: String,
}

/// Trait for rendering the collection into an export format
pub trait BookmarkExporter {
    fn render(&self, bookmarks: &[Bookmark]) -> Result<String>;
}

/// Pretty-printed JSON array, two-space indent
pub struct JsonExporter;

impl BookmarkExporter for JsonExporter {
    fn render(&self, bookmarks: &[Bookmark]) -> Result<String> {
        Ok(serde_json::to_string_pretty(bookmarks)?)
    }
}

/// Header plus one row per bookmark, tags joined with `;`
pub struct CsvExporter {
    pub dialect: CsvDialect,
}

fn csv_row(bookmark: &Bookmark) -> [String; 7] {
    let separator = CSV_TAG_SEPARATOR.to_string();
    [
        bookmark.url.clone(),
        bookmark.title.clone(),
        bookmark.description.clone(),
        bookmark.thumbnail.clone(),
        bookmark.category.clone(),
        bookmark.tags.join(separator.as_str()),
        bookmark
            .created_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    ]
}

impl BookmarkExporter for CsvExporter {
    fn render(&self, bookmarks: &[Bookmark]) -> Result<String> {
        match self.dialect {
            CsvDialect::Legacy => {
                // No quoting: commas inside values shift columns on re-import
                let mut lines = Vec::with_capacity(bookmarks.len() + 1);
                lines.push(CSV_HEADER.join(","));
                lines.extend(bookmarks.iter().map(|b| csv_row(b).join(",")));
                Ok(lines.join("\n"))
            }
            CsvDialect::Quoted => {
                let mut writer = csv::Writer::from_writer(vec![]);
                writer.write_record(CSV_HEADER)?;
                for bookmark in bookmarks {
                    writer.write_record(csv_row(bookmark))?;
                }
                let bytes = writer
                    .into_inner()
                    .map_err(|e| ShelfError::Csv(e.to_string()))?;
                String::from_utf8(bytes).map_err(|e| ShelfError::Csv(e.to_string()))
            }
        }
    }
}

/// `bookmarks-<YYYY-MM-DD>.<ext>`
pub fn export_file_name(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "bookmarks-{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Render `bookmarks` and name the artifact after `date`
pub fn export_bookmarks(
    bookmarks: &[Bookmark],
    format: ExportFormat,
    dialect: CsvDialect,
    date: NaiveDate,
) -> Result<ExportArtifact> {
    let exporter: Box<dyn BookmarkExporter> = match format {
        ExportFormat::Json => Box::new(JsonExporter),
        ExportFormat::Csv => Box::new(CsvExporter { dialect }),
    };

    Ok(ExportArtifact {
        file_name: export_file_name(format, date),
        content_type: format.content_type(),
        content: exporter.render(bookmarks)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample() -> Bookmark {
        Bookmark {
            id: "id-1".to_string(),
            url: "https://example.com".to_string(),
            title: "Example".to_string(),
            description: "A test".to_string(),
            thumbnail: "https://example.com/t.png".to_string(),
            category: "development".to_string(),
            tags: vec!["rust".to_string(), "web".to_string()],
            created_at: Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).unwrap(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn test_json_export_is_pretty() {
        let artifact =
            export_bookmarks(&[sample()], ExportFormat::Json, CsvDialect::Legacy, date()).unwrap();

        assert_eq!(artifact.file_name, "bookmarks-2024-03-10.json");
        assert_eq!(artifact.content_type, "application/json");
        assert!(artifact.content.starts_with("[\n  {\n    \"id\": \"id-1\""));
        assert!(artifact.content.contains("\"createdAt\""));
    }

    #[test]
    fn test_legacy_csv_export() {
        let artifact =
            export_bookmarks(&[sample()], ExportFormat::Csv, CsvDialect::Legacy, date()).unwrap();

        assert_eq!(artifact.file_name, "bookmarks-2024-03-10.csv");
        let lines: Vec<&str> = artifact.content.lines().collect();
        assert_eq!(lines[0], "URL,Title,Description,Thumbnail,Category,Tags,CreatedAt");
        assert_eq!(
            lines[1],
            "https://example.com,Example,A test,https://example.com/t.png,development,rust;web,2024-03-09T08:30:00.000Z"
        );
    }

    #[test]
    fn test_legacy_csv_does_not_quote() {
        let mut bookmark = sample();
        bookmark.title = "Hello, world".to_string();
        let content = CsvExporter {
            dialect: CsvDialect::Legacy,
        }
        .render(&[bookmark])
        .unwrap();

        assert!(content.contains(",Hello, world,"));
    }

    #[test]
    fn test_quoted_csv_export() {
        let mut bookmark = sample();
        bookmark.title = "Hello, world".to_string();
        let content = CsvExporter {
            dialect: CsvDialect::Quoted,
        }
        .render(&[bookmark])
        .unwrap();

        assert!(content.contains("\"Hello, world\""));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_empty_exports() {
        let json = JsonExporter.render(&[]).unwrap();
        assert_eq!(json, "[]");

        let csv = CsvExporter {
            dialect: CsvDialect::Legacy,
        }
        .render(&[])
        .unwrap();
        assert_eq!(csv, CSV_HEADER.join(","));
    }
}
