use super::{CsvDialect, ImportFormat};
use crate::config::Config;
use crate::error::{Result, ShelfError};
use crate::models::{Bookmark, ALL_CATEGORY};
use crate::tags::{self, CSV_TAG_SEPARATOR};
use crate::utils;
use chrono::Utc;
use html_escape::decode_html_entities;

/// Trait for turning import file contents into bookmarks.
///
/// Importers only parse; merging into the collection is the store's job, so a
/// failed parse never leaves a half-applied import behind.
pub trait BookmarkImporter {
    fn parse(&self, content: &str) -> Result<Vec<Bookmark>>;
}

/// Scrapes every `<a>` with a non-empty href and non-empty text.
///
/// Entities in both are decoded, as a browser DOM would.
pub struct HtmlImporter<'a> {
    pub placeholder_thumbnail: &'a str,
}

impl BookmarkImporter for HtmlImporter<'_> {
    fn parse(&self, html: &str) -> Result<Vec<Bookmark>> {
        let dom = tl::parse(html, tl::ParserOptions::default())?;
        let parser = dom.parser();
        let mut bookmarks = Vec::new();

        for node in dom.nodes() {
            let Some(tag) = node.as_tag() else {
                continue;
            };
            if !tag.name().as_utf8_str().eq_ignore_ascii_case("a") {
                continue;
            }

            let href = tag
                .attributes()
                .get("href")
                .or_else(|| tag.attributes().get("HREF"))
                .flatten()
                .map(|h| decode_html_entities(&h.as_utf8_str()).trim().to_string())
                .unwrap_or_default();
            // Whitespace-only text still counts as text; only the stored title is trimmed
            let text = decode_html_entities(&tag.inner_text(parser)).into_owned();

            if href.is_empty() || text.is_empty() {
                continue;
            }
            let title = text.trim().to_string();

            bookmarks.push(Bookmark {
                id: utils::new_id(),
                url: href,
                title,
                description: String::new(),
                thumbnail: self.placeholder_thumbnail.to_string(),
                category: ALL_CATEGORY.to_string(),
                tags: Vec::new(),
                created_at: Utc::now(),
            });
        }

        Ok(bookmarks)
    }
}

/// Reads a JSON array of bookmark-shaped objects, taken as-is.
///
/// Only a payload that fails to parse or whose root is not an array is
/// rejected. Fields are not validated; elements that are not objects are
/// skipped.
pub struct JsonImporter;

impl BookmarkImporter for JsonImporter {
    fn parse(&self, content: &str) -> Result<Vec<Bookmark>> {
        let mut bytes = content.as_bytes().to_vec();
        let value: serde_json::Value = simd_json::serde::from_slice(&mut bytes)
            .map_err(|e| ShelfError::InvalidImportPayload(e.to_string()))?;

        let serde_json::Value::Array(items) = value else {
            return Err(ShelfError::InvalidImportPayload(
                "root value is not an array".to_string(),
            ));
        };

        let mut bookmarks = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            if !item.is_object() {
                log::debug!("Skipping JSON element {}: not an object", index);
                continue;
            }
            match serde_json::from_value::<Bookmark>(item) {
                Ok(bookmark) => bookmarks.push(bookmark),
                Err(e) => log::debug!("Skipping JSON element {}: {}", index, e),
            }
        }
        Ok(bookmarks)
    }
}

/// Positional CSV: `url,title,description,thumbnail,category,tags`.
///
/// The first line is a header and is never mapped. Lines with one field or
/// fewer are skipped.
pub struct CsvImporter<'a> {
    pub placeholder_thumbnail: &'a str,
    pub dialect: CsvDialect,
}

impl CsvImporter<'_> {
    fn parse_legacy(&self, content: &str) -> Vec<Bookmark> {
        content
            .split('\n')
            .enumerate()
            .skip(1)
            .filter_map(|(index, raw)| {
                let line = raw.strip_suffix('\r').unwrap_or(raw);
                let fields: Vec<&str> = line.split(',').collect();
                self.record_or_skip(&fields, index + 1)
            })
            .collect()
    }

    fn parse_quoted(&self, content: &str) -> Result<Vec<Bookmark>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::None)
            .from_reader(content.as_bytes());

        let mut bookmarks = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result?;
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(index + 2);
            let fields: Vec<&str> = record.iter().collect();
            if let Some(bookmark) = self.record_or_skip(&fields, line) {
                bookmarks.push(bookmark);
            }
        }
        Ok(bookmarks)
    }

    fn record_or_skip(&self, fields: &[&str], line: usize) -> Option<Bookmark> {
        match self.record_from_fields(fields, line) {
            Ok(bookmark) => Some(bookmark),
            Err(e) => {
                log::debug!("Skipping CSV input: {}", e);
                None
            }
        }
    }

    fn record_from_fields(&self, fields: &[&str], line: usize) -> Result<Bookmark> {
        if fields.len() <= 1 {
            return Err(ShelfError::MalformedImportLine {
                line,
                reason: format!("expected more than one field, found {}", fields.len()),
            });
        }

        let field = |i: usize| fields.get(i).copied().unwrap_or("");
        let or_default = |value: &str, default: &str| {
            if value.is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        };

        Ok(Bookmark {
            id: utils::new_id(),
            url: field(0).to_string(),
            title: field(1).to_string(),
            description: field(2).to_string(),
            thumbnail: or_default(field(3), self.placeholder_thumbnail),
            category: or_default(field(4), ALL_CATEGORY),
            tags: tags::split_tags(field(5), CSV_TAG_SEPARATOR),
            created_at: Utc::now(),
        })
    }
}

impl BookmarkImporter for CsvImporter<'_> {
    fn parse(&self, content: &str) -> Result<Vec<Bookmark>> {
        match self.dialect {
            CsvDialect::Legacy => Ok(self.parse_legacy(content)),
            CsvDialect::Quoted => self.parse_quoted(content),
        }
    }
}

/// Parse `content` in the given format using the configured defaults
pub fn parse_bookmarks(format: ImportFormat, content: &str, config: &Config) -> Result<Vec<Bookmark>> {
    let placeholder = config.placeholder_thumbnail.as_str();
    let importer: Box<dyn BookmarkImporter + '_> = match format {
        ImportFormat::Html => Box::new(HtmlImporter {
            placeholder_thumbnail: placeholder,
        }),
        ImportFormat::Json => Box::new(JsonImporter),
        ImportFormat::Csv => Box::new(CsvImporter {
            placeholder_thumbnail: placeholder,
            dialect: config.csv_dialect,
        }),
    };
    importer.parse(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PLACEHOLDER_THUMBNAIL;
    use rstest::rstest;

    fn legacy() -> CsvImporter<'static> {
        CsvImporter {
            placeholder_thumbnail: PLACEHOLDER_THUMBNAIL,
            dialect: CsvDialect::Legacy,
        }
    }

    fn quoted() -> CsvImporter<'static> {
        CsvImporter {
            placeholder_thumbnail: PLACEHOLDER_THUMBNAIL,
            dialect: CsvDialect::Quoted,
        }
    }

    #[test]
    fn test_html_anchor_scrape() {
        let html = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
            <DL><p>
            <DT><A HREF="https://www.rust-lang.org/" ADD_DATE="0">Rust</A>
            <DT><a href="https://docs.rs">  Docs.rs </a>
            <DT><a href="">Empty href</a>
            <DT><a href="https://no-text.example"></a>
            <DT><a name="anchor-only">No href</a>
            </DL><p>"#;

        let importer = HtmlImporter {
            placeholder_thumbnail: PLACEHOLDER_THUMBNAIL,
        };
        let bookmarks = importer.parse(html).unwrap();

        assert_eq!(bookmarks.len(), 2);
        assert_eq!(bookmarks[0].url, "https://www.rust-lang.org/");
        assert_eq!(bookmarks[0].title, "Rust");
        assert_eq!(bookmarks[1].title, "Docs.rs");
        for b in &bookmarks {
            assert_eq!(b.category, ALL_CATEGORY);
            assert!(b.tags.is_empty());
            assert_eq!(b.description, "");
            assert_eq!(b.thumbnail, PLACEHOLDER_THUMBNAIL);
        }
        assert_ne!(bookmarks[0].id, bookmarks[1].id);
    }

    #[test]
    fn test_html_decodes_entities() {
        let html = r#"<a href="https://x.com/?a=1&amp;b=2">Tom &amp; Jerry</a>"#;
        let bookmarks = HtmlImporter {
            placeholder_thumbnail: PLACEHOLDER_THUMBNAIL,
        }
        .parse(html)
        .unwrap();

        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].url, "https://x.com/?a=1&b=2");
        assert_eq!(bookmarks[0].title, "Tom & Jerry");
    }

    #[test]
    fn test_html_whitespace_text_is_imported() {
        let html = r#"<a href="https://blank.example">   </a>"#;
        let bookmarks = HtmlImporter {
            placeholder_thumbnail: PLACEHOLDER_THUMBNAIL,
        }
        .parse(html)
        .unwrap();

        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].url, "https://blank.example");
        assert_eq!(bookmarks[0].title, "");
    }

    #[test]
    fn test_json_array_kept_verbatim() {
        let json = r#"[
            {"id":"abc","url":"https://x.com","title":"X","description":"d",
             "thumbnail":"t","category":"design","tags":["a"],
             "createdAt":"2024-05-01T10:00:00.000Z"}
        ]"#;
        let bookmarks = JsonImporter.parse(json).unwrap();

        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].id, "abc");
        assert_eq!(bookmarks[0].category, "design");
        assert_eq!(
            bookmarks[0].created_at.to_rfc3339(),
            "2024-05-01T10:00:00+00:00"
        );
    }

    #[test]
    fn test_json_elements_are_not_validated() {
        let json = r#"[
            {"id":"1","title":"no url"},
            {"url":"https://x.com","title":"X","tags":null},
            {"url":"https://y.com","title":"Y","createdAt":1714557600000},
            5,
            "text"
        ]"#;
        let bookmarks = JsonImporter.parse(json).unwrap();

        assert_eq!(bookmarks.len(), 3);
        assert_eq!(bookmarks[0].id, "1");
        assert_eq!(bookmarks[0].url, "");
        assert_eq!(bookmarks[0].title, "no url");
        assert!(bookmarks[1].tags.is_empty());
        assert_eq!(
            bookmarks[2].created_at.to_rfc3339(),
            "2024-05-01T10:00:00+00:00"
        );
    }

    #[rstest]
    #[case("{not an array}")]
    #[case(r#"{"url":"https://x.com","title":"X"}"#)]
    #[case("")]
    #[case("[{\"url\": ")]
    fn test_json_rejected(#[case] content: &str) {
        let err = JsonImporter.parse(content).unwrap_err();
        assert!(matches!(err, ShelfError::InvalidImportPayload(_)));
    }

    #[test]
    fn test_legacy_csv_positional_mapping() {
        let csv = "URL,Title\nhttps://a.com,A,,,development,x;y\n";
        let bookmarks = legacy().parse(csv).unwrap();

        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].url, "https://a.com");
        assert_eq!(bookmarks[0].title, "A");
        assert_eq!(bookmarks[0].tags, vec!["x", "y"]);
        assert_eq!(bookmarks[0].category, "development");
        assert_eq!(bookmarks[0].thumbnail, PLACEHOLDER_THUMBNAIL);
    }

    #[test]
    fn test_legacy_csv_defaults_and_skips() {
        let csv = "header\nhttps://b.com,B\nonly-one-field\n\r\nhttps://c.com,C,desc,thumb.png\r\n";
        let bookmarks = legacy().parse(csv).unwrap();

        assert_eq!(bookmarks.len(), 2);
        assert_eq!(bookmarks[0].category, ALL_CATEGORY);
        assert!(bookmarks[0].tags.is_empty());
        assert_eq!(bookmarks[1].description, "desc");
        assert_eq!(bookmarks[1].thumbnail, "thumb.png");
    }

    #[test]
    fn test_legacy_csv_splits_embedded_commas() {
        let csv = "h\nhttps://a.com,Hello, world,desc\n";
        let bookmarks = legacy().parse(csv).unwrap();

        assert_eq!(bookmarks[0].title, "Hello");
        assert_eq!(bookmarks[0].description, " world");
    }

    #[test]
    fn test_legacy_csv_header_only() {
        assert!(legacy().parse("URL,Title").unwrap().is_empty());
        assert!(legacy().parse("").unwrap().is_empty());
    }

    #[test]
    fn test_quoted_csv_keeps_embedded_commas() {
        let csv = "URL,Title,Description,Thumbnail,Category,Tags\n\
                   https://a.com,\"Hello, world\",,,learning,\"a,b;c\"\n\
                   lonely\n";
        let bookmarks = quoted().parse(csv).unwrap();

        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks[0].title, "Hello, world");
        assert_eq!(bookmarks[0].tags, vec!["a,b", "c"]);
        assert_eq!(bookmarks[0].category, "learning");
    }

    #[test]
    fn test_record_from_fields_reports_line() {
        let err = legacy().record_from_fields(&["solo"], 7).unwrap_err();
        assert!(matches!(err, ShelfError::MalformedImportLine { line: 7, .. }));
    }

    #[test]
    fn test_parse_bookmarks_dispatch() {
        let config = Config::default();
        let bookmarks = parse_bookmarks(
            ImportFormat::Csv,
            "h\nhttps://a.com,A\n",
            &config,
        )
        .unwrap();
        assert_eq!(bookmarks.len(), 1);
    }
}
