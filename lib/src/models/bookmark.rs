use crate::models::category::ALL_CATEGORY;
use crate::{tags, utils};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Thumbnail used when a bookmark is created without one
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/150";

/// A saved link with its metadata and classification.
///
/// Field order here is the serialized order, so JSON exports stay stable.
/// Deserializing is lenient: missing, null or oddly typed fields fall back to
/// defaults instead of failing, so hand-written import files are taken as
/// they come.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    #[serde(default = "utils::new_id", deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default = "default_thumbnail", deserialize_with = "lenient::thumbnail")]
    pub thumbnail: String,
    #[serde(default = "default_category", deserialize_with = "lenient::category")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::tags")]
    pub tags: Vec<String>,
    #[serde(default = "Utc::now", deserialize_with = "lenient::timestamp")]
    pub created_at: DateTime<Utc>,
}

fn default_thumbnail() -> String {
    PLACEHOLDER_THUMBNAIL.to_string()
}

fn default_category() -> String {
    ALL_CATEGORY.to_string()
}

/// Field deserializers that accept any JSON shape
mod lenient {
    use super::{default_category, default_thumbnail};
    use crate::{tags, utils};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Strings as-is, null as `None`, other scalars by their JSON text
    fn raw_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        })
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(raw_text(deserializer)?.unwrap_or_default())
    }

    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(raw_text(deserializer)?.unwrap_or_else(utils::new_id))
    }

    pub fn thumbnail<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(raw_text(deserializer)?.unwrap_or_else(default_thumbnail))
    }

    pub fn category<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(raw_text(deserializer)?.unwrap_or_else(default_category))
    }

    /// An array keeps its string items, a string is split on commas
    pub fn tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            Value::String(joined) => tags::parse_tags(&joined),
            _ => Vec::new(),
        })
    }

    /// RFC 3339 strings or epoch milliseconds; anything else is stamped now
    pub fn timestamp<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let parsed = match Value::deserialize(deserializer)? {
            Value::String(s) => DateTime::parse_from_rfc3339(&s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            Value::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
            _ => None,
        };
        Ok(parsed.unwrap_or_else(Utc::now))
    }
}

impl Bookmark {
    /// Build a new record from a draft, assigning a fresh id and timestamp.
    ///
    /// `placeholder` replaces a missing or blank thumbnail.
    pub fn from_draft(draft: BookmarkDraft, placeholder: &str) -> Self {
        Self {
            id: utils::new_id(),
            url: draft.url,
            title: draft.title,
            description: draft.description,
            thumbnail: resolve_thumbnail(draft.thumbnail, placeholder),
            category: draft.category,
            tags: tags::clean_tags(draft.tags),
            created_at: Utc::now(),
        }
    }

    /// Replace every editable field with the draft's values.
    ///
    /// `id` and `created_at` are left untouched.
    pub fn apply_draft(&mut self, draft: BookmarkDraft, placeholder: &str) {
        self.url = draft.url;
        self.title = draft.title;
        self.description = draft.description;
        self.thumbnail = resolve_thumbnail(draft.thumbnail, placeholder);
        self.category = draft.category;
        self.tags = tags::clean_tags(draft.tags);
    }

    /// Host part of the URL for display, or the raw URL when it has none
    pub fn display_host(&self) -> &str {
        let rest = match self.url.split_once("://") {
            Some((_, rest)) => rest,
            None => return &self.url,
        };
        let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
        let host = host.rsplit('@').next().unwrap_or(host);
        if host.is_empty() {
            &self.url
        } else {
            host
        }
    }
}

fn resolve_thumbnail(thumbnail: Option<String>, placeholder: &str) -> String {
    match thumbnail {
        Some(t) if !t.trim().is_empty() => t,
        _ => placeholder.to_string(),
    }
}

/// Candidate bookmark supplied by a form: everything except id and timestamp
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkDraft {
    pub url: String,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
}

impl BookmarkDraft {
    pub fn new(url: impl Into<String>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Build a draft from raw form fields; `tags` is the comma-joined input.
    pub fn from_form(
        url: &str,
        title: &str,
        description: &str,
        thumbnail: &str,
        category: &str,
        tags: &str,
    ) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            thumbnail: (!thumbnail.is_empty()).then(|| thumbnail.to_string()),
            category: category.to_string(),
            tags: tags::parse_tags(tags),
        }
    }

    /// Names of required fields (`url`, `title`, `category`) that are blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.url.trim().is_empty() {
            missing.push("url");
        }
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.category.trim().is_empty() {
            missing.push("category");
        }
        missing
    }
}

impl From<&Bookmark> for BookmarkDraft {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            url: bookmark.url.clone(),
            title: bookmark.title.clone(),
            description: bookmark.description.clone(),
            thumbnail: Some(bookmark.thumbnail.clone()),
            category: bookmark.category.clone(),
            tags: bookmark.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_from_draft_assigns_identity() {
        let draft = BookmarkDraft::new("https://example.com", "Example", "development")
            .with_tags(["rust", " ", "web "]);
        let bookmark = Bookmark::from_draft(draft, PLACEHOLDER_THUMBNAIL);

        assert!(!bookmark.id.is_empty());
        assert_eq!(bookmark.thumbnail, PLACEHOLDER_THUMBNAIL);
        assert_eq!(bookmark.tags, vec!["rust", "web"]);
        assert_eq!(bookmark.description, "");
    }

    #[test]
    fn test_apply_draft_preserves_id_and_created_at() {
        let mut bookmark = Bookmark::from_draft(
            BookmarkDraft::new("https://a.com", "A", "design"),
            PLACEHOLDER_THUMBNAIL,
        );
        let id = bookmark.id.clone();
        let created_at = bookmark.created_at;

        let draft = BookmarkDraft::new("https://b.com", "B", "social")
            .with_thumbnail("https://b.com/thumb.png");
        bookmark.apply_draft(draft, PLACEHOLDER_THUMBNAIL);

        assert_eq!(bookmark.id, id);
        assert_eq!(bookmark.created_at, created_at);
        assert_eq!(bookmark.url, "https://b.com");
        assert_eq!(bookmark.category, "social");
        assert_eq!(bookmark.thumbnail, "https://b.com/thumb.png");
    }

    #[test]
    fn test_serialization_uses_camel_case_in_order() {
        let bookmark = Bookmark::from_draft(
            BookmarkDraft::new("https://example.com", "Example", "learning"),
            PLACEHOLDER_THUMBNAIL,
        );
        let json = serde_json::to_string(&bookmark).unwrap();

        let keys = [
            "\"id\"",
            "\"url\"",
            "\"title\"",
            "\"description\"",
            "\"thumbnail\"",
            "\"category\"",
            "\"tags\"",
            "\"createdAt\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let bookmark: Bookmark =
            serde_json::from_str(r#"{"url":"https://x.com","title":"X"}"#).unwrap();

        assert!(!bookmark.id.is_empty());
        assert_eq!(bookmark.category, ALL_CATEGORY);
        assert_eq!(bookmark.thumbnail, PLACEHOLDER_THUMBNAIL);
        assert!(bookmark.tags.is_empty());
    }

    #[test]
    fn test_deserialize_tolerates_loose_shapes() {
        let bookmark: Bookmark = serde_json::from_str(
            r#"{"id":7,"title":null,"tags":null,"category":null,"createdAt":1714557600000}"#,
        )
        .unwrap();

        assert_eq!(bookmark.id, "7");
        assert_eq!(bookmark.url, "");
        assert_eq!(bookmark.title, "");
        assert!(bookmark.tags.is_empty());
        assert_eq!(bookmark.category, ALL_CATEGORY);
        assert_eq!(bookmark.created_at.to_rfc3339(), "2024-05-01T10:00:00+00:00");
    }

    #[rstest]
    #[case(r#""rust, web""#, vec!["rust", "web"])]
    #[case(r#"["a", 1, "b", null]"#, vec!["a", "b"])]
    #[case("42", vec![])]
    fn test_deserialize_tag_shapes(#[case] tags: &str, #[case] expected: Vec<&str>) {
        let json = format!(r#"{{"url":"https://x.com","title":"X","tags":{}}}"#, tags);
        let bookmark: Bookmark = serde_json::from_str(&json).unwrap();
        assert_eq!(bookmark.tags, expected);
    }

    #[test]
    fn test_deserialize_unparsable_timestamp_is_stamped_now() {
        let before = Utc::now();
        let bookmark: Bookmark =
            serde_json::from_str(r#"{"url":"https://x.com","createdAt":"yesterday"}"#).unwrap();
        assert!(bookmark.created_at >= before);
    }

    #[test]
    fn test_from_form_splits_tags() {
        let draft = BookmarkDraft::from_form(
            "https://x.com",
            "X",
            "",
            "",
            "development",
            "a, b,,c ",
        );
        assert_eq!(draft.tags, vec!["a", "b", "c"]);
        assert_eq!(draft.thumbnail, None);
    }

    #[rstest]
    #[case("https://example.com/path?q=1", "example.com")]
    #[case("http://user@host.org:8080/", "host.org:8080")]
    #[case("not a url", "not a url")]
    #[case("file:///tmp/x", "file:///tmp/x")]
    fn test_display_host(#[case] url: &str, #[case] expected: &str) {
        let mut bookmark = Bookmark::from_draft(
            BookmarkDraft::new(url, "T", "all"),
            PLACEHOLDER_THUMBNAIL,
        );
        bookmark.url = url.to_string();
        assert_eq!(bookmark.display_host(), expected);
    }

    #[test]
    fn test_missing_fields() {
        let draft = BookmarkDraft::new(" ", "Title", "");
        assert_eq!(draft.missing_fields(), vec!["url", "category"]);
    }
}
