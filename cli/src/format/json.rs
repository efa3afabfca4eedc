use linkshelf::error::Result;
use linkshelf::Bookmark;

pub struct JsonBookmark<'a>(pub &'a Bookmark);

impl<'a> JsonBookmark<'a> {
    /// Compact single-line object, for JSON-lines output
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self.0)?)
    }
}

/// Whole listing as one pretty JSON array, same shape as the JSON export
pub fn render_list(records: &[&Bookmark]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
