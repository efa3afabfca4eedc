/// Separator used by the add/edit form
pub const FORM_TAG_SEPARATOR: char = ',';

/// Separator used inside the CSV tags column
pub const CSV_TAG_SEPARATOR: char = ';';

/// Split `input` on `separator`, trimming and dropping empty entries
pub fn split_tags(input: &str, separator: char) -> Vec<String> {
    input
        .split(separator)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Parse comma-separated tags as typed into the form
pub fn parse_tags(tags_str: &str) -> Vec<String> {
    split_tags(tags_str, FORM_TAG_SEPARATOR)
}

/// Trim every tag and drop the ones left empty
pub fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .filter_map(|t| {
            let trimmed = t.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}
