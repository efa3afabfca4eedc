use chrono::Local;
use linkshelf::{Bookmark, CategoryCount};
use owo_colors::OwoColorize;

pub trait Colorize {
    fn to_colored(&self) -> String;
}

pub struct ColorizeBookmark<'a>(pub &'a Bookmark);

impl<'a> ColorizeBookmark<'a> {
    /// Grid view row: id, title, host, category
    pub fn to_colored_row(&self) -> String {
        let b = self.0;
        format!(
            "{}  {:<30}  {:<14}  {}",
            b.id.bright_blue(),
            b.title.bold().green(),
            b.display_host().yellow(),
            b.category.cyan()
        )
    }
}

impl<'a> Colorize for ColorizeBookmark<'a> {
    fn to_colored(&self) -> String {
        let b = self.0;
        let mut s = String::new();
        s.push_str(&format!("{} [{}]\n", b.title.bold().green(), b.id.bright_blue()));
        s.push_str(&format!("   {} {}\n", ">".red(), b.url.yellow()));

        // Only show description if non-empty
        if !b.description.trim().is_empty() {
            s.push_str(&format!("   {} {}\n", "+".red(), b.description));
        }

        if !b.tags.is_empty() {
            s.push_str(&format!("   {} {}\n", "#".red(), b.tags.join(", ").blue()));
        }

        s.push_str(&format!(
            "   {} {} | {}\n",
            "@".red(),
            b.category.cyan(),
            b.created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .dimmed()
        ));
        s
    }
}

pub struct ColorizeCategory<'a>(pub &'a CategoryCount);

impl<'a> Colorize for ColorizeCategory<'a> {
    fn to_colored(&self) -> String {
        let c = self.0;
        format!(
            "{:<16} {:<24} {}",
            c.id.bright_blue(),
            c.name.bold(),
            format!("({})", c.count).dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkshelf::BookmarkDraft;

    fn bookmark(description: &str, tags: &[&str]) -> Bookmark {
        Bookmark::from_draft(
            BookmarkDraft::new("https://rust-lang.org", "Rust Programming Language", "learning")
                .with_description(description)
                .with_tags(tags.iter().copied()),
            "https://placeholder",
        )
    }

    #[test]
    fn test_colorize_bookmark_with_tags() {
        let b = bookmark("Official site", &["rust", "testing"]);
        let colorized = ColorizeBookmark(&b).to_colored();

        assert!(colorized.contains("rust, testing"));
        assert!(colorized.contains('#'));
    }

    #[test]
    fn test_colorize_bookmark_without_tags_or_description() {
        let b = bookmark("", &[]);
        let colorized = ColorizeBookmark(&b).to_colored();

        let lines: Vec<&str> = colorized.lines().collect();
        assert!(!lines.iter().any(|line| line.contains(" # ")));
        assert!(!lines.iter().any(|line| line.contains(" + ")));
    }

    #[test]
    fn test_colorize_output_structure() {
        let b = bookmark("Official Rust website", &["rust", "programming"]);
        let colorized = ColorizeBookmark(&b).to_colored();
        let lines: Vec<&str> = colorized.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("Rust Programming Language"));
        assert!(lines[0].contains(&b.id));
        assert!(lines[1].contains("https://rust-lang.org"));
        assert!(lines[2].contains("Official Rust website"));
        assert!(lines[3].contains("programming"));
        assert!(lines[4].contains("learning"));
    }

    #[test]
    fn test_colorize_row_contains_host() {
        let b = bookmark("", &[]);
        let row = ColorizeBookmark(&b).to_colored_row();

        assert!(row.contains("rust-lang.org"));
        assert!(!row.contains('\n'));
    }

    #[test]
    fn test_colorize_category() {
        let count = CategoryCount {
            id: "design".to_string(),
            name: "Design Inspiration".to_string(),
            icon: "paint-brush".to_string(),
            count: 3,
        };
        let out = ColorizeCategory(&count).to_colored();

        assert!(out.contains("design"));
        assert!(out.contains("Design Inspiration"));
        assert!(out.contains("(3)"));
    }
}
