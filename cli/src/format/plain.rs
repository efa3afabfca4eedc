use crate::format::traits::BookmarkFormat;
use chrono::Local;
use linkshelf::Bookmark;

/// Uncolored counterpart of the detailed list view
pub struct PlainBookmark<'a>(pub &'a Bookmark);

impl<'a> BookmarkFormat for PlainBookmark<'a> {
    fn to_string(&self) -> String {
        let b = self.0;
        let mut s = format!("{} [{}]\n", b.title, b.id);
        s.push_str(&format!("   > {}\n", b.url));
        if !b.description.trim().is_empty() {
            s.push_str(&format!("   + {}\n", b.description));
        }
        if !b.tags.is_empty() {
            s.push_str(&format!("   # {}\n", b.tags.join(", ")));
        }
        s.push_str(&format!(
            "   @ {} | {}\n",
            b.category,
            b.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ));
        s
    }
}

/// One line per bookmark: title, host and category
pub struct GridBookmark<'a>(pub &'a Bookmark);

impl<'a> BookmarkFormat for GridBookmark<'a> {
    fn to_string(&self) -> String {
        let b = self.0;
        format!("{:<36}  {:<30}  {:<14}  {}", b.id, b.title, b.display_host(), b.category)
    }
}
