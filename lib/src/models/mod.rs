pub mod bookmark;
pub mod category;

pub use bookmark::{Bookmark, BookmarkDraft, PLACEHOLDER_THUMBNAIL};
pub use category::{seed_categories, Category, ALL_CATEGORY, DEFAULT_CATEGORY_ICON};
