pub mod config;
pub mod error;
pub mod import_export;
pub mod models;
pub mod storage;
pub mod store;
pub mod tags;
pub mod utils;

// Re-export the types most callers need
pub use error::{Result, ShelfError};
pub use import_export::{CsvDialect, ExportArtifact, ExportFormat, ImportFormat};
pub use models::{Bookmark, BookmarkDraft, Category};
pub use store::{BookmarkStore, CategoryCount};
