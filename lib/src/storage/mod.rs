//! String-keyed snapshot storage.
//!
//! The store writes whole collections under fixed keys after every mutation,
//! so backends only need get/set/remove semantics.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::error::Result;

/// Key holding the JSON array of bookmarks
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Key holding the JSON array of categories
pub const CATEGORIES_KEY: &str = "categories";

/// Backend for persisted snapshots
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}
