//! The bookmark store: in-memory collection plus its persisted snapshots.
//!
//! The in-memory lists are the source of truth. After each mutation the whole
//! affected list is written back through the [`KeyValueStore`]; a failed write
//! keeps the in-memory change and is reported as [`ShelfError::Persistence`].

use crate::config::Config;
use crate::error::{Result, ShelfError};
use crate::import_export::{self, ExportArtifact, ExportFormat, ImportFormat};
use crate::models::{seed_categories, Bookmark, BookmarkDraft, Category, ALL_CATEGORY};
use crate::storage::{KeyValueStore, MemoryStorage, BOOKMARKS_KEY, CATEGORIES_KEY};
use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;

/// Entry of the category sidebar: a category and how many bookmarks it holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub count: usize,
}

pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
    categories: Vec<Category>,
    storage: Box<dyn KeyValueStore>,
    config: Config,
}

impl BookmarkStore {
    /// Load the persisted snapshots from `storage`.
    ///
    /// Missing keys start from an empty collection and the seed categories.
    pub fn open(storage: Box<dyn KeyValueStore>, config: Config) -> Result<Self> {
        let bookmarks: Vec<Bookmark> = load_snapshot(storage.as_ref(), BOOKMARKS_KEY)?
            .unwrap_or_default();
        let categories = load_snapshot(storage.as_ref(), CATEGORIES_KEY)?
            .unwrap_or_else(seed_categories);

        log::debug!(
            "Loaded {} bookmark(s) and {} categories",
            bookmarks.len(),
            categories.len()
        );

        Ok(Self {
            bookmarks,
            categories,
            storage,
            config,
        })
    }

    /// Fresh store over non-durable storage
    pub fn in_memory(config: Config) -> Self {
        Self {
            bookmarks: Vec::new(),
            categories: seed_categories(),
            storage: Box::new(MemoryStorage::new()),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// All bookmarks in insertion order
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    /// Like [`get`](Self::get), but a missing id is an error
    pub fn require(&self, id: &str) -> Result<&Bookmark> {
        self.get(id)
            .ok_or_else(|| ShelfError::UnknownRecordReference(id.to_string()))
    }

    /// Append a new bookmark and persist. Returns the assigned id.
    ///
    /// Fields are stored as given; validating required fields is up to the
    /// caller.
    pub fn add(&mut self, draft: BookmarkDraft) -> Result<String> {
        let bookmark = Bookmark::from_draft(draft, &self.config.placeholder_thumbnail);
        let id = bookmark.id.clone();
        log::debug!("Adding bookmark {} ({})", id, bookmark.url);

        self.bookmarks.push(bookmark);
        self.save_bookmarks()?;
        Ok(id)
    }

    /// Replace every editable field of bookmark `id`.
    ///
    /// Returns `Ok(false)` without touching anything when `id` is unknown.
    pub fn edit(&mut self, id: &str, draft: BookmarkDraft) -> Result<bool> {
        let placeholder = self.config.placeholder_thumbnail.clone();
        let Some(bookmark) = self.bookmarks.iter_mut().find(|b| b.id == id) else {
            log::debug!("Edit ignored: no bookmark with id {}", id);
            return Ok(false);
        };

        bookmark.apply_draft(draft, &placeholder);
        self.save_bookmarks()?;
        Ok(true)
    }

    /// Remove bookmark `id`. Returns `Ok(false)` when it was not present.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id != id);

        if self.bookmarks.len() == before {
            log::debug!("Delete ignored: no bookmark with id {}", id);
            return Ok(false);
        }

        self.save_bookmarks()?;
        Ok(true)
    }

    /// Bookmarks whose category is `category_id`, or all of them for `"all"`
    pub fn list_by_category(&self, category_id: &str) -> Vec<&Bookmark> {
        if category_id == ALL_CATEGORY {
            return self.bookmarks.iter().collect();
        }
        self.bookmarks
            .iter()
            .filter(|b| b.category == category_id)
            .collect()
    }

    pub fn count_by_category(&self, category_id: &str) -> usize {
        if category_id == ALL_CATEGORY {
            return self.bookmarks.len();
        }
        self.bookmarks
            .iter()
            .filter(|b| b.category == category_id)
            .count()
    }

    /// Live counts for the category list: `all` first, then each category
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        let all = CategoryCount {
            id: ALL_CATEGORY.to_string(),
            name: "All".to_string(),
            icon: "bookmark".to_string(),
            count: self.bookmarks.len(),
        };

        std::iter::once(all)
            .chain(self.categories.iter().map(|c| CategoryCount {
                id: c.id.clone(),
                name: c.name.clone(),
                icon: c.icon.clone(),
                count: self.count_by_category(&c.id),
            }))
            .collect()
    }

    /// Append a category whose id is derived from `name`.
    ///
    /// Ids are not checked against existing categories, so two names that
    /// slugify the same produce duplicate ids.
    pub fn add_category(&mut self, name: &str) -> Result<Category> {
        let category = Category::from_name(name, &self.config.default_category_icon);
        log::debug!("Adding category {} ({})", category.id, category.name);

        self.categories.push(category.clone());
        self.save_categories()?;
        Ok(category)
    }

    /// Parse `content` and append the result. Returns the number appended.
    ///
    /// Parsing happens before anything is merged, so a rejected payload leaves
    /// the collection unchanged.
    pub fn import_from(&mut self, format: ImportFormat, content: &str) -> Result<usize> {
        let imported = import_export::parse_bookmarks(format, content, &self.config)?;
        let count = imported.len();

        self.bookmarks.extend(imported);
        self.save_bookmarks()?;
        log::info!("Imported {} bookmark(s) as {:?}", count, format);
        Ok(count)
    }

    /// Render the whole collection, named after today's date
    pub fn export_as(&self, format: ExportFormat) -> Result<ExportArtifact> {
        self.export_as_of(format, Utc::now().date_naive())
    }

    /// Render the whole collection, named after `date`
    pub fn export_as_of(&self, format: ExportFormat, date: NaiveDate) -> Result<ExportArtifact> {
        let artifact = import_export::export_bookmarks(
            &self.bookmarks,
            format,
            self.config.csv_dialect,
            date,
        )?;
        log::info!(
            "Exported {} bookmark(s) to {}",
            self.bookmarks.len(),
            artifact.file_name
        );
        Ok(artifact)
    }

    /// Drop every bookmark, restore the seed categories and wipe both keys
    pub fn clear_all(&mut self) -> Result<()> {
        self.bookmarks.clear();
        self.categories = seed_categories();

        for key in [BOOKMARKS_KEY, CATEGORIES_KEY] {
            self.storage
                .remove(key)
                .map_err(|e| persistence_error("remove", key, e))?;
        }
        Ok(())
    }

    fn save_bookmarks(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.bookmarks)?;
        self.write_snapshot(BOOKMARKS_KEY, &json)
    }

    fn save_categories(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.categories)?;
        self.write_snapshot(CATEGORIES_KEY, &json)
    }

    fn write_snapshot(&mut self, key: &str, json: &str) -> Result<()> {
        self.storage
            .set(key, json)
            .map_err(|e| persistence_error("write", key, e))
    }
}

fn persistence_error(action: &str, key: &str, err: ShelfError) -> ShelfError {
    log::warn!("Failed to {} '{}' snapshot: {}", action, key, err);
    ShelfError::Persistence(format!("failed to {} '{}': {}", action, key, err))
}

fn load_snapshot<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = storage
        .get(key)
        .map_err(|e| persistence_error("read", key, e))?
    else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| ShelfError::Persistence(format!("corrupt '{}' snapshot: {}", key, e)))
}
