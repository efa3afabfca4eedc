use crate::utils;
use serde::{Deserialize, Serialize};

/// Sentinel category id that matches every bookmark
pub const ALL_CATEGORY: &str = "all";

/// Icon given to categories added at runtime
pub const DEFAULT_CATEGORY_ICON: &str = "folder";

/// A grouping label shown in the category list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// Derive the id from the display name (see [`utils::slugify`])
    pub fn from_name(name: &str, icon: &str) -> Self {
        Self::new(utils::slugify(name), name, icon)
    }
}

/// The five categories every fresh store starts with
pub fn seed_categories() -> Vec<Category> {
    vec![
        Category::new("development", "Development Tools", "code"),
        Category::new("design", "Design Inspiration", "paint-brush"),
        Category::new("learning", "Learning Resources", "graduation-cap"),
        Category::new("entertainment", "Entertainment", "gamepad"),
        Category::new("social", "Social Networks", "users"),
    ]
}
