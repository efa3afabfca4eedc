use super::{AppContext, ShelfCommand};
use linkshelf::error::{Result, ShelfError};
use linkshelf::BookmarkDraft;

#[derive(Debug, Clone)]
pub struct AddCommand {
    pub url: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub thumbnail: String,
    /// Comma-joined, as typed into the form
    pub tags: String,
}

impl ShelfCommand for AddCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let draft = BookmarkDraft::from_form(
            &self.url,
            &self.title,
            &self.description,
            &self.thumbnail,
            &self.category,
            &self.tags,
        );

        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(ShelfError::InvalidInput(format!(
                "required field(s) empty: {}",
                missing.join(", ")
            )));
        }

        if !ctx.store.categories().iter().any(|c| c.id == draft.category)
            && draft.category != linkshelf::models::ALL_CATEGORY
        {
            log::warn!("Category '{}' is not a known category id", draft.category);
        }

        let id = ctx.store.add(draft)?;
        eprintln!("Added bookmark {}", id);
        Ok(())
    }
}
