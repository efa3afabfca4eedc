use super::{AppContext, ShelfCommand};
use linkshelf::error::Result;
use linkshelf::{tags, BookmarkDraft};

/// Full-replacement edit. Options left out are pre-filled from the current
/// record, the way the edit form was.
#[derive(Debug, Clone, Default)]
pub struct EditCommand {
    pub id: String,
    pub url: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Option<String>,
}

impl EditCommand {
    fn build_draft(&self, current: BookmarkDraft) -> BookmarkDraft {
        BookmarkDraft {
            url: self.url.clone().unwrap_or(current.url),
            title: self.title.clone().unwrap_or(current.title),
            description: self.description.clone().unwrap_or(current.description),
            thumbnail: match &self.thumbnail {
                Some(t) => Some(t.clone()),
                None => current.thumbnail,
            },
            category: self.category.clone().unwrap_or(current.category),
            tags: match &self.tags {
                Some(t) => tags::parse_tags(t),
                None => current.tags,
            },
        }
    }
}

impl ShelfCommand for EditCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let Some(current) = ctx.store.get(&self.id).map(BookmarkDraft::from) else {
            log::warn!("No bookmark with id {}; nothing edited", self.id);
            return Ok(());
        };

        let draft = self.build_draft(current);
        if ctx.store.edit(&self.id, draft)? {
            eprintln!("Bookmark {} updated", self.id);
        }
        Ok(())
    }
}
