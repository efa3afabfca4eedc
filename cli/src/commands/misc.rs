use super::{confirm, AppContext, ShelfCommand};
use linkshelf::error::{Result, ShelfError};

/// Visit action: open the bookmark URL in the default browser
#[derive(Debug, Clone)]
pub struct OpenCommand {
    pub id: String,
}

impl ShelfCommand for OpenCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let bookmark = ctx.store.require(&self.id)?;
        log::debug!("Opening {}", bookmark.url);
        open::that(&bookmark.url)
            .map_err(|e| ShelfError::InvalidInput(format!("could not open {}: {}", bookmark.url, e)))
    }
}

#[derive(Debug, Clone)]
pub struct ResetCommand {
    pub force: bool,
}

impl ShelfCommand for ResetCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let count = ctx.store.bookmarks().len();
        let confirmed = self.force
            || confirm(&format!(
                "Delete all {} bookmark(s) and restore the default categories? [y/N]: ",
                count
            ))?;

        if !confirmed {
            eprintln!("Reset cancelled.");
            return Ok(());
        }

        ctx.store.clear_all()?;
        eprintln!("Removed {} bookmark(s).", count);
        Ok(())
    }
}
