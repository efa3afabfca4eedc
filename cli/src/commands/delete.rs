use super::{confirm, AppContext, ShelfCommand};
use linkshelf::error::Result;

#[derive(Debug, Clone)]
pub struct DeleteCommand {
    pub id: String,
    pub force: bool,
}

impl ShelfCommand for DeleteCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let Some(bookmark) = ctx.store.get(&self.id) else {
            log::warn!("No bookmark with id {}; nothing deleted", self.id);
            return Ok(());
        };

        eprintln!("  {} - {}", bookmark.title, bookmark.url);

        // Ask for confirmation unless --force
        let confirmed = self.force || confirm("\nDelete this bookmark? [y/N]: ")?;

        if confirmed {
            ctx.store.delete(&self.id)?;
            eprintln!("Deleted bookmark {}.", self.id);
        } else {
            eprintln!("Deletion cancelled.");
        }

        Ok(())
    }
}
