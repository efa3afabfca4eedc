use super::{AppContext, ShelfCommand};
use linkshelf::error::Result;
use linkshelf::{ExportFormat, ImportFormat};
use std::path::PathBuf;

/// Import bookmarks, picking the parser by file extension
#[derive(Debug, Clone)]
pub struct ImportCommand {
    pub file: PathBuf,
}

impl ShelfCommand for ImportCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let format = ImportFormat::from_path(&self.file)?;

        let content = std::fs::read_to_string(&self.file)?;
        let imported = ctx.store.import_from(format, &content)?;

        eprintln!(
            "Imported {} bookmark(s) from {}",
            imported,
            self.file.display()
        );
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ExportCommand {
    pub format: String,
    pub output: PathBuf,
    pub stdout: bool,
}

impl ShelfCommand for ExportCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let format: ExportFormat = self.format.parse()?;
        let artifact = ctx.store.export_as(format)?;

        if self.stdout {
            println!("{}", artifact.content);
            return Ok(());
        }

        let path = self.output.join(&artifact.file_name);
        std::fs::write(&path, &artifact.content)?;
        log::debug!("Wrote {} ({})", path.display(), artifact.content_type);
        eprintln!(
            "Exported {} bookmark(s) to {}",
            ctx.store.bookmarks().len(),
            path.display()
        );
        Ok(())
    }
}
