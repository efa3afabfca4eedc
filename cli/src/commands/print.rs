use super::{AppContext, ShelfCommand};
use crate::format::OutputFormat;
use linkshelf::error::Result;

#[derive(Debug, Clone)]
pub struct PrintCommand {
    pub category: String,
    pub view: String,
    pub nc: bool,
}

impl ShelfCommand for PrintCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let records = ctx.store.list_by_category(&self.category);
        let format = OutputFormat::from_string(&self.view);

        if records.is_empty() {
            // An empty JSON listing is still a valid document
            if format == OutputFormat::Json {
                println!("[]");
            } else {
                eprintln!("No bookmarks in category '{}'.", self.category);
            }
            return Ok(());
        }

        format.print_bookmarks(&records, self.nc)
    }
}
