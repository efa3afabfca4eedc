use linkshelf::error::Result;
use linkshelf::BookmarkStore;

pub struct AppContext<'a> {
    pub store: &'a mut BookmarkStore,
}

pub mod add;
pub mod category;
pub mod delete;
pub mod edit;
pub mod import_export;
pub mod misc;
pub mod print;

pub trait ShelfCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()>;
}

/// Enum-based dispatch for commands (avoids Box<dyn ShelfCommand>)
pub enum CommandEnum {
    Add(add::AddCommand),
    Edit(edit::EditCommand),
    Delete(delete::DeleteCommand),
    Print(print::PrintCommand),
    Categories(category::CategoriesCommand),
    AddCategory(category::AddCategoryCommand),
    Import(import_export::ImportCommand),
    Export(import_export::ExportCommand),
    Open(misc::OpenCommand),
    Reset(misc::ResetCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        match self {
            Self::Add(cmd) => cmd.execute(ctx),
            Self::Edit(cmd) => cmd.execute(ctx),
            Self::Delete(cmd) => cmd.execute(ctx),
            Self::Print(cmd) => cmd.execute(ctx),
            Self::Categories(cmd) => cmd.execute(ctx),
            Self::AddCategory(cmd) => cmd.execute(ctx),
            Self::Import(cmd) => cmd.execute(ctx),
            Self::Export(cmd) => cmd.execute(ctx),
            Self::Open(cmd) => cmd.execute(ctx),
            Self::Reset(cmd) => cmd.execute(ctx),
        }
    }
}

/// Ask a yes/no question on stdin; anything but y/yes is a no
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    use std::io::{self, Write};

    print!("{}", prompt);
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    let response = response.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
