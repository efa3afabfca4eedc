use super::{AppContext, ShelfCommand};
use crate::output::colorize::{Colorize, ColorizeCategory};
use linkshelf::error::{Result, ShelfError};

#[derive(Debug, Clone)]
pub struct CategoriesCommand {
    pub nc: bool,
}

impl ShelfCommand for CategoriesCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        for entry in ctx.store.category_counts() {
            if self.nc {
                println!("{:<16} {:<24} ({})", entry.id, entry.name, entry.count);
            } else {
                println!("{}", ColorizeCategory(&entry).to_colored());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AddCategoryCommand {
    pub name: String,
}

impl ShelfCommand for AddCategoryCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ShelfError::InvalidInput(
                "category name must not be empty".to_string(),
            ));
        }

        if ctx
            .store
            .categories()
            .iter()
            .any(|c| c.id == linkshelf::utils::slugify(&self.name))
        {
            log::warn!("A category with the id of '{}' already exists", self.name);
        }

        let category = ctx.store.add_category(&self.name)?;
        eprintln!("Added category '{}' ({})", category.name, category.id);
        Ok(())
    }
}
