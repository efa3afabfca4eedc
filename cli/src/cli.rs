use crate::commands::{
    add, category, delete, edit, import_export, misc, print, AppContext, CommandEnum,
};
use clap::{Parser, Subcommand};
use linkshelf::error::Result;
use linkshelf::models::ALL_CATEGORY;
use linkshelf::BookmarkStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show the program version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Optional custom database file path
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new bookmark
    Add {
        /// URL to bookmark
        url: String,

        /// Bookmark title
        #[arg(long)]
        title: String,

        /// Category id (see `categories`)
        #[arg(short, long)]
        category: String,

        /// Notes or description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Thumbnail image URL
        #[arg(long, default_value = "")]
        thumbnail: String,

        /// Comma-separated tags
        #[arg(short, long, default_value = "")]
        tags: String,
    },

    /// Edit a bookmark; fields not given keep their current value
    Edit {
        /// Bookmark ID
        id: String,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(long)]
        thumbnail: Option<String>,

        /// Comma-separated tags (replaces the current list)
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Delete a bookmark
    Delete {
        /// Bookmark ID
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List bookmarks
    List {
        /// Category to show
        #[arg(short, long, default_value = ALL_CATEGORY)]
        category: String,

        /// Layout: grid, list or json
        #[arg(long, default_value = "grid")]
        view: String,
    },

    /// Show categories with their bookmark counts
    Categories,

    /// Create a category; the id is derived from the name
    AddCategory {
        /// Display name
        name: String,
    },

    /// Import bookmarks from a .html, .json or .csv file
    Import {
        /// File path to import from
        file: PathBuf,
    },

    /// Export bookmarks as bookmarks-<date>.<format>
    Export {
        /// json or csv
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Directory to write the file into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Open a bookmark in the browser
    Open {
        /// Bookmark ID
        id: String,
    },

    /// Delete all bookmarks and restore the default categories
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    fn into_command(self, nc: bool) -> CommandEnum {
        match self {
            Commands::Add {
                url,
                title,
                category,
                description,
                thumbnail,
                tags,
            } => CommandEnum::Add(add::AddCommand {
                url,
                title,
                category,
                description,
                thumbnail,
                tags,
            }),
            Commands::Edit {
                id,
                url,
                title,
                category,
                description,
                thumbnail,
                tags,
            } => CommandEnum::Edit(edit::EditCommand {
                id,
                url,
                title,
                category,
                description,
                thumbnail,
                tags,
            }),
            Commands::Delete { id, force } => {
                CommandEnum::Delete(delete::DeleteCommand { id, force })
            }
            Commands::List { category, view } => CommandEnum::Print(print::PrintCommand {
                category,
                view,
                nc,
            }),
            Commands::Categories => CommandEnum::Categories(category::CategoriesCommand { nc }),
            Commands::AddCategory { name } => {
                CommandEnum::AddCategory(category::AddCategoryCommand { name })
            }
            Commands::Import { file } => {
                CommandEnum::Import(import_export::ImportCommand { file })
            }
            Commands::Export {
                format,
                output,
                stdout,
            } => CommandEnum::Export(import_export::ExportCommand {
                format,
                output,
                stdout,
            }),
            Commands::Open { id } => CommandEnum::Open(misc::OpenCommand { id }),
            Commands::Reset { force } => CommandEnum::Reset(misc::ResetCommand { force }),
        }
    }
}

pub fn handle_args(cli: Cli, store: &mut BookmarkStore) -> Result<()> {
    // No subcommand behaves like `list`
    let command = match cli.command {
        Some(command) => command.into_command(cli.nc),
        None => CommandEnum::Print(print::PrintCommand {
            category: ALL_CATEGORY.to_string(),
            view: "grid".to_string(),
            nc: cli.nc,
        }),
    };

    let mut ctx = AppContext { store };
    command.execute(&mut ctx)
}
