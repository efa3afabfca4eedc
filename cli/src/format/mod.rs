use crate::{
    format::{
        json::JsonBookmark,
        plain::{GridBookmark, PlainBookmark},
        traits::BookmarkFormat,
    },
    output::colorize::{Colorize, ColorizeBookmark},
};
use linkshelf::error::Result;
use linkshelf::Bookmark;

pub mod json;
pub mod plain;
pub mod traits;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One row per bookmark
    Grid,
    /// Detailed multi-line entries
    List,
    /// One JSON array
    Json,
    /// One JSON object per line
    JsonLines,
}

impl OutputFormat {
    pub fn from_string(format: &str) -> Self {
        match format {
            "list" => OutputFormat::List,
            "json" => OutputFormat::Json,
            "jsonl" => OutputFormat::JsonLines,
            _ => OutputFormat::Grid,
        }
    }

    pub fn print_bookmarks(self, records: &[&Bookmark], no_color: bool) -> Result<()> {
        match self {
            OutputFormat::Json => println!("{}", json::render_list(records)?),
            OutputFormat::JsonLines => {
                for b in records {
                    println!("{}", JsonBookmark(b).to_json_line()?);
                }
            }
            OutputFormat::Grid => {
                for b in records {
                    if no_color {
                        println!("{}", GridBookmark(b).to_string());
                    } else {
                        println!("{}", ColorizeBookmark(b).to_colored_row());
                    }
                }
            }
            OutputFormat::List => {
                for b in records {
                    if no_color {
                        println!("{}", PlainBookmark(b).to_string());
                    } else {
                        println!("{}", ColorizeBookmark(b).to_colored());
                    }
                }
            }
        }
        Ok(())
    }
}
