//! CLI command definitions

use crate::domain::{Category, EntryFields};
use crate::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Personal website catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new catalog
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List websites
    List {
        /// Category to show (all, game, mbti)
        #[arg(short, long, default_value = "all")]
        category: String,
    },

    /// Show a single website
    Show {
        /// Website id
        id: String,
    },

    /// Add a website
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        url: String,

        #[arg(short, long)]
        description: String,

        /// Image URL (optional)
        #[arg(short, long, default_value = "")]
        image_url: String,

        /// Category (default: configured default_category)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Edit a website; omitted fields keep their current value
    Edit {
        /// Website id
        id: String,

        #[command(flatten)]
        changes: EntryChanges,
    },

    /// Remove a website
    Remove {
        /// Website id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show how many websites each category holds
    Categories,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Field overrides for `edit`
#[derive(Args, Debug, Default, Clone)]
pub struct EntryChanges {
    #[arg(short, long)]
    pub title: Option<String>,

    #[arg(short, long)]
    pub url: Option<String>,

    #[arg(short, long)]
    pub description: Option<String>,

    /// New image URL; pass an empty string to remove the image
    #[arg(short, long)]
    pub image_url: Option<String>,

    #[arg(short, long)]
    pub category: Option<String>,
}

impl EntryChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.category.is_none()
    }

    /// Overlay the given values on `fields`
    pub fn apply(self, mut fields: EntryFields) -> Result<EntryFields> {
        if let Some(title) = self.title {
            fields.title = title;
        }
        if let Some(url) = self.url {
            fields.url = url;
        }
        if let Some(description) = self.description {
            fields.description = description;
        }
        if let Some(image_url) = self.image_url {
            fields.image_url = image_url;
        }
        if let Some(category) = self.category {
            fields.category = Category::from_str(&category)?;
        }
        Ok(fields)
    }
}
