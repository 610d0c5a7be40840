//! CLI command definitions

use clap::{Parser, Subcommand};
use crate::domain::feed::SortDirection;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(about = "Content pipeline for tagged posts and feeds", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create a new entry from the collection's template
    New {
        /// Folder name of the new entry
        slug: String,

        /// Title of the new entry
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Collection to create the entry in
        #[arg(short, long, default_value = "blog")]
        collection: String,
    },

    /// List tags with their slugs and post counts
    Tags {
        /// Only count entries of this collection
        #[arg(short, long)]
        collection: Option<String>,
    },

    /// List entries in feed order
    Posts {
        /// Only show entries with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only show entries of this collection
        #[arg(short, long)]
        collection: Option<String>,

        /// Date order: ascending or descending (default: feed.order)
        #[arg(short, long)]
        order: Option<SortDirection>,
    },

    /// Write the RSS feed, tag listing and sitemap alias
    Build,
}
