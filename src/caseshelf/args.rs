use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "caseshelf")]
#[command(about = "Browse a shelf of AI image-generation case studies", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory for durable state (favorites, language)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// One-shot display language override (en, zh, ja, ko)
    #[arg(short, long, global = true)]
    pub lang: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List cases
    #[command(alias = "ls")]
    List {
        /// Only show favorited cases
        #[arg(short, long)]
        favorites: bool,
    },

    /// View one or more cases in full
    #[command(alias = "v")]
    View {
        /// Case ids (e.g. 1 3 12)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u32>,
    },

    /// Search the catalog
    #[command(alias = "s")]
    Search {
        /// Free-text query matched against title, description, prompt,
        /// author, and tags
        query: Option<String>,

        /// Exact category to filter by
        #[arg(short, long)]
        category: Option<String>,

        /// Tag that must be present; repeat to require several
        #[arg(short, long)]
        tag: Vec<String>,

        /// Restrict results to favorited cases
        #[arg(short, long)]
        favorites: bool,
    },

    /// Toggle favorite state for one or more cases
    #[command(alias = "f")]
    Fav {
        /// Case ids (e.g. 1 3 12)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u32>,
    },

    /// List favorited cases
    Favorites,

    /// Remove all favorites
    ClearFavorites {
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },

    /// Show or set the display language
    Lang {
        /// Language code to switch to (prints current when omitted)
        code: Option<String>,
    },

    /// Per-category and per-tag case counts
    Stats,
}
