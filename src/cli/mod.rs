pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "yts")]
#[command(about = "Query the YTS movie catalog", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/yts-scraper/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log extraction failures to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape the trending movies page
    Trending,
    /// Scrape the popular, latest and upcoming sections of the home page
    Home,
    /// Scrape the director of a movie
    Director {
        /// Site slug, e.g. "inception-2010"
        slug: String,
    },
    /// Scrape the reviews of a movie
    Reviews { slug: String },
    /// Scrape one page of a movie's comments
    Comments {
        slug: String,
        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Director, reviews and first comment page in one go
    Details { slug: String },
    /// Resolve a site slug to its API movie id
    Resolve { slug: String },
    /// Search movies through the API
    Search {
        /// Search term (title, IMDb code, actor or director)
        term: String,
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        #[arg(short, long, default_value_t = crate::filters::DEFAULT_LIMIT)]
        limit: u32,
    },
    /// Fetch movie details through the API
    Movie { id: i64 },
    /// Fetch suggestions related to a movie
    Suggestions { id: i64 },
    /// Print a magnet link for every torrent of a movie
    Magnets { id: i64 },
}
