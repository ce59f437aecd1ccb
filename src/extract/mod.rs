//! HTML extraction for the pages the API does not cover.
//!
//! Extraction runs in three layers:
//!
//! - [`records`]: one fragment becomes one validated record ([`Scrape`]).
//! - [`listing`]: every fragment of a selection is scraped independently and
//!   failures are joined per item.
//! - [`pages`]: the sections of a whole document (trending, home, movie page,
//!   comment thread) are located and extracted.
//!
//! Everything here is synchronous and operates on an already-parsed
//! [`scraper::Html`].

use scraper::ElementRef;

use crate::validate::ValidationErrors;

pub mod listing;
pub mod pages;
pub mod records;
pub mod selectors;

pub use listing::{scrape_listing, select_section, ItemError, ListingError};
pub use pages::{
    comments_meta, home_page_content, movie_comments, movie_director, movie_id, movie_reviews,
    trending_movies,
};

/// A record shape that can be extracted from one DOM fragment.
pub trait Scrape: Sized {
    /// Record name used in validation messages.
    const SHAPE: &'static str;

    /// Extracts and validates one record, reporting every failing field.
    fn scrape(fragment: ElementRef<'_>) -> Result<Self, ValidationErrors>;
}
