//! # yts-scraper
//!
//! A client for the YTS movie catalog: the JSON API plus the HTML pages
//! that have no API counterpart.
//!
//! ## Architecture
//!
//! Scraped pages flow through a small pipeline:
//!
//! ```text
//! Fetcher → Html → extract (records → listings → pages) → domain
//! ```
//!
//! - [`fetcher`]: HTTP transport behind an async trait
//! - [`extract`]: selector-driven extraction of movie cards, directors,
//!   reviews and comments
//! - [`validate`]: field coercion and rule checks; every failing field of a
//!   record is reported together
//! - [`client`]: the facade tying fetches, extraction and pagination together
//!
//! ## Quick Start
//!
//! ```bash
//! # Trending movies as JSON
//! yts trending
//!
//! # Second page of a movie's comments
//! yts comments inception-2010 --page 2
//!
//! # Magnet links for every torrent of a movie
//! yts magnets 3175
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`cli`]: Command-line interface definitions
//! - [`client`]: API calls, scraped pages, comment pagination, magnet links
//! - [`config`]: TOML configuration
//! - [`domain`]: Records, API payloads and closed enumerations
//! - [`extract`]: HTML extraction
//! - [`fetcher`]: HTTP fetching
//! - [`filters`]: API query filters
//! - [`validate`]: Field validation

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires a [`Client`](client::Client)
/// from the loaded configuration.
pub mod app;

/// Command-line interface using clap.
///
/// Every subcommand prints its response as pretty JSON:
/// - `trending`, `home` - scraped listings
/// - `director`, `reviews`, `comments`, `details`, `resolve` - movie page sections
/// - `search`, `movie`, `suggestions`, `magnets` - API calls
pub mod cli;

/// The YTS client facade.
pub mod client;

/// Configuration management.
///
/// Loads from `~/.config/yts-scraper/config.toml`, supporting:
/// - API and site base URLs
/// - Request timeout and user agent
/// - Magnet link trackers
pub mod config;

/// Core domain models.
///
/// - [`SiteMovie`](domain::SiteMovie), [`SiteUpcomingMovie`](domain::SiteUpcomingMovie):
///   movie cards sharing a [`SiteMovieBase`](domain::SiteMovieBase)
/// - [`Movie`](domain::Movie), [`MovieDetails`](domain::MovieDetails): API payloads
/// - [`TorrentInfoGetter`](domain::TorrentInfoGetter): anything magnet links can be made from
pub mod domain;

/// HTML extraction.
///
/// - [`Scrape`](extract::Scrape): one fragment into one validated record
/// - [`ListingError`](extract::ListingError): per-item failures of a listing
pub mod extract;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait returning raw bodies
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Search and movie-details query filters.
pub mod filters;

/// Field validation with total error reporting.
pub mod validate;
