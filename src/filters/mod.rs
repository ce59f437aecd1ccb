//! Query filters for the JSON API endpoints.
//!
//! Filters are validated with the same [`Validator`] the scrapers use, so an
//! invalid filter reports every offending field at once. Query strings are
//! encoded with keys in lexical order and omit zero numbers, `false` flags
//! and empty strings.

use url::form_urlencoded;

use crate::domain::{Genre, OrderBy, Quality, SortBy};
use crate::validate::{ValidationErrors, Validator};

pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 50;
pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_MINIMUM_RATING: u8 = 9;

/// Sentinel the API accepts for "no quality/genre restriction".
const ANY: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMoviesFilters {
    pub limit: u32,
    pub page: u32,
    /// `None` searches every quality.
    pub quality: Option<Quality>,
    pub minimum_rating: u8,
    pub query_term: String,
    /// `None` searches every genre.
    pub genre: Option<Genre>,
    pub sort_by: SortBy,
    pub order_by: OrderBy,
    pub with_rt_ratings: bool,
}

impl Default for SearchMoviesFilters {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: 1,
            quality: None,
            minimum_rating: 0,
            query_term: String::new(),
            genre: None,
            sort_by: SortBy::default(),
            order_by: OrderBy::default(),
            with_rt_ratings: false,
        }
    }
}

impl SearchMoviesFilters {
    pub fn default_for(query_term: impl Into<String>) -> Self {
        Self {
            query_term: query_term.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new("SearchMoviesFilters");
        v.range(
            "limit",
            i64::from(self.limit),
            i64::from(MIN_LIMIT),
            i64::from(MAX_LIMIT),
        );
        v.range("page", i64::from(self.page), 1, i64::from(u32::MAX));
        v.range(
            "minimum_rating",
            i64::from(self.minimum_rating),
            0,
            i64::from(MAX_MINIMUM_RATING),
        );
        v.finish()
    }

    pub fn query_string(&self) -> Result<String, ValidationErrors> {
        self.validate()?;

        let quality = self.quality.map_or(ANY, Quality::as_str);
        let genre = self
            .genre
            .map_or_else(|| ANY.to_string(), Genre::query_value);

        Ok(encode(vec![
            ("limit", Param::Int(i64::from(self.limit))),
            ("page", Param::Int(i64::from(self.page))),
            ("quality", Param::Text(quality.to_string())),
            ("minimum_rating", Param::Int(i64::from(self.minimum_rating))),
            ("query_term", Param::Text(self.query_term.clone())),
            ("genre", Param::Text(genre)),
            ("sort_by", Param::Text(self.sort_by.as_str().to_string())),
            ("order_by", Param::Text(self.order_by.as_str().to_string())),
            ("with_rt_ratings", Param::Flag(self.with_rt_ratings)),
        ]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieDetailsFilters {
    pub with_images: bool,
    pub with_cast: bool,
}

impl Default for MovieDetailsFilters {
    fn default() -> Self {
        Self {
            with_images: true,
            with_cast: true,
        }
    }
}

impl MovieDetailsFilters {
    /// Query for `movie_details.json`; `movie_id` is checked by the caller.
    pub fn query_string(&self, movie_id: u32) -> String {
        encode(vec![
            ("movie_id", Param::Int(i64::from(movie_id))),
            ("with_images", Param::Flag(self.with_images)),
            ("with_cast", Param::Flag(self.with_cast)),
        ])
    }
}

enum Param {
    Int(i64),
    Flag(bool),
    Text(String),
}

impl Param {
    fn value(self) -> Option<String> {
        match self {
            Param::Int(0) | Param::Flag(false) => None,
            Param::Int(n) => Some(n.to_string()),
            Param::Flag(true) => Some("true".to_string()),
            Param::Text(s) if s.is_empty() => None,
            Param::Text(s) => Some(s),
        }
    }
}

fn encode(params: Vec<(&'static str, Param)>) -> String {
    let mut pairs: Vec<_> = params
        .into_iter()
        .filter_map(|(key, param)| param.value().map(|value| (key, value)))
        .collect();
    pairs.sort_by_key(|(key, _)| *key);

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
