use serde::{Deserialize, Serialize};

use crate::domain::{Genre, Quality};

/// Fields shared by every movie card variant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteMovieBase {
    pub title: String,
    pub year: i32,
    pub link: String,
    pub image: String,
    pub genres: Vec<Genre>,
}

/// A movie card from the trending page or the popular/latest home sections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteMovie {
    #[serde(flatten)]
    pub base: SiteMovieBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

/// A movie card from the upcoming home section. Upcoming releases are unrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteUpcomingMovie {
    #[serde(flatten)]
    pub base: SiteMovieBase,
    pub progress: u8,
    pub quality: Quality,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteMovieDirector {
    pub name: String,
    pub url_small_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteMovieReview {
    pub author: String,
    pub title: String,
    pub content: String,
    pub rating: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteMovieComment {
    pub author: String,
    pub avatar_url: String,
    pub timestamp: String,
    pub content: String,
    pub like_count: u32,
}

/// Movie id and comment total read off a movie page; only used to page the
/// comment thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentsPageMeta {
    pub movie_id: u32,
    pub total_count: u32,
}

/// Envelope for every scraped response, mirroring the API's `data` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteResponse<T> {
    pub data: T,
}

impl<T> SiteResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingMoviesData {
    pub movies: Vec<SiteMovie>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePageContentData {
    pub popular: Vec<SiteMovie>,
    pub latest: Vec<SiteMovie>,
    pub upcoming: Vec<SiteUpcomingMovie>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDirectorData {
    pub director: SiteMovieDirector,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieReviewsData {
    pub reviews: Vec<SiteMovieReview>,
    pub reviews_more_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCommentsData {
    pub comments: Vec<SiteMovieComment>,
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieAdditionalDetailsData {
    pub director: SiteMovieDirector,
    pub reviews: MovieReviewsData,
    pub comments: MovieCommentsData,
}

pub type TrendingMoviesResponse = SiteResponse<TrendingMoviesData>;
pub type HomePageContentResponse = SiteResponse<HomePageContentData>;
pub type MovieDirectorResponse = SiteResponse<MovieDirectorData>;
pub type MovieReviewsResponse = SiteResponse<MovieReviewsData>;
pub type MovieCommentsResponse = SiteResponse<MovieCommentsData>;
pub type MovieAdditionalDetailsResponse = SiteResponse<MovieAdditionalDetailsData>;
