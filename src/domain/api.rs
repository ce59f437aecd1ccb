//! Payloads of the `api/v2` JSON endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::torrent::{TorrentInfo, TorrentInfoGetter};
use crate::domain::Quality;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub server_time: i64,
    pub server_timezone: String,
    pub api_version: i32,
    pub execution_time: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Cast {
    pub name: String,
    pub character_name: String,
    pub imdb_code: String,
    pub url_small_image: String,
}

/// Torrent entry of an API payload. `quality` is kept as sent, so a value
/// missing from [`Quality`] still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Torrent {
    #[serde(default)]
    pub url: String,
    pub hash: String,
    pub quality: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub is_repack: String,
    #[serde(default)]
    pub video_codec: String,
    #[serde(default)]
    pub bit_depth: String,
    #[serde(default)]
    pub audio_channels: String,
    #[serde(default)]
    pub seeds: u32,
    #[serde(default)]
    pub peers: u32,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub size_bytes: u64,
    #[serde(default)]
    pub date_uploaded: String,
    #[serde(default)]
    pub date_uploaded_unix: i64,
}

impl Torrent {
    /// `quality` as a [`Quality`], or `None` when the API sent a value outside the set.
    pub fn known_quality(&self) -> Option<Quality> {
        self.quality.parse().ok()
    }
}

/// Fields common to `Movie` and `MovieDetails`. Genres are kept as sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MoviePartial {
    pub id: u32,
    pub url: String,
    pub imdb_code: String,
    pub title: String,
    pub title_english: String,
    pub title_long: String,
    pub slug: String,
    pub year: i32,
    pub rating: f64,
    pub runtime: u32,
    pub genres: Vec<String>,
    pub description_full: String,
    pub yt_trailer_code: String,
    pub language: String,
    pub mpa_rating: String,
    pub background_image: String,
    pub background_image_original: String,
    pub small_cover_image: String,
    pub medium_cover_image: String,
    pub large_cover_image: String,
    pub torrents: Vec<Torrent>,
    pub date_uploaded: String,
    pub date_uploaded_unix: i64,
}

/// Entry of `list_movies.json` and `movie_suggestions.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    #[serde(flatten)]
    pub partial: MoviePartial,
    pub summary: String,
    pub synopsis: String,
    pub state: String,
}

/// `movie_details.json` payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub partial: MoviePartial,
    pub like_count: u32,
    pub description_intro: String,
    pub medium_screenshot_image1: String,
    pub medium_screenshot_image2: String,
    pub medium_screenshot_image3: String,
    pub large_screenshot_image1: String,
    pub large_screenshot_image2: String,
    pub large_screenshot_image3: String,
    pub cast: Vec<Cast>,
}

impl TorrentInfoGetter for Movie {
    fn torrent_info(&self) -> TorrentInfo<'_> {
        TorrentInfo {
            movie_title: &self.partial.title_long,
            torrents: &self.partial.torrents,
        }
    }
}

impl TorrentInfoGetter for MovieDetails {
    fn torrent_info(&self) -> TorrentInfo<'_> {
        TorrentInfo {
            movie_title: &self.partial.title_long,
            torrents: &self.partial.torrents,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseResponse {
    pub status: String,
    pub status_message: String,
    #[serde(rename = "@meta")]
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchMoviesData {
    pub movie_count: u32,
    pub limit: u32,
    pub page_number: u32,
    pub movies: Vec<Movie>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieDetailsData {
    pub movie: MovieDetails,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieSuggestionsData {
    pub movie_count: u32,
    pub movies: Vec<Movie>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiResponse<T> {
    #[serde(flatten)]
    pub base: BaseResponse,
    pub data: T,
}

pub type SearchMoviesResponse = ApiResponse<SearchMoviesData>;
pub type MovieDetailsResponse = ApiResponse<MovieDetailsData>;
pub type MovieSuggestionsResponse = ApiResponse<MovieSuggestionsData>;

#[cfg(test)]
mod tests {
    use super::*;

    const DETAILS_SAMPLE: &str = r#"{
        "status": "ok",
        "status_message": "Query was successful",
        "data": {
            "movie": {
                "id": 3175,
                "title": "Oppenheimer",
                "title_long": "Oppenheimer (2023)",
                "year": 2023,
                "rating": 8.4,
                "genres": ["Biography", "Drama", "History"],
                "like_count": 212,
                "torrents": [
                    {"hash": "CDED33F7FBF3E4E073778848FAD17674C0A35B82", "quality": "1080p", "type": "web", "seeds": 100}
                ],
                "cast": [{"name": "Cillian Murphy", "character_name": "J. Robert Oppenheimer"}]
            }
        },
        "@meta": {"server_time": 1704384528, "server_timezone": "CET", "api_version": 2, "execution_time": "0 ms"}
    }"#;

    #[test]
    fn test_parse_movie_details_response() {
        let response: MovieDetailsResponse = serde_json::from_str(DETAILS_SAMPLE).unwrap();
        assert_eq!(response.base.status, "ok");
        assert_eq!(response.base.meta.api_version, 2);

        let movie = &response.data.movie;
        assert_eq!(movie.partial.id, 3175);
        assert_eq!(movie.partial.genres, vec!["Biography", "Drama", "History"]);
        assert_eq!(movie.like_count, 212);
        assert_eq!(movie.cast[0].name, "Cillian Murphy");
        assert_eq!(movie.partial.torrents[0].known_quality(), Some(Quality::Q1080p));
        assert_eq!(movie.partial.torrents[0].kind, "web");
    }

    #[test]
    fn test_torrent_info_uses_long_title() {
        let response: MovieDetailsResponse = serde_json::from_str(DETAILS_SAMPLE).unwrap();
        let info = response.data.movie.torrent_info();
        assert_eq!(info.movie_title, "Oppenheimer (2023)");
        assert_eq!(info.torrents.len(), 1);
    }

    #[test]
    fn test_empty_search_response_defaults() {
        let response: SearchMoviesResponse =
            serde_json::from_str(r#"{"status": "ok", "data": {"movie_count": 0}}"#).unwrap();
        assert_eq!(response.data.movie_count, 0);
        assert!(response.data.movies.is_empty());
    }

    #[test]
    fn test_unlisted_genre_and_quality_still_decode() {
        let body = r#"{
            "status": "ok",
            "data": {
                "movie_count": 2,
                "movies": [
                    {"id": 1, "title": "Heat", "genres": ["Crime"],
                     "torrents": [{"hash": "AAAA", "quality": "1080p"}]},
                    {"id": 2, "title": "Bao", "genres": ["Short"],
                     "torrents": [{"hash": "BBBB", "quality": "4K"}]}
                ]
            }
        }"#;
        let response: SearchMoviesResponse = serde_json::from_str(body).unwrap();

        let movies = &response.data.movies;
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[1].partial.genres, vec!["Short"]);
        assert_eq!(movies[1].partial.torrents[0].quality, "4K");
        assert_eq!(movies[1].partial.torrents[0].known_quality(), None);
        assert_eq!(movies[0].partial.torrents[0].known_quality(), Some(Quality::Q1080p));
    }
}
