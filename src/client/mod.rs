//! The YTS client: JSON API calls plus the scraped pages the API lacks.
//!
//! Every operation fetches through a [`Fetcher`] and hands the body to the
//! synchronous extractors in [`crate::extract`]. Parsed documents never live
//! across an `.await`, so the returned futures stay `Send`.

pub mod pagination;

use std::collections::BTreeMap;
use std::sync::Arc;

use scraper::Html;
use serde::de::DeserializeOwned;
use tracing::info;
use url::Url;

use crate::app::{Result, YtsError};
use crate::config::ClientConfig;
use crate::domain::{
    magnet_uri, CommentsPageMeta, HomePageContentResponse, MovieAdditionalDetailsData,
    MovieAdditionalDetailsResponse, MovieCommentsData, MovieCommentsResponse, MovieDetailsResponse,
    MovieDirectorData, MovieDirectorResponse, MovieReviewsResponse, MovieSuggestionsResponse,
    Quality, SearchMoviesResponse, SiteResponse, TorrentInfoGetter, TrendingMoviesResponse,
};
use crate::extract;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::filters::{MovieDetailsFilters, SearchMoviesFilters};

use pagination::{check_page, has_more};

pub struct Client {
    config: ClientConfig,
    fetcher: Arc<dyn Fetcher>,
}

impl Client {
    /// Client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = Arc::new(HttpFetcher::new(&config)?);
        Ok(Self { config, fetcher })
    }

    /// Client over a custom transport.
    pub fn with_fetcher(config: ClientConfig, fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, fetcher })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -- JSON API ----------------------------------------------------------

    pub async fn search_movies(&self, filters: &SearchMoviesFilters) -> Result<SearchMoviesResponse> {
        let query = filters.query_string()?;
        let url = api_url(&self.config, "list_movies.json", &query)?;
        self.get_json(&url).await
    }

    pub async fn movie_details(
        &self,
        movie_id: i64,
        filters: &MovieDetailsFilters,
    ) -> Result<MovieDetailsResponse> {
        let movie_id = check_movie_id(movie_id)?;
        let url = api_url(&self.config, "movie_details.json", &filters.query_string(movie_id))?;
        self.get_json(&url).await
    }

    pub async fn movie_suggestions(&self, movie_id: i64) -> Result<MovieSuggestionsResponse> {
        let movie_id = check_movie_id(movie_id)?;
        let query = format!("movie_id={movie_id}");
        let url = api_url(&self.config, "movie_suggestions.json", &query)?;
        self.get_json(&url).await
    }

    // -- scraped pages -----------------------------------------------------

    pub async fn trending_movies(&self) -> Result<TrendingMoviesResponse> {
        let url = site_url(&self.config, &["trending-movies"], None)?;
        let body = self.get_text(&url).await?;
        let data = extract::trending_movies(&Html::parse_document(&body))?;

        info!(movies = data.movies.len(), "scraped trending movies");
        Ok(SiteResponse::new(data))
    }

    pub async fn home_page_content(&self) -> Result<HomePageContentResponse> {
        let url = site_url(&self.config, &[], None)?;
        let body = self.get_text(&url).await?;
        let data = extract::home_page_content(&Html::parse_document(&body))?;

        info!(
            popular = data.popular.len(),
            latest = data.latest.len(),
            upcoming = data.upcoming.len(),
            "scraped home page"
        );
        Ok(SiteResponse::new(data))
    }

    pub async fn movie_director(&self, slug: &str) -> Result<MovieDirectorResponse> {
        let body = self.movie_page(slug).await?;
        let director = extract::movie_director(&Html::parse_document(&body))?;

        info!(slug, "scraped movie director");
        Ok(SiteResponse::new(MovieDirectorData { director }))
    }

    pub async fn movie_reviews(&self, slug: &str) -> Result<MovieReviewsResponse> {
        let body = self.movie_page(slug).await?;
        let data = extract::movie_reviews(&Html::parse_document(&body))?;

        info!(slug, reviews = data.reviews.len(), "scraped movie reviews");
        Ok(SiteResponse::new(data))
    }

    /// One 1-based page of a movie's comment thread.
    pub async fn movie_comments(&self, slug: &str, page: u32) -> Result<MovieCommentsResponse> {
        let offset = check_page(page)?;
        let body = self.movie_page(slug).await?;
        let meta = extract::comments_meta(&Html::parse_document(&body))?;

        let data = self.comments_page(meta, offset).await?;
        info!(slug, page, comments = data.comments.len(), "scraped movie comments");
        Ok(SiteResponse::new(data))
    }

    /// Director, reviews and the first comment page, from a single fetch of
    /// the movie page. The first failing section is reported.
    pub async fn movie_additional_details(
        &self,
        slug: &str,
    ) -> Result<MovieAdditionalDetailsResponse> {
        let body = self.movie_page(slug).await?;
        let (director, reviews, meta) = {
            let document = Html::parse_document(&body);
            (
                extract::movie_director(&document)?,
                extract::movie_reviews(&document)?,
                extract::comments_meta(&document)?,
            )
        };

        let comments = self.comments_page(meta, 0).await?;
        info!(slug, "scraped movie additional details");
        Ok(SiteResponse::new(MovieAdditionalDetailsData {
            director,
            reviews,
            comments,
        }))
    }

    /// API id of the movie behind a site slug.
    pub async fn resolve_movie_slug_to_id(&self, slug: &str) -> Result<u32> {
        let body = self.movie_page(slug).await?;
        let id = extract::movie_id(&Html::parse_document(&body))?;

        info!(slug, id, "resolved movie slug");
        Ok(id)
    }

    // -- magnet links ------------------------------------------------------

    /// Magnet link for the torrent of `quality`.
    pub fn magnet_link(&self, source: &impl TorrentInfoGetter, quality: Quality) -> Result<String> {
        let info = source.torrent_info();
        let torrent = info.find(quality).ok_or(YtsError::NoTorrent(quality))?;
        Ok(magnet_uri(
            info.movie_title,
            torrent,
            self.config.site_domain(),
            &self.config.torrent_trackers,
        ))
    }

    /// One magnet link per available quality. Torrents whose quality is
    /// outside [`Quality`] are skipped.
    pub fn magnet_links(&self, source: &impl TorrentInfoGetter) -> BTreeMap<Quality, String> {
        let info = source.torrent_info();
        info.torrents
            .iter()
            .filter_map(|torrent| {
                let Some(quality) = torrent.known_quality() else {
                    tracing::debug!(
                        quality = %torrent.quality,
                        hash = %torrent.hash,
                        "skipping torrent of unlisted quality"
                    );
                    return None;
                };
                let uri = magnet_uri(
                    info.movie_title,
                    torrent,
                    self.config.site_domain(),
                    &self.config.torrent_trackers,
                );
                Some((quality, uri))
            })
            .collect()
    }

    // -- transport ---------------------------------------------------------

    async fn movie_page(&self, slug: &str) -> Result<String> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(YtsError::InvalidArgument(
                "movie slug must not be empty".into(),
            ));
        }
        let url = site_url(&self.config, &["movies", slug], None)?;
        self.get_text(&url).await
    }

    async fn comments_page(&self, meta: CommentsPageMeta, offset: u32) -> Result<MovieCommentsData> {
        let query = format!("movie_id={}&offset={}", meta.movie_id, offset);
        let url = site_url(&self.config, &["ajax", "comments"], Some(&query))?;

        let body = self.get_text(&url).await?;
        let comments = extract::movie_comments(&Html::parse_fragment(&body))?;
        Ok(MovieCommentsData {
            comments,
            has_more: has_more(meta.total_count, offset),
        })
    }

    async fn get_text(&self, url: &Url) -> Result<String> {
        let body = self.fetcher.fetch(url).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let body = self.fetcher.fetch(url).await?;
        serde_json::from_slice(&body).map_err(|err| {
            tracing::debug!(%url, "{}", err);
            YtsError::Json(err)
        })
    }
}

fn check_movie_id(movie_id: i64) -> Result<u32> {
    u32::try_from(movie_id)
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| YtsError::InvalidArgument(format!("movie id must be at least 1, got {movie_id}")))
}

fn api_url(config: &ClientConfig, endpoint: &str, query: &str) -> Result<Url> {
    let query = (!query.is_empty()).then_some(query);
    join(&config.api_base_url, &[endpoint], query)
}

fn site_url(config: &ClientConfig, segments: &[&str], query: Option<&str>) -> Result<Url> {
    join(&config.site_url, segments, query)
}

/// Appends path segments (percent-encoded) to `base`.
fn join(base: &Url, segments: &[&str], query: Option<&str>) -> Result<Url> {
    let mut url = base.clone();
    if !segments.is_empty() {
        url.path_segments_mut()
            .map_err(|()| YtsError::InvalidArgument(format!("{base} cannot be a base URL")))?
            .pop_if_empty()
            .extend(segments);
    }
    url.set_query(query);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Movie, MoviePartial, Torrent};
    use crate::extract::pages::fixtures::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves canned bodies by URL and records every request.
    #[derive(Default)]
    struct StubFetcher {
        pages: HashMap<String, String>,
        requests: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn with(mut self, url: &str, body: impl Into<String>) -> Self {
            self.pages.insert(url.to_string(), body.into());
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetcher for StubFetcher {
        async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
            self.requests.lock().unwrap().push(url.to_string());
            self.pages
                .get(url.as_str())
                .map(|body| body.clone().into_bytes())
                .ok_or(YtsError::UnexpectedStatus(404))
        }
    }

    fn client(stub: StubFetcher) -> (Client, Arc<StubFetcher>) {
        let stub = Arc::new(stub);
        let client = Client::with_fetcher(ClientConfig::default(), stub.clone()).unwrap();
        (client, stub)
    }

    const MOVIE_URL: &str = "https://yts.mx/movies/inception-2010";

    fn comments_url(offset: u32) -> String {
        format!("https://yts.mx/ajax/comments?movie_id=3175&offset={offset}")
    }

    fn thread(count: usize) -> String {
        (0..count).map(|i| comment(&format!("user{i}"), 1)).collect()
    }

    #[test]
    fn test_trending_movies() {
        let page = trending_page(&movie_card("Dune", "2021", "8.0 / 10"));
        let (client, stub) = client(StubFetcher::default().with("https://yts.mx/trending-movies", page));

        let response = tokio_test::block_on(client.trending_movies()).unwrap();
        assert_eq!(response.data.movies[0].base.title, "Dune");
        assert_eq!(stub.requests(), vec!["https://yts.mx/trending-movies"]);
    }

    #[test]
    fn test_home_page_content() {
        let page = home_page(
            &movie_card("Dune", "2021", "8.0 / 10"),
            &movie_card("Heat", "1995", "8.3 / 10"),
            &upcoming_card("Sinners", "75"),
        );
        let (client, _) = client(StubFetcher::default().with("https://yts.mx/", page));

        let response = tokio_test::block_on(client.home_page_content()).unwrap();
        assert_eq!(response.data.upcoming[0].progress, 75);
    }

    #[test]
    fn test_movie_comments_second_page() {
        let stub = StubFetcher::default()
            .with(MOVIE_URL, movie_page("3175", "61"))
            .with(&comments_url(30), thread(30));
        let (client, stub) = client(stub);

        let response = tokio_test::block_on(client.movie_comments("inception-2010", 2)).unwrap();
        assert_eq!(response.data.comments.len(), 30);
        assert!(response.data.has_more);
        assert_eq!(stub.requests(), vec![MOVIE_URL.to_string(), comments_url(30)]);
    }

    #[test]
    fn test_movie_comments_last_full_page() {
        let stub = StubFetcher::default()
            .with(MOVIE_URL, movie_page("3175", "60"))
            .with(&comments_url(30), thread(30));
        let (client, _) = client(stub);

        let response = tokio_test::block_on(client.movie_comments("inception-2010", 2)).unwrap();
        assert!(!response.data.has_more);
    }

    #[test]
    fn test_preconditions_fail_before_io() {
        let (client, stub) = client(StubFetcher::default());

        let err = tokio_test::block_on(client.movie_comments("inception-2010", 0)).unwrap_err();
        assert!(matches!(err, YtsError::InvalidArgument(_)));
        let err = tokio_test::block_on(client.movie_director("  ")).unwrap_err();
        assert!(matches!(err, YtsError::InvalidArgument(_)));
        let err = tokio_test::block_on(client.movie_suggestions(0)).unwrap_err();
        assert!(matches!(err, YtsError::InvalidArgument(_)));
        let err = tokio_test::block_on(
            client.movie_details(-4, &MovieDetailsFilters::default()),
        )
        .unwrap_err();
        assert!(matches!(err, YtsError::InvalidArgument(_)));

        assert!(stub.requests().is_empty());
    }

    #[test]
    fn test_unaddressable_comments_page_fails_before_io() {
        let (client, stub) = client(StubFetcher::default());

        let err =
            tokio_test::block_on(client.movie_comments("inception-2010", 200_000_000)).unwrap_err();
        assert!(matches!(err, YtsError::InvalidArgument(_)));
        assert!(stub.requests().is_empty());
    }

    #[test]
    fn test_invalid_search_filters_fail_before_io() {
        let (client, stub) = client(StubFetcher::default());
        let filters = SearchMoviesFilters {
            limit: 0,
            ..SearchMoviesFilters::default()
        };

        let err = tokio_test::block_on(client.search_movies(&filters)).unwrap_err();
        assert!(matches!(err, YtsError::Validation(_)));
        assert!(stub.requests().is_empty());
    }

    #[test]
    fn test_movie_additional_details() {
        let stub = StubFetcher::default()
            .with(MOVIE_URL, movie_page("3175", "2"))
            .with(&comments_url(0), thread(2));
        let (client, stub) = client(stub);

        let response =
            tokio_test::block_on(client.movie_additional_details("inception-2010")).unwrap();
        assert_eq!(response.data.director.name, "Christopher Nolan");
        assert_eq!(response.data.reviews.reviews.len(), 1);
        assert_eq!(response.data.comments.comments.len(), 2);
        assert!(!response.data.comments.has_more);
        assert_eq!(stub.requests().len(), 2);
    }

    #[test]
    fn test_additional_details_first_error_wins() {
        let page = movie_page("abc", "2").replace("Christopher Nolan", "");
        let (client, stub) = client(StubFetcher::default().with(MOVIE_URL, page));

        let err =
            tokio_test::block_on(client.movie_additional_details("inception-2010")).unwrap_err();
        let YtsError::Validation(errors) = err else {
            panic!("expected the director failure");
        };
        assert_eq!(errors.fields(), vec!["name"]);
        assert_eq!(stub.requests(), vec![MOVIE_URL]);
    }

    #[test]
    fn test_resolve_movie_slug_to_id() {
        let (client, _) = client(StubFetcher::default().with(MOVIE_URL, movie_page("3175", "0")));
        let id = tokio_test::block_on(client.resolve_movie_slug_to_id("inception-2010")).unwrap();
        assert_eq!(id, 3175);
    }

    #[test]
    fn test_transport_errors_propagate() {
        let (client, _) = client(StubFetcher::default());
        let err = tokio_test::block_on(client.trending_movies()).unwrap_err();
        assert!(matches!(err, YtsError::UnexpectedStatus(404)));
        assert!(!err.is_extraction_failure());
    }

    #[test]
    fn test_search_movies_decodes_payload() {
        let body = r#"{
            "status": "ok",
            "status_message": "Query was successful",
            "data": {"movie_count": 1, "limit": 20, "page_number": 1,
                     "movies": [{"id": 3175, "title": "Inception", "title_long": "Inception (2010)", "year": 2010}]},
            "@meta": {"server_time": 1, "server_timezone": "CET", "api_version": 2, "execution_time": "0 ms"}
        }"#;
        let url = "https://yts.mx/api/v2/list_movies.json?genre=all&limit=20&order_by=desc\
                   &page=1&quality=all&query_term=inception&sort_by=date_added";
        let (client, _) = client(StubFetcher::default().with(url, body));

        let filters = SearchMoviesFilters::default_for("inception");
        let response = tokio_test::block_on(client.search_movies(&filters)).unwrap();
        assert_eq!(response.base.status, "ok");
        assert_eq!(response.data.movies[0].partial.id, 3175);
    }

    #[test]
    fn test_movie_suggestions_url() {
        let (client, stub) = client(StubFetcher::default());
        let _ = tokio_test::block_on(client.movie_suggestions(3175));
        assert_eq!(
            stub.requests(),
            vec!["https://yts.mx/api/v2/movie_suggestions.json?movie_id=3175"]
        );
    }

    fn torrent(quality: &str, hash: &str) -> Torrent {
        serde_json::from_value(serde_json::json!({ "hash": hash, "quality": quality })).unwrap()
    }

    fn movie(torrents: Vec<Torrent>) -> Movie {
        Movie {
            partial: MoviePartial {
                title_long: "Inception (2010)".into(),
                torrents,
                ..MoviePartial::default()
            },
            ..Movie::default()
        }
    }

    #[test]
    fn test_magnet_link() {
        let (client, _) = client(StubFetcher::default());
        let movie = movie(vec![
            torrent("720p", "AAAA"),
            torrent("1080p", "BBBB"),
        ]);

        let link = client.magnet_link(&movie, Quality::Q1080p).unwrap();
        assert!(link.starts_with("magnet:?xt=urn:btih:BBBB&dn=Inception+%282010%29%2B%5B1080p%5D%2B%5BYTS.MX%5D"));
        assert_eq!(link.matches("&tr=").count(), 8);

        let err = client.magnet_link(&movie, Quality::Q2160p).unwrap_err();
        assert!(matches!(err, YtsError::NoTorrent(Quality::Q2160p)));
    }

    #[test]
    fn test_magnet_links_one_per_quality() {
        let (client, _) = client(StubFetcher::default());
        let movie = movie(vec![
            torrent("720p", "AAAA"),
            torrent("1080p", "BBBB"),
            torrent("1080p", "CCCC"),
        ]);

        let links = client.magnet_links(&movie);
        assert_eq!(links.keys().copied().collect::<Vec<_>>(), vec![Quality::Q720p, Quality::Q1080p]);
        assert!(links[&Quality::Q1080p].contains("btih:CCCC"));
        assert_eq!(
            links[&Quality::Q1080p],
            client.magnet_link(&movie, Quality::Q1080p).unwrap()
        );
    }

    #[test]
    fn test_magnet_links_skip_unlisted_quality() {
        let (client, _) = client(StubFetcher::default());
        let movie = movie(vec![torrent("4K", "AAAA"), torrent("720p", "BBBB")]);

        let links = client.magnet_links(&movie);
        assert_eq!(links.keys().copied().collect::<Vec<_>>(), vec![Quality::Q720p]);
        assert!(links[&Quality::Q720p].contains("btih:BBBB"));
    }
}
