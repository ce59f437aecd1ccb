use scraper::{ElementRef, Html};

use crate::app::{Result, YtsError};
use crate::domain::{
    CommentsPageMeta, HomePageContentData, MovieReviewsData, SiteMovie, SiteMovieComment,
    SiteMovieDirector, SiteUpcomingMovie, TrendingMoviesData,
};
use crate::extract::listing::{scrape_each, ListingError};
use crate::extract::records::scrape_movie_id;
use crate::extract::selectors::{self as css, Css};
use crate::extract::{scrape_listing, select_section, Scrape};
use crate::validate::{is_absolute_url, ValidationErrors, Validator};

fn validated<T>(result: std::result::Result<T, ValidationErrors>) -> Result<T> {
    result.map_err(|errors| {
        tracing::debug!("{}", errors);
        YtsError::Validation(errors)
    })
}

/// First element matching `css`, or a structural failure.
fn first<'a>(scope: ElementRef<'a>, css: &'static Css) -> Result<ElementRef<'a>> {
    select_section(scope, css, 1)?
        .into_iter()
        .next()
        .ok_or(YtsError::NoElements {
            selector: css.source,
        })
}

pub fn trending_movies(document: &Html) -> Result<TrendingMoviesData> {
    let movies = scrape_listing::<SiteMovie>(
        document.root_element(),
        "trending",
        &css::TRENDING,
        1,
    )?;
    Ok(TrendingMoviesData { movies })
}

/// Checks all three sections exist before extracting any of them, then
/// reports item failures of every section together.
pub fn home_page_content(document: &Html) -> Result<HomePageContentData> {
    let root = document.root_element();
    let popular = select_section(root, &css::POPULAR, 1)?;
    let latest = select_section(root, &css::LATEST, 1)?;
    let upcoming = select_section(root, &css::UPCOMING, 1)?;

    let popular = scrape_each::<SiteMovie>("popular", &popular);
    let latest = scrape_each::<SiteMovie>("latest", &latest);
    let upcoming = scrape_each::<SiteUpcomingMovie>("upcoming", &upcoming);

    match (popular, latest, upcoming) {
        (Ok(popular), Ok(latest), Ok(upcoming)) => Ok(HomePageContentData {
            popular,
            latest,
            upcoming,
        }),
        (popular, latest, upcoming) => {
            let mut failures = ListingError::default();
            for err in [popular.err(), latest.err(), upcoming.err()]
                .into_iter()
                .flatten()
            {
                failures.extend(err);
            }
            tracing::debug!("{}", failures);
            Err(YtsError::Listing(failures))
        }
    }
}

/// The first director listed on a movie page.
pub fn movie_director(document: &Html) -> Result<SiteMovieDirector> {
    let fragment = first(document.root_element(), &css::DIRECTOR)?;
    validated(SiteMovieDirector::scrape(fragment))
}

/// Reviews of a movie page plus the link to the full review list, which
/// must be an absolute URL.
pub fn movie_reviews(document: &Html) -> Result<MovieReviewsData> {
    let root = document.root_element();
    let reviews = scrape_listing(root, "reviews", &css::REVIEWS, 1)?;

    let more = first(root, &css::REVIEWS_MORE)?;
    let reviews_more_link = more.value().attr("href").map(str::trim).unwrap_or_default();
    if !is_absolute_url(reviews_more_link) {
        let err = YtsError::InvalidAttribute {
            selector: css::REVIEWS_MORE.source,
            attribute: "href",
        };
        tracing::debug!("{}", err);
        return Err(err);
    }

    Ok(MovieReviewsData {
        reviews,
        reviews_more_link: reviews_more_link.to_string(),
    })
}

pub fn comments_meta(document: &Html) -> Result<CommentsPageMeta> {
    let root = document.root_element();
    first(root, &css::MOVIE_INFO)?;
    validated(CommentsPageMeta::scrape(root))
}

/// Numeric id of the movie a page describes.
pub fn movie_id(document: &Html) -> Result<u32> {
    let root = document.root_element();
    first(root, &css::MOVIE_INFO)?;

    let mut v = Validator::new("MovieInfo");
    let id = scrape_movie_id(root, &mut v);
    validated(v.finish()).and_then(|()| {
        id.ok_or(YtsError::InvalidAttribute {
            selector: css::MOVIE_INFO.source,
            attribute: "data-movie-id",
        })
    })
}

/// Comments of one thread page. An empty page is not an error.
pub fn movie_comments(fragment: &Html) -> Result<Vec<SiteMovieComment>> {
    scrape_listing(fragment.root_element(), "comments", &css::COMMENTS, 0)
}
