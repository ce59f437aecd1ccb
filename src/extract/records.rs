use scraper::ElementRef;

use crate::domain::{
    CommentsPageMeta, Genre, Quality, SiteMovie, SiteMovieBase, SiteMovieComment,
    SiteMovieDirector, SiteMovieReview, SiteUpcomingMovie,
};
use crate::extract::selectors::{self as css, attr, each_text, text, text_opt};
use crate::extract::Scrape;
use crate::validate::{ValidationErrors, Validator};

const MAX_PROGRESS: i64 = 100;

/// Fields common to every movie card, validated under the caller's record
/// name so a variant reports base and own fields together.
fn scrape_base(fragment: ElementRef<'_>, v: &mut Validator) -> SiteMovieBase {
    let title = text(fragment, &css::MOVIE_TITLE);
    let year_text = text(fragment, &css::MOVIE_YEAR);
    let link = attr(fragment, &css::MOVIE_LINK, "href");
    let image = attr(fragment, &css::MOVIE_IMAGE, "src");

    v.required("title", &title);
    let year = v
        .integer::<i32>("year", &year_text)
        .filter(|year| v.range("year", i64::from(*year), 1, i64::from(i32::MAX)))
        .unwrap_or_default();
    v.url("link", &link);
    v.required("image", &image);

    let genres = each_text(fragment, &css::MOVIE_GENRE)
        .iter()
        .enumerate()
        .filter_map(|(i, genre)| v.member::<Genre>(&format!("genres[{i}]"), genre))
        .collect();

    SiteMovieBase {
        title,
        year,
        link,
        image,
        genres,
    }
}

impl Scrape for SiteMovie {
    const SHAPE: &'static str = "SiteMovie";

    fn scrape(fragment: ElementRef<'_>) -> Result<Self, ValidationErrors> {
        let mut v = Validator::new(Self::SHAPE);
        let base = scrape_base(fragment, &mut v);

        let rating = text(fragment, &css::MOVIE_RATING);
        let rating = if rating.is_empty() {
            None
        } else {
            v.rating("rating", &rating);
            Some(rating)
        };

        v.finish_with(Self { base, rating })
    }
}

impl Scrape for SiteUpcomingMovie {
    const SHAPE: &'static str = "SiteUpcomingMovie";

    fn scrape(fragment: ElementRef<'_>) -> Result<Self, ValidationErrors> {
        let mut v = Validator::new(Self::SHAPE);
        let base = scrape_base(fragment, &mut v);

        let raw_progress = attr(fragment, &css::MOVIE_PROGRESS, "value");
        let progress = v
            .integer::<i64>("progress", &raw_progress)
            .filter(|progress| v.range("progress", *progress, 0, MAX_PROGRESS))
            .and_then(|progress| u8::try_from(progress).ok());

        // "<year> <quality>"
        let year_text = text(fragment, &css::MOVIE_YEAR);
        let quality_text = year_text.split_whitespace().nth(1).unwrap_or_default();
        let quality = v.member::<Quality>("quality", quality_text);

        match (progress, quality) {
            (Some(progress), Some(quality)) if v.is_clean() => Ok(Self {
                base,
                progress,
                quality,
            }),
            _ => Err(v.into_errors()),
        }
    }
}

impl Scrape for SiteMovieDirector {
    const SHAPE: &'static str = "SiteMovieDirector";

    fn scrape(fragment: ElementRef<'_>) -> Result<Self, ValidationErrors> {
        let mut v = Validator::new(Self::SHAPE);
        let name = text(fragment, &css::DIRECTOR_NAME);
        let url_small_image = attr(fragment, &css::DIRECTOR_THUMB, "src");

        v.required("name", &name);
        v.url("url_small_image", &url_small_image);

        v.finish_with(Self {
            name,
            url_small_image,
        })
    }
}

impl Scrape for SiteMovieReview {
    const SHAPE: &'static str = "SiteMovieReview";

    fn scrape(fragment: ElementRef<'_>) -> Result<Self, ValidationErrors> {
        let mut v = Validator::new(Self::SHAPE);
        let author = text(fragment, &css::REVIEW_AUTHOR);
        let title = text(fragment, &css::REVIEW_TITLE);
        let content = text(fragment, &css::REVIEW_CONTENT);
        let rating = text(fragment, &css::REVIEW_RATING);

        v.required("author", &author);
        v.required("title", &title);
        v.required("content", &content);
        if v.required("rating", &rating) {
            v.rating("rating", &rating);
        }

        v.finish_with(Self {
            author,
            title,
            content,
            rating,
        })
    }
}

impl Scrape for SiteMovieComment {
    const SHAPE: &'static str = "SiteMovieComment";

    fn scrape(fragment: ElementRef<'_>) -> Result<Self, ValidationErrors> {
        let mut v = Validator::new(Self::SHAPE);
        let author = text(fragment, &css::COMMENT_AUTHOR);
        let avatar_url = attr(fragment, &css::COMMENT_AVATAR, "src");
        let timestamp = text(fragment, &css::COMMENT_TIME);
        let content = text(fragment, &css::COMMENT_TEXT);
        let likes = text_opt(fragment, &css::COMMENT_LIKES);

        v.required("author", &author);
        v.url("avatar_url", &avatar_url);
        v.required("timestamp", &timestamp);
        v.required("content", &content);
        let like_count = v.integer_or("like_count", likes.as_deref(), 0);

        v.finish_with(Self {
            author,
            avatar_url,
            timestamp,
            content,
            like_count,
        })
    }
}

/// Reads `data-movie-id` off the movie info block; zero is not an id.
pub(crate) fn scrape_movie_id(root: ElementRef<'_>, v: &mut Validator) -> Option<u32> {
    let raw = attr(root, &css::MOVIE_INFO, "data-movie-id");
    v.integer::<u32>("movie_id", &raw)
        .filter(|id| v.range("movie_id", i64::from(*id), 1, i64::from(u32::MAX)))
}

impl Scrape for CommentsPageMeta {
    const SHAPE: &'static str = "CommentsPageMeta";

    /// Expects the movie page root rather than a single fragment.
    fn scrape(root: ElementRef<'_>) -> Result<Self, ValidationErrors> {
        let mut v = Validator::new(Self::SHAPE);
        let movie_id = scrape_movie_id(root, &mut v);

        let count_text = text(root, &css::COMMENT_COUNT);
        let total_count = v.integer::<u32>("total_count", &count_text);

        match (movie_id, total_count) {
            (Some(movie_id), Some(total_count)) if v.is_clean() => Ok(Self {
                movie_id,
                total_count,
            }),
            _ => Err(v.into_errors()),
        }
    }
}
