//! Fixed structural selectors for YTS markup.
//!
//! Page-level selectors are matched against a whole document; record-level
//! ones are relative to a single fragment.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

/// A CSS selector compiled on first use, keeping its source for error
/// messages.
pub struct Css {
    pub source: &'static str,
    selector: LazyLock<Selector, fn() -> Selector>,
}

impl Css {
    const fn new(source: &'static str, init: fn() -> Selector) -> Self {
        Self {
            source,
            selector: LazyLock::new(init),
        }
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

fn compile(source: &'static str) -> Selector {
    Selector::parse(source).expect("selector literals are valid CSS")
}

macro_rules! css {
    ($($name:ident = $source:literal;)+) => {
        $(pub static $name: Css = Css::new($source, || compile($source));)+

        #[cfg(test)]
        fn all() -> Vec<&'static Css> {
            vec![$(&$name),+]
        }
    };
}

css! {
    // pages
    TRENDING = "div.browse-movie-wrap";
    POPULAR = "div#popular-downloads div.browse-movie-wrap";
    LATEST = "div.content-dark div.home-movies div.browse-movie-wrap";
    UPCOMING = "div.content-dark ~ div.home-content div.browse-movie-wrap";
    DIRECTOR = "div#movie-content div#movie-sub-info div#crew div.directors";
    REVIEWS = "div#movie-reviews div.review";
    REVIEWS_MORE = "div#movie-reviews a.more-reviews";
    MOVIE_INFO = "div#movie-info";
    COMMENT_COUNT = "div#movie-comments span#comment-count";
    COMMENTS = "div.comment";

    // movie cards
    MOVIE_BOTTOM = "div.browse-movie-bottom";
    MOVIE_LINK = "a.browse-movie-link";
    MOVIE_IMAGE = "a.browse-movie-link img";
    MOVIE_RATING = "a.browse-movie-link h4.rating";
    MOVIE_GENRE = "a.browse-movie-link h4:not(.rating)";
    MOVIE_TITLE = "div.browse-movie-bottom a.browse-movie-title";
    MOVIE_YEAR = "div.browse-movie-bottom div.browse-movie-year";
    MOVIE_PROGRESS = "div.browse-movie-year progress";

    // director
    DIRECTOR_THUMB = "div.list-cast a.avatar-thumb img";
    DIRECTOR_NAME = "div.list-cast-info a.name-cast span span";

    // reviews
    REVIEW_AUTHOR = "div.review-properties span.review-author";
    REVIEW_RATING = "div.review-properties span.review-rating";
    REVIEW_TITLE = "h4";
    REVIEW_CONTENT = "article";

    // comments
    COMMENT_AVATAR = "div.comment-avatar img";
    COMMENT_AUTHOR = "div.comment-info a.comment-author";
    COMMENT_TIME = "div.comment-info span.comment-time";
    COMMENT_TEXT = "div.comment-text";
    COMMENT_LIKES = "span.comment-likes";
}

/// Concatenated, trimmed text of every match. Empty when nothing matches.
pub fn text(scope: ElementRef<'_>, css: &Css) -> String {
    scope
        .select(css.selector())
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Like [`text`] but distinguishes "no element" from "empty element".
pub fn text_opt(scope: ElementRef<'_>, css: &Css) -> Option<String> {
    let mut matches = scope.select(css.selector()).peekable();
    matches.peek()?;
    Some(
        matches
            .flat_map(|el| el.text())
            .collect::<String>()
            .trim()
            .to_string(),
    )
}

/// Trimmed attribute of the first match. Empty when the element or the
/// attribute is missing.
pub fn attr(scope: ElementRef<'_>, css: &Css, name: &str) -> String {
    scope
        .select(css.selector())
        .next()
        .and_then(|el| el.value().attr(name))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Text of each match separately, in document order.
pub fn each_text(scope: ElementRef<'_>, css: &Css) -> Vec<String> {
    scope
        .select(css.selector())
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_every_selector_compiles() {
        for css in all() {
            let _ = css.selector();
        }
    }

    #[test]
    fn test_text_and_attr_helpers() {
        let html = Html::parse_fragment(
            r#"<div class="comment">
                <div class="comment-info"><a class="comment-author" href="/u/1">  ytswatcher </a></div>
                <div class="comment-avatar"><img src=" https://img.yts.mx/a.jpg "></div>
            </div>"#,
        );
        let root = html.root_element();

        assert_eq!(text(root, &COMMENT_AUTHOR), "ytswatcher");
        assert_eq!(attr(root, &COMMENT_AVATAR, "src"), "https://img.yts.mx/a.jpg");
        assert_eq!(attr(root, &COMMENT_AVATAR, "alt"), "");
        assert_eq!(text(root, &COMMENT_TEXT), "");
        assert_eq!(text_opt(root, &COMMENT_LIKES), None);
    }

    #[test]
    fn test_each_text_keeps_order() {
        let html = Html::parse_fragment(
            r#"<a class="browse-movie-link"><h4 class="rating">7.6 / 10</h4><h4>Action</h4><h4>Comedy</h4></a>"#,
        );
        assert_eq!(
            each_text(html.root_element(), &MOVIE_GENRE),
            vec!["Action", "Comedy"]
        );
    }
}
