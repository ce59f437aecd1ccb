pub mod api;
pub mod enums;
pub mod site;
pub mod torrent;

pub use api::{
    ApiResponse, BaseResponse, Cast, Meta, Movie, MovieDetails, MovieDetailsData,
    MovieDetailsResponse, MoviePartial, MovieSuggestionsData, MovieSuggestionsResponse,
    SearchMoviesData, SearchMoviesResponse, Torrent,
};
pub use enums::{ClosedSet, Genre, OrderBy, Quality, SortBy, UnknownVariant};
pub use site::{
    CommentsPageMeta, HomePageContentData, HomePageContentResponse, MovieAdditionalDetailsData,
    MovieAdditionalDetailsResponse, MovieCommentsData, MovieCommentsResponse, MovieDirectorData,
    MovieDirectorResponse, MovieReviewsData, MovieReviewsResponse, SiteMovie, SiteMovieBase,
    SiteMovieComment, SiteMovieDirector, SiteMovieReview, SiteResponse, SiteUpcomingMovie,
    TrendingMoviesData, TrendingMoviesResponse,
};
pub use torrent::{magnet_uri, TorrentInfo, TorrentInfoGetter};
