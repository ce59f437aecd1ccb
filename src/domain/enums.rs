//! Closed enumerations shared by scraped records, API payloads and filters.
//!
//! Every enum serializes as the exact string the YTS site uses, and parses
//! case-sensitively through [`FromStr`]. A value outside the set is an
//! [`UnknownVariant`] error, which the validation layer reports as a
//! `membership` rule failure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a string names no member of a closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{value:?} is not a valid {kind}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// A fixed set of string-named members.
pub trait ClosedSet: Copy + 'static {
    /// Name used in error messages.
    const KIND: &'static str;
    const MEMBERS: &'static [Self];

    fn name(self) -> &'static str;

    /// Space separated member list, e.g. `asc desc`.
    fn one_of() -> String {
        Self::MEMBERS
            .iter()
            .map(|member| member.name())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn parse_member<T: ClosedSet>(value: &str) -> Result<T, UnknownVariant> {
    T::MEMBERS
        .iter()
        .copied()
        .find(|member| member.name() == value)
        .ok_or_else(|| UnknownVariant {
            kind: T::KIND,
            value: value.to_string(),
        })
}

macro_rules! closed_set_impls {
    ($ty:ty, $kind:literal) => {
        impl ClosedSet for $ty {
            const KIND: &'static str = $kind;
            const MEMBERS: &'static [Self] = &<$ty>::ALL;

            fn name(self) -> &'static str {
                self.as_str()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_member(s)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Genre
// ---------------------------------------------------------------------------

/// Movie genre, spelled the way movie cards render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Biography,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    #[serde(rename = "Film-Noir")]
    FilmNoir,
    #[serde(rename = "Game-Show")]
    GameShow,
    History,
    Horror,
    Music,
    Musical,
    Mystery,
    News,
    #[serde(rename = "Reality-TV")]
    RealityTv,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Sport,
    #[serde(rename = "Talk-Show")]
    TalkShow,
    Thriller,
    War,
    Western,
}

impl Genre {
    pub const ALL: [Self; 26] = [
        Self::Action,
        Self::Adventure,
        Self::Animation,
        Self::Biography,
        Self::Comedy,
        Self::Crime,
        Self::Documentary,
        Self::Drama,
        Self::Family,
        Self::Fantasy,
        Self::FilmNoir,
        Self::GameShow,
        Self::History,
        Self::Horror,
        Self::Music,
        Self::Musical,
        Self::Mystery,
        Self::News,
        Self::RealityTv,
        Self::Romance,
        Self::SciFi,
        Self::Sport,
        Self::TalkShow,
        Self::Thriller,
        Self::War,
        Self::Western,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Animation => "Animation",
            Self::Biography => "Biography",
            Self::Comedy => "Comedy",
            Self::Crime => "Crime",
            Self::Documentary => "Documentary",
            Self::Drama => "Drama",
            Self::Family => "Family",
            Self::Fantasy => "Fantasy",
            Self::FilmNoir => "Film-Noir",
            Self::GameShow => "Game-Show",
            Self::History => "History",
            Self::Horror => "Horror",
            Self::Music => "Music",
            Self::Musical => "Musical",
            Self::Mystery => "Mystery",
            Self::News => "News",
            Self::RealityTv => "Reality-TV",
            Self::Romance => "Romance",
            Self::SciFi => "Sci-Fi",
            Self::Sport => "Sport",
            Self::TalkShow => "Talk-Show",
            Self::Thriller => "Thriller",
            Self::War => "War",
            Self::Western => "Western",
        }
    }

    /// The lower-case spelling the `list_movies.json` endpoint expects.
    pub fn query_value(self) -> String {
        self.as_str().to_ascii_lowercase()
    }
}

closed_set_impls!(Genre, "genre");

// ---------------------------------------------------------------------------
// Quality
// ---------------------------------------------------------------------------

/// Resolution tag of a torrent or an upcoming release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "480p")]
    Q480p,
    #[serde(rename = "720p")]
    Q720p,
    #[serde(rename = "1080p")]
    Q1080p,
    #[serde(rename = "1080p.x265")]
    Q1080pX265,
    #[serde(rename = "2160p")]
    Q2160p,
    #[serde(rename = "3D")]
    Q3D,
}

impl Quality {
    pub const ALL: [Self; 6] = [
        Self::Q480p,
        Self::Q720p,
        Self::Q1080p,
        Self::Q1080pX265,
        Self::Q2160p,
        Self::Q3D,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Q480p => "480p",
            Self::Q720p => "720p",
            Self::Q1080p => "1080p",
            Self::Q1080pX265 => "1080p.x265",
            Self::Q2160p => "2160p",
            Self::Q3D => "3D",
        }
    }
}

closed_set_impls!(Quality, "quality");

// ---------------------------------------------------------------------------
// SortBy / OrderBy
// ---------------------------------------------------------------------------

/// Sort key accepted by `list_movies.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Title,
    Year,
    Rating,
    Peers,
    Seeds,
    DownloadCount,
    LikeCount,
    #[default]
    DateAdded,
}

impl SortBy {
    pub const ALL: [Self; 8] = [
        Self::Title,
        Self::Year,
        Self::Rating,
        Self::Peers,
        Self::Seeds,
        Self::DownloadCount,
        Self::LikeCount,
        Self::DateAdded,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Year => "year",
            Self::Rating => "rating",
            Self::Peers => "peers",
            Self::Seeds => "seeds",
            Self::DownloadCount => "download_count",
            Self::LikeCount => "like_count",
            Self::DateAdded => "date_added",
        }
    }
}

closed_set_impls!(SortBy, "sort key");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    Asc,
    #[default]
    Desc,
}

impl OrderBy {
    pub const ALL: [Self; 2] = [Self::Asc, Self::Desc];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

closed_set_impls!(OrderBy, "order");
