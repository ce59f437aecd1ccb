use url::form_urlencoded;

use crate::domain::api::Torrent;
use crate::domain::Quality;

/// Title and torrents of anything that can produce magnet links.
#[derive(Debug, Clone, Copy)]
pub struct TorrentInfo<'a> {
    pub movie_title: &'a str,
    pub torrents: &'a [Torrent],
}

/// Implemented by every payload that carries torrents, so magnet synthesis
/// accepts both list entries and movie details.
pub trait TorrentInfoGetter {
    fn torrent_info(&self) -> TorrentInfo<'_>;
}

impl TorrentInfo<'_> {
    /// Last listed torrent of the given quality.
    pub fn find(&self, quality: Quality) -> Option<&Torrent> {
        self.torrents.iter().rev().find(|t| t.quality == quality.as_str())
    }
}

/// `magnet:?xt=urn:btih:<hash>&dn=<name>&tr=...` for one torrent.
///
/// The display name is `<title>+[<quality>]+[<DOMAIN>]`, query-escaped.
pub fn magnet_uri(movie_title: &str, torrent: &Torrent, domain: &str, trackers: &[String]) -> String {
    let name = format!(
        "{}+[{}]+[{}]",
        movie_title,
        torrent.quality,
        domain.to_uppercase()
    );

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("dn", &name);
    for tracker in trackers {
        query.append_pair("tr", tracker);
    }

    format!("magnet:?xt=urn:btih:{}&{}", torrent.hash, query.finish())
}
