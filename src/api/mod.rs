//! # API Module
//!
//! HTTP handlers of the gateway. Every handler follows the same pipeline:
//!
//! ```text
//! Query<Params> ── validate ── SaavnClient::call ── raw=true? ── payload::* ── Envelope
//! ```
//!
//! ## Endpoints
//!
//! - [`home`], [`health`] - service banner and liveness
//! - [`modules`] - home and browse screen sections
//! - [`search`] - autocomplete, typed and top searches
//! - [`song`], [`album`], [`playlist`], [`artist`] - entity details and recommendations
//! - [`radio`] - station creation and station songs
//! - [`podcast`] - shows, episodes and show listings
//! - [`trending`] and [`get`] - editorial listings, mixes, labels and lyrics
//! - [`genre`], [`language`] - listings by genre or language
//! - [`download`] - decrypted download links of a song
//!
//! Errors are [`ApiError`] values; their [`IntoResponse`](axum::response::IntoResponse)
//! impl produces the `Failed`/`Error` envelopes. Cross-cutting behaviour
//! (timeout, cache, camelCase output) lives in [`middleware`].

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    payload::{
        artist::{ArtistAlbums, ArtistSongs},
        get::{FeaturedPlaylists, MegaMenu},
        modules::Modules,
        radio::RadioSongs,
        search::{AllSearch, SearchResults},
    },
    saavn::{SaavnClient, decode, query::ApiVersion},
    types::Envelope,
};

mod album;
mod artist;
mod download;
mod error;
mod get;
mod health;
mod home;
pub mod middleware;
mod modules;
mod params;
mod playlist;
mod podcast;
mod radio;
mod search;
mod song;
mod trending;
pub mod validate;

pub use album::{album, album_recommend, album_same_year};
pub use artist::{artist, artist_albums, artist_songs, artist_top_songs};
pub use download::download;
pub use error::ApiError;
pub use get::{
    charts, featured_playlists, featured_stations, label, lyrics, mega_menu, mix, top_albums,
    top_artists,
};
pub use health::health;
pub use home::{home, not_found};
pub use modules::{browse_modules, modules};
pub use params::Params;
pub use playlist::{playlist, playlist_recommend};
pub use podcast::{
    featured_podcasts, new_podcasts, podcast, podcast_category, podcast_episode,
    podcast_episodes, top_podcasts, trending_podcasts,
};
pub use radio::{create_station, station_songs};
pub use search::{genre, search_all, search_entity, search_podcasts, search_top};
pub use song::{song, song_recommend};
pub use trending::{language, trending, trending_category};

/// One upstream call as a handler describes it.
pub(crate) struct Upstream<'a> {
    pub call: &'a str,
    pub overrides: Vec<(&'a str, String)>,
    pub version: ApiVersion,
    pub not_found: &'a str,
}

impl<'a> Upstream<'a> {
    pub fn new(call: &'a str, not_found: &'a str) -> Self {
        Self {
            call,
            overrides: Vec::new(),
            version: ApiVersion::V4,
            not_found,
        }
    }

    pub fn param(mut self, key: &'a str, value: impl Into<String>) -> Self {
        self.overrides.push((key, value.into()));
        self
    }

    pub fn legacy(mut self) -> Self {
        self.version = ApiVersion::Legacy;
        self
    }

    pub async fn fetch(&self, client: &SaavnClient) -> Result<Value, ApiError> {
        client
            .call(self.call, &self.overrides, self.version)
            .await
            .map_err(|e| ApiError::from_fetch(e, self.not_found))
    }
}

/// The upstream document, untouched and without an envelope.
pub(crate) fn raw_json(value: Value) -> Response {
    Json(value).into_response()
}

pub(crate) fn success<T: Serialize>(message: &str, data: T) -> Response {
    Json(Envelope::success(message, data)).into_response()
}

/// Finishes a handler: the upstream document verbatim when `raw` is set,
/// otherwise decoded into `R`, normalized and enveloped.
pub(crate) fn reply<R, T>(
    value: Value,
    params: &Params,
    message: &str,
    normalize: impl FnOnce(&R) -> Result<T, ApiError>,
) -> Result<Response, ApiError>
where
    R: DeserializeOwned,
    T: Serialize,
{
    if params.raw() {
        return Ok(raw_json(value));
    }
    let raw: R = decode(value)?;
    let data = normalize(&raw)?;
    Ok(success(message, data))
}

/// Truncates a list to the request's `limit`, if any.
pub(crate) fn limited<T>(mut items: Vec<T>, params: &Params) -> Vec<T> {
    if let Some(limit) = params.limit() {
        items.truncate(limit);
    }
    items
}

/// Normalized output made of items, possibly none.
pub(crate) trait Listing {
    fn is_empty(&self) -> bool;
}

impl<T> Listing for Vec<T> {
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> Listing for SearchResults<T> {
    fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl Listing for AllSearch {
    fn is_empty(&self) -> bool {
        [
            &self.albums,
            &self.songs,
            &self.playlists,
            &self.artists,
            &self.top_query,
            &self.shows,
        ]
        .iter()
        .all(|section| section.data.is_empty())
    }
}

impl Listing for FeaturedPlaylists {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Listing for ArtistSongs {
    fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl Listing for ArtistAlbums {
    fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}

impl Listing for RadioSongs {
    fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl Listing for Modules {
    fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Listing for MegaMenu {
    fn is_empty(&self) -> bool {
        self.sections.values().all(Vec::is_empty)
    }
}

/// A listing that normalized to nothing is answered like a missing entity:
/// 404 with the route's `not_found` message.
pub(crate) fn found<L: Listing>(listing: L, not_found: &str) -> Result<L, ApiError> {
    if listing.is_empty() {
        return Err(ApiError::NotFound(not_found.to_string()));
    }
    Ok(listing)
}
