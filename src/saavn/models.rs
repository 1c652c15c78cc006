//! Raw response shapes of the provider API.
//!
//! Every struct is `#[serde(default)]` and every field goes through one of
//! the tolerant helpers in [`super::de`], so decoding an upstream record
//! never fails on missing or oddly typed fields. Whether a record is usable
//! (e.g. has an id) is decided later by the normalizers.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::de;
use crate::types::Link;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtistMiniRaw {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub name: String,
    #[serde(deserialize_with = "de::string")]
    pub role: String,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(deserialize_with = "de::string")]
    pub perma_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtistMapRaw {
    #[serde(deserialize_with = "de::lenient")]
    pub primary_artists: Vec<ArtistMiniRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub featured_artists: Vec<ArtistMiniRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub artists: Vec<ArtistMiniRaw>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RightsRaw {
    #[serde(deserialize_with = "de::string")]
    pub code: String,
    #[serde(deserialize_with = "de::string")]
    pub cacheable: String,
    #[serde(deserialize_with = "de::string")]
    pub delete_cached_object: String,
    #[serde(deserialize_with = "de::string")]
    pub reason: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SongMoreInfoRaw {
    #[serde(deserialize_with = "de::string")]
    pub music: String,
    #[serde(deserialize_with = "de::string")]
    pub album_id: String,
    #[serde(deserialize_with = "de::string")]
    pub album: String,
    #[serde(deserialize_with = "de::string")]
    pub album_url: String,
    #[serde(deserialize_with = "de::string")]
    pub label: String,
    #[serde(deserialize_with = "de::string")]
    pub label_url: String,
    #[serde(deserialize_with = "de::string")]
    pub origin: String,
    #[serde(deserialize_with = "de::string")]
    pub is_dolby_content: String,
    #[serde(rename = "320kbps", deserialize_with = "de::string")]
    pub has_320kbps: String,
    #[serde(deserialize_with = "de::string")]
    pub encrypted_media_url: String,
    #[serde(deserialize_with = "de::number")]
    pub duration: u64,
    #[serde(deserialize_with = "de::lenient")]
    pub rights: Option<RightsRaw>,
    #[serde(deserialize_with = "de::string")]
    pub has_lyrics: String,
    #[serde(deserialize_with = "de::string")]
    pub lyrics_id: String,
    #[serde(deserialize_with = "de::string")]
    pub lyrics_snippet: String,
    #[serde(deserialize_with = "de::string")]
    pub starred: String,
    #[serde(deserialize_with = "de::string")]
    pub copyright_text: String,
    #[serde(rename = "artistMap", deserialize_with = "de::lenient")]
    pub artist_map: ArtistMapRaw,
    #[serde(deserialize_with = "de::string")]
    pub release_date: String,
    #[serde(deserialize_with = "de::string")]
    pub vcode: String,
    #[serde(deserialize_with = "de::string")]
    pub vlink: String,
    #[serde(deserialize_with = "de::string")]
    pub triller_available: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SongRaw {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub subtitle: String,
    #[serde(deserialize_with = "de::string")]
    pub header_desc: String,
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(deserialize_with = "de::string")]
    pub perma_url: String,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(deserialize_with = "de::string")]
    pub language: String,
    #[serde(deserialize_with = "de::number")]
    pub year: u64,
    #[serde(deserialize_with = "de::number")]
    pub play_count: u64,
    #[serde(deserialize_with = "de::string")]
    pub explicit_content: String,
    #[serde(deserialize_with = "de::number")]
    pub list_count: u64,
    #[serde(deserialize_with = "de::string")]
    pub list_type: String,
    #[serde(deserialize_with = "de::string")]
    pub list: String,
    #[serde(deserialize_with = "de::lenient")]
    pub more_info: SongMoreInfoRaw,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModuleRaw {
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub subtitle: String,
    #[serde(deserialize_with = "de::string")]
    pub source: String,
    #[serde(deserialize_with = "de::number")]
    pub position: u64,
    #[serde(deserialize_with = "de::lenient")]
    pub source_params: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SongModulesRaw {
    #[serde(deserialize_with = "de::lenient")]
    pub reco: Option<ModuleRaw>,
    #[serde(rename = "currentlyTrending", deserialize_with = "de::lenient")]
    pub currently_trending: Option<ModuleRaw>,
    #[serde(rename = "songsBysameArtists", deserialize_with = "de::lenient")]
    pub songs_by_same_artists: Option<ModuleRaw>,
    #[serde(rename = "songsBysameActors", deserialize_with = "de::lenient")]
    pub songs_by_same_actors: Option<ModuleRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub artists: Option<ModuleRaw>,
}

/// `song.getDetails` and `webapi.get?type=song`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SongDetailsRaw {
    #[serde(deserialize_with = "de::lenient")]
    pub songs: Vec<SongRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub modules: Option<SongModulesRaw>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlbumMoreInfoRaw {
    #[serde(rename = "artistMap", deserialize_with = "de::lenient")]
    pub artist_map: ArtistMapRaw,
    #[serde(deserialize_with = "de::number")]
    pub song_count: u64,
    #[serde(deserialize_with = "de::string")]
    pub copyright_text: String,
    #[serde(deserialize_with = "de::string")]
    pub is_dolby_content: String,
    #[serde(deserialize_with = "de::string")]
    pub label_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlbumRaw {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub subtitle: String,
    #[serde(deserialize_with = "de::string")]
    pub header_desc: String,
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(deserialize_with = "de::string")]
    pub perma_url: String,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(deserialize_with = "de::string")]
    pub language: String,
    #[serde(deserialize_with = "de::number")]
    pub year: u64,
    #[serde(deserialize_with = "de::number")]
    pub play_count: u64,
    #[serde(deserialize_with = "de::string")]
    pub explicit_content: String,
    #[serde(deserialize_with = "de::number")]
    pub list_count: u64,
    #[serde(deserialize_with = "de::string")]
    pub list_type: String,
    #[serde(deserialize_with = "de::lenient")]
    pub list: Vec<SongRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub more_info: AlbumMoreInfoRaw,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaylistMoreInfoRaw {
    #[serde(deserialize_with = "de::string")]
    pub uid: String,
    #[serde(deserialize_with = "de::string")]
    pub firstname: String,
    #[serde(deserialize_with = "de::string")]
    pub lastname: String,
    #[serde(deserialize_with = "de::string")]
    pub username: String,
    #[serde(deserialize_with = "de::string")]
    pub is_dolby_content: String,
    #[serde(deserialize_with = "de::string")]
    pub last_updated: String,
    #[serde(deserialize_with = "de::number")]
    pub follower_count: u64,
    #[serde(deserialize_with = "de::number")]
    pub fan_count: u64,
    #[serde(deserialize_with = "de::number")]
    pub share: u64,
    #[serde(deserialize_with = "de::number")]
    pub video_count: u64,
    #[serde(deserialize_with = "de::number")]
    pub song_count: u64,
    #[serde(deserialize_with = "de::lenient")]
    pub artists: Vec<ArtistMiniRaw>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaylistRaw {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub subtitle: String,
    #[serde(deserialize_with = "de::string")]
    pub header_desc: String,
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(deserialize_with = "de::string")]
    pub perma_url: String,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(deserialize_with = "de::string")]
    pub language: String,
    #[serde(deserialize_with = "de::number")]
    pub year: u64,
    #[serde(deserialize_with = "de::number")]
    pub play_count: u64,
    #[serde(deserialize_with = "de::string")]
    pub explicit_content: String,
    #[serde(deserialize_with = "de::number")]
    pub list_count: u64,
    #[serde(deserialize_with = "de::string")]
    pub list_type: String,
    #[serde(deserialize_with = "de::lenient")]
    pub list: Vec<SongRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub more_info: PlaylistMoreInfoRaw,
}

/// Compact record used by charts, top searches, featured lists and the
/// playlists embedded in artist pages.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MiniRaw {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub subtitle: String,
    #[serde(deserialize_with = "de::string")]
    pub header_desc: String,
    #[serde(deserialize_with = "de::string")]
    pub description: String,
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(deserialize_with = "de::string")]
    pub perma_url: String,
    #[serde(deserialize_with = "de::string")]
    pub language: String,
    #[serde(deserialize_with = "de::string")]
    pub explicit_content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimilarArtistRaw {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub name: String,
    #[serde(deserialize_with = "de::string")]
    pub image_url: String,
    #[serde(deserialize_with = "de::string")]
    pub perma_url: String,
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(rename = "dominantType", deserialize_with = "de::string")]
    pub dominant_type: String,
    #[serde(rename = "isRadioPresent", deserialize_with = "de::string")]
    pub is_radio_present: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BioRaw {
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub text: String,
    #[serde(deserialize_with = "de::number")]
    pub sequence: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtistRaw {
    #[serde(rename = "artistId", deserialize_with = "de::string")]
    pub artist_id: String,
    #[serde(deserialize_with = "de::string")]
    pub name: String,
    #[serde(deserialize_with = "de::string")]
    pub subtitle: String,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(deserialize_with = "de::number")]
    pub follower_count: u64,
    #[serde(deserialize_with = "de::number")]
    pub fan_count: u64,
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(rename = "isVerified", deserialize_with = "de::string")]
    pub is_verified: String,
    #[serde(rename = "dominantLanguage", deserialize_with = "de::string")]
    pub dominant_language: String,
    #[serde(rename = "dominantType", deserialize_with = "de::string")]
    pub dominant_type: String,
    #[serde(rename = "topSongs", deserialize_with = "de::lenient")]
    pub top_songs: Vec<SongRaw>,
    #[serde(rename = "topAlbums", deserialize_with = "de::lenient")]
    pub top_albums: Vec<AlbumRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub singles: Vec<AlbumRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub dedicated_artist_playlist: Vec<MiniRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub featured_artist_playlist: Vec<MiniRaw>,
    #[serde(rename = "similarArtists", deserialize_with = "de::lenient")]
    pub similar_artists: Vec<SimilarArtistRaw>,
    #[serde(rename = "isRadioPresent", deserialize_with = "de::string")]
    pub is_radio_present: String,
    #[serde(deserialize_with = "de::embedded")]
    pub bio: Vec<BioRaw>,
    #[serde(deserialize_with = "de::string")]
    pub dob: String,
    #[serde(deserialize_with = "de::string")]
    pub fb: String,
    #[serde(deserialize_with = "de::string")]
    pub twitter: String,
    #[serde(deserialize_with = "de::string")]
    pub wiki: String,
    #[serde(rename = "availableLanguages", deserialize_with = "de::lenient")]
    pub available_languages: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TopSongsRaw {
    #[serde(deserialize_with = "de::lenient")]
    pub songs: Vec<SongRaw>,
    #[serde(deserialize_with = "de::number")]
    pub total: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TopAlbumsRaw {
    #[serde(deserialize_with = "de::lenient")]
    pub albums: Vec<AlbumRaw>,
    #[serde(deserialize_with = "de::number")]
    pub total: u64,
}

/// `content.getArtistTopSongs` / `content.getArtistAlbums` pages.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtistPageRaw {
    #[serde(rename = "artistId", deserialize_with = "de::string")]
    pub artist_id: String,
    #[serde(deserialize_with = "de::string")]
    pub name: String,
    #[serde(deserialize_with = "de::string")]
    pub subtitle: String,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(deserialize_with = "de::number")]
    pub follower_count: u64,
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(rename = "isVerified", deserialize_with = "de::string")]
    pub is_verified: String,
    #[serde(rename = "dominantLanguage", deserialize_with = "de::string")]
    pub dominant_language: String,
    #[serde(rename = "dominantType", deserialize_with = "de::string")]
    pub dominant_type: String,
    #[serde(rename = "topSongs", deserialize_with = "de::lenient")]
    pub top_songs: Option<TopSongsRaw>,
    #[serde(rename = "topAlbums", deserialize_with = "de::lenient")]
    pub top_albums: Option<TopAlbumsRaw>,
}

/// Paged search result envelope shared by the typed search calls.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, bound(deserialize = "T: serde::de::DeserializeOwned + Default"))]
pub struct SearchResultsRaw<T> {
    #[serde(deserialize_with = "de::number")]
    pub total: u64,
    #[serde(deserialize_with = "de::number")]
    pub start: u64,
    #[serde(deserialize_with = "de::lenient")]
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtistSearchRaw {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub name: String,
    #[serde(deserialize_with = "de::string")]
    pub role: String,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(deserialize_with = "de::string")]
    pub perma_url: String,
    #[serde(deserialize_with = "de::number")]
    pub ctr: u64,
    #[serde(deserialize_with = "de::number")]
    pub entity: u64,
    #[serde(rename = "isRadioPresent", deserialize_with = "de::string")]
    pub is_radio_present: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaylistSearchInfoRaw {
    #[serde(deserialize_with = "de::string")]
    pub firstname: String,
    #[serde(deserialize_with = "de::string")]
    pub lastname: String,
    #[serde(deserialize_with = "de::number")]
    pub song_count: u64,
    #[serde(deserialize_with = "de::string")]
    pub language: String,
    #[serde(deserialize_with = "de::string")]
    pub entity_type: String,
    #[serde(deserialize_with = "de::string")]
    pub entity_sub_type: String,
    #[serde(deserialize_with = "de::string")]
    pub is_dolby_content: String,
    #[serde(deserialize_with = "de::lenient")]
    pub artist_name: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaylistSearchRaw {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub subtitle: String,
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(deserialize_with = "de::string")]
    pub perma_url: String,
    #[serde(deserialize_with = "de::string")]
    pub explicit_content: String,
    #[serde(deserialize_with = "de::lenient")]
    pub more_info: PlaylistSearchInfoRaw,
}

/// Item of an `autocomplete.get` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchItemRaw {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub description: String,
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(deserialize_with = "de::string")]
    pub url: String,
    #[serde(deserialize_with = "de::number")]
    pub position: u64,
    #[serde(deserialize_with = "de::lenient")]
    pub more_info: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchSectionRaw {
    #[serde(deserialize_with = "de::lenient")]
    pub data: Vec<SearchItemRaw>,
    #[serde(deserialize_with = "de::number")]
    pub position: u64,
}

/// `autocomplete.get`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AllSearchRaw {
    #[serde(deserialize_with = "de::lenient")]
    pub albums: Option<SearchSectionRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub songs: Option<SearchSectionRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub playlists: Option<SearchSectionRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub artists: Option<SearchSectionRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub topquery: Option<SearchSectionRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub shows: Option<SearchSectionRaw>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShowSearchInfoRaw {
    #[serde(deserialize_with = "de::number")]
    pub season_number: u64,
    #[serde(deserialize_with = "de::string")]
    pub release_date: String,
    #[serde(deserialize_with = "de::string")]
    pub label: String,
    #[serde(deserialize_with = "de::string")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShowSearchRaw {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub subtitle: String,
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(deserialize_with = "de::string")]
    pub perma_url: String,
    #[serde(deserialize_with = "de::string")]
    pub explicit_content: String,
    #[serde(deserialize_with = "de::lenient")]
    pub more_info: ShowSearchInfoRaw,
}

/// Answer of the `webradio.create*Station` calls.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StationRaw {
    #[serde(deserialize_with = "de::string")]
    pub stationid: String,
    pub error: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShowRaw {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub subtitle: String,
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(alias = "perma_url", deserialize_with = "de::string")]
    pub url: String,
    #[serde(deserialize_with = "de::string")]
    pub explicit_content: String,
    #[serde(deserialize_with = "de::string")]
    pub description: String,
    #[serde(deserialize_with = "de::number")]
    pub season_number: u64,
    #[serde(deserialize_with = "de::number")]
    pub episode_count: u64,
    #[serde(deserialize_with = "de::string")]
    pub release_date: String,
    #[serde(deserialize_with = "de::string")]
    pub language: String,
    #[serde(deserialize_with = "de::string")]
    pub category: String,
    #[serde(deserialize_with = "de::lenient")]
    pub artists: Vec<ArtistMiniRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub featured_artists: Vec<ArtistMiniRaw>,
    #[serde(deserialize_with = "de::lenient")]
    pub primary_artists: Vec<ArtistMiniRaw>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EpisodeRaw {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub description: String,
    #[serde(deserialize_with = "de::number")]
    pub duration: u64,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(alias = "perma_url", deserialize_with = "de::string")]
    pub url: String,
    #[serde(deserialize_with = "de::string")]
    pub release_date: String,
    #[serde(deserialize_with = "de::lenient")]
    pub download_url: Vec<Link>,
}

/// `show.getDetails`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShowDetailsRaw {
    #[serde(deserialize_with = "de::lenient")]
    pub show_details: ShowRaw,
    #[serde(deserialize_with = "de::lenient")]
    pub episodes: Vec<EpisodeRaw>,
}

/// `content.getTopShows`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TopShowsRaw {
    #[serde(deserialize_with = "de::lenient")]
    pub data: Vec<MiniRaw>,
    #[serde(rename = "trendingPodcasts", deserialize_with = "de::lenient")]
    pub trending_podcasts: Vec<TrendingPodcastsRaw>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrendingPodcastsRaw {
    #[serde(deserialize_with = "de::lenient")]
    pub items: Vec<MiniRaw>,
}

/// `content.getFeaturedPlaylists`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeaturedPlaylistsRaw {
    #[serde(deserialize_with = "de::lenient")]
    pub data: Vec<MiniRaw>,
    #[serde(deserialize_with = "de::number")]
    pub count: u64,
    #[serde(deserialize_with = "de::string")]
    pub last_page: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TopArtistRaw {
    #[serde(deserialize_with = "de::string")]
    pub artistid: String,
    #[serde(deserialize_with = "de::string")]
    pub name: String,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(deserialize_with = "de::string")]
    pub perma_url: String,
    #[serde(deserialize_with = "de::number")]
    pub follower_count: u64,
    #[serde(deserialize_with = "de::string")]
    pub is_followed: String,
}

/// `content.getTopArtists`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TopArtistsRaw {
    #[serde(deserialize_with = "de::lenient")]
    pub top_artists: Vec<TopArtistRaw>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StationInfoRaw {
    #[serde(deserialize_with = "de::string")]
    pub description: String,
    #[serde(deserialize_with = "de::string")]
    pub featured_station_type: String,
    #[serde(deserialize_with = "de::string")]
    pub query: String,
    #[serde(deserialize_with = "de::string")]
    pub color: String,
    #[serde(deserialize_with = "de::string")]
    pub language: String,
    #[serde(deserialize_with = "de::string")]
    pub station_display_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeaturedStationRaw {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub subtitle: String,
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(deserialize_with = "de::string")]
    pub perma_url: String,
    #[serde(deserialize_with = "de::lenient")]
    pub more_info: StationInfoRaw,
}

/// `lyrics.getLyrics`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LyricsRaw {
    #[serde(deserialize_with = "de::string")]
    pub lyrics: String,
    #[serde(deserialize_with = "de::string")]
    pub lyrics_copyright: String,
    #[serde(deserialize_with = "de::string")]
    pub snippet: String,
}

/// `webradio.getSongs`: an object keyed by play order (`"0"`, `"1"`, ...)
/// whose values wrap the song, next to a `stationid` field.
#[derive(Debug, Clone, Default)]
pub struct RadioSongsRaw {
    pub station_id: String,
    pub songs: Vec<SongRaw>,
}

impl<'de> Deserialize<'de> for RadioSongsRaw {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Default, Deserialize)]
        #[serde(default)]
        struct Slot {
            #[serde(deserialize_with = "de::lenient")]
            song: SongRaw,
        }

        let map = Map::<String, Value>::deserialize(deserializer)?;
        let station_id = match map.get("stationid") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        let mut numbered: Vec<(u64, SongRaw)> = map
            .iter()
            .filter_map(|(key, value)| {
                let position = key.parse::<u64>().ok()?;
                let slot: Slot = serde_json::from_value(value.clone()).ok()?;
                Some((position, slot.song))
            })
            .collect();
        numbered.sort_by_key(|(position, _)| *position);

        Ok(Self {
            station_id,
            songs: numbered.into_iter().map(|(_, song)| song).collect(),
        })
    }
}

/// Lists that some calls return bare and others wrap in `{ "data": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged, bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub enum ListingRaw<T> {
    Plain(Vec<T>),
    Paged { data: Vec<T> },
}

impl<T> ListingRaw<T> {
    pub fn items(&self) -> &[T] {
        match self {
            ListingRaw::Plain(items) | ListingRaw::Paged { data: items } => items,
        }
    }
}

/// Entry of the `modules` map of launch data and browse modules.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModuleInfoRaw {
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub subtitle: String,
    #[serde(deserialize_with = "de::string")]
    pub source: String,
    #[serde(deserialize_with = "de::number")]
    pub position: u64,
}

/// `webapi.getLaunchData` / `content.getBrowseModules`.
///
/// `modules` describes the sections; each section's items sit under the
/// top-level key named by its `source`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LaunchDataRaw {
    #[serde(default, deserialize_with = "de::lenient")]
    pub modules: BTreeMap<String, ModuleInfoRaw>,
    #[serde(flatten)]
    pub content: Map<String, Value>,
}

/// `webapi.get` with `type=label`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LabelRaw {
    #[serde(rename = "labelId", alias = "id", deserialize_with = "de::string")]
    pub label_id: String,
    #[serde(alias = "title", deserialize_with = "de::string")]
    pub name: String,
    #[serde(deserialize_with = "de::string")]
    pub image: String,
    #[serde(deserialize_with = "de::string")]
    pub perma_url: String,
    #[serde(rename = "topSongs", deserialize_with = "de::lenient")]
    pub top_songs: TopSongsRaw,
    #[serde(rename = "topAlbums", deserialize_with = "de::lenient")]
    pub top_albums: TopAlbumsRaw,
}

/// Link of a `content.getMegaMenu` column.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MenuLinkRaw {
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub perma_url: String,
}
