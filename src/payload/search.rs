use serde::Serialize;
use serde_json::{Map, Value};

use super::{
    Mini, PayloadError, collect_valid, image_links, mini, require_id,
    album::{Album, album},
    song::{Song, song},
};
use crate::{
    saavn::{
        de::value_to_u64,
        models::{
            AlbumRaw, AllSearchRaw, ArtistSearchRaw, MiniRaw, PlaylistSearchRaw, SearchItemRaw,
            SearchResultsRaw, SearchSectionRaw, ShowSearchRaw, SongRaw,
        },
    },
    types::Link,
    utils::{decode_html, parse_bool},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchItem {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub image: Vec<Link>,
    pub position: u64,
    pub language: String,
    pub album: String,
    pub primary_artists: String,
    pub singers: String,
    pub song_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSection {
    pub position: u64,
    pub data: Vec<SearchItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllSearch {
    pub albums: SearchSection,
    pub songs: SearchSection,
    pub playlists: SearchSection,
    pub artists: SearchSection,
    pub top_query: SearchSection,
    pub shows: SearchSection,
}

fn info_text(info: &Map<String, Value>, key: &str) -> String {
    match info.get(key) {
        Some(Value::String(s)) => decode_html(s),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn search_item(raw: &SearchItemRaw) -> Result<SearchItem, PayloadError> {
    let info = &raw.more_info;

    Ok(SearchItem {
        id: require_id(&raw.id, "item")?,
        name: decode_html(&raw.title),
        subtitle: decode_html(&raw.description),
        kind: raw.kind.clone(),
        url: raw.url.clone(),
        image: image_links(&raw.image),
        position: raw.position,
        language: info_text(info, "language"),
        album: info_text(info, "album"),
        primary_artists: info_text(info, "primary_artists"),
        singers: info_text(info, "singers"),
        song_count: info.get("song_count").map_or(0, value_to_u64),
    })
}

fn section(raw: Option<&SearchSectionRaw>) -> SearchSection {
    match raw {
        Some(raw) => SearchSection {
            position: raw.position,
            data: collect_valid(&raw.data, search_item),
        },
        None => SearchSection {
            position: 0,
            data: Vec::new(),
        },
    }
}

/// `autocomplete.get`: one section per entity kind.
pub fn all_search(raw: &AllSearchRaw) -> AllSearch {
    AllSearch {
        albums: section(raw.albums.as_ref()),
        songs: section(raw.songs.as_ref()),
        playlists: section(raw.playlists.as_ref()),
        artists: section(raw.artists.as_ref()),
        top_query: section(raw.topquery.as_ref()),
        shows: section(raw.shows.as_ref()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults<T> {
    pub total: u64,
    pub start: u64,
    pub results: Vec<T>,
}

fn results<R, T>(
    raw: &SearchResultsRaw<R>,
    limit: Option<usize>,
    f: impl Fn(&R) -> Result<T, PayloadError>,
) -> SearchResults<T> {
    let mut results = collect_valid(&raw.results, f);
    if let Some(limit) = limit {
        results.truncate(limit);
    }
    SearchResults {
        total: raw.total,
        start: raw.start,
        results,
    }
}

pub fn search_songs(
    raw: &SearchResultsRaw<SongRaw>,
    mini: bool,
    limit: Option<usize>,
) -> SearchResults<Song> {
    results(raw, limit, |s| song(s, mini))
}

pub fn search_albums(
    raw: &SearchResultsRaw<AlbumRaw>,
    mini: bool,
    limit: Option<usize>,
) -> SearchResults<Album> {
    results(raw, limit, |a| album(a, mini))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistSearchItem {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub image: Vec<Link>,
    pub is_radio_present: bool,
}

pub fn artist_search_item(raw: &ArtistSearchRaw) -> Result<ArtistSearchItem, PayloadError> {
    Ok(ArtistSearchItem {
        id: require_id(&raw.id, "artist")?,
        name: decode_html(&raw.name),
        role: raw.role.clone(),
        kind: raw.kind.clone(),
        url: raw.perma_url.clone(),
        image: image_links(&raw.image),
        is_radio_present: parse_bool(&raw.is_radio_present),
    })
}

pub fn search_artists(
    raw: &SearchResultsRaw<ArtistSearchRaw>,
    limit: Option<usize>,
) -> SearchResults<ArtistSearchItem> {
    results(raw, limit, artist_search_item)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistSearchItem {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub image: Vec<Link>,
    pub explicit: bool,
    pub song_count: u64,
    pub language: String,
    pub firstname: String,
    pub lastname: String,
    pub artist_name: Vec<String>,
    pub is_dolby_content: bool,
}

pub fn playlist_search_item(raw: &PlaylistSearchRaw) -> Result<PlaylistSearchItem, PayloadError> {
    let info = &raw.more_info;

    Ok(PlaylistSearchItem {
        id: require_id(&raw.id, "playlist")?,
        name: decode_html(&raw.title),
        subtitle: decode_html(&raw.subtitle),
        kind: raw.kind.clone(),
        url: raw.perma_url.clone(),
        image: image_links(&raw.image),
        explicit: parse_bool(&raw.explicit_content),
        song_count: info.song_count,
        language: info.language.clone(),
        firstname: decode_html(&info.firstname),
        lastname: decode_html(&info.lastname),
        artist_name: info.artist_name.iter().map(|n| decode_html(n)).collect(),
        is_dolby_content: parse_bool(&info.is_dolby_content),
    })
}

pub fn search_playlists(
    raw: &SearchResultsRaw<PlaylistSearchRaw>,
    limit: Option<usize>,
) -> SearchResults<PlaylistSearchItem> {
    results(raw, limit, playlist_search_item)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowSearchItem {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub image: Vec<Link>,
    pub explicit: bool,
    pub season: u64,
    pub release_date: String,
    pub label: String,
    pub description: String,
}

pub fn show_search_item(raw: &ShowSearchRaw) -> Result<ShowSearchItem, PayloadError> {
    let info = &raw.more_info;

    Ok(ShowSearchItem {
        id: require_id(&raw.id, "show")?,
        name: decode_html(&raw.title),
        subtitle: decode_html(&raw.subtitle),
        kind: raw.kind.clone(),
        url: raw.perma_url.clone(),
        image: image_links(&raw.image),
        explicit: parse_bool(&raw.explicit_content),
        season: info.season_number,
        release_date: info.release_date.clone(),
        label: decode_html(&info.label),
        description: decode_html(&info.description),
    })
}

pub fn search_podcasts(
    raw: &SearchResultsRaw<ShowSearchRaw>,
    limit: Option<usize>,
) -> SearchResults<ShowSearchItem> {
    results(raw, limit, show_search_item)
}

/// `content.getTopSearches`.
pub fn top_searches(raw: &[MiniRaw]) -> Vec<Mini> {
    collect_valid(raw, mini)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn album_results_keep_type_and_images() {
        let raw: SearchResultsRaw<AlbumRaw> = serde_json::from_value(json!({
            "total": 2,
            "start": 1,
            "results": [
                {
                    "id": "1139549",
                    "title": "Aashiqui 2",
                    "type": "album",
                    "image": "https://c.saavncdn.com/430/Aashiqui-2-150x150.jpg"
                },
                { "id": "", "title": "ghost" }
            ]
        }))
        .unwrap();

        let out = search_albums(&raw, false, None);
        assert_eq!(out.total, 2);
        assert_eq!(out.results.len(), 1);
        assert_eq!(out.results[0].kind, "album");
        assert!(!out.results[0].image.is_empty());
    }

    #[test]
    fn limit_truncates_results() {
        let raw: SearchResultsRaw<SongRaw> = serde_json::from_value(json!({
            "total": 3,
            "results": [{ "id": "a" }, { "id": "b" }, { "id": "c" }]
        }))
        .unwrap();
        assert_eq!(search_songs(&raw, true, Some(2)).results.len(), 2);
    }

    #[test]
    fn all_search_tolerates_missing_sections() {
        let raw: AllSearchRaw = serde_json::from_value(json!({
            "songs": {
                "position": 2,
                "data": [{
                    "id": "IfhG2sYr",
                    "title": "Tum Hi Ho",
                    "type": "song",
                    "more_info": { "album": "Aashiqui 2", "primary_artists": "Arijit Singh" }
                }]
            }
        }))
        .unwrap();

        let out = all_search(&raw);
        assert_eq!(out.songs.position, 2);
        assert_eq!(out.songs.data[0].album, "Aashiqui 2");
        assert!(out.albums.data.is_empty());
    }

    #[test]
    fn items_without_id_are_rejected() {
        assert!(artist_search_item(&ArtistSearchRaw::default()).is_err());
        assert!(playlist_search_item(&PlaylistSearchRaw::default()).is_err());
        assert!(show_search_item(&ShowSearchRaw::default()).is_err());
    }
}
