use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::{
    Mini, PayloadError,
    album::{Album, album},
    collect_valid, image_links, mini, require_id,
    song::{Song, song},
};
use crate::{
    saavn::models::{
        AlbumRaw, FeaturedPlaylistsRaw, FeaturedStationRaw, LabelRaw, ListingRaw, LyricsRaw,
        MenuLinkRaw, MiniRaw, TopArtistRaw, TopArtistsRaw,
    },
    types::Link,
    utils::{decode_html, parse_bool},
};

pub fn charts(raw: &[MiniRaw]) -> Vec<Mini> {
    collect_valid(raw, mini)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedPlaylists {
    pub count: u64,
    pub last_page: bool,
    pub data: Vec<Mini>,
}

pub fn featured_playlists(raw: &FeaturedPlaylistsRaw) -> FeaturedPlaylists {
    FeaturedPlaylists {
        count: raw.count,
        last_page: parse_bool(&raw.last_page),
        data: collect_valid(&raw.data, mini),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopArtist {
    pub id: String,
    pub name: String,
    pub url: String,
    pub image: Vec<Link>,
    pub follower_count: u64,
    pub is_followed: bool,
}

pub fn top_artist(raw: &TopArtistRaw) -> Result<TopArtist, PayloadError> {
    Ok(TopArtist {
        id: require_id(&raw.artistid, "artist")?,
        name: decode_html(&raw.name),
        url: raw.perma_url.clone(),
        image: image_links(&raw.image),
        follower_count: raw.follower_count,
        is_followed: parse_bool(&raw.is_followed),
    })
}

pub fn top_artists(raw: &TopArtistsRaw) -> Vec<TopArtist> {
    collect_valid(&raw.top_artists, top_artist)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedStation {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub image: Vec<Link>,
    pub description: String,
    pub station_type: String,
    pub query: String,
    pub color: String,
    pub language: String,
    pub station_display_text: String,
}

pub fn featured_station(raw: &FeaturedStationRaw) -> Result<FeaturedStation, PayloadError> {
    let info = &raw.more_info;

    Ok(FeaturedStation {
        id: require_id(&raw.id, "station")?,
        name: decode_html(&raw.title),
        subtitle: decode_html(&raw.subtitle),
        kind: raw.kind.clone(),
        url: raw.perma_url.clone(),
        image: image_links(&raw.image),
        description: decode_html(&info.description),
        station_type: info.featured_station_type.clone(),
        query: decode_html(&info.query),
        color: info.color.clone(),
        language: info.language.clone(),
        station_display_text: decode_html(&info.station_display_text),
    })
}

pub fn featured_stations(raw: &[FeaturedStationRaw]) -> Vec<FeaturedStation> {
    collect_valid(raw, featured_station)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lyrics {
    pub lyrics: String,
    pub copyright: String,
    pub snippet: String,
}

/// Lyrics arrive as HTML with `<br>` line breaks; they become newlines.
pub fn lyrics(raw: &LyricsRaw) -> Result<Lyrics, PayloadError> {
    if raw.lyrics.trim().is_empty() {
        return Err(PayloadError::MissingId { entity: "lyrics" });
    }
    let text = raw
        .lyrics
        .replace("<br/>", "\n")
        .replace("<br />", "\n")
        .replace("<br>", "\n");

    Ok(Lyrics {
        lyrics: decode_html(&text),
        copyright: decode_html(&raw.lyrics_copyright),
        snippet: decode_html(&raw.snippet),
    })
}

pub fn top_albums(raw: &ListingRaw<AlbumRaw>, mini: bool) -> Vec<Album> {
    collect_valid(raw.items(), |a| album(a, mini))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    pub url: String,
    pub image: Vec<Link>,
    pub song_count: u64,
    pub album_count: u64,
    pub top_songs: Vec<Song>,
    pub top_albums: Vec<Album>,
}

pub fn label(raw: &LabelRaw, mini: bool) -> Result<Label, PayloadError> {
    Ok(Label {
        id: require_id(&raw.label_id, "label")?,
        name: decode_html(&raw.name),
        url: raw.perma_url.clone(),
        image: image_links(&raw.image),
        song_count: raw.top_songs.total,
        album_count: raw.top_albums.total,
        top_songs: collect_valid(&raw.top_songs.songs, |s| song(s, mini)),
        top_albums: collect_valid(&raw.top_albums.albums, |a| album(a, mini)),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuLink {
    pub name: String,
    pub url: String,
}

/// Columns of the site's mega menu, keyed like upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MegaMenu {
    #[serde(flatten)]
    pub sections: BTreeMap<String, Vec<MenuLink>>,
}

pub fn mega_menu(raw: &BTreeMap<String, Value>) -> MegaMenu {
    let sections = raw
        .iter()
        .filter_map(|(key, value)| {
            let links: Vec<MenuLinkRaw> = serde_json::from_value(value.clone()).ok()?;
            let links = links
                .iter()
                .filter(|l| !l.title.trim().is_empty())
                .map(|l| MenuLink {
                    name: decode_html(&l.title),
                    url: l.perma_url.clone(),
                })
                .collect();
            Some((key.clone(), links))
        })
        .collect();

    MegaMenu { sections }
}
