use serde::Serialize;

use super::{
    ArtistMini, PayloadError, artist_minis, collect_valid, image_links, require_id,
    song::{Song, song},
};
use crate::{
    saavn::models::PlaylistRaw,
    types::Link,
    utils::{decode_html, parse_bool},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub header_desc: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub image: Vec<Link>,
    pub language: String,
    pub year: u64,
    pub play_count: u64,
    pub explicit: bool,
    pub list_count: u64,
    pub list_type: String,
    pub user_id: String,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub is_dolby_content: bool,
    pub last_updated: String,
    pub follower_count: u64,
    pub fan_count: u64,
    pub share: u64,
    pub video_count: u64,
    pub song_count: u64,
    pub artists: Vec<ArtistMini>,
    pub songs: Vec<Song>,
}

pub fn playlist(raw: &PlaylistRaw, mini: bool) -> Result<Playlist, PayloadError> {
    let info = &raw.more_info;

    Ok(Playlist {
        id: require_id(&raw.id, "playlist")?,
        name: decode_html(&raw.title),
        subtitle: decode_html(&raw.subtitle),
        header_desc: decode_html(&raw.header_desc),
        kind: raw.kind.clone(),
        url: raw.perma_url.clone(),
        image: image_links(&raw.image),
        language: raw.language.clone(),
        year: raw.year,
        play_count: raw.play_count,
        explicit: parse_bool(&raw.explicit_content),
        list_count: raw.list_count,
        list_type: raw.list_type.clone(),
        user_id: info.uid.clone(),
        firstname: decode_html(&info.firstname),
        lastname: decode_html(&info.lastname),
        username: info.username.clone(),
        is_dolby_content: parse_bool(&info.is_dolby_content),
        last_updated: info.last_updated.clone(),
        follower_count: info.follower_count,
        fan_count: info.fan_count,
        share: info.share,
        video_count: info.video_count,
        song_count: info.song_count.max(raw.list_count),
        artists: artist_minis(&info.artists),
        songs: collect_valid(&raw.list, |s| song(s, mini)),
    })
}
