use serde::Serialize;

use super::{
    ArtistMap, PayloadError, artist_map, collect_valid, image_links, require_id,
    song::{Song, song},
};
use crate::{
    saavn::models::AlbumRaw,
    types::Link,
    utils::{decode_html, parse_bool},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Album {
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
    pub song_count: u64,
    pub copyright_text: String,
    pub is_dolby_content: bool,
    pub label_url: String,
    pub artist_map: ArtistMap,
    pub songs: Vec<Song>,
}

pub fn album(raw: &AlbumRaw, mini: bool) -> Result<Album, PayloadError> {
    let info = &raw.more_info;

    Ok(Album {
        id: require_id(&raw.id, "album")?,
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
        song_count: info.song_count,
        copyright_text: decode_html(&info.copyright_text),
        is_dolby_content: parse_bool(&info.is_dolby_content),
        label_url: info.label_url.clone(),
        artist_map: artist_map(&info.artist_map),
        songs: collect_valid(&raw.list, |s| song(s, mini)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn album_with_songs() {
        let raw: AlbumRaw = serde_json::from_value(json!({
            "id": "1139549",
            "title": "Aashiqui 2",
            "type": "album",
            "image": "https://c.saavncdn.com/430/Aashiqui-2-150x150.jpg",
            "year": 2013,
            "list": [
                { "id": "IfhG2sYr", "title": "Tum Hi Ho", "type": "song" },
                { "title": "broken entry" }
            ],
            "more_info": { "song_count": "12", "is_dolby_content": false }
        }))
        .unwrap();

        let out = album(&raw, true).unwrap();
        assert_eq!(out.kind, "album");
        assert_eq!(out.song_count, 12);
        assert!(!out.is_dolby_content);
        assert_eq!(out.songs.len(), 1);
        assert!(out.songs[0].lyrics_snippet.is_none());
    }

    #[test]
    fn album_list_may_be_an_empty_string() {
        let raw: AlbumRaw =
            serde_json::from_value(json!({ "id": "1", "list": "" })).unwrap();
        assert!(album(&raw, false).unwrap().songs.is_empty());
    }

    #[test]
    fn album_without_id_is_rejected() {
        let raw = AlbumRaw::default();
        assert_eq!(
            album(&raw, false),
            Err(PayloadError::MissingId { entity: "album" })
        );
    }
}
