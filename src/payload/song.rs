use serde::Serialize;
use serde_json::{Map, Value};

use super::{ArtistMap, PayloadError, artist_map, download_links, image_links, require_id};
use crate::{
    saavn::models::{ModuleRaw, RightsRaw, SongDetailsRaw, SongModulesRaw, SongRaw},
    types::Link,
    utils::{decode_html, parse_bool},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rights {
    pub code: String,
    pub cacheable: bool,
    pub delete_cached_object: bool,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub image: Vec<Link>,
    pub language: String,
    pub year: u64,
    pub header_desc: String,
    pub play_count: u64,
    pub explicit: bool,
    pub list: String,
    pub list_type: String,
    pub list_count: u64,
    pub music: String,
    pub album: String,
    pub album_id: String,
    pub album_url: String,
    pub label: String,
    pub label_url: String,
    pub origin: String,
    pub is_dolby_content: bool,
    #[serde(rename = "320kbps")]
    pub has_320kbps: bool,
    pub download_url: Vec<Link>,
    pub duration: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rights: Option<Rights>,
    pub has_lyrics: bool,
    pub lyrics_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lyrics_snippet: Option<String>,
    pub starred: bool,
    pub release_date: String,
    pub copyright_text: String,
    pub vcode: String,
    pub vlink: String,
    pub triller_available: bool,
    pub artist_map: ArtistMap,
}

pub fn song(raw: &SongRaw, mini: bool) -> Result<Song, PayloadError> {
    let info = &raw.more_info;

    Ok(Song {
        id: require_id(&raw.id, "song")?,
        name: decode_html(&raw.title),
        subtitle: decode_html(&raw.subtitle),
        kind: raw.kind.clone(),
        url: raw.perma_url.clone(),
        image: image_links(&raw.image),
        language: raw.language.clone(),
        year: raw.year,
        header_desc: decode_html(&raw.header_desc),
        play_count: raw.play_count,
        explicit: parse_bool(&raw.explicit_content),
        list: raw.list.clone(),
        list_type: raw.list_type.clone(),
        list_count: raw.list_count,
        music: decode_html(&info.music),
        album: decode_html(&info.album),
        album_id: info.album_id.clone(),
        album_url: info.album_url.clone(),
        label: decode_html(&info.label),
        label_url: info.label_url.clone(),
        origin: info.origin.clone(),
        is_dolby_content: parse_bool(&info.is_dolby_content),
        has_320kbps: parse_bool(&info.has_320kbps),
        download_url: download_links(&info.encrypted_media_url),
        duration: info.duration,
        rights: if mini {
            None
        } else {
            info.rights.as_ref().map(rights)
        },
        has_lyrics: parse_bool(&info.has_lyrics),
        lyrics_id: info.lyrics_id.clone(),
        lyrics_snippet: (!mini).then(|| decode_html(&info.lyrics_snippet)),
        starred: parse_bool(&info.starred),
        release_date: info.release_date.clone(),
        copyright_text: decode_html(&info.copyright_text),
        vcode: info.vcode.clone(),
        vlink: info.vlink.clone(),
        triller_available: parse_bool(&info.triller_available),
        artist_map: artist_map(&info.artist_map),
    })
}

fn rights(raw: &RightsRaw) -> Rights {
    Rights {
        code: raw.code.clone(),
        cacheable: parse_bool(&raw.cacheable),
        delete_cached_object: parse_bool(&raw.delete_cached_object),
        reason: decode_html(&raw.reason),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Module {
    pub title: String,
    pub subtitle: String,
    pub source: String,
    pub position: u64,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub params: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongModules {
    pub recommend: Option<Module>,
    pub currently_trending: Option<Module>,
    pub songs_by_same_artists: Option<Module>,
    pub songs_by_same_actors: Option<Module>,
    pub artists: Option<Module>,
}

/// Upstream `source_params` keys and the names the routes of this service
/// accept for the same value.
const PARAM_RENAMES: [(&str, &str); 6] = [
    ("pid", "id"),
    ("language", "lang"),
    ("entity_type", "type"),
    ("entity_language", "lang"),
    ("artist_ids", "artist_id"),
    ("actor_ids", "actor_id"),
];

fn module(raw: &ModuleRaw) -> Module {
    let params = raw
        .source_params
        .iter()
        .map(|(key, value)| {
            let key = PARAM_RENAMES
                .iter()
                .find(|(from, _)| *from == key.as_str())
                .map_or(key.as_str(), |(_, to)| *to);
            (key.to_string(), value.clone())
        })
        .collect();

    Module {
        title: decode_html(&raw.title),
        subtitle: decode_html(&raw.subtitle),
        source: raw.source.clone(),
        position: raw.position,
        params,
    }
}

pub fn song_modules(raw: &SongModulesRaw) -> SongModules {
    SongModules {
        recommend: raw.reco.as_ref().map(module),
        currently_trending: raw.currently_trending.as_ref().map(module),
        songs_by_same_artists: raw.songs_by_same_artists.as_ref().map(module),
        songs_by_same_actors: raw.songs_by_same_actors.as_ref().map(module),
        artists: raw.artists.as_ref().map(module),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongDetails {
    pub songs: Vec<Song>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<SongModules>,
}

pub fn song_details(raw: &SongDetailsRaw, mini: bool) -> Result<SongDetails, PayloadError> {
    if raw.songs.is_empty() {
        return Err(PayloadError::MissingId { entity: "song" });
    }
    let songs = raw
        .songs
        .iter()
        .map(|s| song(s, mini))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SongDetails {
        songs,
        modules: if mini {
            None
        } else {
            raw.modules.as_ref().map(song_modules)
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_song() -> SongRaw {
        serde_json::from_value(json!({
            "id": "IfhG2sYr",
            "title": "Tum Hi Ho &amp; More",
            "subtitle": "Arijit Singh - Aashiqui 2",
            "type": "song",
            "perma_url": "https://www.jiosaavn.com/song/tum-hi-ho/EToxUyFpcwQ",
            "image": "https://c.saavncdn.com/430/Aashiqui-2-150x150.jpg",
            "language": "hindi",
            "year": "2013",
            "play_count": "123456",
            "explicit_content": "0",
            "more_info": {
                "album": "Aashiqui 2",
                "album_id": "1139549",
                "duration": "262",
                "320kbps": "true",
                "has_lyrics": "false",
                "lyrics_snippet": "Hum tere bin ab reh nahi sakte",
                "rights": { "code": "0", "cacheable": "true", "reason": "" },
                "artistMap": {
                    "primary_artists": [{ "id": "459320", "name": "Arijit Singh", "role": "singer" }],
                    "featured_artists": [],
                    "artists": [{ "id": "459320", "name": "Arijit Singh", "role": "singer" }]
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn song_is_normalized() {
        let out = song(&raw_song(), false).unwrap();
        assert_eq!(out.name, "Tum Hi Ho & More");
        assert_eq!(out.year, 2013);
        assert_eq!(out.duration, 262);
        assert!(out.has_320kbps);
        assert!(!out.explicit);
        assert_eq!(out.image.len(), 3);
        assert_eq!(out.artist_map.primary_artists[0].name, "Arijit Singh");
        assert!(out.rights.as_ref().is_some_and(|r| r.cacheable));
        assert!(out.lyrics_snippet.is_some());
    }

    #[test]
    fn mini_drops_verbose_fields() {
        let out = song(&raw_song(), true).unwrap();
        assert!(out.rights.is_none());
        assert!(out.lyrics_snippet.is_none());

        let value = serde_json::to_value(&out).unwrap();
        assert!(value.get("lyrics_snippet").is_none());
        assert!(value.get("rights").is_none());
    }

    #[test]
    fn song_without_id_is_rejected() {
        let mut raw = raw_song();
        raw.id.clear();
        assert_eq!(
            song(&raw, false),
            Err(PayloadError::MissingId { entity: "song" })
        );
    }

    #[test]
    fn empty_details_are_not_found() {
        let raw = SongDetailsRaw::default();
        assert!(song_details(&raw, false).is_err());
    }

    #[test]
    fn module_params_are_renamed() {
        let raw: SongModulesRaw = serde_json::from_value(json!({
            "reco": {
                "title": "Song Recommendations",
                "source": "reco.getreco",
                "position": 1,
                "source_params": { "pid": "IfhG2sYr", "language": "hindi" }
            },
            "songsBysameArtists": {
                "title": "More from Arijit",
                "source_params": { "artist_ids": "459320", "song_id": "IfhG2sYr" }
            }
        }))
        .unwrap();

        let modules = song_modules(&raw);
        let reco = modules.recommend.unwrap();
        assert_eq!(reco.params.get("id"), Some(&json!("IfhG2sYr")));
        assert_eq!(reco.params.get("lang"), Some(&json!("hindi")));
        let same = modules.songs_by_same_artists.unwrap();
        assert_eq!(same.params.get("artist_id"), Some(&json!("459320")));
        assert_eq!(same.params.get("song_id"), Some(&json!("IfhG2sYr")));
        assert!(modules.currently_trending.is_none());
    }
}
