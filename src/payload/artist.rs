use serde::Serialize;

use super::{
    Mini, PayloadError, collect_valid, image_links, mini as mini_item, require_id,
    album::{Album, album},
    song::{Song, song},
};
use crate::{
    saavn::models::{ArtistPageRaw, ArtistRaw, BioRaw, SimilarArtistRaw},
    types::Link,
    utils::{decode_html, parse_bool},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bio {
    pub title: String,
    pub text: String,
    pub sequence: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarArtist {
    pub id: String,
    pub name: String,
    pub url: String,
    pub image: Vec<Link>,
    #[serde(rename = "type")]
    pub kind: String,
    pub dominant_type: String,
    pub is_radio_present: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub image: Vec<Link>,
    pub follower_count: u64,
    pub fan_count: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_verified: bool,
    pub dominant_language: String,
    pub dominant_type: String,
    pub is_radio_present: bool,
    pub dob: String,
    pub fb: String,
    pub twitter: String,
    pub wiki: String,
    pub available_languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<Vec<Bio>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_songs: Option<Vec<Song>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_albums: Option<Vec<Album>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub singles: Option<Vec<Album>>,
    pub dedicated_artist_playlist: Vec<Mini>,
    pub featured_artist_playlist: Vec<Mini>,
    pub similar_artists: Vec<SimilarArtist>,
}

fn bio(raw: &BioRaw) -> Bio {
    Bio {
        title: decode_html(&raw.title),
        text: decode_html(&raw.text),
        sequence: raw.sequence,
    }
}

fn similar_artist(raw: &SimilarArtistRaw) -> Result<SimilarArtist, PayloadError> {
    Ok(SimilarArtist {
        id: require_id(&raw.id, "artist")?,
        name: decode_html(&raw.name),
        url: raw.perma_url.clone(),
        image: image_links(&raw.image_url),
        kind: raw.kind.clone(),
        dominant_type: raw.dominant_type.clone(),
        is_radio_present: parse_bool(&raw.is_radio_present),
    })
}

/// `mini` drops the biography and every nested song and album list.
pub fn artist(raw: &ArtistRaw, mini: bool) -> Result<Artist, PayloadError> {
    let full = !mini;

    Ok(Artist {
        id: require_id(&raw.artist_id, "artist")?,
        name: decode_html(&raw.name),
        subtitle: decode_html(&raw.subtitle),
        image: image_links(&raw.image),
        follower_count: raw.follower_count,
        fan_count: raw.fan_count,
        kind: raw.kind.clone(),
        is_verified: parse_bool(&raw.is_verified),
        dominant_language: raw.dominant_language.clone(),
        dominant_type: raw.dominant_type.clone(),
        is_radio_present: parse_bool(&raw.is_radio_present),
        dob: raw.dob.clone(),
        fb: raw.fb.clone(),
        twitter: raw.twitter.clone(),
        wiki: raw.wiki.clone(),
        available_languages: raw.available_languages.clone(),
        bio: full.then(|| raw.bio.iter().map(bio).collect()),
        top_songs: full.then(|| collect_valid(&raw.top_songs, |s| song(s, true))),
        top_albums: full.then(|| collect_valid(&raw.top_albums, |a| album(a, true))),
        singles: full.then(|| collect_valid(&raw.singles, |a| album(a, true))),
        dedicated_artist_playlist: collect_valid(&raw.dedicated_artist_playlist, mini_item),
        featured_artist_playlist: collect_valid(&raw.featured_artist_playlist, mini_item),
        similar_artists: collect_valid(&raw.similar_artists, similar_artist),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistSongs {
    pub id: String,
    pub name: String,
    pub total: u64,
    pub songs: Vec<Song>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistAlbums {
    pub id: String,
    pub name: String,
    pub total: u64,
    pub albums: Vec<Album>,
}

pub fn artist_songs(raw: &ArtistPageRaw, mini: bool) -> Result<ArtistSongs, PayloadError> {
    let page = raw.top_songs.clone().unwrap_or_default();

    Ok(ArtistSongs {
        id: require_id(&raw.artist_id, "artist")?,
        name: decode_html(&raw.name),
        total: page.total,
        songs: collect_valid(&page.songs, |s| song(s, mini)),
    })
}

pub fn artist_albums(raw: &ArtistPageRaw, mini: bool) -> Result<ArtistAlbums, PayloadError> {
    let page = raw.top_albums.clone().unwrap_or_default();

    Ok(ArtistAlbums {
        id: require_id(&raw.artist_id, "artist")?,
        name: decode_html(&raw.name),
        total: page.total,
        albums: collect_valid(&page.albums, |a| album(a, mini)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_artist() -> ArtistRaw {
        serde_json::from_value(json!({
            "artistId": "459320",
            "name": "Arijit Singh",
            "image": "https://c.saavncdn.com/artists/Arijit_Singh_150x150.jpg",
            "follower_count": "34526798",
            "isVerified": true,
            "isRadioPresent": true,
            "bio": "[{\"text\":\"Arijit Singh is an Indian playback singer &amp; composer.\",\"title\":\"Bio\",\"sequence\":1}]",
            "topSongs": [{ "id": "IfhG2sYr", "title": "Tum Hi Ho" }],
            "topAlbums": [{ "id": "1139549", "title": "Aashiqui 2" }],
            "singles": "",
            "similarArtists": [
                { "id": "456323", "name": "Shreya Ghoshal", "image_url": "" },
                { "name": "no id" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn artist_is_normalized() {
        let out = artist(&raw_artist(), false).unwrap();
        assert_eq!(out.id, "459320");
        assert_eq!(out.follower_count, 34_526_798);
        assert!(out.is_verified);
        assert!(out.is_radio_present);
        let bio = out.bio.unwrap();
        assert_eq!(bio[0].text, "Arijit Singh is an Indian playback singer & composer.");
        assert_eq!(out.top_songs.unwrap().len(), 1);
        assert_eq!(out.singles.unwrap().len(), 0);
        assert_eq!(out.similar_artists.len(), 1);
    }

    #[test]
    fn mini_drops_bio_and_nested_lists() {
        let out = artist(&raw_artist(), true).unwrap();
        assert!(out.bio.is_none());
        assert!(out.top_songs.is_none());
        assert!(out.top_albums.is_none());

        let value = serde_json::to_value(&out).unwrap();
        assert!(value.get("bio").is_none());
    }

    #[test]
    fn artist_without_id_is_rejected() {
        assert_eq!(
            artist(&ArtistRaw::default(), false),
            Err(PayloadError::MissingId { entity: "artist" })
        );
        assert!(artist_songs(&ArtistPageRaw::default(), false).is_err());
    }

    #[test]
    fn artist_song_page() {
        let raw: ArtistPageRaw = serde_json::from_value(json!({
            "artistId": "459320",
            "name": "Arijit Singh",
            "topSongs": { "songs": [{ "id": "a" }, { "id": "b" }], "total": 820 }
        }))
        .unwrap();
        let out = artist_songs(&raw, true).unwrap();
        assert_eq!(out.total, 820);
        assert_eq!(out.songs.len(), 2);
        assert!(artist_albums(&raw, true).unwrap().albums.is_empty());
    }
}
