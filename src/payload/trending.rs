use serde::Serialize;
use serde_json::Value;

use super::{
    Mini, PayloadError, mini as mini_item,
    album::{Album, album},
    playlist::{Playlist, playlist},
    song::{Song, song},
};
use crate::saavn::{
    decode,
    models::{AlbumRaw, MiniRaw, PlaylistRaw, SongRaw},
};

/// A trending entry, normalized according to its upstream `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TrendingItem {
    Song(Song),
    Album(Album),
    Playlist(Playlist),
    Other(Mini),
}

pub fn trending_item(raw: &Value, mini: bool) -> Result<TrendingItem, PayloadError> {
    let kind = raw.get("type").and_then(Value::as_str).unwrap_or_default();
    let missing = |_| PayloadError::MissingId { entity: "item" };

    match kind {
        "song" => {
            let raw: SongRaw = decode(raw.clone()).map_err(missing)?;
            song(&raw, mini).map(TrendingItem::Song)
        }
        "album" => {
            let raw: AlbumRaw = decode(raw.clone()).map_err(missing)?;
            album(&raw, mini).map(TrendingItem::Album)
        }
        "playlist" => {
            let raw: PlaylistRaw = decode(raw.clone()).map_err(missing)?;
            playlist(&raw, mini).map(TrendingItem::Playlist)
        }
        _ => {
            let raw: MiniRaw = decode(raw.clone()).map_err(missing)?;
            mini_item(&raw).map(TrendingItem::Other)
        }
    }
}

/// Normalizes `content.getTrending`, optionally keeping only one `type`.
pub fn trending(raw: &[Value], kind: Option<&str>, mini: bool) -> Vec<TrendingItem> {
    raw.iter()
        .filter(|item| match kind {
            Some(kind) => item.get("type").and_then(Value::as_str) == Some(kind),
            None => true,
        })
        .filter_map(|item| trending_item(item, mini).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<Value> {
        vec![
            json!({ "id": "s1", "title": "Song", "type": "song" }),
            json!({ "id": "a1", "title": "Album", "type": "album", "list": [] }),
            json!({ "id": "p1", "title": "Playlist", "type": "playlist" }),
            json!({ "title": "no id", "type": "song" }),
        ]
    }

    #[test]
    fn items_are_dispatched_by_type() {
        let out = trending(&sample(), None, true);
        assert_eq!(out.len(), 3);
        assert!(matches!(out[0], TrendingItem::Song(_)));
        assert!(matches!(out[1], TrendingItem::Album(_)));
        assert!(matches!(out[2], TrendingItem::Playlist(_)));
    }

    #[test]
    fn type_filter_applies() {
        let out = trending(&sample(), Some("album"), false);
        assert_eq!(out.len(), 1);
        let value = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(value["type"], "album");
    }

    #[test]
    fn item_without_id_is_rejected() {
        assert!(trending_item(&json!({ "type": "song" }), false).is_err());
    }
}
