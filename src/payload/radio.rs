use serde::Serialize;
use serde_json::Value;

use super::{
    PayloadError, collect_valid, require_id,
    song::{Song, song},
};
use crate::{
    saavn::models::{RadioSongsRaw, StationRaw},
    utils::decode_html,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub station_id: String,
}

/// Message of an upstream radio error, which comes either as a plain
/// string or as `{ "msg": ... }`.
pub fn error_message(error: &Value) -> Option<String> {
    let message = match error {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("msg")
            .and_then(Value::as_str)
            .unwrap_or("station could not be created")
            .to_string(),
        Value::Null => return None,
        other => other.to_string(),
    };
    Some(decode_html(&message))
}

pub fn station_error(raw: &StationRaw) -> Option<String> {
    raw.error.as_ref().and_then(error_message)
}

pub fn station(raw: &StationRaw) -> Result<Station, PayloadError> {
    Ok(Station {
        station_id: require_id(&raw.stationid, "station")?,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadioSongs {
    pub station_id: String,
    pub songs: Vec<Song>,
}

pub fn radio_songs(raw: &RadioSongsRaw, mini: bool) -> RadioSongs {
    RadioSongs {
        station_id: raw.station_id.clone(),
        songs: collect_valid(&raw.songs, |s| song(s, mini)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn station_errors_in_both_shapes() {
        let raw: StationRaw =
            serde_json::from_value(json!({ "error": "Invalid station name" })).unwrap();
        assert_eq!(station_error(&raw).as_deref(), Some("Invalid station name"));

        let raw: StationRaw =
            serde_json::from_value(json!({ "error": { "code": "1", "msg": "Station not found" } }))
                .unwrap();
        assert_eq!(station_error(&raw).as_deref(), Some("Station not found"));

        let raw: StationRaw = serde_json::from_value(json!({ "stationid": "abc" })).unwrap();
        assert_eq!(station_error(&raw), None);
        assert_eq!(station(&raw).unwrap().station_id, "abc");
    }

    #[test]
    fn station_without_id_is_rejected() {
        assert!(station(&StationRaw::default()).is_err());
    }

    #[test]
    fn radio_songs_follow_play_order() {
        let raw: RadioSongsRaw = serde_json::from_value(json!({
            "1": { "song": { "id": "second" } },
            "0": { "song": { "id": "first" } },
            "stationid": "abc"
        }))
        .unwrap();

        let out = radio_songs(&raw, true);
        assert_eq!(out.station_id, "abc");
        let ids: Vec<_> = out.songs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn radio_without_songs_is_empty() {
        let raw: RadioSongsRaw = serde_json::from_value(json!({ "stationid": "abc" })).unwrap();
        assert!(radio_songs(&raw, false).songs.is_empty());
    }
}
