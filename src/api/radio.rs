use axum::{
    extract::{Path, Query, State},
    response::Response,
};

use super::{ApiError, Params, Upstream, found, raw_json, success, validate};
use crate::{
    payload::radio,
    saavn::{
        decode, endpoints,
        models::{RadioSongsRaw, StationRaw},
    },
    server::AppState,
};

/// `GET /radio/{featured,artist,entity}`
///
/// `featured` and `artist` need `name`; `entity` needs `id` and `type`.
pub async fn create_station(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let kind = validate::one_of(&kind, &["featured", "artist", "entity"], "station type")?;

    let upstream = match kind {
        "entity" => {
            let id = validate::require(&params, "id", "Radio station id is required")?;
            let entity_type = validate::require(&params, "type", "Radio station type is required")?;
            Upstream::new(endpoints::radio::ENTITY, "Radio station could not be created")
                .param("entity_id", format!(r#"["{id}"]"#))
                .param("entity_type", entity_type)
        }
        _ => {
            let name = validate::require(&params, "name", "Radio station name is required")?;
            let call = if kind == "featured" {
                endpoints::radio::FEATURED
            } else {
                endpoints::radio::ARTIST
            };
            Upstream::new(call, "Radio station could not be created")
                .param("name", name)
                .param("query", params.get("q").unwrap_or(name))
                .param("artistid", params.text("artist_id"))
                .param("pid", params.text("song_id"))
                .param("mode", params.text("mode"))
        }
    };

    let value = upstream
        .param("language", params.langs())
        .fetch(&state.client)
        .await?;
    if params.raw() {
        return Ok(raw_json(value));
    }

    let raw: StationRaw = decode(value)?;
    if let Some(message) = radio::station_error(&raw) {
        return Err(ApiError::Validation(message));
    }
    Ok(success(
        "✅ Radio station created successfully",
        radio::station(&raw)?,
    ))
}

/// `GET /radio/songs?id&n`
pub async fn station_songs(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let id = validate::require(&params, "id", "Radio station id is required")?;
    let count = params.get("n").unwrap_or("10");
    if count.parse::<u32>().is_err() {
        return Err(ApiError::validation(format!("Invalid song count '{count}'")));
    }

    let not_found = "No songs found for the given station";
    let value = Upstream::new(endpoints::radio::SONGS, not_found)
        .param("stationid", id)
        .param("k", count)
        .fetch(&state.client)
        .await?;
    if params.raw() {
        return Ok(raw_json(value));
    }

    if let Some(message) = value.get("error").and_then(radio::error_message) {
        return Err(ApiError::Validation(message));
    }
    let raw: RadioSongsRaw = decode(value)?;
    Ok(success(
        "✅ Radio station songs fetched successfully",
        found(radio::radio_songs(&raw, params.mini()), not_found)?,
    ))
}
