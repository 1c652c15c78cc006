use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    response::Response,
};
use serde_json::Value;

use super::{
    ApiError, Params, Upstream, found, limited, reply,
    validate::{self, LinkKind},
};
use crate::{
    payload::{get, playlist},
    saavn::{
        endpoints,
        models::{
            AlbumRaw, FeaturedPlaylistsRaw, FeaturedStationRaw, LabelRaw, ListingRaw, LyricsRaw,
            MiniRaw, PlaylistRaw, TopArtistsRaw,
        },
    },
    server::AppState,
};

const LABEL_SORT_ORDERS: [&str; 2] = ["asc", "desc"];

/// `GET /get/charts?lang`
pub async fn charts(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "No charts found";
    let value = Upstream::new(endpoints::get::CHARTS, not_found)
        .param("language", params.langs())
        .fetch(&state.client)
        .await?;

    reply(value, &params, "✅ Charts fetched successfully", |raw: &Vec<MiniRaw>| {
        found(limited(get::charts(raw), &params), not_found)
    })
}

/// `GET /get/featured-playlists?lang&page&n`
pub async fn featured_playlists(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "No featured playlists found";
    let value = Upstream::new(endpoints::get::FEATURED_PLAYLISTS, not_found)
        .param("fetch_from_serialized_files", "true")
        .param("p", params.page())
        .param("n", params.text("n"))
        .param("languages", params.langs())
        .fetch(&state.client)
        .await?;

    reply(
        value,
        &params,
        "✅ Featured playlists fetched successfully",
        |raw: &FeaturedPlaylistsRaw| found(get::featured_playlists(raw), not_found),
    )
}

/// `GET /get/top-artists`
pub async fn top_artists(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "No top artists found";
    let value = Upstream::new(endpoints::get::TOP_ARTISTS, not_found)
        .fetch(&state.client)
        .await?;

    reply(value, &params, "✅ Top artists fetched successfully", |raw: &TopArtistsRaw| {
        found(limited(get::top_artists(raw), &params), not_found)
    })
}

/// `GET /get/top-albums?lang&page&n`
pub async fn top_albums(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "No top albums found";
    let value = Upstream::new(endpoints::get::TOP_ALBUMS, not_found)
        .param("p", params.page())
        .param("n", params.text("n"))
        .param("languages", params.langs())
        .fetch(&state.client)
        .await?;

    reply(
        value,
        &params,
        "✅ Top albums fetched successfully",
        |raw: &ListingRaw<AlbumRaw>| {
            found(limited(get::top_albums(raw, params.mini()), &params), not_found)
        },
    )
}

/// `GET /get/featured-stations?lang`
pub async fn featured_stations(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "No featured stations found";
    let value = Upstream::new(endpoints::get::FEATURED_STATIONS, not_found)
        .param("languages", params.langs())
        .fetch(&state.client)
        .await?;

    reply(
        value,
        &params,
        "✅ Featured stations fetched successfully",
        |raw: &Vec<FeaturedStationRaw>| {
            found(limited(get::featured_stations(raw), &params), not_found)
        },
    )
}

/// `GET /get/mix?token|link&page&n&lang`
pub async fn mix(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let token = validate::token(&params, LinkKind::Mix)?;

    let value = Upstream::new(
        endpoints::get::MIX_DETAILS,
        "Mix not found, please check the token or link",
    )
    .param("token", token)
    .param("type", LinkKind::Mix.webapi_type())
    .param("p", params.page())
    .param("n", params.text("n"))
    .param("language", params.langs())
    .fetch(&state.client)
    .await?;

    reply(value, &params, "✅ Mix details fetched successfully", |raw: &PlaylistRaw| {
        Ok(playlist::playlist(raw, params.mini())?)
    })
}

/// `GET /get/label?token|link&page&n_song&n_album&cat&sort&lang`
pub async fn label(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let token = validate::token(&params, LinkKind::Label)?;
    let sort = params
        .get("sort")
        .map(|s| validate::one_of(s, &LABEL_SORT_ORDERS, "sort order"))
        .transpose()?
        .unwrap_or_default();

    let value = Upstream::new(
        endpoints::get::LABEL_DETAILS,
        "Label not found, please check the token or link",
    )
    .param("token", token)
    .param("type", LinkKind::Label.webapi_type())
    .param("p", params.page())
    .param("n_song", params.text("n_song"))
    .param("n_album", params.text("n_album"))
    .param("category", params.any(&["cat", "category"]).unwrap_or_default())
    .param("sort_order", sort)
    .param("language", params.langs())
    .fetch(&state.client)
    .await?;

    reply(value, &params, "✅ Label details fetched successfully", |raw: &LabelRaw| {
        Ok(get::label(raw, params.mini())?)
    })
}

/// `GET /get/mega-menu?entity&lang`
pub async fn mega_menu(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "No mega menu found";
    let value = Upstream::new(endpoints::get::MEGA_MENU, not_found)
        .param("is_entity_page", params.flag("entity").to_string())
        .param("language", params.langs())
        .fetch(&state.client)
        .await?;

    reply(
        value,
        &params,
        "✅ Mega menu fetched successfully",
        |raw: &BTreeMap<String, Value>| found(get::mega_menu(raw), not_found),
    )
}

/// `GET /get/lyrics?id`
pub async fn lyrics(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let id = validate::require(&params, "id", "Please provide the song id")?;

    let value = Upstream::new(endpoints::get::LYRICS, "Lyrics not found for the given song")
        .param("lyrics_id", id)
        .fetch(&state.client)
        .await?;

    reply(value, &params, "✅ Lyrics fetched successfully", |raw: &LyricsRaw| {
        Ok(get::lyrics(raw)?)
    })
}
