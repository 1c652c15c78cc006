use axum::{
    extract::{Query, State},
    response::Response,
};

use super::{
    ApiError, Params, Upstream, found, limited, reply,
    validate::{self, Identifier, LinkKind},
};
use crate::{
    payload::{collect_valid, playlist},
    saavn::{endpoints, models::PlaylistRaw},
    server::AppState,
};

/// `GET /playlist?id|link|token&page&n`
pub async fn playlist(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "Playlist not found, please check the id, link or token";
    let upstream = match validate::identifier(&params, LinkKind::Playlist)? {
        Identifier::Id(id) => {
            Upstream::new(endpoints::playlist::DETAILS, not_found).param("listid", id)
        }
        Identifier::Token(token) => Upstream::new(endpoints::WEBAPI_GET, not_found)
            .param("token", token)
            .param("type", LinkKind::Playlist.webapi_type()),
    };

    let value = upstream
        .param("p", params.page())
        .param("n", params.text("n"))
        .fetch(&state.client)
        .await?;

    reply(value, &params, "✅ Playlist details fetched successfully", |raw: &PlaylistRaw| {
        Ok(playlist::playlist(raw, params.mini())?)
    })
}

/// `GET /playlist/recommend?id&lang`
pub async fn playlist_recommend(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let id = validate::require(&params, "id", "Please provide the playlist id")?;

    let not_found = "No recommendations found for the given playlist";
    let value = Upstream::new(endpoints::playlist::RECOMMEND, not_found)
        .param("listid", id)
        .param("language", params.langs())
        .fetch(&state.client)
        .await?;

    reply(
        value,
        &params,
        "✅ Playlist recommendations fetched successfully",
        |raw: &Vec<PlaylistRaw>| {
            let playlists = collect_valid(raw, |p| playlist::playlist(p, true));
            found(limited(playlists, &params), not_found)
        },
    )
}
