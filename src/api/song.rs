use axum::{
    extract::{Query, State},
    response::Response,
};

use super::{
    ApiError, Params, Upstream, found, limited, reply,
    validate::{self, Identifier, LinkKind},
};
use crate::{
    payload::{collect_valid, song},
    saavn::{
        endpoints,
        models::{SongDetailsRaw, SongRaw},
    },
    server::AppState,
};

/// `GET /song?id|link|token`
pub async fn song(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "Song not found, please check the id, link or token";
    let upstream = match validate::identifier(&params, LinkKind::Song)? {
        Identifier::Id(ids) => Upstream::new(endpoints::song::DETAILS, not_found).param("pids", ids),
        Identifier::Token(token) => Upstream::new(endpoints::WEBAPI_GET, not_found)
            .param("token", token)
            .param("type", LinkKind::Song.webapi_type()),
    };

    let value = upstream.fetch(&state.client).await?;
    reply(value, &params, "✅ Song(s) fetched successfully", |raw: &SongDetailsRaw| {
        Ok(song::song_details(raw, params.mini())?)
    })
}

/// `GET /song/recommend?id&lang&limit`
pub async fn song_recommend(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let id = validate::require(&params, "id", "Please provide the song id")?;

    let not_found = "No recommendations found for the given song";
    let value = Upstream::new(endpoints::song::RECOMMEND, not_found)
        .param("pid", id)
        .param("language", params.langs())
        .fetch(&state.client)
        .await?;

    reply(
        value,
        &params,
        "✅ Song recommendations fetched successfully",
        |raw: &Vec<SongRaw>| {
            let songs = collect_valid(raw, |s| song::song(s, params.mini()));
            found(limited(songs, &params), not_found)
        },
    )
}
