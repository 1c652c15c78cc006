use axum::{
    extract::{Query, State},
    response::Response,
};

use super::{
    ApiError, Params, Upstream, found, limited, reply,
    validate::{self, Identifier, LinkKind},
};
use crate::{
    payload::{album, collect_valid},
    saavn::{endpoints, models::AlbumRaw},
    server::AppState,
};

/// `GET /album?id|link|token`
pub async fn album(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "Album not found, please check the id, link or token";
    let upstream = match validate::identifier(&params, LinkKind::Album)? {
        Identifier::Id(id) => Upstream::new(endpoints::album::DETAILS, not_found).param("albumid", id),
        Identifier::Token(token) => Upstream::new(endpoints::WEBAPI_GET, not_found)
            .param("token", token)
            .param("type", LinkKind::Album.webapi_type()),
    };

    let value = upstream.fetch(&state.client).await?;
    reply(value, &params, "✅ Album details fetched successfully", |raw: &AlbumRaw| {
        Ok(album::album(raw, params.mini())?)
    })
}

/// `GET /album/recommend?id&lang`
pub async fn album_recommend(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let id = validate::require(&params, "id", "Please provide the album id")?;

    let not_found = "No recommendations found for the given album";
    let value = Upstream::new(endpoints::album::RECOMMEND, not_found)
        .param("albumid", id)
        .param("language", params.langs())
        .fetch(&state.client)
        .await?;

    reply(
        value,
        &params,
        "✅ Album recommendations fetched successfully",
        |raw: &Vec<AlbumRaw>| {
            found(limited(collect_valid(raw, |a| album::album(a, true)), &params), not_found)
        },
    )
}

/// `GET /album/same-year?year&lang`
pub async fn album_same_year(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let year = validate::require(&params, "year", "Please provide the year")?;
    if year.parse::<u16>().is_err() {
        return Err(ApiError::validation(format!("Invalid year '{year}'")));
    }

    let not_found = "No albums found for the given year";
    let value = Upstream::new(endpoints::album::SAME_YEAR, not_found)
        .param("album_year", year)
        .param("album_lang", params.langs())
        .fetch(&state.client)
        .await?;

    reply(
        value,
        &params,
        "✅ Albums of the same year fetched successfully",
        |raw: &Vec<AlbumRaw>| {
            found(limited(collect_valid(raw, |a| album::album(a, true)), &params), not_found)
        },
    )
}
