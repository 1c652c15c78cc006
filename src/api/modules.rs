use axum::{
    extract::{Query, State},
    response::Response,
};

use super::{ApiError, Params, Upstream, found, reply};
use crate::{
    payload::modules as payload,
    saavn::{endpoints, models::LaunchDataRaw},
    server::AppState,
};

/// `GET /modules?lang`
pub async fn modules(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "No home modules found";
    let value = Upstream::new(endpoints::modules::LAUNCH_DATA, not_found)
        .param("language", params.langs())
        .fetch(&state.client)
        .await?;

    reply(value, &params, "✅ Home modules fetched successfully", |raw: &LaunchDataRaw| {
        found(payload::modules(raw, params.mini()), not_found)
    })
}

/// `GET /modules/browse?lang`
pub async fn browse_modules(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "No browse modules found";
    let value = Upstream::new(endpoints::modules::BROWSE, not_found)
        .param("language", params.langs())
        .fetch(&state.client)
        .await?;

    reply(value, &params, "✅ Browse modules fetched successfully", |raw: &LaunchDataRaw| {
        found(payload::modules(raw, params.mini()), not_found)
    })
}
