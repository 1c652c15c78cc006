use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use serde_json::Value;

use super::{
    ApiError, Params, Upstream, found, limited, reply,
    validate::{self, LinkKind},
};
use crate::{
    payload::podcast,
    saavn::{
        endpoints,
        models::{EpisodeRaw, ShowDetailsRaw, TopShowsRaw},
    },
    server::AppState,
};

const EPISODE_SORT_ORDERS: [&str; 2] = ["asc", "desc"];

/// `GET /podcast?token|link&season&sort`
pub async fn podcast(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let token = validate::token(&params, LinkKind::Show)?;

    let value = Upstream::new(
        endpoints::show::DETAILS,
        "Podcast not found, please check the token or link",
    )
    .param("token", token)
    .param("season_number", params.text("season"))
    .param("sort_order", params.text("sort"))
    .fetch(&state.client)
    .await?;

    reply(value, &params, "✅ Podcast details fetched successfully", |raw: &ShowDetailsRaw| {
        Ok(podcast::show_details(raw, params.mini())?)
    })
}

/// `GET /podcast/episodes?id&season&page&sort`
pub async fn podcast_episodes(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let id = validate::require(&params, "id", "Please provide the podcast id")?;
    let sort = params
        .get("sort")
        .map(|s| validate::one_of(s, &EPISODE_SORT_ORDERS, "sort order"))
        .transpose()?
        .unwrap_or_default();

    let not_found = "Invalid podcast id or no episodes found";
    let value = Upstream::new(endpoints::show::EPISODES, not_found)
        .param("show_id", id)
        .param("season_number", params.get("season").unwrap_or("1"))
        .param("p", params.page())
        .param("sort_order", sort)
        .fetch(&state.client)
        .await?;

    reply(
        value,
        &params,
        "✅ Podcast episodes fetched successfully",
        |raw: &Vec<EpisodeRaw>| found(limited(podcast::episodes(raw), &params), not_found),
    )
}

/// `GET /podcast/episode?token|link`
pub async fn podcast_episode(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let token = validate::token(&params, LinkKind::Episode)?;

    let value = Upstream::new(
        endpoints::show::EPISODE_DETAILS,
        "Episode not found, please check the token or link",
    )
    .param("token", token)
    .fetch(&state.client)
    .await?;

    // Answered as a one-element list or as the bare episode.
    reply(value, &params, "✅ Episode details fetched successfully", |raw: &Value| {
        let first = match raw {
            Value::Array(items) => items.first().cloned().unwrap_or_default(),
            other => other.clone(),
        };
        let episode: EpisodeRaw = serde_json::from_value(first).unwrap_or_default();
        Ok(podcast::episode(&episode)?)
    })
}

/// `GET /podcast/top?lang`
pub async fn top_podcasts(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "No top podcasts found";
    let value = Upstream::new(endpoints::get::TOP_SHOWS, not_found)
        .param("languages", params.langs())
        .fetch(&state.client)
        .await?;

    reply(value, &params, "✅ Top podcasts fetched successfully", |raw: &TopShowsRaw| {
        found(limited(podcast::top_shows(raw), &params), not_found)
    })
}

/// `GET /podcast/trending?lang`
pub async fn trending_podcasts(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "No trending podcasts found";
    let value = Upstream::new(endpoints::get::TOP_SHOWS, not_found)
        .param("languages", params.langs())
        .fetch(&state.client)
        .await?;

    reply(value, &params, "✅ Trending podcasts fetched successfully", |raw: &TopShowsRaw| {
        found(limited(podcast::trending_shows(raw), &params), not_found)
    })
}

/// `GET /podcast/featured?lang`
pub async fn featured_podcasts(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "No featured podcasts found";
    let value = Upstream::new(endpoints::get::TOP_SHOWS, not_found)
        .param("languages", params.langs())
        .fetch(&state.client)
        .await?;

    reply(value, &params, "✅ Featured podcasts fetched successfully", |raw: &TopShowsRaw| {
        found(limited(podcast::featured_shows(raw), &params), not_found)
    })
}

/// `GET /podcast/new?lang`
pub async fn new_podcasts(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "No new podcasts found";
    let value = Upstream::new(endpoints::get::TOP_SHOWS, not_found)
        .param("languages", params.langs())
        .param("sort", "latest")
        .fetch(&state.client)
        .await?;

    reply(value, &params, "✅ New podcasts fetched successfully", |raw: &TopShowsRaw| {
        found(limited(podcast::featured_shows(raw), &params), not_found)
    })
}

/// `GET /podcast/category/{category}?lang`
pub async fn podcast_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = format!("No podcasts found for category {category}");
    let value = Upstream::new(endpoints::get::TOP_SHOWS, &not_found)
        .param("languages", params.langs())
        .param("category", category.as_str())
        .fetch(&state.client)
        .await?;

    reply(
        value,
        &params,
        &format!("✅ {category} podcasts fetched successfully"),
        |raw: &TopShowsRaw| found(limited(podcast::featured_shows(raw), &params), &not_found),
    )
}
