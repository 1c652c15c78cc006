use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use serde_json::Value;

use super::{ApiError, Params, Upstream, found, limited, reply, validate};
use crate::{
    payload::search,
    saavn::{
        endpoints,
        models::{
            AlbumRaw, AllSearchRaw, ArtistSearchRaw, MiniRaw, PlaylistSearchRaw,
            SearchResultsRaw, ShowSearchRaw, SongRaw,
        },
    },
    server::AppState,
    utils::sanitize_query,
};

fn query(params: &Params) -> Result<String, ApiError> {
    let q = validate::require(params, "q", "Please provide a search query")?;
    let q = sanitize_query(q);
    if q.is_empty() {
        return Err(ApiError::validation("Please provide a valid search query"));
    }
    Ok(q)
}

/// `GET /search?q`
pub async fn search_all(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let q = query(&params)?;

    let not_found = "No search results found";
    let value = Upstream::new(endpoints::search::ALL, not_found)
        .param("query", q)
        .legacy()
        .fetch(&state.client)
        .await?;

    reply(value, &params, "✅ Search results fetched successfully", |raw: &AllSearchRaw| {
        found(search::all_search(raw), not_found)
    })
}

/// `GET /search/top`
pub async fn search_top(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "No top searches found";
    let value = Upstream::new(endpoints::search::TOP, not_found)
        .fetch(&state.client)
        .await?;

    reply(value, &params, "✅ Top searches fetched successfully", |raw: &Vec<MiniRaw>| {
        found(limited(search::top_searches(raw), &params), not_found)
    })
}

/// `GET /search/{songs,albums,playlists,artists}?q&page&n&language&limit`
pub async fn search_entity(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let entity = validate::one_of(
        &entity,
        &["songs", "albums", "playlists", "artists"],
        "search type",
    )?;
    let q = query(&params)?;
    let language = validate::search_language(&params)?;

    let call = match entity {
        "songs" => endpoints::search::SONGS,
        "albums" => endpoints::search::ALBUMS,
        "playlists" => endpoints::search::PLAYLISTS,
        _ => endpoints::search::ARTISTS,
    };
    let not_found = format!("No {entity} found for the given query");

    let value = Upstream::new(call, &not_found)
        .param("q", q)
        .param("p", params.page())
        .param("n", params.text("n"))
        .param("language", language)
        .fetch(&state.client)
        .await?;

    let message = format!("✅ {} search results fetched successfully", capitalize(entity));
    entity_results(value, &params, entity, &message, &not_found)
}

/// `GET /genre/{songs,albums,playlists}?name&lang&page&n`
pub async fn genre(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let entity = validate::one_of(&entity, &["songs", "albums", "playlists"], "genre type")?;
    let name = validate::require(&params, "name", "Please provide the genre name")?;

    let call = match entity {
        "songs" => endpoints::search::SONGS,
        "albums" => endpoints::search::ALBUMS,
        _ => endpoints::search::PLAYLISTS,
    };
    let not_found = format!("No {entity} found for genre {name}");

    let value = Upstream::new(call, &not_found)
        .param("q", name)
        .param("type", "genre")
        .param("p", params.page())
        .param("n", params.text("n"))
        .param("language", params.langs())
        .fetch(&state.client)
        .await?;

    let message = format!("✅ {} of genre {name} fetched successfully", capitalize(entity));
    entity_results(value, &params, entity, &message, &not_found)
}

/// Normalizes a typed search page according to `entity`.
fn entity_results(
    value: Value,
    params: &Params,
    entity: &str,
    message: &str,
    not_found: &str,
) -> Result<Response, ApiError> {
    let (mini, limit) = (params.mini(), params.limit());
    match entity {
        "songs" => reply(value, params, message, |raw: &SearchResultsRaw<SongRaw>| {
            found(search::search_songs(raw, mini, limit), not_found)
        }),
        "albums" => reply(value, params, message, |raw: &SearchResultsRaw<AlbumRaw>| {
            found(search::search_albums(raw, mini, limit), not_found)
        }),
        "playlists" => reply(
            value,
            params,
            message,
            |raw: &SearchResultsRaw<PlaylistSearchRaw>| {
                found(search::search_playlists(raw, limit), not_found)
            },
        ),
        _ => reply(
            value,
            params,
            message,
            |raw: &SearchResultsRaw<ArtistSearchRaw>| {
                found(search::search_artists(raw, limit), not_found)
            },
        ),
    }
}

/// `GET /search/podcasts?q&page&n`
pub async fn search_podcasts(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let q = query(&params)?;

    let not_found = "No podcasts found for the given query";
    let value = Upstream::new(endpoints::search::MORE, not_found)
        .param("q", q)
        .param("p", params.page())
        .param("n", params.text("n"))
        .param("params", r#"{"type":"podcasts"}"#)
        .fetch(&state.client)
        .await?;

    let limit = params.limit();
    reply(
        value,
        &params,
        "✅ Podcast search results fetched successfully",
        |raw: &SearchResultsRaw<ShowSearchRaw>| {
            found(search::search_podcasts(raw, limit), not_found)
        },
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
