use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use serde_json::Value;

use super::{ApiError, Params, Upstream, found, limited, reply, validate};
use crate::{payload::trending as payload, saavn::endpoints, server::AppState};

const TRENDING_TYPES: [&str; 3] = ["song", "album", "playlist"];
const TRENDING_CATEGORIES: [&str; 3] = ["popularity", "latest", "alphabetical"];

/// `GET /trending?type&lang`
pub async fn trending(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let kind = params
        .get("type")
        .map(|t| validate::one_of(t, &TRENDING_TYPES, "type"))
        .transpose()?;

    let not_found = "No trending results found";
    let value = Upstream::new(endpoints::get::TRENDING, not_found)
        .param("entity_type", kind.unwrap_or_default())
        .param("entity_language", params.langs())
        .fetch(&state.client)
        .await?;

    reply(value, &params, "✅ Trending results fetched successfully", |raw: &Vec<Value>| {
        found(limited(payload::trending(raw, kind, params.mini()), &params), not_found)
    })
}

/// `GET /trending/category/{type}?category&lang&page&n`
///
/// Categories are not honoured for every type and language; when the
/// categorised listing comes back empty it is fetched again without one.
pub async fn trending_category(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let kind = validate::one_of(&kind, &TRENDING_TYPES, "type")?;
    let category = params
        .get("category")
        .map(|c| validate::one_of(c, &TRENDING_CATEGORIES, "category"))
        .transpose()?
        .unwrap_or("popularity");

    let not_found = format!("No trending {kind}s found for category {category}");
    let listing = |category| trending_listing(kind, category, &params, &not_found);

    let categorised = match listing(Some(category)).fetch(&state.client).await {
        Ok(value) if has_items(&value, kind, params.mini()) => Some(value),
        Ok(_) | Err(ApiError::NotFound(_)) => None,
        Err(err) => return Err(err),
    };
    let value = match categorised {
        Some(value) => value,
        None => {
            tracing::debug!(kind, category, "empty categorised trending, retrying without it");
            listing(None).fetch(&state.client).await?
        }
    };

    reply(
        value,
        &params,
        &format!("✅ Trending {kind}s by {category} fetched successfully"),
        |raw: &Vec<Value>| {
            found(
                limited(payload::trending(raw, Some(kind), params.mini()), &params),
                &not_found,
            )
        },
    )
}

/// `GET /language/{songs,albums,playlists}?lang&page&n`
pub async fn language(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let entity = validate::one_of(&entity, &["songs", "albums", "playlists"], "type")?;
    let lang = params
        .any(&["lang", "language"])
        .ok_or_else(|| ApiError::validation("Please provide the language"))?;
    let langs = params.langs();
    if langs.is_empty() {
        return Err(ApiError::validation(format!("Unsupported language '{lang}'")));
    }
    let kind = entity.trim_end_matches('s');

    let not_found = format!("No {entity} found for language {langs}");
    let value = Upstream::new(endpoints::get::TRENDING, &not_found)
        .param("entity_type", kind)
        .param("entity_language", langs.as_str())
        .param("p", params.page())
        .param("n", params.text("n"))
        .fetch(&state.client)
        .await?;

    reply(
        value,
        &params,
        &format!("✅ {langs} {entity} fetched successfully"),
        |raw: &Vec<Value>| {
            found(
                limited(payload::trending(raw, Some(kind), params.mini()), &params),
                &not_found,
            )
        },
    )
}

fn trending_listing<'a>(
    kind: &'a str,
    category: Option<&'a str>,
    params: &Params,
    not_found: &'a str,
) -> Upstream<'a> {
    let upstream = Upstream::new(endpoints::get::TRENDING, not_found)
        .param("entity_type", kind)
        .param("entity_language", params.langs())
        .param("p", params.page())
        .param("n", params.text("n"));
    match category {
        Some(category) => upstream.param("category", category),
        None => upstream,
    }
}

fn has_items(value: &Value, kind: &str, mini: bool) -> bool {
    value
        .as_array()
        .is_some_and(|items| !payload::trending(items, Some(kind), mini).is_empty())
}
