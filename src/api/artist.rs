use axum::{
    extract::{Query, State},
    response::Response,
};

use super::{
    ApiError, Params, Upstream, found, limited, reply,
    validate::{self, Identifier, LinkKind},
};
use crate::{
    payload::{artist, collect_valid, song},
    saavn::{
        endpoints,
        models::{ArtistPageRaw, ArtistRaw, SongRaw},
    },
    server::AppState,
};

const CATEGORIES: [&str; 4] = ["latest", "alphabetical", "popularity", "last_updated"];
const SORT_ORDERS: [&str; 2] = ["asc", "desc"];

/// Optional `cat` and `sort` of the artist routes.
fn ordering(params: &Params) -> Result<(String, String), ApiError> {
    let category = params
        .get("cat")
        .map(|c| validate::one_of(c, &CATEGORIES, "category"))
        .transpose()?
        .unwrap_or_default();
    let sort = params
        .get("sort")
        .map(|s| validate::one_of(s, &SORT_ORDERS, "sort order"))
        .transpose()?
        .unwrap_or_default();
    Ok((category.to_string(), sort.to_string()))
}

/// `GET /artist?id|link|token&n_song&n_album&page&cat&sort`
pub async fn artist(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let (category, sort) = ordering(&params)?;
    let not_found = "Artist not found, please check the id, link or token";
    let upstream = match validate::identifier(&params, LinkKind::Artist)? {
        Identifier::Id(id) => {
            Upstream::new(endpoints::artist::DETAILS, not_found).param("artistId", id)
        }
        Identifier::Token(token) => Upstream::new(endpoints::WEBAPI_GET, not_found)
            .param("token", token)
            .param("type", LinkKind::Artist.webapi_type()),
    };

    let value = upstream
        .param("n_song", params.text("n_song"))
        .param("n_album", params.text("n_album"))
        .param("page", params.page())
        .param("category", category)
        .param("sort_order", sort)
        .fetch(&state.client)
        .await?;

    reply(value, &params, "✅ Artist details fetched successfully", |raw: &ArtistRaw| {
        Ok(artist::artist(raw, params.mini())?)
    })
}

async fn artist_page(
    state: &AppState,
    params: &Params,
    call: &str,
    not_found: &str,
) -> Result<serde_json::Value, ApiError> {
    let id = validate::require(params, "id", "Please provide the artist id")?;
    let (category, sort) = ordering(params)?;

    Upstream::new(call, not_found)
        .param("artistId", id)
        .param("page", params.page())
        .param("category", category)
        .param("sort_order", sort)
        .fetch(&state.client)
        .await
}

/// `GET /artist/songs?id&page&cat&sort`
pub async fn artist_songs(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "Artist's top songs not found, please check the id";
    let value = artist_page(&state, &params, endpoints::artist::SONGS, not_found).await?;

    reply(value, &params, "✅ Artist's songs fetched successfully", |raw: &ArtistPageRaw| {
        found(artist::artist_songs(raw, params.mini())?, not_found)
    })
}

/// `GET /artist/albums?id&page&cat&sort`
pub async fn artist_albums(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let not_found = "Artist's top albums not found, please check the id";
    let value = artist_page(&state, &params, endpoints::artist::ALBUMS, not_found).await?;

    reply(value, &params, "✅ Artist's albums fetched successfully", |raw: &ArtistPageRaw| {
        found(artist::artist_albums(raw, params.mini())?, not_found)
    })
}

/// `GET /artist/top-songs?artist_id&song_id&lang&cat&sort&page`
pub async fn artist_top_songs(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let artist_id = validate::require(&params, "artist_id", "Please provide the artist id")?;
    let song_id = validate::require(&params, "song_id", "Please provide the song id")?;
    let (category, sort) = ordering(&params)?;

    let not_found = "Artist's other top songs not found, please check the ids";
    let value = Upstream::new(endpoints::artist::TOP_SONGS, not_found)
        .param("artist_ids", artist_id)
        .param("song_id", song_id)
        .param("page", params.page())
        .param("category", category)
        .param("sort_order", sort)
        .param("language", params.langs())
        .fetch(&state.client)
        .await?;

    reply(
        value,
        &params,
        "✅ Artist's top songs fetched successfully",
        |raw: &Vec<SongRaw>| {
            found(limited(collect_valid(raw, |s| song::song(s, true)), &params), not_found)
        },
    )
}
