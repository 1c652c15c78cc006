use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Serialize;

use super::{ApiError, Params, Upstream, raw_json, success, validate};
use crate::{
    payload::download_links,
    saavn::{decode, endpoints, models::SongDetailsRaw},
    server::AppState,
    types::Link,
    utils::decode_html,
};

const QUALITIES: [&str; 3] = ["96_KBPS", "160_KBPS", "320_KBPS"];

#[derive(Debug, Serialize)]
struct Download {
    id: String,
    name: String,
    download_url: Vec<Link>,
}

/// `96_KBPS` -> `96kbps`, the quality label of a download link.
fn link_quality(quality: &str) -> String {
    quality.replace('_', "").to_ascii_lowercase()
}

/// `GET /download?id&quality`
pub async fn download(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Response, ApiError> {
    let id = validate::require(&params, "id", "Please provide the song id")?;
    let quality = params
        .get("quality")
        .map(|q| validate::one_of(q, &QUALITIES, "quality"))
        .transpose()?;

    let value = Upstream::new(
        endpoints::song::DETAILS,
        "Song not found, please check the id",
    )
    .param("pids", id)
    .fetch(&state.client)
    .await?;
    if params.raw() {
        return Ok(raw_json(value));
    }

    let raw: SongDetailsRaw = decode(value)?;
    let song = raw
        .songs
        .first()
        .filter(|s| !s.id.is_empty())
        .ok_or_else(|| ApiError::NotFound("Song not found, please check the id".into()))?;

    let mut links = download_links(&song.more_info.encrypted_media_url);
    if let Some(quality) = quality {
        let wanted = link_quality(quality);
        links.retain(|l| l.quality == wanted);
    }
    if links.is_empty() {
        return Err(ApiError::NotFound(
            "No download links available for this song".into(),
        ));
    }

    Ok(success(
        "✅ Download links fetched successfully",
        Download {
            id: song.id.clone(),
            name: decode_html(&song.title),
            download_url: links,
        },
    ))
}
