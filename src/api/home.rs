use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::success;
use crate::types::Envelope;

const ROUTES: &[&str] = &[
    "/health",
    "/modules",
    "/modules/browse",
    "/search",
    "/search/top",
    "/search/songs",
    "/search/albums",
    "/search/playlists",
    "/search/artists",
    "/search/podcasts",
    "/song",
    "/song/recommend",
    "/album",
    "/album/recommend",
    "/album/same-year",
    "/playlist",
    "/playlist/recommend",
    "/artist",
    "/artist/songs",
    "/artist/albums",
    "/artist/top-songs",
    "/radio/featured",
    "/radio/artist",
    "/radio/entity",
    "/radio/songs",
    "/podcast",
    "/podcast/episodes",
    "/podcast/episode",
    "/podcast/top",
    "/podcast/trending",
    "/podcast/featured",
    "/podcast/new",
    "/podcast/category/{category}",
    "/trending",
    "/trending/category/{type}",
    "/genre/{type}",
    "/language/{type}",
    "/get/charts",
    "/get/featured-playlists",
    "/get/top-artists",
    "/get/top-albums",
    "/get/mix",
    "/get/label",
    "/get/mega-menu",
    "/get/featured-stations",
    "/get/lyrics",
    "/download",
];

/// `GET /`
pub async fn home() -> Response {
    success(
        "✅ JioSaavn gateway is up and running",
        json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "flags": ["raw", "mini", "camel"],
            "routes": ROUTES,
        }),
    )
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::failed(format!(
            "❌ Route '{}' not found, visit / for the available routes",
            uri.path()
        ))),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn banner_lists_every_route() {
        let response = home().await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let routes = body["data"]["routes"].as_array().unwrap();
        assert_eq!(routes.len(), ROUTES.len());
        assert!(routes.len() > 32);
        assert!(routes.iter().any(|r| r == "/get/mega-menu"));
    }
}
