//! End-to-end tests of the router against a mocked provider.

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use saavn_gateway::{
    management::InMemoryStore,
    saavn::{SaavnClient, retry::RetryPolicy},
    server::{AppState, build_router},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn state(server: &MockServer) -> AppState {
    let client = SaavnClient::new(
        format!("{}/api.php", server.uri()),
        RetryPolicy::once(),
        Duration::from_secs(5),
    )
    .unwrap();
    AppState::new(client)
}

fn app(server: &MockServer) -> Router {
    build_router(state(server), Duration::from_secs(10))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn mock_call(server: &MockServer, call: &str, body: Value) {
    Mock::given(method("GET"))
        .and(query_param("__call", call))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn album_results() -> Value {
    json!({
        "total": 1,
        "start": 1,
        "results": [{
            "id": "1139549",
            "title": "Aashiqui 2",
            "type": "album",
            "header_desc": "Mithoon &amp; Ankit",
            "image": "http://c.saavncdn.com/430/Aashiqui-2-Hindi-2013-150x150.jpg",
            "year": "2013",
            "play_count": "1000",
            "more_info": { "song_count": "12" }
        }]
    })
}

#[tokio::test]
async fn test_album_search_is_normalized() {
    let server = MockServer::start().await;
    mock_call(&server, "search.getAlbumResults", album_results()).await;

    let (status, body) = get(app(&server), "/search/albums?q=hindi").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Success");
    let first = &body["data"]["results"][0];
    assert_eq!(first["type"], "album");
    assert_eq!(first["year"], 2013);
    assert_eq!(first["header_desc"], "Mithoon & Ankit");
    let images = first["image"].as_array().unwrap();
    assert_eq!(images.len(), 3);
    assert_eq!(
        images[2]["link"],
        "https://c.saavncdn.com/430/Aashiqui-2-Hindi-2013-500x500.jpg"
    );
}

#[tokio::test]
async fn test_raw_returns_upstream_document() {
    let server = MockServer::start().await;
    mock_call(&server, "search.getAlbumResults", album_results()).await;

    let (status, body) = get(app(&server), "/search/albums?q=hindi&raw=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, album_results());
}

#[tokio::test]
async fn test_camel_rewrites_keys() {
    let server = MockServer::start().await;
    mock_call(&server, "search.getAlbumResults", album_results()).await;

    let (status, body) = get(app(&server), "/search/albums?q=hindi&camel").await;

    assert_eq!(status, StatusCode::OK);
    let first = &body["data"]["results"][0];
    assert_eq!(first["headerDesc"], "Mithoon & Ankit");
    assert_eq!(first["playCount"], 1000);
    assert!(first.get("header_desc").is_none());
}

#[tokio::test]
async fn test_missing_parameters_are_rejected() {
    let server = MockServer::start().await;

    let (status, body) = get(app(&server), "/search/albums").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "Failed");
    assert!(body["data"].is_null());

    let (status, _) = get(app(&server), "/search/videos?q=hindi").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(app(&server), "/album/same-year?year=soon").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Validation happens before any upstream call
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_entity_is_not_found() {
    let server = MockServer::start().await;
    mock_call(&server, "song.getDetails", json!({ "songs": [] })).await;

    let (status, body) = get(app(&server), "/song?id=missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "Failed");
}

#[tokio::test]
async fn test_upstream_failure_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (status, body) = get(app(&server), "/song?id=abc").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "Error");
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(album_results())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let app = build_router(state(&server), Duration::from_millis(100));
    let (status, body) = get(app, "/search/albums?q=hindi").await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["status"], "Error");
}

#[tokio::test]
async fn test_cached_responses_are_identical() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("__call", "search.getAlbumResults"))
        .respond_with(ResponseTemplate::new(200).set_body_json(album_results()))
        .expect(1)
        .mount(&server)
        .await;

    let state = state(&server).with_cache(Arc::new(InMemoryStore::new()), Duration::from_secs(60));
    let app = build_router(state, Duration::from_secs(10));

    let first = get(app.clone(), "/search/albums?q=hindi").await;
    let second = get(app, "/search/albums?q=hindi").await;

    assert_eq!(first, second);
    assert_eq!(first.0, StatusCode::OK);
}

#[tokio::test]
async fn test_normalization_is_repeatable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("__call", "search.getAlbumResults"))
        .respond_with(ResponseTemplate::new(200).set_body_json(album_results()))
        .expect(2)
        .mount(&server)
        .await;

    let app = app(&server);
    let (first_status, first) = get(app.clone(), "/search/albums?q=hindi").await;
    let (second_status, second) = get(app, "/search/albums?q=hindi").await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first["data"], second["data"]);
}

#[tokio::test]
async fn test_listings_without_valid_items_are_not_found() {
    let server = MockServer::start().await;
    mock_call(&server, "content.getCharts", json!([{ "title": "no id" }])).await;
    mock_call(&server, "search.getAlbumResults", json!({ "total": 0, "results": [] })).await;
    mock_call(&server, "content.getTopShows", json!({ "data": [{ "title": "no id" }] })).await;

    let (status, body) = get(app(&server), "/get/charts").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "Failed");
    assert_eq!(body["message"], "❌ No charts found");

    let (status, body) = get(app(&server), "/search/albums?q=nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "❌ No albums found for the given query");

    let (status, body) = get(app(&server), "/podcast/top").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "❌ No top podcasts found");
}

#[tokio::test]
async fn test_raw_station_songs_skip_error_check() {
    let server = MockServer::start().await;
    let upstream = json!({ "error": { "msg": "Station not found" } });
    mock_call(&server, "webradio.getSongs", upstream.clone()).await;

    let (status, body) = get(app(&server), "/radio/songs?id=missing&raw=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, upstream);

    let (status, body) = get(app(&server), "/radio/songs?id=missing").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "Failed");

    let requests = server.received_requests().await.unwrap();
    assert!(
        requests
            .iter()
            .all(|r| r.url.query_pairs().any(|(k, v)| k == "k" && v == "10"))
    );
}

#[tokio::test]
async fn test_trending_category_falls_back_without_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("__call", "content.getTrending"))
        .and(query_param("category", "latest"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "title": "no id", "type": "song" }])),
        )
        .with_priority(1)
        .mount(&server)
        .await;
    mock_call(
        &server,
        "content.getTrending",
        json!([
            { "id": "s1", "title": "Kesariya", "type": "song" },
            { "id": "a1", "title": "Album", "type": "album" }
        ]),
    )
    .await;

    let (status, body) = get(app(&server), "/trending/category/song?category=latest").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "✅ Trending songs by latest fetched successfully");
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "s1");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(!requests[1].url.query_pairs().any(|(k, _)| k == "category"));
}

#[tokio::test]
async fn test_genre_searches_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("__call", "search.getAlbumResults"))
        .and(query_param("q", "rock"))
        .and(query_param("type", "genre"))
        .respond_with(ResponseTemplate::new(200).set_body_json(album_results()))
        .mount(&server)
        .await;

    let (status, body) = get(app(&server), "/genre/albums?name=rock").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["results"][0]["id"], "1139549");

    let (status, _) = get(app(&server), "/genre/artists?name=rock").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = get(app(&server), "/genre/albums").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_language_listing_requires_a_language() {
    let server = MockServer::start().await;
    mock_call(
        &server,
        "content.getTrending",
        json!([{ "id": "p1", "title": "Hits", "type": "playlist" }]),
    )
    .await;

    let (status, _) = get(app(&server), "/language/playlists").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(app(&server), "/language/playlists?lang=tamil").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], "p1");
}

#[tokio::test]
async fn test_modules_are_grouped_into_sections() {
    let server = MockServer::start().await;
    mock_call(
        &server,
        "webapi.getLaunchData",
        json!({
            "charts": [{ "id": "c1", "title": "Top 50", "type": "playlist" }],
            "new_albums": [{ "id": "a1", "title": "Fresh", "type": "album" }],
            "modules": {
                "charts": { "title": "Top Charts", "source": "charts", "position": 2 },
                "new_albums": { "title": "New Releases", "source": "new_albums", "position": 1 }
            }
        }),
    )
    .await;

    let (status, body) = get(app(&server), "/modules").await;

    assert_eq!(status, StatusCode::OK);
    let sections = body["data"]["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0]["title"], "New Releases");
    assert_eq!(sections[1]["items"][0]["id"], "c1");
}

#[tokio::test]
async fn test_label_resolves_link_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("__call", "label.getDetails"))
        .and(query_param("token", "LcqX"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "labelId": "34297",
            "name": "T-Series",
            "topSongs": { "songs": [{ "id": "s1", "title": "Song" }], "total": 1 },
            "topAlbums": { "albums": [], "total": 0 }
        })))
        .mount(&server)
        .await;

    let (status, body) = get(
        app(&server),
        "/get/label?link=https://www.jiosaavn.com/label/t-series-albums/LcqX",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "34297");
    assert_eq!(body["data"]["top_songs"][0]["id"], "s1");
}

#[tokio::test]
async fn test_lyrics_are_normalized() {
    let server = MockServer::start().await;
    mock_call(
        &server,
        "lyrics.getLyrics",
        json!({ "lyrics": "Tum hi ho<br>Ab tum hi ho", "lyrics_copyright": "&copy; T-Series" }),
    )
    .await;

    let (status, body) = get(app(&server), "/get/lyrics?id=abc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["lyrics"], "Tum hi ho\nAb tum hi ho");
    assert_eq!(body["data"]["copyright"], "© T-Series");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = MockServer::start().await;

    let (status, body) = get(app(&server), "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "Failed");
}

#[tokio::test]
async fn test_health_and_home() {
    let server = MockServer::start().await;

    let (status, body) = get(app(&server), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get(app(&server), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Success");
    let routes = body["data"]["routes"].as_array().unwrap();
    assert!(routes.len() > 32);
    assert!(routes.iter().any(|r| r == "/trending/category/{type}"));
}
