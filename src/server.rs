use std::{net::SocketAddr, str::FromStr, sync::Arc, time::Duration};

use axum::{Router, middleware::from_fn, middleware::from_fn_with_state, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    Res,
    api::{self, middleware},
    config::Settings,
    management::{InMemoryStore, KvStore},
    saavn::SaavnClient,
};

/// Shared, cheaply cloned state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub client: SaavnClient,
    pub cache: Option<Arc<dyn KvStore>>,
    pub cache_ttl: Duration,
}

impl AppState {
    pub fn new(client: SaavnClient) -> Self {
        Self {
            client,
            cache: None,
            cache_ttl: Duration::from_secs(3600),
        }
    }

    pub fn with_cache(mut self, store: Arc<dyn KvStore>, ttl: Duration) -> Self {
        self.cache = Some(store);
        self.cache_ttl = ttl;
        self
    }

    pub fn from_settings(settings: &Settings) -> Res<Self> {
        let state = Self::new(SaavnClient::from_settings(settings)?);
        if settings.cache_enabled {
            return Ok(state.with_cache(Arc::new(InMemoryStore::new()), settings.cache_ttl));
        }
        Ok(state)
    }
}

/// Assembles every route and the request-boundary layers.
///
/// Layers, outermost first: tracing, time budget, cache, camelCase.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(api::home))
        .route("/health", get(api::health))
        .route("/modules", get(api::modules))
        .route("/modules/browse", get(api::browse_modules))
        .route("/search", get(api::search_all))
        .route("/search/top", get(api::search_top))
        .route("/search/podcasts", get(api::search_podcasts))
        .route("/search/{entity}", get(api::search_entity))
        .route("/song", get(api::song))
        .route("/song/recommend", get(api::song_recommend))
        .route("/album", get(api::album))
        .route("/album/recommend", get(api::album_recommend))
        .route("/album/same-year", get(api::album_same_year))
        .route("/playlist", get(api::playlist))
        .route("/playlist/recommend", get(api::playlist_recommend))
        .route("/artist", get(api::artist))
        .route("/artist/songs", get(api::artist_songs))
        .route("/artist/albums", get(api::artist_albums))
        .route("/artist/top-songs", get(api::artist_top_songs))
        .route("/radio/songs", get(api::station_songs))
        .route("/radio/{kind}", get(api::create_station))
        .route("/podcast", get(api::podcast))
        .route("/podcast/episodes", get(api::podcast_episodes))
        .route("/podcast/episode", get(api::podcast_episode))
        .route("/podcast/top", get(api::top_podcasts))
        .route("/podcast/trending", get(api::trending_podcasts))
        .route("/podcast/featured", get(api::featured_podcasts))
        .route("/podcast/new", get(api::new_podcasts))
        .route("/podcast/category/{category}", get(api::podcast_category))
        .route("/trending", get(api::trending))
        .route("/trending/category/{kind}", get(api::trending_category))
        .route("/genre/{entity}", get(api::genre))
        .route("/language/{entity}", get(api::language))
        .route("/get/charts", get(api::charts))
        .route("/get/featured-playlists", get(api::featured_playlists))
        .route("/get/top-artists", get(api::top_artists))
        .route("/get/top-albums", get(api::top_albums))
        .route("/get/mix", get(api::mix))
        .route("/get/label", get(api::label))
        .route("/get/mega-menu", get(api::mega_menu))
        .route("/get/featured-stations", get(api::featured_stations))
        .route("/get/lyrics", get(api::lyrics))
        .route("/download", get(api::download))
        .fallback(api::not_found)
        .layer(from_fn(middleware::camel_case))
        .layer(from_fn_with_state(state.clone(), middleware::cache))
        .layer(from_fn_with_state(request_timeout, middleware::timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_api_server(settings: Settings) -> Res<()> {
    let addr = SocketAddr::from_str(&settings.server_addr)
        .map_err(|e| format!("invalid server address '{}': {e}", settings.server_addr))?;

    let state = AppState::from_settings(&settings)?;
    let app = build_router(state, settings.request_timeout);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        %addr,
        retries = settings.retry.max_attempts,
        cache = settings.cache_enabled,
        "listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
