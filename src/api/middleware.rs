//! Request-boundary layers wrapped around every route.

use std::time::Duration;

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use url::form_urlencoded;

use super::ApiError;
use crate::{server::AppState, utils::camelize_keys, utils::parse_bool};

/// Drops the in-flight handler once `budget` elapses and answers 504.
pub async fn timeout(State(budget): State<Duration>, req: Request, next: Next) -> Response {
    match tokio::time::timeout(budget, next.run(req)).await {
        Ok(response) => response,
        Err(_) => ApiError::Timeout.into_response(),
    }
}

/// `camel` is on when present without a value or with a truthy one.
fn wants_camel(query: Option<&str>) -> bool {
    let Some(query) = query else {
        return false;
    };
    form_urlencoded::parse(query.as_bytes())
        .any(|(key, value)| key == "camel" && (value.is_empty() || parse_bool(&value)))
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

fn json_response(status: StatusCode, body: impl Into<Body>) -> Response {
    let mut response = Response::new(body.into());
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

/// Rewrites every key of a JSON response body to camelCase on request.
pub async fn camel_case(req: Request, next: Next) -> Response {
    let camel = wants_camel(req.uri().query());
    let response = next.run(req).await;
    if !camel || !is_json(&response) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("failed to buffer response body: {e}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let body = match serde_json::from_slice::<Value>(&bytes) {
        Ok(value) => match serde_json::to_vec(&camelize_keys(value)) {
            Ok(converted) => Body::from(converted),
            Err(_) => Body::from(bytes),
        },
        Err(_) => Body::from(bytes),
    };
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, body)
}

/// Serves successful GET JSON responses from the configured [`KvStore`],
/// keyed by the full request URI.
///
/// [`KvStore`]: crate::management::KvStore
pub async fn cache(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let Some(store) = state.cache.clone() else {
        return next.run(req).await;
    };
    if req.method() != Method::GET {
        return next.run(req).await;
    }

    let key = req.uri().to_string();
    if let Some(hit) = store.get(&key).await {
        tracing::debug!(%key, "cache hit");
        return json_response(StatusCode::OK, hit);
    }

    let response = next.run(req).await;
    if response.status() != StatusCode::OK || !is_json(&response) {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("failed to buffer response body: {e}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    if let Ok(text) = std::str::from_utf8(&bytes) {
        store
            .set_with_ttl(key, text.to_string(), state.cache_ttl)
            .await;
    }
    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_flag_forms() {
        assert!(wants_camel(Some("id=1&camel")));
        assert!(wants_camel(Some("camel=true&id=1")));
        assert!(wants_camel(Some("camel=1")));
        assert!(wants_camel(Some("camel=")));
        assert!(!wants_camel(Some("camel=false")));
        assert!(!wants_camel(Some("camelot=1")));
        assert!(!wants_camel(None));
    }

    #[test]
    fn camel_flag_is_percent_decoded() {
        assert!(wants_camel(Some("camel=%31")));
        assert!(wants_camel(Some("%63amel=true")));
        assert!(wants_camel(Some("q=a%26camel%3D0&camel=true")));
        assert!(!wants_camel(Some("q=a%26camel%3D1")));
    }
}
