use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    payload::PayloadError,
    saavn::FetchError,
    types::Envelope,
    utils::LinkError,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Upstream(#[from] FetchError),
    #[error("request timed out")]
    Timeout,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// Maps a fetch failure, turning "nothing there" answers into a 404
    /// carrying `not_found`.
    pub fn from_fetch(err: FetchError, not_found: &str) -> Self {
        match err {
            FetchError::Empty => ApiError::NotFound(not_found.to_string()),
            FetchError::Status { status, .. } if status == StatusCode::NOT_FOUND => {
                ApiError::NotFound(not_found.to_string())
            }
            other => ApiError::Upstream(other),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<LinkError> for ApiError {
    fn from(err: LinkError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<PayloadError> for ApiError {
    fn from(err: PayloadError) -> Self {
        match err {
            PayloadError::MissingId { entity } => {
                ApiError::NotFound(format!("{entity} not found, please check the id, link or token"))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(message) | ApiError::NotFound(message) => {
                Envelope::failed(format!("❌ {message}"))
            }
            ApiError::Upstream(err) => {
                tracing::error!("upstream failure: {err}");
                Envelope::error("❌ Something went wrong while contacting the provider")
            }
            ApiError::Timeout => {
                tracing::warn!("request exceeded its time budget");
                Envelope::error("❌ Request timed out")
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_upstream_is_not_found() {
        let err = ApiError::from_fetch(FetchError::Empty, "Song not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Song not found");
    }

    #[test]
    fn server_errors_stay_upstream_failures() {
        let err = ApiError::from_fetch(
            FetchError::Status {
                status: StatusCode::BAD_GATEWAY,
                url: "https://www.jiosaavn.com/api.php".into(),
            },
            "unused",
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_id_maps_to_not_found() {
        let err: ApiError = PayloadError::MissingId { entity: "album" }.into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
