// src/error.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::models::response::ErrorBody;

/// Everything a handler can fail with. Converted to a JSON error response
/// at the handler boundary; nothing propagates past the listener.
#[derive(Debug)]
pub enum ApiError {
    MissingPlayerParam,
    PlayerNotFound,
    AssetNotFound(String),
    AssetRead(String),
    MethodNotAllowed,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPlayerParam => write!(f, "player parameter missing"),
            Self::PlayerNotFound => write!(f, "player not found"),
            Self::AssetNotFound(path) => write!(f, "file not found: {}", path),
            Self::AssetRead(path) => write!(f, "failed to read asset: {}", path),
            Self::MethodNotAllowed => write!(f, "only GET allowed"),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingPlayerParam => StatusCode::BAD_REQUEST,
            Self::PlayerNotFound | Self::AssetNotFound(_) => StatusCode::NOT_FOUND,
            Self::AssetRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorBody {
            status: status.as_u16(),
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_taxonomy() {
        assert_eq!(ApiError::MissingPlayerParam.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::PlayerNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::AssetNotFound("/x.html".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::AssetRead("/x.html".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn error_body_is_json_with_status() {
        let response = ApiError::MissingPlayerParam.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("application/json"));
    }
}
