use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// JSON body extractor whose rejections use the crate's `{"detail": ...}` shape
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(rejection_to_error)
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            AppError::Validation(format!("Invalid JSON data: {}", err.body_text()))
        }
        JsonRejection::JsonSyntaxError(err) => {
            AppError::BadRequest(format!("Invalid JSON syntax: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            AppError::BadRequest("Expected request with `Content-Type: application/json`".into())
        }
        other => AppError::BadRequest(format!("Failed to parse JSON body: {}", other.body_text())),
    }
}
