use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::errors::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure side of every handler. Not-found answers with a plain-text body;
/// validation and rejected transitions render as problem+json.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Validation(String),
    MethodNotAllowed { detail: String },
    Internal(String),
}

impl ApiError {
    pub fn method_not_allowed(detail: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::NotFound(message) => Self::NotFound(message),
            DomainError::Validation(detail) => Self::Validation(detail),
            DomainError::Internal(detail) => Self::Internal(detail),
        }
    }
}

#[derive(Debug, Serialize)]
struct ProblemDetails {
    title: &'static str,
    detail: String,
    status: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            Self::Validation(detail) => {
                problem(StatusCode::BAD_REQUEST, "Validation failed", detail)
            }
            Self::MethodNotAllowed { detail } => {
                problem(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", detail)
            }
            Self::Internal(detail) => {
                tracing::error!(detail = %detail, "request failed");
                problem(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    detail,
                )
            }
        }
    }
}

fn problem(status: StatusCode, title: &'static str, detail: String) -> Response {
    let payload = ProblemDetails {
        title,
        detail,
        status: status.as_u16(),
    };

    let mut response = (status, Json(payload)).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/problem+json"),
    );

    response
}
