use crate::domain::entities::Verbosity;
use crate::domain::errors::HolidayError;
use crate::infrastructure::http::response::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

/// A failed query, rendered according to the requested verbosity.
#[derive(Debug)]
pub struct ApiError {
    pub error: HolidayError,
    pub verbosity: Verbosity,
}

impl ApiError {
    pub fn new(error: HolidayError, verbosity: Verbosity) -> Self {
        Self { error, verbosity }
    }

    pub fn status(&self) -> StatusCode {
        match self.error {
            HolidayError::NotFound(_) => StatusCode::NOT_FOUND,
            HolidayError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            HolidayError::MalformedSource(_) => StatusCode::BAD_GATEWAY,
            HolidayError::SourceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.error.message().to_string();

        match self.verbosity {
            Verbosity::High => (status, Json(Envelope::failure(message))).into_response(),
            Verbosity::Low | Verbosity::Medium => (status, message).into_response(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
