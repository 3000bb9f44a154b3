use crate::domain::entities::{ClassifiedDate, QueryView};
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON envelope for multi-record and high-verbosity results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i32,
    pub message: String,
    pub data: Vec<ClassifiedDate>,
}

impl Envelope {
    pub fn success(data: Vec<ClassifiedDate>) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            code: -1,
            message: message.into(),
            data: Vec::new(),
        }
    }
}

/// A successful query: a bare type code, or the full envelope.
#[derive(Debug)]
pub struct HolidayResponse(pub QueryView);

impl IntoResponse for HolidayResponse {
    fn into_response(self) -> Response {
        match self.0 {
            QueryView::Scalar(date_type) => date_type.to_string().into_response(),
            QueryView::Records(records) => Json(Envelope::success(records)).into_response(),
        }
    }
}
