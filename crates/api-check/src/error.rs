use axum::Json;
use axum::response::IntoResponse;
use core_engine::error::EngineError;
use core_instance::error::InstanceError;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;

pub type CheckAPIResult<T> = Result<T, CheckAPIError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CheckAPIError {
    #[snafu(display("Instance error: {source}"))]
    Instance { source: InstanceError },

    #[snafu(display("Engine error: {source}"))]
    Engine { source: EngineError },

    #[snafu(display("Validation error: {source}"))]
    Validation { source: validator::ValidationErrors },
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    pub status_code: u16,
}

pub(crate) trait IntoStatusCode {
    fn status_code(&self) -> StatusCode;
}

impl IntoStatusCode for CheckAPIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Instance { source } => match source {
                InstanceError::InstanceNotFound { .. } => StatusCode::NOT_FOUND,
                InstanceError::Validation { .. } => StatusCode::BAD_REQUEST,
            },
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Engine { source } => match source {
                EngineError::QueryFailed { .. }
                | EngineError::ColumnNotFound { .. }
                | EngineError::EmptyResult { .. }
                | EngineError::VersionNotRecognized { .. }
                | EngineError::SqlParse { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            },
        }
    }
}

// Engine and store failures surface as a message field, never a raw trace.
impl IntoResponse for CheckAPIError {
    fn into_response(self) -> axum::response::Response {
        let code = self.status_code();
        let error = ErrorResponse {
            message: self.to_string(),
            status_code: code.as_u16(),
        };
        (code, Json(error)).into_response()
    }
}
