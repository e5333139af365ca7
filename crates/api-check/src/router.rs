use axum::Router;
use axum::routing::post;
use utoipa::OpenApi;

use crate::handlers::ApiDoc as CheckApiDoc;
use crate::handlers::execute_check;
use crate::state::AppState;

#[must_use]
pub fn check_open_api_spec() -> utoipa::openapi::OpenApi {
    CheckApiDoc::openapi()
}

pub fn create_router() -> Router<AppState> {
    Router::new().route("/execute-check", post(execute_check))
}
