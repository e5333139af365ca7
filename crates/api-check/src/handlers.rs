use axum::{Json, extract::State};
use core_engine::engine::EngineConfig;
use core_instance::error::InstanceError;
use snafu::ResultExt;
use utoipa::OpenApi;
use validator::Validate;

use crate::error::{self as check_error, CheckAPIError, CheckAPIResult, ErrorResponse};
use crate::models::{ExecuteCheckPayload, ExecuteCheckResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(execute_check),
    components(schemas(ExecuteCheckPayload, ExecuteCheckResponse, ErrorResponse)),
    tags(
      (name = "check", description = "SQL check endpoints"),
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    post,
    path = "/api/v1/execute-check",
    operation_id = "executeCheck",
    tags = ["check"],
    request_body = ExecuteCheckPayload,
    responses(
        (status = 200, description = "Returns the check result for the submitted SQL", body = ExecuteCheckResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Instance not found", body = ErrorResponse),
        (status = 422, description = "Check could not be performed", body = ErrorResponse),
    )
)]
#[tracing::instrument(level = "debug", skip(state), err, ret(level = tracing::Level::TRACE))]
pub async fn execute_check(
    State(state): State<AppState>,
    Json(payload): Json<ExecuteCheckPayload>,
) -> CheckAPIResult<Json<ExecuteCheckResponse>> {
    payload.validate().context(check_error::ValidationSnafu)?;

    let instance = state
        .instance_store
        .get_instance(payload.instance_id)
        .await
        .context(check_error::InstanceSnafu)?
        .ok_or(CheckAPIError::Instance {
            source: InstanceError::InstanceNotFound {
                id: payload.instance_id,
            },
        })?;

    let engine = state
        .engines
        .engine(&EngineConfig::from(&instance))
        .context(check_error::EngineSnafu)?;
    let check_result = engine
        .execute_check(&payload.db_name, payload.full_sql.trim())
        .await
        .context(check_error::EngineSnafu)?;

    Ok(Json(check_result.into()))
}
