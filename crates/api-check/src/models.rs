use core_engine::models::{CheckResult, ReviewResult};
use core_instance::InstanceId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExecuteCheckPayload {
    pub instance_id: InstanceId,
    #[validate(length(min = 1))]
    pub db_name: String,
    #[validate(length(min = 1))]
    pub full_sql: String,
}

/// Flattened check outcome returned to API consumers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExecuteCheckResponse {
    pub is_execute: bool,
    pub checked: bool,
    pub warning: String,
    pub error: String,
    pub warning_count: usize,
    pub error_count: usize,
    pub is_critical: bool,
    pub syntax_type: u8,
    pub rows: Vec<ReviewResult>,
    pub column_list: Vec<String>,
    pub status: String,
    pub affected_rows: u64,
}

impl From<CheckResult> for ExecuteCheckResponse {
    fn from(result: CheckResult) -> Self {
        Self {
            is_execute: result.is_execute,
            checked: result.checked,
            warning: result.warning,
            error: result.error,
            warning_count: result.warning_count,
            error_count: result.error_count,
            is_critical: result.is_critical,
            syntax_type: result.syntax_type,
            rows: result.rows,
            column_list: result.column_list,
            status: result.status,
            affected_rows: result.affected_rows,
        }
    }
}
