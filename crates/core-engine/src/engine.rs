use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::error::EngineResult;
use crate::models::{CheckResult, ResultSet};

/// The closed set of supported dialects. Callers select an adapter through an
/// explicit [`EngineFactory`] keyed on this enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, utoipa::ToSchema)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Mysql,
    Doris,
}

/// Connection-layer seam: one blocking round-trip to the target server per
/// call. Acquisition and release of the underlying connection, including on
/// error paths, belong to the implementation; the engine core adds no retry,
/// timeout, or cancellation on top.
#[async_trait]
pub trait QueryRunner: Send + Sync {
    async fn fetch(&self, full_sql: &str) -> EngineResult<ResultSet>;
}

/// Contract every dialect adapter implements. Adapters are constructed per
/// request, bound to one instance configuration, and keep no state across
/// calls; memoization of introspection results, if any, belongs to callers.
#[async_trait]
pub trait SqlEngine: Send + Sync {
    async fn query(&self, full_sql: &str) -> EngineResult<ResultSet>;
    async fn execute_check(&self, db_name: &str, sql: &str) -> EngineResult<CheckResult>;
    async fn get_all_databases(&self) -> EngineResult<ResultSet>;
    async fn server_version(&self) -> EngineResult<(u32, u32, u32)>;
}

/// Connection and auth parameters an adapter is constructed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub dialect: Dialect,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub default_db: Option<String>,
}

/// Engine selection belongs to callers; this is the seam they implement.
pub trait EngineFactory: Send + Sync {
    fn engine(&self, config: &EngineConfig) -> EngineResult<Arc<dyn SqlEngine>>;
}
