use std::sync::Arc;

use async_trait::async_trait;

use crate::check::review_statements;
use crate::engine::{QueryRunner, SqlEngine};
use crate::error::EngineResult;
use crate::models::{CheckResult, ResultSet};
use crate::version::parse_version_triple;

/// Catalogs a Doris installation reserves for itself; excluded from
/// user-visible database listings.
pub const DORIS_SYSTEM_DATABASES: &[&str] = &["__internal_schema", "information_schema", "mysql"];

const SHOW_FRONTENDS: &str = "show frontends";
const SHOW_DATABASES: &str = "show databases";

const VERSION_COLUMN: &str = "Version";
// `show frontends` historically reports the version second-from-last, right
// before the trailing status column. Only consulted when the server does not
// name its columns; a server that appends trailing columns without a
// column_list will mis-resolve here.
const VERSION_FALLBACK_FROM_END: usize = 2;
const VERSION_PREFIX: &str = "doris-";

/// Doris dialect adapter. Frontend metadata is per-node, but the version is
/// cluster-uniform, so the first `show frontends` row is taken as
/// authoritative.
pub struct DorisEngine {
    runner: Arc<dyn QueryRunner>,
    system_databases: &'static [&'static str],
}

impl std::fmt::Debug for DorisEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DorisEngine").finish()
    }
}

impl DorisEngine {
    #[must_use]
    pub fn new(runner: Arc<dyn QueryRunner>) -> Self {
        Self {
            runner,
            system_databases: DORIS_SYSTEM_DATABASES,
        }
    }
}

#[async_trait]
impl SqlEngine for DorisEngine {
    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn query(&self, full_sql: &str) -> EngineResult<ResultSet> {
        self.runner.fetch(full_sql).await
    }

    #[tracing::instrument(level = "debug", skip(self, sql))]
    async fn execute_check(&self, db_name: &str, sql: &str) -> EngineResult<CheckResult> {
        Ok(review_statements(db_name, sql))
    }

    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn get_all_databases(&self) -> EngineResult<ResultSet> {
        let mut result = self.query(SHOW_DATABASES).await?;
        result.rows.retain(|row| {
            !row.first()
                .is_some_and(|name| self.system_databases.contains(&name.as_str()))
        });
        Ok(result)
    }

    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn server_version(&self) -> EngineResult<(u32, u32, u32)> {
        let result = self.query(SHOW_FRONTENDS).await?;
        let value = result.resolve_cell(0, VERSION_COLUMN, VERSION_FALLBACK_FROM_END)?;
        parse_version_triple(value, VERSION_PREFIX)
    }
}
