use std::sync::Arc;

use async_trait::async_trait;

use crate::check::review_statements;
use crate::engine::{QueryRunner, SqlEngine};
use crate::error::EngineResult;
use crate::models::{CheckResult, ResultSet};
use crate::version::parse_version_triple;

/// Schemas MySQL ships for its own bookkeeping; excluded from user-visible
/// database listings.
pub const MYSQL_SYSTEM_DATABASES: &[&str] = &[
    "information_schema",
    "performance_schema",
    "mysql",
    "test",
    "sys",
];

const SELECT_VERSION: &str = "select version()";
const SHOW_DATABASES: &str = "show databases";

const VERSION_COLUMN: &str = "version()";
// `select version()` yields a single cell; resolving one-from-end covers
// drivers that do not report column names.
const VERSION_FALLBACK_FROM_END: usize = 1;

/// MySQL dialect adapter.
pub struct MysqlEngine {
    runner: Arc<dyn QueryRunner>,
    system_databases: &'static [&'static str],
}

impl std::fmt::Debug for MysqlEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MysqlEngine").finish()
    }
}

impl MysqlEngine {
    #[must_use]
    pub fn new(runner: Arc<dyn QueryRunner>) -> Self {
        Self {
            runner,
            system_databases: MYSQL_SYSTEM_DATABASES,
        }
    }
}

#[async_trait]
impl SqlEngine for MysqlEngine {
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
        let result = self.query(SELECT_VERSION).await?;
        let value = result.resolve_cell(0, VERSION_COLUMN, VERSION_FALLBACK_FROM_END)?;
        parse_version_triple(value, "")
    }
}
