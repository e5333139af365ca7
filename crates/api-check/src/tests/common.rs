#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use async_trait::async_trait;
use core_engine::doris::DorisEngine;
use core_engine::engine::{Dialect, EngineConfig, EngineFactory, QueryRunner, SqlEngine};
use core_engine::error::{EngineError, EngineResult};
use core_engine::models::ResultSet;
use core_engine::mysql::MysqlEngine;
use core_instance::models::Instance;

/// Runner for engines that must never reach a live server in tests; checks
/// parse locally and issue no round-trips.
#[derive(Debug)]
pub struct UnreachableRunner;

#[async_trait]
impl QueryRunner for UnreachableRunner {
    async fn fetch(&self, full_sql: &str) -> EngineResult<ResultSet> {
        Err(EngineError::QueryFailed {
            message: format!("no test connection for: {full_sql}"),
        })
    }
}

/// Builds real adapters from the closed dialect set, wired to
/// [`UnreachableRunner`].
#[derive(Debug, Default)]
pub struct DialectFactory;

impl EngineFactory for DialectFactory {
    fn engine(&self, config: &EngineConfig) -> EngineResult<Arc<dyn SqlEngine>> {
        let runner = Arc::new(UnreachableRunner);
        Ok(match config.dialect {
            Dialect::Doris => Arc::new(DorisEngine::new(runner)),
            Dialect::Mysql => Arc::new(MysqlEngine::new(runner)),
        })
    }
}

/// Factory standing in for a broken connection layer.
#[derive(Debug, Default)]
pub struct FailingFactory;

impl EngineFactory for FailingFactory {
    fn engine(&self, _config: &EngineConfig) -> EngineResult<Arc<dyn SqlEngine>> {
        Err(EngineError::QueryFailed {
            message: "connection refused".to_string(),
        })
    }
}

#[must_use]
pub fn doris_instance(name: &str) -> Instance {
    Instance {
        id: 0,
        instance_name: name.to_string(),
        dialect: Dialect::Doris,
        host: "127.0.0.1".to_string(),
        port: 9030,
        user: "root".to_string(),
        password: "secret".to_string(),
        db_name: Some("orders".to_string()),
    }
}
