pub mod check;
pub mod doris;
pub mod engine;
pub mod error;
pub mod models;
pub mod mysql;
pub mod resolve;
pub mod version;

pub use engine::{Dialect, EngineConfig, EngineFactory, QueryRunner, SqlEngine};
pub use error::{EngineError, EngineResult};
pub use models::{CheckResult, ResultSet, ReviewResult};
