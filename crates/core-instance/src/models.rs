use core_engine::Dialect;
use core_engine::engine::EngineConfig;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub type InstanceId = i64;

/// A managed database instance an operator can submit SQL against.
///
/// The password never leaves the process: it is accepted on create but
/// skipped on every outbound serialization.
#[derive(Validate, Serialize, Deserialize, Debug, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct Instance {
    #[serde(default)]
    pub id: InstanceId,
    #[validate(length(min = 1))]
    pub instance_name: String,
    pub dialect: Dialect,
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    #[validate(length(min = 1))]
    pub user: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    pub db_name: Option<String>,
}

impl From<&Instance> for EngineConfig {
    fn from(instance: &Instance) -> Self {
        Self {
            dialect: instance.dialect,
            host: instance.host.clone(),
            port: instance.port,
            user: instance.user.clone(),
            password: instance.password.clone(),
            default_db: instance.db_name.clone(),
        }
    }
}
