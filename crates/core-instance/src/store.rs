use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use snafu::{OptionExt, ResultExt};
use validator::Validate;

use crate::error::{self as instance_error, InstanceResult};
use crate::models::{Instance, InstanceId};

#[async_trait]
pub trait InstanceStore: std::fmt::Debug + Send + Sync {
    async fn create_instance(&self, instance: Instance) -> InstanceResult<Instance>;
    async fn get_instance(&self, id: InstanceId) -> InstanceResult<Option<Instance>>;
    async fn list_instances(&self) -> InstanceResult<Vec<Instance>>;
    async fn delete_instance(&self, id: InstanceId) -> InstanceResult<()>;
}

/// In-memory instance store. Ids are assigned monotonically on create unless
/// the caller brings its own.
pub struct MemoryInstanceStore {
    instances: DashMap<InstanceId, Instance>,
    next_id: AtomicI64,
}

impl Default for MemoryInstanceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryInstanceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryInstanceStore").finish()
    }
}

impl MemoryInstanceStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            instances: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl InstanceStore for MemoryInstanceStore {
    #[tracing::instrument(level = "debug", skip(self, instance), err)]
    async fn create_instance(&self, mut instance: Instance) -> InstanceResult<Instance> {
        instance
            .validate()
            .context(instance_error::ValidationSnafu)?;
        if instance.id == 0 {
            instance.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        }
        self.instances.insert(instance.id, instance.clone());
        Ok(instance)
    }

    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn get_instance(&self, id: InstanceId) -> InstanceResult<Option<Instance>> {
        Ok(self.instances.get(&id).map(|entry| entry.clone()))
    }

    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn list_instances(&self) -> InstanceResult<Vec<Instance>> {
        let mut instances: Vec<Instance> = self
            .instances
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        instances.sort_by_key(|instance| instance.id);
        Ok(instances)
    }

    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn delete_instance(&self, id: InstanceId) -> InstanceResult<()> {
        self.instances
            .remove(&id)
            .map(|_| ())
            .context(instance_error::InstanceNotFoundSnafu { id })
    }
}
