use std::sync::Arc;

use core_engine::engine::EngineFactory;
use core_instance::store::InstanceStore;

#[derive(Clone)]
pub struct AppState {
    pub instance_store: Arc<dyn InstanceStore>,
    pub engines: Arc<dyn EngineFactory>,
}

impl AppState {
    #[must_use]
    pub fn new(instance_store: Arc<dyn InstanceStore>, engines: Arc<dyn EngineFactory>) -> Self {
        Self {
            instance_store,
            engines,
        }
    }
}
