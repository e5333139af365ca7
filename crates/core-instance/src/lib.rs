pub mod error;
pub mod models;
pub mod store;

pub use error::{InstanceError, InstanceResult};
pub use models::{Instance, InstanceId};
pub use store::{InstanceStore, MemoryInstanceStore};
