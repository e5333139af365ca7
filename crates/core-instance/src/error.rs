use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum InstanceError {
    #[snafu(display("Instance {id} not found"))]
    InstanceNotFound { id: i64 },

    #[snafu(display("Validation error: {source}"))]
    Validation { source: validator::ValidationErrors },
}

pub type InstanceResult<T> = std::result::Result<T, InstanceError>;

impl From<validator::ValidationErrors> for InstanceError {
    fn from(source: validator::ValidationErrors) -> Self {
        Self::Validation { source }
    }
}
