use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkloadError {
    #[error("unknown build profile {0:?}: expected \"light\", \"standard\", or \"heavy\"")]
    UnknownProfile(String),
}

pub type WorkloadResult<T> = Result<T, WorkloadError>;
