use agrosync_core::CoreError;
use agrosync_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("core error: {0}")]
    Core(#[from] CoreError),

    #[error("bulk load parse error: {0}")]
    Parse(String),

    #[error("year not found: {0}")]
    YearNotFound(i32),
}
