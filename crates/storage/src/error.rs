use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("replay aborted at operation {index} ({op_type}): {source}")]
    ReplayAborted {
        index: usize,
        op_type: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("replay rejected: {0}")]
    ReplayRejected(String),

    #[error("core error: {0}")]
    Core(#[from] agrosync_core::CoreError),
}
