use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("year {year} outside accepted range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("sub-records disagree on year: {0}")]
    YearMismatch(String),

    #[error("unknown field name: {0}")]
    UnknownField(String),

    #[error("unsupported snapshot version: {0}")]
    UnsupportedSnapshotVersion(u32),

    #[error("prediction failed: {0}")]
    Prediction(String),
}
