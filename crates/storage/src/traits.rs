use agrosync_core::{CompleteRecord, PendingOperation};

use crate::error::StorageError;

/// External store boundary. The manager reaches the store only through
/// `replay` (during synchronize) and the bulk read methods.
pub trait Store {
    /// Apply a batch of pending operations, in order, inside one
    /// transactional unit. Either every operation commits or none does;
    /// on error the store is left as it was before the call.
    fn replay(&mut self, ops: &[PendingOperation]) -> Result<(), StorageError>;

    /// All complete records, joined across the four sub-tables, ordered
    /// ascending by year.
    fn load_all(&self) -> Result<Vec<CompleteRecord>, StorageError>;

    /// One year's complete record, if all four sub-rows exist.
    fn get_record(&self, year: i32) -> Result<Option<CompleteRecord>, StorageError>;

    /// Number of years present in the harvest table.
    fn year_count(&self) -> Result<u64, StorageError>;
}
