use agrosync_core::{PendingOperation, RecordField};
use agrosync_engine::{DataManager, EngineError};
use agrosync_harness::{logging, sample_record, FaultStore, TestFarm};
use agrosync_storage::{SqliteStore, Store};

// ============================================================================
// Synchronize: replay, atomicity, retry
// ============================================================================

#[test]
fn successful_sync_clears_log_and_reaches_store() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_test();
    let mut farm = TestFarm::new()?;
    farm.seed_simulated();
    farm.manager.update_field(2022, RecordField::Ph, 6.9);

    let applied = farm.synchronize()?;

    assert_eq!(applied, 4);
    assert!(farm.manager.pending().is_empty());
    assert_eq!(farm.store.year_count()?, 3);
    assert_eq!(farm.store.get_record(2022)?.unwrap().soil.ph, 6.9);
    Ok(())
}

#[test]
fn empty_log_sync_is_a_noop() -> Result<(), Box<dyn std::error::Error>> {
    let mut farm = TestFarm::new()?;
    assert_eq!(farm.synchronize()?, 0);
    Ok(())
}

#[test]
fn mid_batch_failure_rolls_back_store_and_preserves_log(
) -> Result<(), Box<dyn std::error::Error>> {
    logging::init_test();
    let mut farm = TestFarm::new()?;

    // Get 2021 committed, then craft a batch whose second insert collides
    // with it at the primary key.
    farm.manager.add_record(sample_record(2021));
    farm.synchronize()?;

    farm.manager.add_record(sample_record(2022));
    farm.manager.add_record(sample_record(2021));
    farm.manager
        .update_field(2022, RecordField::Precipitation, 990.0);
    let log_before = farm.manager.pending().to_vec();

    let err = farm.synchronize().unwrap_err();
    assert!(matches!(err, EngineError::Storage(_)));

    // Nothing from the failed batch is left committed.
    assert_eq!(farm.store.year_count()?, 1);
    assert!(farm.store.get_record(2022)?.is_none());
    assert_eq!(farm.store.get_record(2021)?.unwrap(), sample_record(2021));

    // The log is byte-for-byte what it was, ready for a retry.
    assert_eq!(farm.manager.pending(), &log_before[..]);
    Ok(())
}

#[test]
fn failed_sync_retries_the_same_sequence() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = FaultStore::new(SqliteStore::open_in_memory()?);
    let mut manager = DataManager::new();
    manager.add_record(sample_record(2021));
    manager.add_record(sample_record(2022));
    let log_before = manager.pending().to_vec();

    store.fail_next_replays(1);
    assert!(manager.synchronize(&mut store).is_err());
    assert_eq!(manager.pending(), &log_before[..]);
    assert_eq!(store.year_count()?, 0);

    // Same call again, same sequence, now it lands.
    let applied = manager.synchronize(&mut store)?;
    assert_eq!(applied, 2);
    assert!(manager.pending().is_empty());
    assert_eq!(store.year_count()?, 2);
    Ok(())
}

// ============================================================================
// Replay ordering semantics
// ============================================================================

#[test]
fn update_lands_on_a_year_created_earlier_in_the_same_batch(
) -> Result<(), Box<dyn std::error::Error>> {
    let mut farm = TestFarm::new()?;
    farm.manager.add_record(sample_record(2024));
    farm.manager
        .update_field(2024, RecordField::QuantityHarvested, 1800.0);

    farm.synchronize()?;

    let stored = farm.store.get_record(2024)?.unwrap();
    assert_eq!(stored.harvest.quantity_harvested, 1800.0);
    Ok(())
}

#[test]
fn delete_all_erases_only_what_precedes_it_in_replay() -> Result<(), Box<dyn std::error::Error>> {
    let mut farm = TestFarm::new()?;
    farm.manager.add_record(sample_record(2021));
    farm.synchronize()?;

    // Log: Insert 2022, DeleteAll, Insert 2023. The DeleteAll wipes 2021
    // and 2022, then 2023 is inserted after it.
    farm.manager.add_record(sample_record(2022));
    farm.manager.delete_all();
    farm.manager.add_record(sample_record(2023));
    farm.synchronize()?;

    assert_eq!(farm.store.year_count()?, 1);
    assert!(farm.store.get_record(2023)?.is_some());
    assert!(farm.store.get_record(2021)?.is_none());
    assert!(farm.store.get_record(2022)?.is_none());
    Ok(())
}

#[test]
fn delete_intent_for_missing_year_is_harmless_at_store() -> Result<(), Box<dyn std::error::Error>>
{
    let mut store = SqliteStore::open_in_memory()?;
    store.replay(&[
        PendingOperation::Delete { year: 1999 },
        PendingOperation::Update {
            year: 1999,
            field: RecordField::Ph,
            value: 7.0,
        },
    ])?;
    assert_eq!(store.year_count()?, 0);
    Ok(())
}

// ============================================================================
// Bulk load from the store
// ============================================================================

#[test]
fn load_from_store_round_trips_synced_records() -> Result<(), Box<dyn std::error::Error>> {
    let mut farm = TestFarm::new()?;
    farm.seed_simulated();
    farm.synchronize()?;

    let mut fresh = DataManager::new();
    let loaded = fresh.load_from_store(&farm.store)?;

    assert_eq!(loaded, 3);
    assert_eq!(fresh.len(), 3);
    assert_eq!(fresh.record(2022), farm.manager.record(2022));
    // Bulk load is not a mutation: nothing went into the pending log.
    assert!(fresh.pending().is_empty());
    Ok(())
}

#[test]
fn sync_to_file_store_survives_reopen() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("farm.db");

    let mut manager = DataManager::new();
    manager.add_record(sample_record(2024));
    {
        let mut store = SqliteStore::open(&path)?;
        manager.synchronize(&mut store)?;
    }

    let store = SqliteStore::open(&path)?;
    assert_eq!(store.get_record(2024)?.unwrap(), sample_record(2024));
    Ok(())
}
