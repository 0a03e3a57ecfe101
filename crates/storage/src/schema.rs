use rusqlite::Connection;

use crate::error::StorageError;

pub const SCHEMA_VERSION: i32 = 1;

pub fn init_schema(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = 5000;
    ",
    )?;
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at INTEGER NOT NULL
);
INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (1, unixepoch());

CREATE TABLE IF NOT EXISTS harvest (
    year INTEGER PRIMARY KEY,
    quantity_harvested REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS climate (
    year INTEGER PRIMARY KEY,
    mean_temperature REAL NOT NULL,
    precipitation REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS maturity_index (
    year INTEGER PRIMARY KEY,
    maturity_index REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS soil_condition (
    year INTEGER PRIMARY KEY,
    ph REAL NOT NULL,
    nutrients REAL NOT NULL
);
";
