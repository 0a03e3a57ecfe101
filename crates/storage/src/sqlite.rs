use std::path::Path;

use rusqlite::Connection;

use agrosync_core::{CompleteRecord, PendingOperation};

use crate::error::StorageError;
use crate::traits::Store;

/// Sub-tables holding one year's record, in the order replay touches them.
const RECORD_TABLES: [&str; 4] = ["harvest", "climate", "maturity_index", "soil_condition"];

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        crate::schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        crate::schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

/// Translate one intent into its store mutations. Runs inside the replay
/// transaction; any error aborts the whole batch.
fn apply_op(tx: &rusqlite::Transaction, op: &PendingOperation) -> Result<(), rusqlite::Error> {
    match op {
        PendingOperation::Insert { record } => {
            tx.execute(
                "INSERT INTO harvest (year, quantity_harvested) VALUES (?1, ?2)",
                rusqlite::params![record.harvest.year, record.harvest.quantity_harvested],
            )?;
            tx.execute(
                "INSERT INTO climate (year, mean_temperature, precipitation) VALUES (?1, ?2, ?3)",
                rusqlite::params![
                    record.climate.year,
                    record.climate.mean_temperature,
                    record.climate.precipitation,
                ],
            )?;
            tx.execute(
                "INSERT INTO maturity_index (year, maturity_index) VALUES (?1, ?2)",
                rusqlite::params![record.maturity.year, record.maturity.maturity_index],
            )?;
            tx.execute(
                "INSERT INTO soil_condition (year, ph, nutrients) VALUES (?1, ?2, ?3)",
                rusqlite::params![record.soil.year, record.soil.ph, record.soil.nutrients],
            )?;
        }

        PendingOperation::Update { year, field, value } => {
            // Table and column come from the closed RecordField set, never
            // from caller input.
            let sql = format!(
                "UPDATE {} SET {} = ?1 WHERE year = ?2",
                field.table(),
                field.column()
            );
            // Zero rows affected is fine: the year may be absent at the
            // store, which mirrors the manager's no-op semantics.
            tx.execute(&sql, rusqlite::params![value, year])?;
        }

        PendingOperation::Delete { year } => {
            for table in RECORD_TABLES {
                let sql = format!("DELETE FROM {table} WHERE year = ?1");
                tx.execute(&sql, rusqlite::params![year])?;
            }
        }

        PendingOperation::DeleteAll => {
            for table in RECORD_TABLES {
                let sql = format!("DELETE FROM {table}");
                tx.execute(&sql, [])?;
            }
        }
    }
    Ok(())
}

const SELECT_RECORD: &str = "
    SELECT h.year, h.quantity_harvested,
           c.mean_temperature, c.precipitation,
           m.maturity_index,
           s.ph, s.nutrients
    FROM harvest h
    JOIN climate c ON c.year = h.year
    JOIN maturity_index m ON m.year = h.year
    JOIN soil_condition s ON s.year = h.year
";

fn read_record(row: &rusqlite::Row) -> Result<CompleteRecord, rusqlite::Error> {
    Ok(CompleteRecord::from_values(
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
    ))
}

impl Store for SqliteStore {
    fn replay(&mut self, ops: &[PendingOperation]) -> Result<(), StorageError> {
        let tx = self.conn.transaction()?;
        for (index, op) in ops.iter().enumerate() {
            // An early return drops the transaction, which rolls back
            // everything applied so far in this batch.
            apply_op(&tx, op).map_err(|source| StorageError::ReplayAborted {
                index,
                op_type: op.op_type_name(),
                source,
            })?;
        }
        tx.commit()?;
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<CompleteRecord>, StorageError> {
        let sql = format!("{SELECT_RECORD} ORDER BY h.year");
        let mut stmt = self.conn.prepare(&sql)?;
        let records = stmt
            .query_map([], read_record)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn get_record(&self, year: i32) -> Result<Option<CompleteRecord>, StorageError> {
        let sql = format!("{SELECT_RECORD} WHERE h.year = ?1");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query_map(rusqlite::params![year], read_record)?;
        match rows.next() {
            Some(record) => Ok(Some(record?)),
            None => Ok(None),
        }
    }

    fn year_count(&self) -> Result<u64, StorageError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM harvest", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
