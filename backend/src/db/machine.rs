use common::model::machine::Machine;
use rusqlite::{params, Connection};

use super::StoreError;

/// Read-only accessor over the `machine` table.
pub struct MachineStore<'a> {
    conn: &'a Connection,
}

impl<'a> MachineStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All machines in id order.
    pub fn list(&self) -> Result<Vec<Machine>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, description FROM machine ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Machine {
                id: row.get(0)?,
                description: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    /// The machine with the given id. Absence is a valid outcome, not an
    /// error.
    pub fn get(&self, machine_id: i64) -> Result<Option<Machine>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, description FROM machine WHERE id = ?1")?;
        let mut rows = stmt.query_map(params![machine_id], |row| {
            Ok(Machine {
                id: row.get(0)?,
                description: row.get(1)?,
            })
        })?;
        rows.next().transpose().map_err(StoreError::from)
    }

    /// Always refused. Callers go through the named accessors.
    pub fn query_raw(&self, _sql: &str) -> Result<Vec<Machine>, StoreError> {
        Err(StoreError::Unsupported)
    }
}
