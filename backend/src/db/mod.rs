//! # Database Layer
//!
//! Sole gateway to the persisted `machine` and `simulation` tables. The two
//! store types in the sub-modules expose a fixed set of parameterized
//! operations; nothing else in the crate touches SQL. Arbitrary querying is
//! deliberately refused (`StoreError::Unsupported`) so free-form API inputs
//! can never steer query construction.
//!
//! Connections are opened per operation; each call executes as its own
//! atomic unit against SQLite.

mod machine;
mod simulation;

use std::path::Path;

use rusqlite::Connection;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

pub use machine::MachineStore;
pub use simulation::SimulationStore;

/// Stored as text so lexicographic `ORDER BY` equals chronological order.
const DATETIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS machine (
        id INTEGER PRIMARY KEY,
        description VARCHAR(100) NOT NULL
    );
    CREATE TABLE IF NOT EXISTS simulation (
        id INTEGER PRIMARY KEY,
        name_description VARCHAR(100) NOT NULL,
        status VARCHAR(10) NOT NULL DEFAULT 'pending',
        machine_id INTEGER REFERENCES machine(id) ON DELETE CASCADE,
        creation_date TEXT NOT NULL,
        update_date TEXT NOT NULL,
        graph_data TEXT
    );
";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Raised by the refused generic entry points. Unreachable through the
    /// public API; hitting it means a caller bypassed the named accessors.
    #[error("Generic queries are not supported. Use the designated accessors.")]
    Unsupported,
    #[error("Invalid field for ordering simulations.")]
    InvalidOrderField,
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),
    #[error("Failed to format timestamp: {0}")]
    Time(#[from] time::error::Format),
}

pub fn open(path: &Path) -> Result<Connection, StoreError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(conn)
}

/// Creates the schema if absent and seeds the three fixture machines the
/// first time the machine table is empty. Safe to run on every startup.
pub fn init(path: &Path) -> Result<(), StoreError> {
    let conn = open(path)?;
    init_schema(&conn)
}

pub fn init_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(SCHEMA)?;
    let machines: i64 = conn.query_row("SELECT COUNT(*) FROM machine", [], |row| row.get(0))?;
    if machines == 0 {
        conn.execute_batch(
            "INSERT INTO machine (description) VALUES
                ('Machine 1'),
                ('Machine 2'),
                ('Machine 3');",
        )?;
    }
    Ok(())
}

fn now_text() -> Result<String, StoreError> {
    Ok(OffsetDateTime::now_utc().format(DATETIME_FORMAT)?)
}
