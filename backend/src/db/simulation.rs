use common::model::machine::Machine;
use common::model::simulation::{Simulation, SimulationStatus, SimulationSummary};
use rusqlite::{params, Connection, Row};

use super::{now_text, StoreError};

const FULL_COLUMNS: &str = "s.id, s.name_description, s.status, s.machine_id, \
     ma.description, s.creation_date, s.update_date, s.graph_data";

/// Accessor over the `simulation` table. List and filter return the summary
/// projection; ordering and detail lookups return full rows with the
/// machine joined in.
pub struct SimulationStore<'a> {
    conn: &'a Connection,
}

impl<'a> SimulationStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn list(&self) -> Result<Vec<SimulationSummary>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name_description, status FROM simulation")?;
        let rows = stmt.query_map([], summary_from_row)?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    /// Exact match on the stored status text. The value is not validated
    /// against the enum here; an unrecognized status yields zero rows.
    pub fn filter_by_status(&self, status: &str) -> Result<Vec<SimulationSummary>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name_description, status FROM simulation WHERE status = ?1")?;
        let rows = stmt.query_map(params![status], summary_from_row)?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    /// Full rows sorted ascending by `field`. The field is checked against
    /// a closed allow-list before any SQL is built, so a request parameter
    /// can never inject into the ORDER BY clause.
    pub fn order_by_field(&self, field: &str) -> Result<Vec<Simulation>, StoreError> {
        let column = match field {
            "name_description" | "creation_date" | "update_date" => field,
            _ => return Err(StoreError::InvalidOrderField),
        };
        let sql = format!(
            "SELECT {FULL_COLUMNS} FROM simulation s \
             LEFT JOIN machine ma ON s.machine_id = ma.id \
             ORDER BY s.{column}"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], full_from_row)?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    /// Single read with the machine joined in, so the nested record cannot
    /// go stale between two lookups.
    pub fn get_details(&self, simulation_id: i64) -> Result<Option<Simulation>, StoreError> {
        let sql = format!(
            "SELECT {FULL_COLUMNS} FROM simulation s \
             LEFT JOIN machine ma ON s.machine_id = ma.id \
             WHERE s.id = ?1"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query_map(params![simulation_id], full_from_row)?;
        rows.next().transpose().map_err(StoreError::from)
    }

    /// Inserts a pending simulation and reads it back with the machine
    /// nested. The caller resolves `machine_id` through `MachineStore::get`
    /// first; this layer inserts unconditionally.
    pub fn create(
        &self,
        name_description: &str,
        machine_id: i64,
    ) -> Result<Simulation, StoreError> {
        let now = now_text()?;
        self.conn.execute(
            "INSERT INTO simulation (name_description, status, machine_id, creation_date, update_date) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                name_description,
                SimulationStatus::Pending.as_str(),
                machine_id,
                now,
                now
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        self.get_details(id)?
            .ok_or(StoreError::Db(rusqlite::Error::QueryReturnedNoRows))
    }

    /// Always refused. Callers go through the named accessors.
    pub fn query_raw(&self, _sql: &str) -> Result<Vec<Simulation>, StoreError> {
        Err(StoreError::Unsupported)
    }
}

fn status_from_row(row: &Row<'_>, idx: usize) -> rusqlite::Result<SimulationStatus> {
    let raw: String = row.get(idx)?;
    SimulationStatus::parse(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            format!("unknown simulation status: {raw}").into(),
        )
    })
}

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<SimulationSummary> {
    Ok(SimulationSummary {
        id: row.get(0)?,
        name_description: row.get(1)?,
        status: status_from_row(row, 2)?,
    })
}

fn full_from_row(row: &Row<'_>) -> rusqlite::Result<Simulation> {
    let machine = match (
        row.get::<_, Option<i64>>(3)?,
        row.get::<_, Option<String>>(4)?,
    ) {
        (Some(id), Some(description)) => Some(Machine { id, description }),
        _ => None,
    };
    let graph_data = match row.get::<_, Option<String>>(7)? {
        Some(text) => Some(serde_json::from_str(&text).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(e))
        })?),
        None => None,
    };
    Ok(Simulation {
        id: row.get(0)?,
        name_description: row.get(1)?,
        status: status_from_row(row, 2)?,
        machine,
        graph_data,
        creation_date: row.get(5)?,
        update_date: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().expect("open in-memory database");
        db::init_schema(&conn).expect("init schema");
        conn
    }

    fn seed(
        conn: &Connection,
        name: &str,
        status: &str,
        machine_id: Option<i64>,
        date: &str,
        graph_data: Option<&str>,
    ) -> i64 {
        conn.execute(
            "INSERT INTO simulation (name_description, status, machine_id, creation_date, update_date, graph_data) \
             VALUES (?1, ?2, ?3, ?4, ?4, ?5)",
            params![name, status, machine_id, date, graph_data],
        )
        .expect("seed simulation");
        conn.last_insert_rowid()
    }

    fn seed_pair(conn: &Connection) {
        seed(
            conn,
            "Simulation name 1",
            "pending",
            Some(1),
            "2000-01-02 00:00:00",
            Some(r#"{"data": [{"seconds": 10, "loss": 0.8}, {"seconds": 20, "loss": 0.7}]}"#),
        );
        seed(
            conn,
            "Simulation name 0",
            "running",
            Some(2),
            "2000-01-01 00:00:00",
            Some(r#"{"data": [{"seconds": 10, "loss": 0.61}, {"seconds": 50, "loss": 0.615}]}"#),
        );
    }

    #[test]
    fn list_returns_summaries() {
        let conn = test_conn();
        seed_pair(&conn);
        let simulations = SimulationStore::new(&conn).list().expect("list");
        assert_eq!(simulations.len(), 2);
        assert_eq!(simulations[0].name_description, "Simulation name 1");
        assert_eq!(simulations[0].status, SimulationStatus::Pending);
    }

    #[test]
    fn filter_by_status_matches_exactly() {
        let conn = test_conn();
        seed_pair(&conn);
        let store = SimulationStore::new(&conn);
        let pending = store.filter_by_status("pending").expect("filter");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].name_description, "Simulation name 1");
    }

    #[test]
    fn filter_by_unknown_status_is_empty_not_an_error() {
        let conn = test_conn();
        seed_pair(&conn);
        let matches = SimulationStore::new(&conn)
            .filter_by_status("exploded")
            .expect("filter");
        assert!(matches.is_empty());
    }

    #[test]
    fn order_by_each_valid_field() {
        let conn = test_conn();
        seed_pair(&conn);
        let store = SimulationStore::new(&conn);
        // Simulation 2 sorts first by name, creation and update date alike.
        for field in ["name_description", "creation_date", "update_date"] {
            let ordered = store.order_by_field(field).expect("order");
            assert_eq!(ordered.len(), 2);
            assert_eq!(ordered[0].id, 2, "field {field}");
            assert_eq!(ordered[0].machine.as_ref().map(|m| m.id), Some(2));
        }
    }

    #[test]
    fn order_by_invalid_field_fails_before_querying() {
        let conn = test_conn();
        let result = SimulationStore::new(&conn).order_by_field("not_a_field");
        assert!(matches!(result, Err(StoreError::InvalidOrderField)));
        let result = SimulationStore::new(&conn).order_by_field("status; DROP TABLE simulation");
        assert!(matches!(result, Err(StoreError::InvalidOrderField)));
    }

    #[test]
    fn get_details_joins_machine_and_graph_data() {
        let conn = test_conn();
        seed_pair(&conn);
        let simulation = SimulationStore::new(&conn)
            .get_details(1)
            .expect("get details")
            .expect("simulation exists");
        assert_eq!(simulation.name_description, "Simulation name 1");
        assert_eq!(
            simulation.machine,
            Some(Machine {
                id: 1,
                description: "Machine 1".to_string()
            })
        );
        let graph = simulation.graph_data.expect("graph data present");
        assert_eq!(graph["data"][0]["seconds"], 10);
        assert_eq!(graph["data"][0]["loss"], 0.8);
    }

    #[test]
    fn get_details_without_machine_has_none() {
        let conn = test_conn();
        let id = seed(&conn, "Detached", "finished", None, "2001-01-01 00:00:00", None);
        let simulation = SimulationStore::new(&conn)
            .get_details(id)
            .expect("get details")
            .expect("simulation exists");
        assert_eq!(simulation.machine, None);
        assert_eq!(simulation.graph_data, None);
    }

    #[test]
    fn get_details_missing_is_none() {
        let conn = test_conn();
        let simulation = SimulationStore::new(&conn).get_details(999).expect("get details");
        assert!(simulation.is_none());
    }

    #[test]
    fn create_inserts_pending_with_equal_timestamps() {
        let conn = test_conn();
        let simulation = SimulationStore::new(&conn)
            .create("Test Simulation", 1)
            .expect("create");
        assert_eq!(simulation.name_description, "Test Simulation");
        assert_eq!(simulation.status, SimulationStatus::Pending);
        assert_eq!(simulation.creation_date, simulation.update_date);
        assert_eq!(simulation.machine.as_ref().map(|m| m.id), Some(1));

        let listed = SimulationStore::new(&conn).list().expect("list");
        assert_eq!(listed.len(), 1);
    }

    #[test]
    fn generic_queries_are_refused() {
        let conn = test_conn();
        let result = SimulationStore::new(&conn).query_raw("SELECT * FROM simulation");
        assert!(matches!(result, Err(StoreError::Unsupported)));
    }
}
