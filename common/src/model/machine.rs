use serde::{Deserialize, Serialize};

/// A pre-registered compute resource a simulation can run on.
///
/// Machines are seeded once when the database is created and are never
/// created, updated, or deleted through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub id: i64,
    pub description: String,
}
