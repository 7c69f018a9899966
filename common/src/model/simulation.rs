use serde::{Deserialize, Serialize};

use crate::model::machine::Machine;

/// Lifecycle state of a simulation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationStatus {
    Pending,
    Running,
    Finished,
}

impl SimulationStatus {
    /// The lowercase form stored in the database and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationStatus::Pending => "pending",
            SimulationStatus::Running => "running",
            SimulationStatus::Finished => "finished",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(SimulationStatus::Pending),
            "running" => Some(SimulationStatus::Running),
            "finished" => Some(SimulationStatus::Finished),
            _ => None,
        }
    }
}

impl std::fmt::Display for SimulationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full view of a simulation: every column plus the associated machine,
/// nested as `{id, description}` when present.
///
/// Timestamps are plain `YYYY-MM-DD HH:MM:SS` text, which sorts
/// chronologically and serializes as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    pub id: i64,
    pub name_description: String,
    pub status: SimulationStatus,
    pub machine: Option<Machine>,
    pub graph_data: Option<serde_json::Value>,
    pub creation_date: String,
    pub update_date: String,
}

/// Summary view served by the list and filter endpoints. The omission of
/// the remaining columns is a deliberate partial projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub id: i64,
    pub name_description: String,
    pub status: SimulationStatus,
}
