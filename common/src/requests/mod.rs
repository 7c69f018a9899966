use serde::{Deserialize, Serialize};

/// Payload for `POST /api/simulations`.
///
/// Both fields are required; the handler additionally checks that
/// `name_description` is non-empty and at most 100 characters and that
/// `machine_id` is positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSimulationRequest {
    pub name_description: String,
    pub machine_id: i64,
}
