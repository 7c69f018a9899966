use actix_web::{web, HttpResponse, Responder};
use common::model::simulation::Simulation;
use common::requests::CreateSimulationRequest;
use serde_json::json;

use crate::config::ServerConfig;
use crate::db::{self, MachineStore, SimulationStore, StoreError};

/// Handler for `POST /api/simulations`.
///
/// Validates the payload, resolves the machine reference and inserts a new
/// pending simulation. Returns `201 Created` with the full record, machine
/// nested, or `400` if validation fails or the machine does not exist.
pub async fn process(
    payload: web::Json<CreateSimulationRequest>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    if let Err(message) = validate(&payload) {
        return HttpResponse::BadRequest().json(json!({ "message": message }));
    }
    match create_simulation(&payload, &config) {
        Ok(Some(simulation)) => HttpResponse::Created().json(simulation),
        Ok(None) => HttpResponse::BadRequest().json(json!({ "message": "Machine not found" })),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Error creating simulation: {e}"))
        }
    }
}

fn validate(payload: &CreateSimulationRequest) -> Result<(), &'static str> {
    if payload.name_description.trim().is_empty() {
        return Err("name_description must not be empty");
    }
    if payload.name_description.chars().count() > 100 {
        return Err("name_description must be at most 100 characters");
    }
    if payload.machine_id < 1 {
        return Err("machine_id must be a positive integer");
    }
    Ok(())
}

/// `Ok(None)` means the machine reference did not resolve; the insert never
/// happens in that case.
fn create_simulation(
    payload: &CreateSimulationRequest,
    config: &ServerConfig,
) -> Result<Option<Simulation>, StoreError> {
    let conn = db::open(&config.db_path)?;
    if MachineStore::new(&conn).get(payload.machine_id)?.is_none() {
        return Ok(None);
    }
    SimulationStore::new(&conn)
        .create(&payload.name_description, payload.machine_id)
        .map(Some)
}
