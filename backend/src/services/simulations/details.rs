use actix_web::{web, HttpResponse, Responder};

use crate::config::ServerConfig;
use crate::db::{self, SimulationStore};

/// Handler for `GET /api/simulations/{simulation_id}`.
///
/// Returns the full record with the machine joined in, or `404` with an
/// empty body if no simulation has that id.
pub(crate) async fn process(
    simulation_id: web::Path<i64>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let result = db::open(&config.db_path)
        .and_then(|conn| SimulationStore::new(&conn).get_details(*simulation_id));
    match result {
        Ok(Some(simulation)) => HttpResponse::Ok().json(simulation),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Error retrieving simulation: {e}"))
        }
    }
}
