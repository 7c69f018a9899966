use actix_web::{web, HttpResponse, Responder};
use common::model::machine::Machine;

use crate::config::ServerConfig;
use crate::db::{self, MachineStore, StoreError};

pub(crate) async fn process(config: web::Data<ServerConfig>) -> impl Responder {
    match list_machines(&config) {
        Ok(machines) => HttpResponse::Ok().json(machines),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("Error listing machines: {e}")),
    }
}

fn list_machines(config: &ServerConfig) -> Result<Vec<Machine>, StoreError> {
    let conn = db::open(&config.db_path)?;
    MachineStore::new(&conn).list()
}
