use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::config::ServerConfig;
use crate::db::{self, SimulationStore, StoreError};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    status: Option<String>,
    order_by: Option<String>,
}

/// Handler for `GET /api/simulations`.
///
/// With no parameters, returns every simulation as a summary. With
/// `status`, returns matching summaries (an unrecognized value yields an
/// empty list). With `order_by`, returns full records sorted ascending by
/// the given field. Supplying both parameters is rejected.
pub async fn process(
    query: web::Query<ListQuery>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    if query.status.is_some() && query.order_by.is_some() {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Not implemented filter and order at the same time" }));
    }

    let conn = match db::open(&config.db_path) {
        Ok(conn) => conn,
        Err(e) => {
            return HttpResponse::ServiceUnavailable()
                .body(format!("Error listing simulations: {e}"))
        }
    };
    let store = SimulationStore::new(&conn);

    if let Some(field) = query.order_by.as_deref() {
        return match store.order_by_field(field) {
            Ok(simulations) => HttpResponse::Ok().json(simulations),
            Err(e @ StoreError::InvalidOrderField) => {
                HttpResponse::BadRequest().json(json!({ "message": e.to_string() }))
            }
            Err(e) => HttpResponse::ServiceUnavailable()
                .body(format!("Error listing simulations: {e}")),
        };
    }

    let result = match query.status.as_deref() {
        Some(status) => store.filter_by_status(status),
        None => store.list(),
    };
    match result {
        Ok(simulations) => HttpResponse::Ok().json(simulations),
        Err(e) => {
            HttpResponse::ServiceUnavailable().body(format!("Error listing simulations: {e}"))
        }
    }
}
