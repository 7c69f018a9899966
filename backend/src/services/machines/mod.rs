//! Machine endpoints. A single route: `GET /api/machines` lists the
//! machines pre-registered in the database as fixtures.

mod list;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/machines";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(list::process))
}
