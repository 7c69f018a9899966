//! # Simulation Service Module
//!
//! Aggregates the API endpoints for simulation records under the
//! `/api/simulations` path and routes each request to the handler defined
//! in its sub-module.
//!
//! ## Registered Routes:
//!
//! *   **`GET /`**:
//!     - **Handler**: `list::process`
//!     - **Description**: Lists simulations. Accepts an optional `status`
//!       filter or an optional `order_by` field, but not both at once.
//!
//! *   **`POST /`**:
//!     - **Handler**: `create::process`
//!     - **Description**: Creates a new pending simulation from a
//!       `{name_description, machine_id}` payload and returns the full
//!       record with its machine nested.
//!
//! *   **`GET /{simulation_id}`**:
//!     - **Handler**: `details::process`
//!     - **Description**: Returns the full record for one simulation,
//!       machine and graph data included, or `404` if it does not exist.

mod create;
mod details;
mod list;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all simulation-related API endpoints.
const API_PATH: &str = "/api/simulations";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{simulation_id}", get().to(details::process))
}
