use std::path::PathBuf;

/// Runtime settings, read once at startup. Every value has a default so the
/// binary runs with no environment at all.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host =
            std::env::var("SIMULATIONS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("SIMULATIONS_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let db_path = std::env::var("SIMULATIONS_DB")
            .unwrap_or_else(|_| "simulations.sqlite".to_string())
            .into();
        Self { host, port, db_path }
    }
}
