/// Server configuration loaded from environment variables.
#[derive(Debug)]
pub struct HolocronConfig {
    /// Database connection URL. Env var: `DATABASE_URL`. Falls back to a
    /// local SQLite file when unset.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `PORT`.
    pub port: u16,
}

/// Default store used when `DATABASE_URL` is unset. `mode=rwc` lets SQLite
/// create the file on first run.
const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";

impl HolocronConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}
