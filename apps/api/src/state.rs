use sqlx::PgPool;

use crate::ai::ContentGenerator;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Content generation proxy, constructed once at startup. Holds the
    /// optional external completion backend.
    pub generator: ContentGenerator,
    pub config: Config,
}
