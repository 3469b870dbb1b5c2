use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds configuration only; every request builds and owns its own records.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
