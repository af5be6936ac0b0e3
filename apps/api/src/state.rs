use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ReviewGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable review backend. Default: `GeminiClient`.
    pub reviewer: Arc<dyn ReviewGenerator>,
}
