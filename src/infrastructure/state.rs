//! Shared application state for request handlers.

use std::sync::Arc;

use crate::application::query::ports::GetHealthQueryPort;
use crate::infrastructure::configuration::AppConfig;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Handlers only see ports. The concrete services are chosen by whoever builds
/// the state (the binary, or a test with a stub).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub health_query: Arc<dyn GetHealthQueryPort>,
}

impl AppState {
    pub fn new(config: AppConfig, health_query: Arc<dyn GetHealthQueryPort>) -> Self {
        Self {
            config: Arc::new(config),
            health_query,
        }
    }
}
