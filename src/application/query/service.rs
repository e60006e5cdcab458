//! Query service implementations.

use async_trait::async_trait;

use crate::application::query::ports::GetHealthQueryPort;
use crate::domain::health::HealthStatus;

/// Liveness check: the process answering is the whole check.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetHealthQueryService;

impl GetHealthQueryService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GetHealthQueryPort for GetHealthQueryService {
    async fn get_health_status(&self) -> HealthStatus {
        tracing::trace!("Evaluating health status");
        HealthStatus::Healthy
    }
}
