//! Inbound query ports.
//!
//! Only traits live here. Adapters hold them as trait objects and never name
//! the implementing service.

use async_trait::async_trait;

use crate::domain::health::HealthStatus;

/// Reports whether the service is able to handle requests.
#[async_trait]
pub trait GetHealthQueryPort: Send + Sync {
    async fn get_health_status(&self) -> HealthStatus;
}
