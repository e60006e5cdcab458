use crate::infrastructure::configuration::ConfigError;
use crate::infrastructure::http::ServerError;

/// Failure that stops the service from starting or keeps it from serving.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
