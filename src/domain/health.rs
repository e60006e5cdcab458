//! Health status value object.

use std::fmt;

/// Outcome of a health query.
///
/// Only `Healthy` exists today. Its textual form is the literal `OK`, which is
/// exactly what the HTTP adapter writes to the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthStatus {
    Healthy,
}

impl HealthStatus {
    /// Wire representation of the status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "OK",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
