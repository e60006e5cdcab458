//! Global CORS policy.
//!
//! Values come from the `[cors]` section of the configuration file and are
//! turned into a single `CorsLayer` wrapping every route.

use std::time::Duration;

use http::{request, HeaderName, HeaderValue, Method};
use serde::Deserialize;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use super::ConfigError;

/// Matches any origin, method or header
pub const WILDCARD: &str = "*";

/// Default preflight cache lifetime, in seconds
pub const DEFAULT_CORS_MAX_AGE_SECS: u64 = 1800;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API, e.g. `http://localhost:3000`.
    /// Compared ignoring ASCII case and a trailing `/`. Empty means no
    /// cross-origin access.
    pub allowed_origins: Vec<String>,
    /// HTTP methods allowed on cross-origin requests
    pub allowed_methods: Vec<String>,
    /// Request headers allowed on cross-origin requests
    pub allowed_headers: Vec<String>,
    /// Whether cookies and auth headers may be sent
    pub allow_credentials: bool,
    /// `Access-Control-Max-Age` for preflight responses
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            allowed_methods: Vec::from(
                ["GET", "POST", "PUT", "DELETE", "OPTIONS"].map(String::from),
            ),
            allowed_headers: vec![WILDCARD.to_string()],
            allow_credentials: true,
            max_age_seconds: DEFAULT_CORS_MAX_AGE_SECS,
        }
    }
}

/// Canonical form of an origin: no trailing `/`, ASCII lowercase.
pub fn normalize_origin(origin: &str) -> String {
    origin.trim_end_matches('/').to_ascii_lowercase()
}

impl CorsConfig {
    /// Rewrite every configured origin into its canonical form.
    pub fn normalize_origins(&mut self) {
        for origin in &mut self.allowed_origins {
            if origin != WILDCARD {
                *origin = normalize_origin(origin);
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.allow_origin()?;
        self.allow_methods()?;
        self.allow_headers()?;
        Ok(())
    }

    fn allow_origin(&self) -> Result<AllowOrigin, ConfigError> {
        if self.allowed_origins.iter().any(|origin| origin == WILDCARD) {
            if self.allow_credentials {
                return Err(ConfigError::Validation(
                    "cors.allowed_origins cannot contain \"*\" when cors.allow_credentials is true"
                        .to_string(),
                ));
            }
            return Ok(AllowOrigin::any());
        }

        let origins = self
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map(|_| normalize_origin(origin))
                    .map_err(|_| {
                        ConfigError::Validation(format!("Invalid CORS origin: {:?}", origin))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AllowOrigin::predicate(
            move |origin: &HeaderValue, _: &request::Parts| {
                origin.to_str().is_ok_and(|origin| {
                    let origin = origin.trim_end_matches('/');
                    origins
                        .iter()
                        .any(|allowed| allowed.eq_ignore_ascii_case(origin))
                })
            },
        ))
    }

    // A literal `*` response header is refused by browsers on credentialed
    // requests, so wildcards mirror the preflight instead.
    fn allow_methods(&self) -> Result<AllowMethods, ConfigError> {
        if self.allowed_methods.iter().any(|method| method == WILDCARD) {
            return Ok(AllowMethods::mirror_request());
        }

        let methods = self
            .allowed_methods
            .iter()
            .map(|method| {
                Method::from_bytes(method.to_ascii_uppercase().as_bytes()).map_err(|_| {
                    ConfigError::Validation(format!("Invalid CORS method: {:?}", method))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AllowMethods::list(methods))
    }

    fn allow_headers(&self) -> Result<AllowHeaders, ConfigError> {
        if self.allowed_headers.iter().any(|header| header == WILDCARD) {
            return Ok(AllowHeaders::mirror_request());
        }

        let headers = self
            .allowed_headers
            .iter()
            .map(|header| {
                HeaderName::from_bytes(header.as_bytes()).map_err(|_| {
                    ConfigError::Validation(format!("Invalid CORS header: {:?}", header))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AllowHeaders::list(headers))
    }
}

/// Build the CORS layer applied to the whole router.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    Ok(CorsLayer::new()
        .allow_origin(config.allow_origin()?)
        .allow_methods(config.allow_methods()?)
        .allow_headers(config.allow_headers()?)
        .allow_credentials(config.allow_credentials)
        .max_age(Duration::from_secs(config.max_age_seconds)))
}
