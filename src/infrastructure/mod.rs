//! Infrastructure layer.
//!
//! Everything that touches the outside world lives here and nowhere else:
//!
//! * [`adapters`]: inbound (REST) bindings of the application ports.
//! * [`configuration`]: TOML configuration, CORS policy and OpenAPI metadata.
//! * [`http`]: server startup, graceful shutdown and request middleware.
//! * [`logging`]: log filter selection and subscriber setup.
//! * [`state`]: shared handler state carrying the wired ports.
//!
//! Nothing in `domain` or `application` may reference this module.

pub mod adapters;
pub mod configuration;
pub mod http;
pub mod logging;
pub mod state;
