//! Hex Blueprint - microservice template
//!
//! A minimal service organised as a hexagon with CQRS naming. Its single use
//! case answers `GET /health` with `OK`.
//!
//! ## Layers
//! * [`domain`]: value objects. Standard library only.
//! * [`application`]: use cases split by CQRS side; each side declares its
//!   ports (traits) and the services implementing them.
//! * [`infrastructure`]: REST adapter, configuration, OpenAPI document and
//!   HTTP server. Depends on ports, never on concrete services.
//!
//! `tests/architecture.rs` checks these dependency rules against the source tree.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::AppError;
