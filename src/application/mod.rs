//! Application layer.
//!
//! Use cases grouped by CQRS side. Each side exposes its ports (traits the
//! inbound adapters call) and the services implementing them:
//!
//! * [`query`]: read-only use cases (health).
//!
//! Application code may reference [`crate::domain`] but never
//! `crate::infrastructure`.

pub mod query;
