//! Domain layer.
//!
//! Entities and value objects of the service. Depends only on the standard
//! library: no ports, adapters, or web stack are visible from here.

pub mod health;
