//! Adapters binding application ports to concrete technologies.
//!
//! Only the inbound (driving) side exists so far. Outbound adapters, when
//! added, go in an `outbound` module and implement ports declared by the
//! application layer.

pub mod inbound;
