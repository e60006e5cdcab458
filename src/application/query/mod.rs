//! Query side: use cases that read state without mutating it.

pub mod ports;
pub mod service;
