//! Domain model: the calling actor, cash-in-out records and the service port.

pub mod actor;
pub mod asset;
pub mod constraints;
pub mod ports;
