//! Inbound adapters: the HTTP API and the CSV seed loader.

pub mod csv;
pub mod http;
