//! Application layer.
//!
//! `AssetController` is the cash-out endpoint adapter: it turns validated
//! payloads into service commands and service records into wire projections,
//! independently of any HTTP framework.

pub mod asset;
