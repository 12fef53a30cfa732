//! Networking modules for the record store REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` defines the `RecordStore` seam the state machines are written
//! against, `api` is its HTTP implementation, `error` classifies failures,
//! and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod store;
pub mod types;
