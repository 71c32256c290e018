//! Core layer - business logic
//!
//! Per-resource services and the explicit session object. Services depend on
//! the api layer, never the other way around.

pub mod services;
pub mod session;
