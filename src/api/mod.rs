//! API layer - transport, payload normalization, failure classification
//!
//! The call chain is strictly one-directional:
//! service → {normalize, classify} → client → HTTP.

pub mod classify;
pub mod client;
pub mod messages;
pub mod models;
pub mod normalize;
