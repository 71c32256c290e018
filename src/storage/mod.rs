//! Storage layer - client profile persistence
//!
//! Handles the optional on-disk configuration profile (TOML). Profiles are
//! loaded into an explicit `Session`; nothing here is read ambiently at
//! request time.

pub mod config;
