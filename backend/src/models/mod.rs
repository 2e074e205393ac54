//! Domain models for the Dairy Production Management Platform
//!
//! Re-exports the models from the shared crate

pub use shared::models::*;
