//! Shared types and rules for the Dairy Production Management Platform
//!
//! This crate contains the domain vocabulary and validation rules shared
//! between the backend server and the browser forms (via WASM).

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
