//! # umbra-types
//!
//! Shared error types and numeric constants for the Umbra
//! shadow-volume preprocessing workspace.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that the other Umbra crates share.

pub mod constants;
pub mod error;

pub use error::{UmbraError, UmbraResult};
