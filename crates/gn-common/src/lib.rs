//! Genesis CLI common types, IDs, and errors.
//!
//! This crate provides foundational types shared across the gn-* crates:
//! - Request identifiers for hand-off to the project orchestrator
//! - The unified error type with stable codes
//! - Output format selection and envelope version

pub mod error;
pub mod id;
pub mod output;

pub use error::{Error, Result};
pub use id::RequestId;
pub use output::{OutputFormat, SCHEMA_VERSION};
