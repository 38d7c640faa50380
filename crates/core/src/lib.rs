//! Core error type and shared constants for `denv`.
//!
//! Everything the other `denv` crates agree on lives here: the single
//! `Error` enum with its `Result` alias, and the constants that define the
//! default env filenames, the resources pattern, and the property keys the
//! configuration resolver understands.

pub mod constants;
pub mod errors;

pub use self::{
    constants::*,
    errors::{Error, Result},
};
