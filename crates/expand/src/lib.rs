//! Placeholder expansion for resource files
//!
//! Rewrites `${KEY}` placeholders in resource files whose relative path
//! matches a glob pattern, using a resolved [`EnvMapping`]. Substitution is
//! a single textual pass: values are taken from the mapping as it was
//! before the pass started, placeholders for unmapped keys stay verbatim,
//! and inserted values are never re-expanded. Running the pass again over
//! its own output is therefore not idempotent when an expanded value looks
//! like a placeholder itself.

mod expander;
mod substitute;

pub use expander::{ExpandReport, ResourceExpander};

pub(crate) use denv_env::EnvMapping;
