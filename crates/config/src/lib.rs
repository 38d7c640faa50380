//! Project tree and configuration resolution for denv
//!
//! This crate models the build as an explicit tree of project nodes and
//! resolves each node's effective dotenv configuration (env filename,
//! template filename, resources pattern) from settings files, invocation
//! overrides, and the root's ignore-parent toggles.

pub mod config;
pub mod project;
pub mod properties;
pub mod resolver;

pub use config::{Configuration, RootConfiguration};
pub use project::{NodeId, ProjectTree};
pub use properties::Properties;
pub use resolver::ConfigurationResolver;
