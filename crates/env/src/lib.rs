//! Env file parsing and dotenv resolution for denv
//!
//! This crate turns `.env`/`.env.template` files into ordered key/value
//! mappings, merges them with the process environment, and resolves one
//! mapping per project node. [`DotEnv::apply`] is the entry point a build
//! drives; it enforces the root-only precondition and resolves every node
//! of the tree eagerly.

pub mod apply;
pub mod file;
pub mod mapping;
pub mod provider;
pub mod resolver;

pub use apply::DotEnv;
pub use file::EnvFileParser;
pub use mapping::EnvMapping;
pub use provider::{EnvProvider, FakeEnvProvider, SystemEnvProvider};
pub use resolver::DotEnvResolver;
