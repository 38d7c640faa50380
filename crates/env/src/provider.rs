use std::collections::HashMap;

/// Source of process-level environment variables.
///
/// Pure lookup; resolvers take this as a seam so tests can swap in a fake
/// without touching the real process environment.
pub trait EnvProvider {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvProvider;

impl EnvProvider for SystemEnvProvider {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment for tests.
#[derive(Debug, Clone, Default)]
pub struct FakeEnvProvider {
    vars: HashMap<String, String>,
}

impl FakeEnvProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl EnvProvider for FakeEnvProvider {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
