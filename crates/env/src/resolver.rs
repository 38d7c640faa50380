use crate::file::EnvFileParser;
use crate::mapping::EnvMapping;
use crate::provider::EnvProvider;
use denv_config::{Configuration, ConfigurationResolver, NodeId, ProjectTree};
use denv_core::Result;
use std::collections::HashMap;
use tracing::debug;

/// Resolves the final env mapping for each project node.
///
/// For a node, the template file declares defaults, the env file supersedes
/// them key-by-key, and a process-environment value supersedes both. The
/// two files together define the key universe: environment variables not
/// declared in either file never enter the mapping.
///
/// Resolutions are memoized per node for the lifetime of the resolver (one
/// build invocation).
pub struct DotEnvResolver<'a> {
    tree: &'a ProjectTree,
    configurations: ConfigurationResolver<'a>,
    provider: &'a dyn EnvProvider,
    resolved: HashMap<NodeId, EnvMapping>,
}

impl<'a> DotEnvResolver<'a> {
    pub fn new(tree: &'a ProjectTree, provider: &'a dyn EnvProvider) -> Self {
        Self {
            tree,
            configurations: ConfigurationResolver::new(tree),
            provider,
            resolved: HashMap::new(),
        }
    }

    /// The node's effective configuration.
    pub fn configuration(&self, node: NodeId) -> Configuration {
        self.configurations.resolve(node)
    }

    pub fn resolve(&mut self, node: NodeId) -> Result<EnvMapping> {
        if let Some(mapping) = self.resolved.get(&node) {
            return Ok(mapping.clone());
        }

        let configuration = self.configurations.resolve(node);
        let dir = self.tree.dir(node);

        let mut mapping = EnvFileParser::read(&dir.join(&configuration.template_filename))?;
        mapping.merge(&EnvFileParser::read(&dir.join(&configuration.filename))?);

        let keys: Vec<String> = mapping.keys().map(str::to_string).collect();
        for key in keys {
            if let Some(value) = self.provider.var(&key) {
                mapping.insert(key, Some(value));
            }
        }

        debug!(
            project = %self.tree.name(node),
            env_file = %configuration.filename,
            keys = mapping.len(),
            "resolved dotenv mapping"
        );
        self.resolved.insert(node, mapping.clone());
        Ok(mapping)
    }
}
