use crate::mapping::EnvMapping;
use crate::provider::EnvProvider;
use crate::resolver::DotEnvResolver;
use denv_config::{NodeId, ProjectTree};
use denv_core::{Error, Result};
use std::collections::HashMap;

/// Resolved env mappings for a whole project tree.
///
/// The build-facing entry point. Applying is only valid at the tree root;
/// anything else is a structural misuse and fails before any env file is
/// read. All nodes are resolved eagerly, so the returned view is immutable
/// and lookups cannot fail.
#[derive(Debug)]
pub struct DotEnv {
    nodes: Vec<NodeId>,
    mappings: HashMap<NodeId, EnvMapping>,
}

impl DotEnv {
    pub fn apply(
        tree: &ProjectTree,
        entry: NodeId,
        provider: &dyn EnvProvider,
    ) -> Result<DotEnv> {
        if !tree.is_root(entry) {
            return Err(Error::precondition(format!(
                "dotenv must be applied to the root project, but was applied to '{}'",
                tree.name(entry)
            )));
        }

        let mut resolver = DotEnvResolver::new(tree, provider);
        let nodes: Vec<NodeId> = tree.nodes().collect();
        let mut mappings = HashMap::with_capacity(nodes.len());
        for &node in &nodes {
            mappings.insert(node, resolver.resolve(node)?);
        }
        Ok(Self { nodes, mappings })
    }

    /// Nodes in tree order, root first.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// The resolved mapping for a node of the applied tree.
    pub fn mapping(&self, node: NodeId) -> Option<&EnvMapping> {
        self.mappings.get(&node)
    }
}
