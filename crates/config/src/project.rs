use crate::properties::Properties;
use denv_core::{Result, DEFAULT_ENV_FILENAME, SETTINGS_FILENAME};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Identity of a node within a [`ProjectTree`].
///
/// Plain index newtype; all node state lives in the tree, so identifiers
/// stay `Copy` and can be passed around freely by resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct NodeData {
    name: String,
    dir: PathBuf,
    parent: Option<NodeId>,
    /// Settings parsed from the node's own `build.properties` on disk.
    file_properties: Properties,
}

/// A rooted tree of project nodes for one build invocation.
///
/// Nodes are immutable once added. The tree also carries the invocation
/// overrides (`-P key=value`), which sit above file settings in ambient
/// property lookup at every node.
#[derive(Debug)]
pub struct ProjectTree {
    nodes: Vec<NodeData>,
    overrides: Properties,
}

impl ProjectTree {
    /// Create a tree with a single root node bound to `root_dir`, reading
    /// the root's settings file if one exists.
    pub fn load(root_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::load_with_overrides(root_dir, Properties::new())
    }

    /// Same as [`ProjectTree::load`] with invocation overrides applied.
    pub fn load_with_overrides(
        root_dir: impl Into<PathBuf>,
        overrides: Properties,
    ) -> Result<Self> {
        let dir = root_dir.into();
        let file_properties = Properties::from_file(&dir.join(SETTINGS_FILENAME))?;
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("root"));
        Ok(Self {
            nodes: vec![NodeData {
                name,
                dir,
                parent: None,
                file_properties,
            }],
            overrides,
        })
    }

    /// Add a child node under `parent`, reading its settings file.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        dir: impl Into<PathBuf>,
    ) -> Result<NodeId> {
        let dir = dir.into();
        let file_properties = Properties::from_file(&dir.join(SETTINGS_FILENAME))?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            name: name.into(),
            dir,
            parent: Some(parent),
            file_properties,
        });
        Ok(id)
    }

    /// Build a tree from a root directory, discovering child projects as
    /// immediate subdirectories that carry a settings file or an env file.
    pub fn discover(root_dir: impl Into<PathBuf>, overrides: Properties) -> Result<Self> {
        let mut tree = Self::load_with_overrides(root_dir, overrides)?;
        let root = tree.root();
        let root_dir = tree.dir(root).to_path_buf();

        let entries = match std::fs::read_dir(&root_dir) {
            Ok(entries) => entries,
            Err(_) => return Ok(tree),
        };
        let mut child_dirs: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .filter(|path| {
                path.join(SETTINGS_FILENAME).is_file() || path.join(DEFAULT_ENV_FILENAME).is_file()
            })
            .collect();
        child_dirs.sort();

        for dir in child_dirs {
            if let Some(name) = dir.file_name().and_then(|n| n.to_str()) {
                let name = name.to_string();
                tree.add_child(root, &name, &dir)?;
                debug!(project = %name, "discovered child project");
            }
        }
        Ok(tree)
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn is_root(&self, node: NodeId) -> bool {
        node == self.root()
    }

    pub fn name(&self, node: NodeId) -> &str {
        &self.nodes[node.0].name
    }

    pub fn dir(&self, node: NodeId) -> &Path {
        &self.nodes[node.0].dir
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// All nodes in insertion order, root first.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Direct children of `node`.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, data)| data.parent == Some(node))
            .map(|(index, _)| NodeId(index))
    }

    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|data| data.name == name)
            .map(NodeId)
    }

    /// The node's own settings file, ignoring overrides and parents.
    pub fn file_properties(&self, node: NodeId) -> &Properties {
        &self.nodes[node.0].file_properties
    }

    /// Ambient property lookup at `node`: invocation overrides first, then
    /// the node's own settings file, then the parent chain.
    pub fn ambient_property(&self, node: NodeId, key: &str) -> Option<&str> {
        if let Some(value) = self.overrides.get(key) {
            return Some(value);
        }
        let mut current = Some(node);
        while let Some(id) = current {
            if let Some(value) = self.nodes[id.0].file_properties.get(key) {
                return Some(value);
            }
            current = self.nodes[id.0].parent;
        }
        None
    }
}
