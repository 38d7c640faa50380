use crate::config::{Configuration, RootConfiguration};
use crate::project::{NodeId, ProjectTree};
use denv_core::{
    DEFAULT_ENV_FILENAME, DEFAULT_RESOURCES_PATTERN, DEFAULT_TEMPLATE_FILENAME,
    PROP_FILENAME, PROP_IGNORE_PARENT_FILENAME, PROP_IGNORE_PARENT_RESOURCES_PATTERN,
    PROP_IGNORE_PARENT_TEMPLATE_FILENAME, PROP_RESOURCES_PATTERN, PROP_TEMPLATE_FILENAME,
};
use once_cell::sync::OnceCell;
use tracing::warn;

/// Resolves the effective [`Configuration`] for each node of a tree.
///
/// The root configuration is computed once, on first access, and every child
/// resolution reads the cached root ignore-flags. For a child node each
/// field is resolved independently: an ignore-parent flag set on the root
/// restricts that field to the child's own settings file on disk, bypassing
/// invocation overrides and parent inheritance entirely; otherwise ambient
/// lookup at the child applies.
pub struct ConfigurationResolver<'t> {
    tree: &'t ProjectTree,
    root: OnceCell<RootConfiguration>,
}

impl<'t> ConfigurationResolver<'t> {
    pub fn new(tree: &'t ProjectTree) -> Self {
        Self {
            tree,
            root: OnceCell::new(),
        }
    }

    pub fn resolve(&self, node: NodeId) -> Configuration {
        if self.tree.is_root(node) {
            return self.root_configuration().configuration.clone();
        }
        let root = self.root_configuration();
        Configuration {
            filename: self.resolve_string_for(
                node,
                PROP_FILENAME,
                DEFAULT_ENV_FILENAME,
                root.ignore_parent_filename,
            ),
            template_filename: self.resolve_string_for(
                node,
                PROP_TEMPLATE_FILENAME,
                DEFAULT_TEMPLATE_FILENAME,
                root.ignore_parent_template_filename,
            ),
            resources_pattern: self.resolve_string_for(
                node,
                PROP_RESOURCES_PATTERN,
                DEFAULT_RESOURCES_PATTERN,
                root.ignore_parent_resources_pattern,
            ),
        }
    }

    /// The cached root configuration, computed on first access.
    pub fn root_configuration(&self) -> &RootConfiguration {
        self.root
            .get_or_init(|| Self::create_root_configuration(self.tree))
    }

    fn resolve_string_for(
        &self,
        node: NodeId,
        key: &str,
        default: &str,
        ignore_parent: bool,
    ) -> String {
        let value = if ignore_parent {
            self.tree.file_properties(node).get(key)
        } else {
            self.tree.ambient_property(node, key)
        };
        value.unwrap_or(default).to_string()
    }

    fn create_root_configuration(tree: &ProjectTree) -> RootConfiguration {
        let root = tree.root();
        RootConfiguration {
            ignore_parent_filename: Self::bool_property(tree, root, PROP_IGNORE_PARENT_FILENAME, true),
            ignore_parent_template_filename: Self::bool_property(
                tree,
                root,
                PROP_IGNORE_PARENT_TEMPLATE_FILENAME,
                true,
            ),
            ignore_parent_resources_pattern: Self::bool_property(
                tree,
                root,
                PROP_IGNORE_PARENT_RESOURCES_PATTERN,
                true,
            ),
            configuration: Configuration {
                filename: Self::string_property(tree, root, PROP_FILENAME, DEFAULT_ENV_FILENAME),
                template_filename: Self::string_property(
                    tree,
                    root,
                    PROP_TEMPLATE_FILENAME,
                    DEFAULT_TEMPLATE_FILENAME,
                ),
                resources_pattern: Self::string_property(
                    tree,
                    root,
                    PROP_RESOURCES_PATTERN,
                    DEFAULT_RESOURCES_PATTERN,
                ),
            },
        }
    }

    fn string_property(tree: &ProjectTree, node: NodeId, key: &str, default: &str) -> String {
        tree.ambient_property(node, key)
            .unwrap_or(default)
            .to_string()
    }

    /// Only the literals "true" and "false" are accepted; anything else
    /// warns and falls back to the default, never aborting the build.
    fn bool_property(tree: &ProjectTree, node: NodeId, key: &str, default: bool) -> bool {
        match tree.ambient_property(node, key) {
            None => default,
            Some("true") => true,
            Some("false") => false,
            Some(other) => {
                warn!(
                    key,
                    value = other,
                    default,
                    "boolean property must be \"true\" or \"false\"; using default"
                );
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Properties;
    use std::path::Path;

    fn write(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(path, contents).expect("write fixture file");
    }

    fn tree_with_child(
        dir: &Path,
        root_settings: &str,
        child_settings: Option<&str>,
        overrides: Properties,
    ) -> (ProjectTree, NodeId) {
        write(&dir.join("build.properties"), root_settings);
        let child_dir = dir.join("app");
        std::fs::create_dir_all(&child_dir).expect("create child dir");
        if let Some(settings) = child_settings {
            write(&child_dir.join("build.properties"), settings);
        }
        let mut tree = ProjectTree::load_with_overrides(dir, overrides).expect("load tree");
        let root = tree.root();
        let child = tree.add_child(root, "app", &child_dir).expect("add child");
        (tree, child)
    }

    #[test]
    fn test_everything_defaults_when_nothing_is_set() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let (tree, child) = tree_with_child(dir.path(), "", None, Properties::new());
        let resolver = ConfigurationResolver::new(&tree);

        assert_eq!(resolver.resolve(tree.root()), Configuration::default());
        assert_eq!(resolver.resolve(child), Configuration::default());
    }

    #[test]
    fn test_root_reads_its_own_settings() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let (tree, _) = tree_with_child(
            dir.path(),
            "dotenv.filename=.env.ci\ndotenv.resources.pattern=**/*.yml\n",
            None,
            Properties::new(),
        );
        let resolver = ConfigurationResolver::new(&tree);
        let config = resolver.resolve(tree.root());

        assert_eq!(config.filename, ".env.ci");
        assert_eq!(config.template_filename, ".env.template");
        assert_eq!(config.resources_pattern, "**/*.yml");
    }

    #[test]
    fn test_ignored_field_does_not_see_ambient_properties() {
        // Default ignore flags are all true: the child's filename must come
        // from its own settings file, regardless of overrides or the root.
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut overrides = Properties::new();
        overrides.insert("dotenv.filename", ".env.cli");
        let (tree, child) = tree_with_child(
            dir.path(),
            "dotenv.filename=.env.root\n",
            None,
            overrides,
        );
        let resolver = ConfigurationResolver::new(&tree);

        assert_eq!(resolver.resolve(child).filename, ".env");
    }

    #[test]
    fn test_ignored_field_reads_the_child_settings_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let (tree, child) = tree_with_child(
            dir.path(),
            "dotenv.filename=.env.root\n",
            Some("dotenv.filename=.env.app\n"),
            Properties::new(),
        );
        let resolver = ConfigurationResolver::new(&tree);

        assert_eq!(resolver.resolve(child).filename, ".env.app");
    }

    #[test]
    fn test_unignored_field_follows_ambient_properties() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let (tree, child) = tree_with_child(
            dir.path(),
            "dotenv.filename.ignore.parent=false\ndotenv.filename=.env.root\n",
            None,
            Properties::new(),
        );
        let resolver = ConfigurationResolver::new(&tree);

        // Inherited from the root through ambient lookup.
        assert_eq!(resolver.resolve(child).filename, ".env.root");
    }

    #[test]
    fn test_unignored_field_sees_invocation_overrides() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut overrides = Properties::new();
        overrides.insert("dotenv.filename", ".env.cli");
        let (tree, child) = tree_with_child(
            dir.path(),
            "dotenv.filename.ignore.parent=false\ndotenv.filename=.env.root\n",
            None,
            overrides,
        );
        let resolver = ConfigurationResolver::new(&tree);

        assert_eq!(resolver.resolve(child).filename, ".env.cli");
    }

    #[test]
    fn test_unrecognized_boolean_falls_back_to_default() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let (tree, child) = tree_with_child(
            dir.path(),
            "dotenv.filename.ignore.parent=yes\ndotenv.filename=.env.root\n",
            None,
            Properties::new(),
        );
        let resolver = ConfigurationResolver::new(&tree);

        // "yes" is not a recognized literal; the default (true) applies and
        // the child keeps ignoring ambient properties.
        assert!(resolver.root_configuration().ignore_parent_filename);
        assert_eq!(resolver.resolve(child).filename, ".env");
    }

    #[test]
    fn test_flags_are_independent_per_field() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let (tree, child) = tree_with_child(
            dir.path(),
            concat!(
                "dotenv.resources.pattern.ignore.parent=false\n",
                "dotenv.resources.pattern=**/*.properties\n",
                "dotenv.filename=.env.root\n",
            ),
            None,
            Properties::new(),
        );
        let resolver = ConfigurationResolver::new(&tree);
        let config = resolver.resolve(child);

        assert_eq!(config.resources_pattern, "**/*.properties");
        assert_eq!(config.filename, ".env");
    }
}
