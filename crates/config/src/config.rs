use denv_core::{
    DEFAULT_ENV_FILENAME, DEFAULT_RESOURCES_PATTERN, DEFAULT_TEMPLATE_FILENAME,
};
use serde::Serialize;

/// Effective dotenv configuration for one project node.
///
/// Always fully populated; fields fall back to the crate defaults when no
/// setting provides them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub filename: String,
    pub template_filename: String,
    pub resources_pattern: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            filename: DEFAULT_ENV_FILENAME.to_string(),
            template_filename: DEFAULT_TEMPLATE_FILENAME.to_string(),
            resources_pattern: DEFAULT_RESOURCES_PATTERN.to_string(),
        }
    }
}

/// Root-node configuration: the shared fields plus the ignore-parent
/// toggles that control whether child nodes may override each field through
/// ambient properties, or must consult only their own settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootConfiguration {
    #[serde(flatten)]
    pub configuration: Configuration,
    pub ignore_parent_filename: bool,
    pub ignore_parent_template_filename: bool,
    pub ignore_parent_resources_pattern: bool,
}

impl Default for RootConfiguration {
    fn default() -> Self {
        Self {
            configuration: Configuration::default(),
            ignore_parent_filename: true,
            ignore_parent_template_filename: true,
            ignore_parent_resources_pattern: true,
        }
    }
}
