/// Constants used throughout the denv crates
// Env file defaults
pub const DEFAULT_ENV_FILENAME: &str = ".env";
pub const DEFAULT_TEMPLATE_FILENAME: &str = ".env.template";
pub const DEFAULT_RESOURCES_PATTERN: &str = "**/*";

// Per-node settings file
pub const SETTINGS_FILENAME: &str = "build.properties";

// Property keys for per-node field overrides
pub const PROP_FILENAME: &str = "dotenv.filename";
pub const PROP_TEMPLATE_FILENAME: &str = "dotenv.template.filename";
pub const PROP_RESOURCES_PATTERN: &str = "dotenv.resources.pattern";

// Root-only ignore-parent toggles
pub const PROP_IGNORE_PARENT_FILENAME: &str = "dotenv.filename.ignore.parent";
pub const PROP_IGNORE_PARENT_TEMPLATE_FILENAME: &str = "dotenv.template.filename.ignore.parent";
pub const PROP_IGNORE_PARENT_RESOURCES_PATTERN: &str = "dotenv.resources.pattern.ignore.parent";

// Comment marker shared by env files and settings files
pub const COMMENT_MARKER: char = '#';
