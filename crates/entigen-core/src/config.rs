//! Configuration schema (entigen.toml)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Placeholder in `output.directory` replaced by the project root
pub const PROJECT_PLACEHOLDER: &str = "$(Project)";

/// Tag definition names looked up in the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagKeys {
    /// Persistent-name override on classes and attributes
    pub entity_persistent_name: String,

    /// Persistent-name override on associations (join column name)
    pub relationship_persistent_name: String,

    /// Database schema of an entity
    pub schema: String,

    /// Column length of an attribute
    pub length: String,

    /// Not-null constraint flag
    pub not_null: String,

    /// Uniqueness constraint flag
    pub unique: String,
}

impl Default for TagKeys {
    fn default() -> Self {
        Self {
            entity_persistent_name: "persistent.entity.persistentName".to_string(),
            relationship_persistent_name: "persistent.relationship.persistentName".to_string(),
            schema: "persistent.entity.schema".to_string(),
            length: "persistent.property.length".to_string(),
            not_null: "SQLConstraint.isNotNull".to_string(),
            unique: "SQLConstraint.isUnique".to_string(),
        }
    }
}

/// What a uniqueness tag with a false value does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniqueFalsePolicy {
    /// Forces `nullable = false`, leaving `unique` untouched (historical output)
    #[default]
    Legacy,

    /// Clears `unique`
    Strict,
}

/// How whitespace-only persistent-name overrides are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankOverridePolicy {
    /// Whitespace-only overrides are absent; the derived name is used
    #[default]
    Fallback,

    /// Only the exact empty string is absent; whitespace is used verbatim
    Verbatim,
}

/// Behavior switches for ambiguous model content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub unique_false: UniqueFalsePolicy,
    pub blank_override: BlankOverridePolicy,
}

/// Where generated files go and what they start with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output root; may contain `$(Project)`
    pub directory: String,

    /// License header copied verbatim into every file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "generated".to_string(),
            header_file: None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Profile owning the `Identifier` and `Entity` stereotypes
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Tag definition names
    #[serde(default)]
    pub tags: TagKeys,

    /// Output location and header
    #[serde(default)]
    pub output: OutputConfig,

    /// Ambiguity policies
    #[serde(default)]
    pub policy: PolicyConfig,

    /// Project root path (for resolving relative paths)
    #[serde(skip)]
    pub project_root: PathBuf,
}

fn default_profile() -> String {
    "PersistentProfile".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            tags: TagKeys::default(),
            output: OutputConfig::default(),
            policy: PolicyConfig::default(),
            project_root: std::env::current_dir().unwrap_or_default(),
        }
    }
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(path.display().to_string(), e.to_string()))?;

        let mut config = Self::from_toml(&contents)?;

        config.project_root = project_root_of(path);

        Ok(config)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(toml)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.project_root = std::env::current_dir().unwrap_or_default();
        Ok(config)
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let toml = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml)
            .map_err(|e| ConfigError::IoError(path.display().to_string(), e.to_string()))?;

        Ok(())
    }

    /// Output root with `$(Project)` expanded and relative paths anchored at the project root
    pub fn output_dir(&self) -> PathBuf {
        let root = self.project_root.display().to_string();
        let expanded = self.output.directory.replace(PROJECT_PLACEHOLDER, &root);
        let path = PathBuf::from(expanded);

        if path.is_relative() {
            self.project_root.join(path)
        } else {
            path
        }
    }

    /// Header file resolved against the project root
    pub fn header_path(&self) -> Option<PathBuf> {
        self.output
            .header_file
            .as_ref()
            .map(|p| if p.is_relative() { self.project_root.join(p) } else { p.clone() })
    }
}

/// Directory containing the config file; a bare file name lives in the current directory
fn project_root_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_default(),
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error on {0}: {1}")]
    IoError(String, String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
