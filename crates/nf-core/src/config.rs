//! Generator configuration (nullfuzz.yml)

use crate::catalog::{kind_names, lookup, TypeDescriptor};
use crate::error::{CoreError, CoreResult};
use crate::suite::SuiteKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "nullfuzz.yml";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// luatest group name of the generated file
    #[serde(default = "default_group")]
    pub group: String,

    /// Catalog kinds to generate (empty means the whole catalog)
    #[serde(default)]
    pub kinds: Vec<String>,

    /// Suites to generate (empty means all four)
    #[serde(default)]
    pub suites: Vec<SuiteKind>,

    /// Issue referenced by cases where the engine reports both data and an error
    #[serde(default = "default_known_divergence_issue")]
    pub known_divergence_issue: String,

    /// Issue referenced for kinds not covered yet
    #[serde(default = "default_more_types_issue")]
    pub more_types_issue: String,

    /// Oracle process settings
    #[serde(default)]
    pub oracle: OracleConfig,
}

/// Settings for the graphql-js oracle process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OracleConfig {
    /// Node.js executable
    #[serde(default = "default_node")]
    pub node: String,

    /// Directory added to `NODE_PATH` so that `require('graphql')` resolves
    #[serde(default)]
    pub node_path: Option<PathBuf>,
}

fn default_group() -> String {
    "fuzzing_nullability".to_string()
}

fn default_known_divergence_issue() -> String {
    "https://github.com/tarantool/graphql/issues/62".to_string()
}

fn default_more_types_issue() -> String {
    "https://github.com/tarantool/graphql/issues/63".to_string()
}

fn default_node() -> String {
    "node".to_string()
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            node: default_node(),
            node_path: None,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            group: default_group(),
            kinds: Vec::new(),
            suites: Vec::new(),
            known_divergence_issue: default_known_divergence_issue(),
            more_types_issue: default_more_types_issue(),
            oracle: OracleConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: GeneratorConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `nullfuzz.yml` from a directory, falling back to defaults when absent
    pub fn load_or_default(dir: &Path) -> CoreResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            log::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if !is_lua_identifier(&self.group) {
            return Err(CoreError::ConfigInvalid {
                message: format!("group '{}' is not a valid Lua identifier", self.group),
            });
        }

        let mut seen = HashSet::new();
        for kind in &self.kinds {
            lookup(kind)?;
            if !seen.insert(kind.as_str()) {
                return Err(CoreError::ConfigInvalid {
                    message: format!("kind '{kind}' listed twice"),
                });
            }
        }

        let mut seen = HashSet::new();
        for suite in &self.suites {
            if !seen.insert(*suite) {
                return Err(CoreError::ConfigInvalid {
                    message: format!("suite '{suite}' listed twice"),
                });
            }
        }

        Ok(())
    }

    /// Catalog entries to generate, in catalog order
    pub fn selected_kinds(&self) -> CoreResult<Vec<&'static TypeDescriptor>> {
        if self.kinds.is_empty() {
            return kind_names().into_iter().map(lookup).collect();
        }
        for kind in &self.kinds {
            lookup(kind)?;
        }
        Ok(crate::catalog::CATALOG
            .iter()
            .filter(|d| self.kinds.iter().any(|k| k == d.kind))
            .collect())
    }

    /// Suites to generate, in generation order
    pub fn selected_suites(&self) -> Vec<SuiteKind> {
        SuiteKind::ALL
            .into_iter()
            .filter(|s| self.suites.is_empty() || self.suites.contains(s))
            .collect()
    }
}

fn is_lua_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
