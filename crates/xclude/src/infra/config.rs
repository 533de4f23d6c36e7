//! Configuration management utilities.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::infra::exclude::{DEFAULT_END_MARKER, DEFAULT_START_MARKER};

const WORKSPACE_CONFIG_FILE: &str = ".xclude.toml";

/// Layered configuration: built-in defaults, workspace file, env overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub git: Git,
    #[serde(default)]
    pub exclude: Exclude,
    #[serde(default)]
    pub markers: Markers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Git {
    /// Name or path of the git binary to invoke.
    #[serde(default = "Git::default_binary")]
    pub binary: String,
}

impl Git {
    fn default_binary() -> String {
        "git".into()
    }
}

impl Default for Git {
    fn default() -> Self {
        Self {
            binary: Self::default_binary(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Exclude {
    /// Optional override for the exclude file, relative to the workspace
    /// root. Defaults to the repository's `info/exclude`.
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    #[serde(default = "Markers::default_start")]
    pub start: String,
    #[serde(default = "Markers::default_end")]
    pub end: String,
}

impl Markers {
    fn default_start() -> String {
        DEFAULT_START_MARKER.into()
    }

    fn default_end() -> String {
        DEFAULT_END_MARKER.into()
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: Self::default_start(),
            end: Self::default_end(),
        }
    }
}

/// Environment overrides for critical settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    git_binary: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            git_binary: env::var("XCLUDE_GIT").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(git_binary: &str) -> Self {
        Self {
            git_binary: Some(git_binary.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration for a workspace root (or defaults when detached).
    pub fn load(root: Option<&Path>) -> Result<Self> {
        let workspace = root.map(|root| root.join(WORKSPACE_CONFIG_FILE));
        Self::load_with_layers(workspace, EnvOverrides::from_env())
    }

    fn load_with_layers(workspace: Option<PathBuf>, env: EnvOverrides) -> Result<Self> {
        let mut config = match workspace.filter(|path| path.exists()) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(binary) = env.git_binary {
            config.git.binary = binary;
        }
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&data)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }

    /// Resolve the exclude file location given the discovered default.
    pub fn exclude_path(&self, root: &Path, discovered: &Path) -> PathBuf {
        match &self.exclude.path {
            Some(rel) => root.join(rel),
            None => discovered.to_path_buf(),
        }
    }
}
