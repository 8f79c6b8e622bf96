//! Loader configuration, read from `netfacts.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "netfacts.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactsConfig {
    /// Globs, relative to the project root, of files to extract.
    pub include: Vec<String>,

    /// Globs excluded even when included.
    pub exclude: Vec<String>,

    /// Files larger than this many bytes are skipped.
    pub max_file_size: u64,

    /// Parse worker count.
    pub threads: usize,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            include: vec!["**/*.cs".to_string()],
            exclude: vec!["**/bin/**".to_string(), "**/obj/**".to_string()],
            max_file_size: 1024 * 1024, // 1MB
            threads: num_cpus::get(),
            pretty: true,
        }
    }
}

impl FactsConfig {
    /// Configuration for a project directory: its `netfacts.toml` when
    /// present, defaults otherwise.
    pub fn for_project(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, root.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: FactsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| anyhow!("Failed to serialize config: {}", e))
    }

    pub fn include_set(&self) -> Result<GlobSet> {
        build_glob_set(&self.include)
    }

    pub fn exclude_set(&self) -> Result<GlobSet> {
        build_glob_set(&self.exclude)
    }

    /// At least one worker.
    pub fn worker_count(&self) -> usize {
        self.threads.max(1)
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).with_context(|| format!("Invalid glob pattern '{}'", pattern))?;
        builder.add(glob);
    }
    builder.build().context("Failed to build glob set")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = FactsConfig::for_project(dir.path()).unwrap();
        assert_eq!(config.include, vec!["**/*.cs".to_string()]);
        assert_eq!(config.max_file_size, 1024 * 1024);
        assert!(config.pretty);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "exclude = [\"**/Generated/**\"]\nthreads = 0\npretty = false\n",
        )
        .unwrap();

        let config = FactsConfig::for_project(dir.path()).unwrap();
        assert_eq!(config.exclude, vec!["**/Generated/**".to_string()]);
        assert_eq!(config.include, vec!["**/*.cs".to_string()]);
        assert_eq!(config.worker_count(), 1);
        assert!(!config.pretty);
    }

    #[test]
    fn test_globs_match_relative_paths() {
        let config = FactsConfig::default();
        let include = config.include_set().unwrap();
        let exclude = config.exclude_set().unwrap();
        assert!(include.is_match("src/Models/User.cs"));
        assert!(exclude.is_match("src/bin/Debug/Gen.cs"));
        assert!(!exclude.is_match("src/Models/User.cs"));
    }

    #[test]
    fn test_saved_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let config = FactsConfig {
            exclude: vec!["**/Migrations/**".to_string()],
            threads: 2,
            ..Default::default()
        };
        fs::write(dir.path().join(CONFIG_FILE_NAME), config.to_toml().unwrap()).unwrap();

        assert_eq!(FactsConfig::for_project(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_invalid_glob_is_reported() {
        let config = FactsConfig {
            include: vec!["src/[".to_string()],
            ..Default::default()
        };
        assert!(config.include_set().is_err());
    }
}
