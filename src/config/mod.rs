use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Name of the optional driver configuration file at the workspace root
pub const CONFIG_FILE: &str = "cmake-sync.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

fn default_projects() -> Vec<String> {
    vec!["engine".to_string(), "sandbox".to_string()]
}

fn default_build_dir() -> String {
    "build".to_string()
}

fn default_build_type() -> String {
    "Debug".to_string()
}

fn default_target() -> String {
    "all".to_string()
}

fn default_generator() -> String {
    "Unix Makefiles".to_string()
}

/// CPUs kept free while building
fn default_cpu_reserve() -> usize {
    4
}

/// Driver configuration.
///
/// Loaded from `cmake-sync.json` when present; every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    /// Workspace root; never read from the file, always set by the caller
    #[serde(skip)]
    pub workspace_dir: PathBuf,
    /// Sub-projects reconciled in order, relative to the workspace root
    #[serde(default = "default_projects")]
    pub projects: Vec<String>,
    /// CMake binary directory, relative to the workspace root
    #[serde(default = "default_build_dir")]
    pub build_dir: String,
    #[serde(default = "default_build_type")]
    pub build_type: String,
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default = "default_generator")]
    pub generator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_compiler: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cxx_compiler: Option<String>,
    #[serde(default = "default_cpu_reserve")]
    pub cpu_reserve: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            workspace_dir: PathBuf::from("."),
            projects: default_projects(),
            build_dir: default_build_dir(),
            build_type: default_build_type(),
            target: default_target(),
            generator: default_generator(),
            c_compiler: None,
            cxx_compiler: None,
            cpu_reserve: default_cpu_reserve(),
        }
    }
}

impl SyncConfig {
    /// Absolute-or-relative path of a sub-project
    pub fn project_path(&self, project: &str) -> PathBuf {
        self.workspace_dir.join(project)
    }

    /// Parallel build jobs: available CPUs minus the reserve, at least one
    pub fn build_jobs(&self) -> usize {
        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        jobs_for(cpus, self.cpu_reserve)
    }
}

pub(crate) fn jobs_for(cpus: usize, reserve: usize) -> usize {
    cpus.saturating_sub(reserve).max(1)
}

/// Read the configuration file from the workspace root
pub async fn read_config(workspace_dir: &Path) -> Result<Option<SyncConfig>, ConfigError> {
    let config_path = workspace_dir.join(CONFIG_FILE);

    if !config_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&config_path).await?;
    let mut config: SyncConfig = serde_json::from_str(&content)?;
    config.workspace_dir = workspace_dir.to_path_buf();
    Ok(Some(config))
}

/// Read the configuration file, falling back to defaults
pub async fn load_config(workspace_dir: &Path) -> Result<SyncConfig, ConfigError> {
    Ok(read_config(workspace_dir).await?.unwrap_or_else(|| SyncConfig {
        workspace_dir: workspace_dir.to_path_buf(),
        ..Default::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_jobs_for() {
        assert_eq!(jobs_for(16, 4), 12);
        assert_eq!(jobs_for(4, 4), 1);
        assert_eq!(jobs_for(2, 4), 1);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SyncConfig =
            serde_json::from_str(r#"{ "projects": ["engine"], "buildType": "Release" }"#).unwrap();
        assert_eq!(config.projects, vec!["engine".to_string()]);
        assert_eq!(config.build_type, "Release");
        assert_eq!(config.build_dir, "build");
        assert_eq!(config.cpu_reserve, 4);
        assert!(config.c_compiler.is_none());
    }

    #[tokio::test]
    async fn test_load_config_without_file() {
        let dir = tempdir().unwrap();
        let config = load_config(dir.path()).await.unwrap();
        assert_eq!(config.workspace_dir, dir.path());
        assert_eq!(config.projects, default_projects());
    }

    #[tokio::test]
    async fn test_read_config_from_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "projects": ["engine", "testbed"], "cpuReserve": 2 }"#,
        )
        .unwrap();

        let config = read_config(dir.path()).await.unwrap().unwrap();
        assert_eq!(config.projects, vec!["engine".to_string(), "testbed".to_string()]);
        assert_eq!(config.cpu_reserve, 2);
        assert_eq!(config.workspace_dir, dir.path());
    }

    #[tokio::test]
    async fn test_read_config_invalid_json() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        let result = read_config(dir.path()).await;
        assert!(matches!(result, Err(ConfigError::JsonError(_))));
    }
}
