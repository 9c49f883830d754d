//! Types for the build toolchain strategies.

use crate::config::SyncConfig;
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for toolchain operations.
#[derive(Error, Debug)]
pub enum ToolchainError {
    #[error("No build toolchain registered for platform {0}")]
    UnsupportedPlatform(String),

    #[error("Failed to run {0}: {1}")]
    SpawnError(String, std::io::Error),
}

/// A fully resolved external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Strategy producing the CMake command lines for one platform.
pub trait BuildToolchain: Send + Sync {
    /// Human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Command that regenerates the build files.
    fn configure_command(&self, config: &SyncConfig) -> ToolCommand;

    /// Command that builds the configured target.
    fn build_command(&self, config: &SyncConfig) -> ToolCommand;
}

/// Executes tool commands and reports their exit code.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &ToolCommand) -> Result<i32, ToolchainError>;
}
