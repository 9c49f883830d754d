//! Workspace driver.
//!
//! Reconciles the source list of every configured sub-project and, for a
//! full build, regenerates the CMake build files when any list changed
//! before running the build itself.

use crate::config::SyncConfig;
use crate::reconciliation::{reconcile, ReconcileError, ReconcileResult};
use crate::toolchain::{BuildToolchain, CommandRunner, ToolchainError};
use thiserror::Error;
use tracing::{error, info};

/// Exit code of `sync` when any project's source list was rewritten
pub const SOURCES_CHANGED_EXIT_CODE: i32 = 3;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Failed to reconcile {0}: {1}")]
    ReconcileError(String, ReconcileError),

    #[error("Toolchain error: {0}")]
    ToolchainError(#[from] ToolchainError),
}

/// Reconciliation results for every project, in configuration order
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub projects: Vec<(String, ReconcileResult)>,
}

impl SyncReport {
    /// Whether the build files have to be regenerated
    pub fn needs_regenerate(&self) -> bool {
        self.projects.iter().any(|(_, result)| result.changed)
    }

    /// Exit code reported by the `sync` command
    pub fn exit_code(&self) -> i32 {
        if self.needs_regenerate() {
            SOURCES_CHANGED_EXIT_CODE
        } else {
            0
        }
    }
}

/// Outcome of a full sync-configure-build run
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub sync: SyncReport,
    /// Exit code of the configure step, if it ran
    pub configure_status: Option<i32>,
    /// Exit code of the build step, if it ran
    pub build_status: Option<i32>,
}

impl BuildReport {
    /// Exit code of the last tool that ran
    pub fn exit_code(&self) -> i32 {
        self.build_status.or(self.configure_status).unwrap_or(0)
    }
}

/// Reconcile every configured project in order
pub async fn sync_projects(config: &SyncConfig) -> Result<SyncReport, DriverError> {
    let mut report = SyncReport::default();

    for project in &config.projects {
        let project_path = config.project_path(project);
        let result = reconcile(&project_path)
            .await
            .map_err(|e| DriverError::ReconcileError(project.clone(), e))?;
        report.projects.push((project.clone(), result));
    }

    Ok(report)
}

/// Sync all projects, regenerate the build files if needed, then build.
///
/// A failing configure step skips the build.
pub async fn run_build(
    config: &SyncConfig,
    toolchain: &dyn BuildToolchain,
    runner: &dyn CommandRunner,
) -> Result<BuildReport, DriverError> {
    let sync = sync_projects(config).await?;
    let mut report = BuildReport {
        sync,
        ..Default::default()
    };

    if report.sync.needs_regenerate() {
        info!(toolchain = toolchain.name(), "Running CMake...");
        let status = runner.run(&toolchain.configure_command(config)).await?;
        report.configure_status = Some(status);

        if status != 0 {
            error!(status = status, "CMake configure failed, skipping build");
            return Ok(report);
        }
    }

    info!("Building all...");
    let status = runner.run(&toolchain.build_command(config)).await?;
    report.build_status = Some(status);

    Ok(report)
}
