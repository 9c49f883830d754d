use crate::cmake_file::{read_cmake_file, write_cmake_file, CMakeFileError};
use crate::utils::SRC_DIR;
use super::plan::{build_source_plan, ReconcileOutcome};
use super::scan::scan_sources;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("No `set(SOURCE_FILES ...)` line found in {0}")]
    FormatError(String),
}

impl From<CMakeFileError> for ReconcileError {
    fn from(err: CMakeFileError) -> Self {
        match err {
            CMakeFileError::IoError(e) => ReconcileError::IoError(e),
            CMakeFileError::FormatError(path) => ReconcileError::FormatError(path),
        }
    }
}

/// Result of reconciling one project
#[derive(Debug, Clone)]
pub struct ReconcileResult {
    /// Whether CMakeLists.txt was rewritten
    pub changed: bool,
    pub outcome: ReconcileOutcome,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    /// Sorted sources now listed on the managed line
    pub sources: Vec<String>,
}

/// Bring the `SOURCE_FILES` list of `project_root/CMakeLists.txt` in line
/// with the sources under `project_root/src`.
///
/// The file is read completely before anything is written and is rewritten
/// at most once.
pub async fn reconcile(project_root: &Path) -> Result<ReconcileResult, ReconcileError> {
    info!(
        "Looking for new source files in {}/{}",
        project_root.display(),
        SRC_DIR
    );

    let mut cmake_file = read_cmake_file(project_root).await?;
    let recorded = cmake_file.recorded_sources();
    let discovered = scan_sources(project_root).await?;

    let plan = build_source_plan(recorded, discovered);
    let outcome = plan.outcome();

    let sources = if plan.needs_rewrite() {
        let target = plan.target_sources();
        cmake_file.set_sources(&target);
        write_cmake_file(&cmake_file).await?;
        target.into_iter().collect()
    } else {
        let mut sources: Vec<String> = plan.recorded.iter().cloned().collect();
        sources.sort();
        sources
    };

    match &outcome {
        ReconcileOutcome::Rebuilt { removed } => {
            info!(
                removed = *removed,
                "Source files had been removed, adding everything to SOURCE_FILES."
            );
        }
        ReconcileOutcome::Added { count } => {
            info!(
                "Added {} new cpp file{} to SOURCE_FILES.",
                count,
                if *count > 1 { "s" } else { "" }
            );
        }
        ReconcileOutcome::Unchanged => info!("No new cpp files found."),
    }

    Ok(ReconcileResult {
        changed: outcome != ReconcileOutcome::Unchanged,
        outcome,
        added: plan.added.into_iter().collect(),
        removed: plan.removed.into_iter().collect(),
        sources,
    })
}
