use crate::utils::{get_src_path, is_tracked_source, to_relative_source_path};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Scan `<project_root>/src` recursively and return every tracked source,
/// relative to the project root with `/` separators.
///
/// A missing or unreadable source directory is an error.
pub async fn scan_sources(project_root: &Path) -> Result<HashSet<String>, std::io::Error> {
    let src_path = get_src_path(project_root);
    ensure_dir(&src_path).await?;

    let mut sources = HashSet::new();

    for entry in WalkDir::new(&src_path).min_depth(1) {
        let entry = entry?;

        if entry.file_type().is_dir() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !is_tracked_source(&file_name) {
            continue;
        }

        if let Some(relative) = to_relative_source_path(project_root, entry.path()) {
            debug!(source = %relative, "Discovered source file");
            sources.insert(relative);
        }
    }

    Ok(sources)
}

async fn ensure_dir(path: &Path) -> Result<(), std::io::Error> {
    let metadata = tokio::fs::metadata(path).await?;
    if metadata.is_dir() {
        Ok(())
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a directory", path.display()),
        ))
    }
}
