use std::path::{Path, PathBuf};

/// The name of the CMake file holding the source list
pub const CMAKE_FILE: &str = "CMakeLists.txt";

/// The sub-directory of a project that is scanned for sources
pub const SRC_DIR: &str = "src";

/// Prefix of the managed line in the CMake file
pub const SOURCE_FILES_MARKER: &str = "set(SOURCE_FILES";

/// Extension of the tracked source files
pub const TRACKED_EXTENSION: &str = ".cpp";

/// Get the path to a project's CMakeLists.txt
pub fn get_cmake_path(project_root: &Path) -> PathBuf {
    project_root.join(CMAKE_FILE)
}

/// Get the path to a project's source directory
pub fn get_src_path(project_root: &Path) -> PathBuf {
    project_root.join(SRC_DIR)
}

/// Whether a file name or path carries the tracked extension
pub fn is_tracked_source(name: &str) -> bool {
    name.ends_with(TRACKED_EXTENSION)
}

/// Make `path` relative to `root` using `/` as separator.
///
/// Returns `None` when `path` is not below `root`.
pub fn to_relative_source_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    Some(parts.join("/").replace('\\', "/"))
}
