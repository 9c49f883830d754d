mod types;

pub use types::CMakeFile;

use crate::utils::{get_cmake_path, is_tracked_source, SOURCE_FILES_MARKER};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum CMakeFileError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("No `set(SOURCE_FILES ...)` line found in {0}")]
    FormatError(String),
}

/// Read a project's CMakeLists.txt
pub async fn read_cmake_file(project_root: &Path) -> Result<CMakeFile, CMakeFileError> {
    let cmake_path = get_cmake_path(project_root);
    let content = fs::read_to_string(&cmake_path).await?;
    parse_cmake_file(&cmake_path, &content)
}

/// Write the whole file back in one go
pub async fn write_cmake_file(file: &CMakeFile) -> Result<(), CMakeFileError> {
    fs::write(&file.path, file.contents()).await?;
    Ok(())
}

/// Split `content` into verbatim lines and locate the managed line.
///
/// When several lines carry the marker, the last one wins.
pub fn parse_cmake_file(path: &Path, content: &str) -> Result<CMakeFile, CMakeFileError> {
    let lines: Vec<String> = content.split_inclusive('\n').map(String::from).collect();

    let managed_line = lines
        .iter()
        .rposition(|line| line.starts_with(SOURCE_FILES_MARKER))
        .ok_or_else(|| CMakeFileError::FormatError(path.display().to_string()))?;

    Ok(CMakeFile {
        path: path.to_path_buf(),
        lines,
        managed_line,
    })
}

/// Parse the recorded sources out of a managed line.
///
/// The last whitespace-separated token is the closing parenthesis and is
/// always dropped, even when it is glued to a file name.
pub fn parse_recorded_sources(line: &str) -> HashSet<String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((_, entries)) = tokens.split_last() else {
        return HashSet::new();
    };

    entries
        .iter()
        .filter(|token| is_tracked_source(token))
        .map(|token| token.to_string())
        .collect()
}

/// Render a managed line: `set(SOURCE_FILES a.cpp b.cpp )` plus `ending`
pub fn render_source_line<'a, I>(sources: I, ending: &str) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let entries: Vec<&str> = sources.into_iter().map(String::as_str).collect();
    format!("{} {} ){}", SOURCE_FILES_MARKER, entries.join(" "), ending)
}
