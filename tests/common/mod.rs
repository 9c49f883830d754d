#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Lines around the managed line in the generated CMakeLists.txt
pub const CMAKE_HEADER: &str = "cmake_minimum_required(VERSION 3.20)\nproject(engine CXX)\n";
pub const CMAKE_FOOTER: &str = "add_library(engine STATIC ${SOURCE_FILES})\n";

/// Write a project with the given recorded sources and files on disk
pub fn init_cmake_project(project_path: &Path, recorded: &[&str], on_disk: &[&str]) {
    fs::create_dir_all(project_path.join("src")).expect("Should create src");

    let content = format!(
        "{}set(SOURCE_FILES {} )\n{}",
        CMAKE_HEADER,
        recorded.join(" "),
        CMAKE_FOOTER
    );
    fs::write(project_path.join("CMakeLists.txt"), content).expect("Should write CMakeLists.txt");

    for file in on_disk {
        add_source(project_path, file);
    }
}

/// Create a source file, relative to the project root
pub fn add_source(project_path: &Path, relative: &str) {
    let path = project_path.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Should create parent");
    }
    fs::write(path, "// source\n").expect("Should write source");
}

/// Read the CMakeLists.txt of a project
pub fn read_cmake(project_path: &Path) -> String {
    fs::read_to_string(project_path.join("CMakeLists.txt")).expect("Should read CMakeLists.txt")
}

/// The managed line of a project, without its terminator
pub fn source_line(project_path: &Path) -> String {
    read_cmake(project_path)
        .lines()
        .find(|l| l.starts_with("set(SOURCE_FILES"))
        .expect("Should have a managed line")
        .to_string()
}
