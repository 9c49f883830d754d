//! Build toolchains for driving CMake.
//!
//! A `BuildToolchain` turns the `SyncConfig` into configure and build
//! command lines for one platform. The `ToolchainRegistry` picks the
//! toolchain by OS name and refuses platforms it knows nothing about.
//! Commands are executed through a `CommandRunner`.

mod cmake;
mod runner;
mod types;

pub use cmake::{ClangWindowsToolchain, SystemToolchain};
pub use runner::ProcessRunner;
pub use types::{BuildToolchain, CommandRunner, ToolCommand, ToolchainError};

use std::collections::HashMap;
use std::sync::Arc;

/// Toolchains keyed by OS name (as in `std::env::consts::OS`).
pub struct ToolchainRegistry {
    toolchains: HashMap<String, Arc<dyn BuildToolchain>>,
}

impl ToolchainRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            toolchains: HashMap::new(),
        }
    }

    /// Register a toolchain for a platform, replacing any previous one.
    pub fn register(&mut self, platform: &str, toolchain: Arc<dyn BuildToolchain>) {
        self.toolchains.insert(platform.to_string(), toolchain);
    }

    /// Toolchain for `platform`.
    pub fn for_platform(&self, platform: &str) -> Result<Arc<dyn BuildToolchain>, ToolchainError> {
        self.toolchains
            .get(platform)
            .cloned()
            .ok_or_else(|| ToolchainError::UnsupportedPlatform(platform.to_string()))
    }

    /// Toolchain for the platform this binary runs on.
    pub fn for_current_platform(&self) -> Result<Arc<dyn BuildToolchain>, ToolchainError> {
        self.for_platform(std::env::consts::OS)
    }

    /// Registered platform names, sorted.
    pub fn platforms(&self) -> Vec<String> {
        let mut platforms: Vec<String> = self.toolchains.keys().cloned().collect();
        platforms.sort();
        platforms
    }
}

impl Default for ToolchainRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the registry with all built-in toolchains.
pub fn create_registry() -> ToolchainRegistry {
    let mut registry = ToolchainRegistry::new();

    registry.register("windows", Arc::new(ClangWindowsToolchain));
    registry.register("linux", Arc::new(SystemToolchain));
    registry.register("macos", Arc::new(SystemToolchain));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_registry() {
        let registry = create_registry();
        assert_eq!(registry.platforms(), vec!["linux", "macos", "windows"]);
        assert_eq!(registry.for_platform("windows").unwrap().name(), "windows-clang");
        assert_eq!(registry.for_platform("linux").unwrap().name(), "system");
    }

    #[test]
    fn test_unsupported_platform() {
        let registry = create_registry();
        let result = registry.for_platform("freebsd");
        assert!(matches!(
            result,
            Err(ToolchainError::UnsupportedPlatform(ref os)) if os == "freebsd"
        ));
    }
}
