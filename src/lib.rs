pub mod cmake_file;
pub mod config;
pub mod driver;
pub mod reconciliation;
pub mod toolchain;
pub mod utils;

// Re-export commonly used types
pub use cmake_file::{read_cmake_file, write_cmake_file, CMakeFile, CMakeFileError};
pub use config::{load_config, read_config, ConfigError, SyncConfig};
pub use driver::{run_build, sync_projects, BuildReport, DriverError, SyncReport};
pub use reconciliation::{
    build_source_plan, reconcile, scan_sources, ReconcileError, ReconcileOutcome,
    ReconcileResult, SourceListPlan,
};
pub use toolchain::{
    create_registry, BuildToolchain, CommandRunner, ProcessRunner, ToolCommand, ToolchainError,
    ToolchainRegistry,
};
