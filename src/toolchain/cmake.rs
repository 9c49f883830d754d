//! CMake command lines shared by every toolchain.

use super::types::{BuildToolchain, ToolCommand};
use crate::config::SyncConfig;

const CMAKE: &str = "cmake";

/// LLVM install used by the Windows toolchain unless overridden.
const LLVM_C_COMPILER: &str = "C:\\Program Files\\LLVM\\bin\\clang.exe";
const LLVM_CXX_COMPILER: &str = "C:\\Program Files\\LLVM\\bin\\clang++.exe";

/// `cmake -S<workspace> -B<build dir>` with the given compilers.
pub fn configure_command(
    config: &SyncConfig,
    c_compiler: Option<&str>,
    cxx_compiler: Option<&str>,
) -> ToolCommand {
    let mut command = ToolCommand::new(CMAKE, &config.workspace_dir)
        .arg("--no-warn-unused-cli")
        .arg("-DCMAKE_EXPORT_COMPILE_COMMANDS:BOOL=TRUE")
        .arg(format!("-DCMAKE_BUILD_TYPE:STRING={}", config.build_type));

    if let Some(cc) = c_compiler {
        command = command.arg(format!("-DCMAKE_C_COMPILER:FILEPATH={}", cc));
    }
    if let Some(cxx) = cxx_compiler {
        command = command.arg(format!("-DCMAKE_CXX_COMPILER:FILEPATH={}", cxx));
    }

    command
        .arg(format!("-S{}", config.workspace_dir.display()))
        .arg(format!("-B{}", config.build_dir))
        .arg("-G")
        .arg(config.generator.clone())
}

/// `cmake --build <build dir> --target <target> -j <jobs> --`
pub fn build_command(config: &SyncConfig, jobs: usize) -> ToolCommand {
    ToolCommand::new(CMAKE, &config.workspace_dir)
        .arg("--build")
        .arg(config.build_dir.clone())
        .arg("--config")
        .arg(config.build_type.clone())
        .arg("--target")
        .arg(config.target.clone())
        .arg("-j")
        .arg(jobs.to_string())
        .arg("--")
}

/// Clang from the default LLVM install, driven through Makefiles.
#[derive(Debug, Default)]
pub struct ClangWindowsToolchain;

impl BuildToolchain for ClangWindowsToolchain {
    fn name(&self) -> &str {
        "windows-clang"
    }

    fn configure_command(&self, config: &SyncConfig) -> ToolCommand {
        configure_command(
            config,
            Some(config.c_compiler.as_deref().unwrap_or(LLVM_C_COMPILER)),
            Some(config.cxx_compiler.as_deref().unwrap_or(LLVM_CXX_COMPILER)),
        )
    }

    fn build_command(&self, config: &SyncConfig) -> ToolCommand {
        build_command(config, config.build_jobs())
    }
}

/// Whatever compilers CMake finds, unless the config names them.
#[derive(Debug, Default)]
pub struct SystemToolchain;

impl BuildToolchain for SystemToolchain {
    fn name(&self) -> &str {
        "system"
    }

    fn configure_command(&self, config: &SyncConfig) -> ToolCommand {
        configure_command(
            config,
            config.c_compiler.as_deref(),
            config.cxx_compiler.as_deref(),
        )
    }

    fn build_command(&self, config: &SyncConfig) -> ToolCommand {
        build_command(config, config.build_jobs())
    }
}
