use clap::{Parser, Subcommand};
use cmake_source_sync::config::load_config;
use cmake_source_sync::driver::{run_build, sync_projects};
use cmake_source_sync::toolchain::{create_registry, ProcessRunner};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Keeps the SOURCE_FILES list of each CMake project in sync with its
/// sources, and optionally regenerates and builds the workspace.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Workspace root holding the sub-projects
    #[arg(short, long, env = "CMAKE_SYNC_WORKSPACE", default_value = ".")]
    workspace: PathBuf,

    /// Sub-projects to reconcile (comma-separated).
    /// Defaults to the list in cmake-sync.json, or engine,sandbox.
    #[arg(short, long = "project", env = "CMAKE_SYNC_PROJECTS", value_delimiter = ',')]
    projects: Vec<String>,

    /// Log every discovered source file
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Update the source lists only; exits with 3 if any list changed
    Sync,

    /// Update the source lists, regenerate build files if needed, then build
    Build {
        /// CMake binary directory, relative to the workspace
        #[arg(long, env = "CMAKE_SYNC_BUILD_DIR")]
        build_dir: Option<String>,

        /// CMake build type
        #[arg(long, env = "CMAKE_SYNC_BUILD_TYPE")]
        build_type: Option<String>,

        /// Build target
        #[arg(long)]
        target: Option<String>,

        /// CPUs left free while building
        #[arg(long)]
        cpu_reserve: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = load_config(&args.workspace).await?;

    let projects: Vec<String> = args
        .projects
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if !projects.is_empty() {
        config.projects = projects;
    }

    let code = match args.command {
        Commands::Sync => sync_projects(&config).await?.exit_code(),
        Commands::Build {
            build_dir,
            build_type,
            target,
            cpu_reserve,
        } => {
            if let Some(build_dir) = build_dir {
                config.build_dir = build_dir;
            }
            if let Some(build_type) = build_type {
                config.build_type = build_type;
            }
            if let Some(target) = target {
                config.target = target;
            }
            if let Some(cpu_reserve) = cpu_reserve {
                config.cpu_reserve = cpu_reserve;
            }

            let toolchain = create_registry().for_current_platform()?;
            let report = run_build(&config, toolchain.as_ref(), &ProcessRunner).await?;
            let code = report.exit_code();

            if code != 0 {
                error!("ERROR: {}", code);
            } else {
                info!("Done.");
            }
            code
        }
    };

    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
