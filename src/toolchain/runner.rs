use super::types::{CommandRunner, ToolCommand, ToolchainError};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::info;

/// Runs commands as child processes sharing this process's terminal.
#[derive(Debug, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &ToolCommand) -> Result<i32, ToolchainError> {
        info!("Running: {}", command);

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.working_dir)
            .status()
            .await
            .map_err(|e| ToolchainError::SpawnError(command.program.clone(), e))?;

        // Killed by a signal
        Ok(status.code().unwrap_or(-1))
    }
}
