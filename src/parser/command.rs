//! Process-invocation adapter for the external log parser.

use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::{ParserConfig, PARSER_JSON_FLAG, PARSER_PRETTY_FLAG};

use super::{LogParser, ParserError};

/// Runs the configured parser executable once per call and captures stdout.
///
/// The tool is invoked as `<command> --json [--pretty] <id>`. Its exit status
/// is logged but never used for classification; success and failure are
/// signaled entirely through stdout content.
#[derive(Debug, Clone)]
pub struct CommandParser {
    program: String,
    pretty: bool,
    timeout: Option<Duration>,
}

impl CommandParser {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            program: config.command.clone(),
            pretty: config.pretty,
            timeout: config.timeout_seconds.map(Duration::from_secs),
        }
    }

    /// Program this adapter invokes, for startup logging.
    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl LogParser for CommandParser {
    async fn parse_log(&self, id: i64) -> Result<String, ParserError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg(PARSER_JSON_FLAG);
        if self.pretty {
            cmd.arg(PARSER_PRETTY_FLAG);
        }
        cmd.arg(id.to_string());
        cmd.stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!(program = %self.program, id, "Invoking log parser");

        let output = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, cmd.output())
                .await
                .map_err(|_| ParserError::Timeout {
                    secs: timeout.as_secs(),
                })??,
            None => cmd.output().await?,
        };

        if !output.status.success() {
            // Not a failure by itself: the tool reports parse errors on
            // stdout, so a non-zero exit with clean stdout still counts.
            tracing::debug!(
                program = %self.program,
                id,
                exit_code = output.status.code().unwrap_or(-1),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "Log parser exited non-zero"
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        tracing::debug!(id, output_size = stdout.len(), "Log parser finished");

        Ok(stdout)
    }
}
