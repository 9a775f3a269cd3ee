use std::path::PathBuf;
use std::process::Command;

use log::debug;

use crate::error::VersionerError;

const DEFAULT_PROGRAM: &str = "git";

const DESCRIBE_ARGS: [&str; 3] = ["describe", "--tags", "--dirty"];
const SHORT_REVISION_ARGS: [&str; 3] = ["rev-parse", "--short", "HEAD"];

/// Read-only queries against version-control metadata.
pub trait RevisionSource {
    /// Describe the current revision relative to the nearest reachable tag,
    /// marking a modified working tree.
    fn describe(&self) -> Result<String, VersionerError>;

    /// Short unique identifier of the current revision.
    fn short_revision(&self) -> Result<String, VersionerError>;
}

/// Runs the `git` command line tool.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    repo: Option<PathBuf>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            repo: None,
        }
    }

    /// Executable to invoke instead of `git` from `PATH`.
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Run queries inside `dir` instead of the current directory.
    pub fn repo(mut self, dir: impl Into<PathBuf>) -> Self {
        self.repo = Some(dir.into());
        self
    }

    fn command_line(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    fn run(&self, args: &[&str]) -> Result<String, VersionerError> {
        let command_line = self.command_line(args);
        debug!("running `{command_line}`");

        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(ref dir) = self.repo {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .map_err(|e| VersionerError::spawn_failed(&self.program, &e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VersionerError::tool_failed(&command_line, output.status, &stderr));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| VersionerError::invalid_output(&command_line, "not valid UTF-8"))
    }
}

impl RevisionSource for GitCli {
    fn describe(&self) -> Result<String, VersionerError> {
        self.run(&DESCRIBE_ARGS)
    }

    fn short_revision(&self) -> Result<String, VersionerError> {
        self.run(&SHORT_REVISION_ARGS)
    }
}
