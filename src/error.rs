use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ToolInvocation,
    InvalidOutput,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToolInvocation => "TOOL_INVOCATION",
            Self::InvalidOutput => "INVALID_OUTPUT",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct VersionerError {
    pub code: ErrorCode,
    pub message: String,
}

impl VersionerError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn spawn_failed(program: &str, e: &std::io::Error) -> Self {
        Self::new(
            ErrorCode::ToolInvocation,
            format!("Failed to run `{program}`: {e}"),
        )
    }

    pub fn tool_failed(command: &str, status: std::process::ExitStatus, stderr: &str) -> Self {
        let stderr = stderr.trim();
        let message = if stderr.is_empty() {
            format!("`{command}` failed ({status})")
        } else {
            format!("`{command}` failed ({status}): {stderr}")
        };
        Self::new(ErrorCode::ToolInvocation, message)
    }

    pub fn invalid_output(command: &str, reason: &str) -> Self {
        Self::new(
            ErrorCode::InvalidOutput,
            format!("`{command}` produced invalid output: {reason}"),
        )
    }
}
