use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Usage error: {message}")]
    UsageError { message: String },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Conversion tool '{tool}' failed on {file_name}: {reason}")]
    ConversionToolFailure {
        tool: String,
        file_name: String,
        reason: ToolFailureReason,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

/// 工具失敗的原因：無法啟動，或以非零狀態結束（僅 strict 模式）
#[derive(Debug)]
pub enum ToolFailureReason {
    Launch(std::io::Error),
    ExitStatus(Option<i32>),
}

impl std::fmt::Display for ToolFailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolFailureReason::Launch(e) => write!(f, "could not be launched ({})", e),
            ToolFailureReason::ExitStatus(Some(code)) => write!(f, "exited with status {}", code),
            ToolFailureReason::ExitStatus(None) => write!(f, "terminated by a signal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Input,
    Tool,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::UsageError { .. } | ConvertError::ConfigError { .. } => {
                ErrorCategory::Usage
            }
            ConvertError::DirectoryNotFound { .. } => ErrorCategory::Input,
            ConvertError::ConversionToolFailure { .. } => ErrorCategory::Tool,
            ConvertError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConvertError::UsageError { .. }
            | ConvertError::ConfigError { .. }
            | ConvertError::DirectoryNotFound { .. } => ErrorSeverity::High,
            ConvertError::ConversionToolFailure {
                reason: ToolFailureReason::ExitStatus(_),
                ..
            } => ErrorSeverity::Medium,
            ConvertError::ConversionToolFailure {
                reason: ToolFailureReason::Launch(_),
                ..
            }
            | ConvertError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::UsageError { message } => message.clone(),
            ConvertError::DirectoryNotFound { path } => {
                format!("Error: The specified directory '{}' does not exist.", path)
            }
            ConvertError::ConversionToolFailure {
                tool,
                file_name,
                reason,
            } => format!("Converting {} with '{}' failed: {}", file_name, tool, reason),
            ConvertError::IoError(e) => format!("File system error: {}", e),
            ConvertError::ConfigError { message } => format!("Invalid configuration: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::UsageError { .. } => "Pass exactly one directory argument",
            ConvertError::DirectoryNotFound { .. } => {
                "Check the path and make sure it points to an existing directory"
            }
            ConvertError::ConversionToolFailure {
                reason: ToolFailureReason::Launch(_),
                ..
            } => "Install the rasterizer or point --tool / SVGBATCH_TOOL at it",
            ConvertError::ConversionToolFailure { .. } => {
                "Inspect the tool output above; rerun without --strict to continue past failures"
            }
            ConvertError::IoError(_) => "Check directory permissions and free disk space",
            ConvertError::ConfigError { .. } => "Fix the option value and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
