use std::borrow::Cow;
use std::ffi::OsString;
use std::path::PathBuf;

/// One `.svg` entry scheduled for rasterization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub file_name: OsString,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl ConversionJob {
    /// File name for messages; invalid UTF-8 is replaced.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.file_name.to_string_lossy()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolOutcome {
    /// `None` when the tool was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl ToolOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

impl From<std::process::ExitStatus> for ToolOutcome {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            exit_code: status.code(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Every job handed to the rasterizer, in order, including those whose
    /// tool run failed in lenient mode.
    pub attempted: Vec<ConversionJob>,
    pub tool_failures: usize,
}
