use crate::domain::model::{ConversionJob, ToolOutcome};
use crate::domain::ports::Rasterizer;
use crate::utils::error::{ConvertError, Result, ToolFailureReason};
use async_trait::async_trait;
use std::ffi::OsString;
use tokio::process::Command;

/// Runs an Inkscape-compatible command line once per job:
/// `<tool> <input> --export-type=png --export-filename <output>`.
#[derive(Debug, Clone)]
pub struct CommandRasterizer {
    program: String,
}

impl CommandRasterizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn arguments(job: &ConversionJob) -> Vec<OsString> {
        vec![
            job.input_path.clone().into_os_string(),
            OsString::from("--export-type=png"),
            OsString::from("--export-filename"),
            job.output_path.clone().into_os_string(),
        ]
    }
}

#[async_trait]
impl Rasterizer for CommandRasterizer {
    fn tool(&self) -> &str {
        &self.program
    }

    async fn rasterize(&self, job: &ConversionJob) -> Result<ToolOutcome> {
        tracing::debug!(
            "Running {} on {}",
            self.program,
            job.input_path.display()
        );

        // 子行程沿用父行程的 stdin/stdout/stderr
        let status = Command::new(&self.program)
            .args(Self::arguments(job))
            .status()
            .await
            .map_err(|e| ConvertError::ConversionToolFailure {
                tool: self.program.clone(),
                file_name: job.display_name().into_owned(),
                reason: ToolFailureReason::Launch(e),
            })?;

        tracing::debug!("{} exited with {}", self.program, status);
        Ok(status.into())
    }
}
