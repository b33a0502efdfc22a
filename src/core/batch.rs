use crate::core::naming::{is_candidate, output_name};
use crate::domain::model::{BatchReport, ConversionJob};
use crate::domain::ports::{ConfigProvider, Rasterizer};
use crate::utils::error::{ConvertError, Result, ToolFailureReason};
use crate::utils::validation::validate_directory;
use std::fs;
use std::path::Path;

pub struct BatchConverter<R: Rasterizer, C: ConfigProvider> {
    rasterizer: R,
    config: C,
}

impl<R: Rasterizer, C: ConfigProvider> BatchConverter<R, C> {
    pub fn new(rasterizer: R, config: C) -> Self {
        Self { rasterizer, config }
    }

    /// Lists the immediate entries of the directory and returns one job per
    /// `.svg` name, sorted by file name.
    pub fn plan(&self) -> Result<Vec<ConversionJob>> {
        let directory = self.config.directory();
        validate_directory(directory)?;
        let dir = Path::new(directory);

        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            names.push(entry?.file_name());
        }
        names.sort();

        let jobs: Vec<ConversionJob> = names
            .into_iter()
            .filter(|name| is_candidate(name))
            .map(|name| ConversionJob {
                input_path: dir.join(&name),
                output_path: dir.join(output_name(&name)),
                file_name: name,
            })
            .collect();

        tracing::debug!("Found {} candidate(s) in {}", jobs.len(), directory);
        Ok(jobs)
    }

    /// Converts every candidate in order, one blocking tool run at a time.
    ///
    /// Any error aborts the rest of the batch; outputs written by earlier
    /// jobs stay on disk.
    pub async fn run(&self) -> Result<BatchReport> {
        let jobs = self.plan()?;
        let mut report = BatchReport::default();

        tracing::debug!(
            "🚀 Converting {} file(s) in {} with {}",
            jobs.len(),
            self.config.directory(),
            self.rasterizer.tool()
        );

        for job in jobs {
            let outcome = self.rasterizer.rasterize(&job).await?;

            if !outcome.success() {
                if self.config.strict() {
                    return Err(ConvertError::ConversionToolFailure {
                        tool: self.rasterizer.tool().to_string(),
                        file_name: job.display_name().into_owned(),
                        reason: ToolFailureReason::ExitStatus(outcome.exit_code),
                    });
                }
                tracing::warn!(
                    "⚠️ {} exited with {:?} on {}",
                    self.rasterizer.tool(),
                    outcome.exit_code,
                    job.display_name()
                );
                report.tool_failures += 1;
            }

            println!(
                "Converted {} to {}",
                job.display_name(),
                job.output_path.display()
            );
            report.attempted.push(job);
        }

        Ok(report)
    }
}
