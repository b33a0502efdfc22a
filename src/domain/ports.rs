use crate::domain::model::{ConversionJob, ToolOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn directory(&self) -> &str;
    fn tool(&self) -> &str;
    fn strict(&self) -> bool;
}

#[async_trait]
pub trait Rasterizer: Send + Sync {
    /// Name of the external program, used in logs and errors.
    fn tool(&self) -> &str;

    /// Render `job.input_path` to `job.output_path`, waiting for completion.
    async fn rasterize(&self, job: &ConversionJob) -> Result<ToolOutcome>;
}
