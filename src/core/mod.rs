pub mod batch;
pub mod naming;

pub use crate::domain::model::{BatchReport, ConversionJob, ToolOutcome};
pub use crate::domain::ports::{ConfigProvider, Rasterizer};
pub use crate::utils::error::Result;
