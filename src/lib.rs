pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::command::CommandRasterizer;
pub use config::CliConfig;
pub use core::batch::BatchConverter;
pub use utils::error::{ConvertError, Result};
