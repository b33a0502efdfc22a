use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "svgbatch", version)]
#[command(about = "Convert every .svg in a directory to .png with an external rasterizer")]
pub struct CliConfig {
    /// Directory whose .svg files are converted (not recursive)
    pub directory: String,

    /// Rasterizer program, invoked as `<tool> <in> --export-type=png --export-filename <out>`
    #[arg(long, env = "SVGBATCH_TOOL", default_value = "inkscape")]
    pub tool: String,

    /// Abort the batch when the tool exits with a non-zero status
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn directory(&self) -> &str {
        &self.directory
    }

    fn tool(&self) -> &str {
        &self.tool
    }

    fn strict(&self) -> bool {
        self.strict
    }
}

// 目錄是否存在由 BatchConverter 檢查，這裡只驗證選項值
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("tool", &self.tool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_directory() {
        let config = CliConfig::try_parse_from(["svgbatch", "./icons"]).unwrap();
        assert_eq!(config.directory, "./icons");
        assert!(!config.strict);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_options() {
        let config = CliConfig::try_parse_from([
            "svgbatch",
            "--tool",
            "/opt/bin/rasterize",
            "--strict",
            "-v",
            "art",
        ])
        .unwrap();
        assert_eq!(config.tool, "/opt/bin/rasterize");
        assert!(config.strict);
        assert!(config.verbose);
        assert_eq!(ConfigProvider::directory(&config), "art");
    }

    #[test]
    fn test_wrong_argument_count_is_rejected() {
        assert!(CliConfig::try_parse_from(["svgbatch"]).is_err());
        assert!(CliConfig::try_parse_from(["svgbatch", "a", "b"]).is_err());
    }

    #[test]
    fn test_blank_tool_fails_validation() {
        let config = CliConfig::try_parse_from(["svgbatch", "--tool", " ", "art"]).unwrap();
        assert!(config.validate().is_err());
    }
}
