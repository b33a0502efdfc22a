use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use svgbatch::utils::{logger, validation::Validate};
use svgbatch::{BatchConverter, CliConfig, CommandRasterizer, ConvertError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // 參數數量錯誤：用法印到 stdout，結束碼 1
            eprintln!("{}", e.render());
            let usage = ConvertError::UsageError {
                message: CliConfig::command().render_usage().to_string(),
            };
            println!("{}", usage.user_friendly_message());
            std::process::exit(usage.exit_code());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("Starting svgbatch");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    let rasterizer = CommandRasterizer::new(config.tool.clone());
    let converter = BatchConverter::new(rasterizer, config);

    match converter.run().await {
        Ok(report) => {
            tracing::debug!(
                "✅ Finished: {} file(s) attempted, {} reported a tool failure",
                report.attempted.len(),
                report.tool_failures
            );
        }
        Err(e) => fail(e),
    }
}

fn fail(e: ConvertError) -> ! {
    tracing::error!(
        "❌ svgbatch failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    // 目錄不存在的訊息與用法一樣印到 stdout
    match &e {
        ConvertError::DirectoryNotFound { .. } => println!("{}", e.user_friendly_message()),
        _ => eprintln!("❌ {}", e.user_friendly_message()),
    }
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
