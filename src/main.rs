use anyhow::Context;
use clap::Parser;
use html_inliner::core::Storage;
use html_inliner::utils::error::{ErrorSeverity, InlineError};
use html_inliner::utils::{logger, validation::Validate};
use html_inliner::{CliConfig, LocalStorage, TomlConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting html-inliner");
    tracing::debug!("CLI config: {:?}", config);

    // 載入 TOML 配置 (可選)
    let toml = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let toml = match TomlConfig::from_file(path) {
                Ok(toml) => toml,
                Err(e) => fail(&e),
            };
            // 設定檔本身必須合法，即使部分值之後會被 CLI 覆蓋
            if let Err(e) = toml.validate() {
                tracing::error!("❌ Invalid configuration file {}: {}", path.display(), e);
                fail(&e);
            }
            Some(toml)
        }
        None => None,
    };

    let settings = config.settings(toml.as_ref());

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    let report = match html_inliner::inline_file(&config.filename, settings) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(
                "❌ Inlining failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            fail(&e);
        }
    };

    match &config.output {
        Some(path) => {
            LocalStorage::new()
                .write_file(path, &report.html)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            tracing::info!("📁 Output saved to: {}", path.display());
        }
        None => println!("{}", report.html),
    }

    Ok(())
}

fn fail(e: &InlineError) -> ! {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
