use clap::Parser;
use remotive_extract::core::ConfigProvider;
use remotive_extract::utils::{logger, validation::Validate};
use remotive_extract::{
    CliConfig, EtlEngine, EtlError, LocalStorage, RemotivePipeline, RunSummary, TomlConfig,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.log_format);
    tracing::debug!("CLI config: {:?}", cli);

    let dry_run = cli.dry_run;
    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(&path) {
                Ok(config) => execute(config, dry_run).await,
                Err(e) => Err(e),
            }
        }
        None => execute(cli, dry_run).await,
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(
                "❌ Extraction failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            ExitCode::FAILURE
        }
    }
}

async fn execute<C>(config: C, dry_run: bool) -> Result<RunSummary, EtlError>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;

    tracing::info!(
        "🚀 Extracting '{}' jobs from {} into {}",
        config.search_term(),
        config.api_endpoint(),
        config.output_path()
    );

    let storage = LocalStorage::new(config.create_dirs());
    let engine = EtlEngine::new(RemotivePipeline::new(storage, config));

    let summary = if dry_run {
        engine.dry_run().await?
    } else {
        engine.run().await?
    };

    tracing::info!("✅ Done: {} jobs, {} columns", summary.records, summary.columns);
    Ok(summary)
}
