use anyhow::Context;
use clap::Parser;
use promo_lookup::utils::{logger, validation::Validate};
use promo_lookup::{server, AppState, CliArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting promo-lookup");
    match &args.config {
        Some(path) => tracing::info!("Loading configuration from: {}", path),
        None => tracing::info!("No configuration file given, using defaults"),
    }

    let config = args.into_config().context("failed to load configuration")?;
    tracing::debug!("Config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(
                "Failed to load promotions from {}: {}",
                config.dataset.path,
                e
            );
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    server::run(&config, state)
        .await
        .with_context(|| format!("server on {} stopped", config.server_addr()))?;

    Ok(())
}
