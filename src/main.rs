use carefinder::app::{handle_fatal_error, init_logging, AppConfig};
use carefinder::cli::{execute_command, Cli};
use carefinder::config::ConfigLoader;
use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::with_path(path),
        None => ConfigLoader::new(),
    };
    let config = match loader.load().await {
        Ok(config) => config,
        Err(e) => {
            init_logging(&AppConfig::new(cli.verbose));
            handle_fatal_error(e.into(), cli.verbose)
        }
    };

    init_logging(&AppConfig::new(cli.verbose).with_configured_level(config.log_level.clone()));
    debug!("API base URL: {}", config.api_url);

    if let Err(e) = execute_command(cli.command, config).await {
        handle_fatal_error(e, cli.verbose);
    }
}
