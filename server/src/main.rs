use std::path::PathBuf;

use clap::Parser;
use common::config::{ConfigManager, FileContentConfigProvider};
use common::{log, logger};
use tictactoe_player_server::move_calculator::{MoveCalculator, MoveSettings};
use tictactoe_player_server::prediction::HttpPredictionClient;
use tictactoe_player_server::server_config::{DEFAULT_CONFIG_PATH, PlayerConfig};
use tictactoe_player_server::web_server::run_web_server;

#[derive(Parser)]
#[command(name = "tictactoe_player_server")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Player".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<FileContentConfigProvider, PlayerConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let config = config_manager.get_config()?;
    log!(
        "Loaded config from {}:\n{}",
        args.config.display(),
        config_manager.to_yaml(&config)?
    );

    let client = HttpPredictionClient::new(
        config.neural_network_service_url.clone(),
        config.request_timeout(),
    )?;
    let calculator = MoveCalculator::new(client, MoveSettings::from(&config));

    run_web_server(calculator, &config.bind_address).await?;

    log!("Server shut down gracefully");

    Ok(())
}
