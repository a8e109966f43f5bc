mod messages;
mod server_config;
mod web_server;
mod ws_handler;

use std::path::PathBuf;

use clap::Parser;
use common::config::Validate;
use common::{log, logger};

use server_config::{CONFIG_FILE_NAME, describe_config_source, get_config_manager};
use web_server::run_web_server;

#[derive(Parser)]
#[command(name = "tictactoe_server", about = "Tic-tac-toe against an unbeatable computer, in the browser")]
struct Args {
    /// YAML config file; defaults are used when it does not exist. The
    /// default `server.static_files_path` is this crate's `static/` dir.
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Overrides `server.address` from the config.
    #[arg(long)]
    address: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_source = describe_config_source(&args.config);
    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;
    if let Some(address) = args.address {
        config.server.address = address;
        config.validate()?;
    }

    log!("{}", config_source);

    run_web_server(&config).await?;

    log!("Server shut down gracefully");

    Ok(())
}
