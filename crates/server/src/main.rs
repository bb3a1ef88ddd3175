use tradeval_server::{ServiceConfig, ValidationService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        r#"Trade Validation Service - rule-based FX trade validation

USAGE:
    tradeval-server [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOST                Server host (overrides config, default: 0.0.0.0)
    PORT                Server port (overrides config, default: 12345)
    RUST_LOG            Log level filter

EXAMPLES:
    # Run with defaults
    tradeval-server

    # Run with config file
    tradeval-server --config crates/server/config/service.json

    # Run with custom port
    PORT=9000 tradeval-server
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "tradeval_server=info,tradeval_engine=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            ServiceConfig::from_file(&path)?
        }
        None => {
            tracing::info!("Using default configuration");
            ServiceConfig::default()
        }
    };

    if let Ok(host) = std::env::var("HOST") {
        config.server.host = host;
    }
    if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
        config.server.port = port;
    }

    tracing::info!("Service: {}", config.name);
    tracing::info!(
        "Counterparties: {:?}",
        config.reference_data.counterparties
    );
    tracing::info!(
        "Currency pairs: {} ({:?})",
        config.reference_data.currency_pairs.len(),
        config.reference_data.pair_matching
    );
    tracing::info!(
        "Holidays: {} global, {} currency calendars",
        config.calendar.holidays.len(),
        config.calendar.currency_holidays.len()
    );

    let service = ValidationService::from_config(config)?;

    tracing::info!("Rules in evaluation order:");
    for rule in service.engine.rules().describe() {
        tracing::info!("  {} ({:?})", rule.name, rule.scope);
    }
    tracing::info!("Available endpoints:");
    tracing::info!("  POST /validate");
    tracing::info!("  POST /validateBatch");
    tracing::info!("  GET  /rules");
    tracing::info!("  GET  /health");

    service.run().await
}
