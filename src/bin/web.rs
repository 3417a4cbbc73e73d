//! Web lab entry point for MENDEL.
//!
//! Run with: cargo run --bin mendel-web
//!
//! Then open http://127.0.0.1:8080 in your browser.

use clap::Parser;
use mendel::{web::run_server, Config};
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "mendel-web")]
#[command(about = "MENDEL web lab - pea cross simulator with browser interface")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "mendel.yaml")]
    config: String,

    /// Address to bind the server to (overrides the config)
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Load or create default config
    let config = load_config(&args.config);

    // Parse bind address
    let bind = args.bind.as_deref().unwrap_or(&config.server.bind);
    let bind: SocketAddr = bind
        .parse()
        .map_err(|e| format!("Invalid bind address '{}': {}", bind, e))?;

    // Run the server
    run_server(config, bind).await
}

/// Load configuration from file or use default
fn load_config(config_path: &str) -> Config {
    // Try specified path first
    if let Ok(config) = Config::from_file(config_path) {
        log::info!("Loaded config from: {}", config_path);
        return config;
    }

    // Try common locations
    let paths = ["mendel.yaml", "config.yaml", "../mendel.yaml"];
    for path in paths {
        if let Ok(config) = Config::from_file(path) {
            log::info!("Loaded config from: {}", path);
            return config;
        }
    }

    log::info!("Using default configuration");
    Config::default()
}
