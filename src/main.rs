//! Furydash main entry point

use clap::Parser;
use furydash_api::start_server;
use furydash_config::Config;
use furydash_core::{BrandRegistry, DashboardState};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

#[derive(Parser, Debug)]
#[command(name = "furydash")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight multi-tenant transaction dashboard", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let rt = Runtime::new()?;

    rt.block_on(async {
        let config = match Config::load(args.config.clone()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[WARN] Failed to load config ({}), using defaults", e);
                Config::default()
            }
        };

        eprintln!(
            "[INFO] Config loaded: bind={}, page_size={}",
            config.bind_addr(),
            config.pagination.page_size
        );

        let dashboard = Arc::new(RwLock::new(DashboardState::new(
            config.pagination.page_size,
        )));
        let brands = Arc::new(BrandRegistry::default());

        start_server(config, dashboard, brands).await
    });

    Ok(())
}
