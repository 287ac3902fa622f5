use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use roster_core::RosterService;
use roster_server::{api, config::ServerConfig, seed, state};

#[derive(Parser, Debug)]
#[command(author, version, about = "School activity roster service")]
struct Args {
    /// Config file (TOML); `roster.toml` is picked up when present.
    #[arg(long)]
    config: Option<String>,

    /// Overrides the configured listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Refuses signups once an activity is full.
    #[arg(long)]
    enforce_capacity: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("=== Activity Roster Server Starting ===");

    // 1. Configuration (file + env, then CLI overrides)
    let mut cfg = ServerConfig::load(args.config.as_deref()).context("Failed to load config")?;
    if let Some(port) = args.port {
        cfg.port = port;
    }
    if args.enforce_capacity {
        cfg.enforce_capacity = true;
    }

    // 2. Seed the catalog
    let entries = match &cfg.seed_file {
        Some(path) => seed::load(std::path::Path::new(path))?,
        None => seed::default_activities(),
    };
    let catalog = seed::build_catalog(entries)?;

    // 3. Shared roster service
    let service = RosterService::with_capacity_policy(catalog, cfg.capacity_policy());
    info!("Capacity policy: {:?}", service.capacity_policy());
    let shared = state::create_state(service);

    // 4. Serve
    let app = api::router(api::AppState { roster: shared }, &cfg.static_dir);
    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Roster API listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
