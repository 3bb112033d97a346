use anyhow::Context;
use clap::Parser;
use moonchart_server::{build_service, cors_layer, router, AppState};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Config file (default: configs/moonchart.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overriding the config file and MOONCHART_BIND.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = moonchart_config::load_settings(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        settings.bind = bind;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&settings.log_filter))
        .init();

    let service = build_service(&settings)?;
    let app = router(AppState::new(service)).layer(cors_layer(&settings.allowed_origins)?);

    let listener = tokio::net::TcpListener::bind(&settings.bind)
        .await
        .with_context(|| format!("Failed to bind {}", settings.bind))?;
    log::info!(
        "moonchart listening on {} (ephemeris: {}, houses: {}, modern rulers: {})",
        settings.bind,
        settings.ephemeris_path.display(),
        settings.house_system,
        settings.modern_rulers
    );

    axum::serve(listener, app).await?;
    Ok(())
}
