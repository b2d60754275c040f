mod config;
mod error;
mod render;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("starting atlas-web");

    let config = Config::from_env()?;
    info!(
        data_path = %config.data_path.display(),
        listen_addr = %config.listen_addr,
        "configuration loaded"
    );

    let templates = render::build_environment()?;
    let state = Arc::new(AppState {
        config: config.clone(),
        templates,
    });
    let app = server::build_router(state);

    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!(listen_addr = %config.listen_addr, "atlas-web ready");
    axum::serve(listener, app).await?;

    Ok(())
}
