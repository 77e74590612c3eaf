use builders_site::{router, AppState, Config};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    fs::create_dir_all(config.static_dir.join("images")).await?;
    if let Some(parent) = config.log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    info!(log = %config.log_path.display(), "contact submissions log");
    let app = router(AppState::new(config.log_path.clone(), config.static_dir.clone()));

    let addr = config.addr();
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
