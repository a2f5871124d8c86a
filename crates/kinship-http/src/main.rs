use anyhow::Context;
use kinship_core::logging_facility::init;
use kinship_engine::PersonGraphService;
use kinship_http::{router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    init(settings.log_profile);

    let service = PersonGraphService::open_sqlite(&settings.db_path)
        .with_context(|| format!("opening store at {}", settings.db_path.display()))?;
    let app = router(AppState::new(service));

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    tracing::info!(
        addr = %addr,
        db_path = %settings.db_path.display(),
        profile = ?settings.log_profile,
        "kinship server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("kinship server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}
