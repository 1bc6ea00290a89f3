use anyhow::Result;
use durable_viewer_core::ViewerConfig;
use durable_viewer_http::{AppState, create_router};
use std::sync::Arc;

pub(crate) async fn run(config: ViewerConfig, port: u16, host: String) -> Result<()> {
    tracing::info!(
        api = %config.api_base_url,
        session_max_age = ?config.session_max_age,
        "Using management API"
    );
    let state = Arc::new(AppState::new(config)?);

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
