use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, middleware, routing::get};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::{
    auth::{AuthState, auth_middleware},
    config::McpConfig,
    tools::StoreSearchTools,
};
use crate::itunes::ItunesClient;

async fn health_check() -> &'static str {
    "OK"
}

/// `/health` plus the `storesearch` MCP endpoint at `/mcp`. Each MCP session
/// owns its own search session, so a new search only cancels searches made
/// by the same caller. Open MCP streams end when `shutdown` is cancelled.
pub fn router(config: &McpConfig, client: ItunesClient, shutdown: &CancellationToken) -> Router {
    let search_config = config.search.clone();
    let tools: StreamableHttpService<StoreSearchTools, LocalSessionManager> =
        StreamableHttpService::new(
            move || Ok(StoreSearchTools::new(client.clone(), search_config.clone())),
            LocalSessionManager::default().into(),
            StreamableHttpServerConfig {
                cancellation_token: shutdown.child_token(),
                ..Default::default()
            },
        );

    let auth_state = Arc::new(AuthState::new(config.auth_token.clone()));
    let mcp = Router::new()
        .nest_service("/mcp", tools)
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    Router::new().route("/health", get(health_check)).merge(mcp)
}

pub async fn serve(config: McpConfig) -> Result<()> {
    let shutdown = CancellationToken::new();
    let app = router(&config, ItunesClient::new(), &shutdown);

    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("bind {} failed", config.bind))?;
    info!(
        bind = %config.bind,
        base_url = %config.search.base_url,
        limit = config.search.limit,
        auth = config.auth_token.is_some(),
        "storesearch MCP server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_ctrl_c(shutdown))
        .await
        .context("MCP server terminated")?;
    info!("storesearch MCP server stopped");
    Ok(())
}

async fn wait_for_ctrl_c(shutdown: CancellationToken) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "ctrl-c handler failed, shutting down");
    }
    shutdown.cancel();
}
