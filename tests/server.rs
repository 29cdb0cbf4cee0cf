use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use storesearch::{
    itunes::{ItunesClient, SearchConfig},
    mcp::{config::McpConfig, server::router},
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

async fn spawn_server(auth_token: Option<&str>) -> (String, CancellationToken) {
    let config = McpConfig {
        bind: "127.0.0.1:0".to_string(),
        auth_token: auth_token.map(str::to_string),
        search: SearchConfig::default(),
    };
    let shutdown = CancellationToken::new();
    let app = router(&config, ItunesClient::new(), &shutdown);

    let listener = TcpListener::bind(&config.bind).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let stop = shutdown.clone();
    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { stop.cancelled().await })
            .await
            .unwrap();
    });
    (format!("http://{addr}"), shutdown)
}

#[tokio::test]
async fn health_is_open_even_with_auth() {
    let (base, shutdown) = spawn_server(Some("secret")).await;

    let response = reqwest::get(format!("{base}/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "OK");
    shutdown.cancel();
}

#[tokio::test]
async fn mcp_requires_bearer_token_when_configured() {
    let (base, shutdown) = spawn_server(Some("secret")).await;
    let http = reqwest::Client::new();

    let anonymous = http.post(format!("{base}/mcp")).send().await.unwrap();
    let wrong = http
        .post(format!("{base}/mcp"))
        .bearer_auth("guess")
        .send()
        .await
        .unwrap();
    let authorized = http
        .post(format!("{base}/mcp"))
        .bearer_auth("secret")
        .send()
        .await
        .unwrap();

    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_ne!(authorized.status(), StatusCode::UNAUTHORIZED);
    shutdown.cancel();
}

#[tokio::test]
async fn mcp_is_open_without_token() {
    let (base, shutdown) = spawn_server(None).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/mcp"))
        .send()
        .await
        .unwrap();

    assert_ne!(response.status(), StatusCode::UNAUTHORIZED);
    shutdown.cancel();
}
