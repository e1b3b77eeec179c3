use anyhow::{ensure, Result};
use reqwest::Client;
use serde_json::json;

use devlink_api::store::AppState;

pub struct TestServer {
    pub base_url: String,
}

/// Serve the real router over a fresh in-memory store on an ephemeral port.
/// Every test gets its own server, so no state leaks between tests.
pub async fn spawn_server() -> Result<TestServer> {
    let app = devlink_api::app(AppState::in_memory());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("test server exited: {}", e);
        }
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
    })
}

/// Register an account and hand back its bearer token.
pub async fn register(
    client: &Client,
    base_url: &str,
    name: &str,
    email: &str,
    password: &str,
) -> Result<String> {
    let res = client
        .post(format!("{}/api/users", base_url))
        .json(&json!({ "name": name, "email": email, "password": password }))
        .send()
        .await?;
    ensure!(
        res.status().is_success(),
        "registration failed with {}",
        res.status()
    );
    Ok(res.json::<String>().await?)
}

/// Header existing clients carry the bearer token in.
pub const AUTH_HEADER: &str = "x-auth-token";
