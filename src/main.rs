use devlink_api::{app, config, store::AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up JWT_SECRET, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devlink_api=info,tower_http=info".into()),
        )
        .init();

    let config = config::config();
    let state = AppState::in_memory();
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("devlink-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
