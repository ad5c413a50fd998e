//! Mock marketplace backend for integration tests

#![allow(dead_code)]

use std::time::Duration;

use axum::Router;
use booking_client::{ClientConfig, HttpClient};

/// Install a test-writer subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_client=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Serve `app` on a random local port and return its base URL
pub async fn serve(app: Router) -> String {
    init_tracing();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Client pointed at `base_url` with an in-memory session
pub fn client(base_url: &str) -> HttpClient {
    HttpClient::new(&ClientConfig::new(base_url)).unwrap()
}

pub fn client_with_timeout(base_url: &str, timeout: Duration) -> HttpClient {
    HttpClient::new(&ClientConfig::new(base_url).with_timeout(timeout)).unwrap()
}
