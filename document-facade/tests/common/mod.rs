use document_facade::config::FacadeConfig;
use document_facade::startup::Application;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the façade pointed at the given gateway base URL.
    pub async fn spawn(gateway_base_url: &str) -> Self {
        let mut config = FacadeConfig::load().expect("Failed to load configuration");
        config.common.host = "127.0.0.1".to_string();
        config.common.port = 0; // Random port for testing
        config.gateway.base_url = gateway_base_url.to_string();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp { address }
    }
}

/// Spawn a stub storage gateway from the given router and return its base
/// URL, including the `/files` prefix the real gateway uses.
#[allow(dead_code)]
pub async fn spawn_gateway(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub gateway listener");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    format!("http://127.0.0.1:{}/files", port)
}

/// Reserve a port with nothing listening on it, to simulate an unreachable
/// gateway.
#[allow(dead_code)]
pub async fn unreachable_gateway() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    format!("http://127.0.0.1:{}/files", port)
}
