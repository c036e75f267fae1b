use crate::config::FacadeConfig;
use crate::handlers;
use crate::services::GatewayClient;
use axum::{Router, middleware::from_fn, routing::get};
use service_core::error::AppError;
use service_core::middleware::{REQUEST_ID_HEADER, request_id_middleware};
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: FacadeConfig,
    pub gateway: Arc<GatewayClient>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: FacadeConfig) -> Result<Self, AppError> {
        let gateway = Arc::new(GatewayClient::new(config.gateway.clone()));

        tracing::info!(gateway_url = %gateway.base_url(), "Gateway client initialized");

        let state = AppState {
            config: config.clone(),
            gateway,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route(
                "/api/documents",
                get(handlers::list_documents).post(handlers::upload_document),
            )
            .route("/api/documents/:id", get(handlers::fetch_document))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }),
            )
            .layer(from_fn(request_id_middleware))
            .with_state(state);

        let address = format!("{}:{}", config.common.host, config.common.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
