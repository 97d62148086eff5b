//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with a single catch-all handler
//! - Wire up middleware (request ID, tracing, CORS headers)
//! - Dispatch on the request method (OPTIONS / GET / POST)
//! - Forward POST bodies to the selected upstream
//! - Translate every failure into a response at the handler boundary

use axum::{
    body::Body,
    extract::State,
    http::{header, Method, Request},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::http::health::HealthReport;
use crate::http::request::{request_id, CallSummary, UuidRequestId};
use crate::http::response::{cors_headers, json_response, ProxyError};
use crate::routing::route;
use crate::upstream::{UpstreamClient, UpstreamResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub upstream: UpstreamClient,
}

/// HTTP server for the RPC proxy.
pub struct HttpServer {
    router: Router,
    config: Arc<ProxyConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> UpstreamResult<Self> {
        let config = Arc::new(config);
        let upstream = UpstreamClient::new(&config)?;

        let state = AppState {
            config: config.clone(),
            upstream,
        };

        Ok(Self {
            router: Self::build_router(state),
            config,
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let router = Router::new()
            .route("/", any(dispatch))
            .route("/{*path}", any(dispatch))
            .with_state(state);

        let router = cors_headers()
            .into_iter()
            .fold(router, |router, (name, value)| {
                router.layer(SetResponseHeaderLayer::overriding(name, value))
            });

        router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
    }

    /// Run the server until `shutdown` resolves, then drain in-flight requests.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            mainnet_rpc = %self.config.mainnet_rpc,
            testnet_rpc = %self.config.testnet_rpc,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Single entry point: one inbound request, exactly one response.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request_id(&request);
    let method = request.method().clone();

    let result = match method {
        Method::OPTIONS => Ok(preflight()),
        Method::GET => health(&state, &request),
        Method::POST => forward(&state, request, &request_id).await,
        other => Err(ProxyError::UnsupportedMethod(other)),
    };

    result.unwrap_or_else(|err| {
        let status = err.status();
        if status.is_server_error() {
            tracing::error!(request_id = %request_id, status = %status, error = %err, "Request failed");
        } else {
            tracing::warn!(request_id = %request_id, status = %status, error = %err, "Request rejected");
        }
        err.into_response()
    })
}

/// CORS preflight: empty 200, headers come from the CORS layer.
fn preflight() -> Response {
    Response::new(Body::empty())
}

fn health(state: &AppState, request: &Request<Body>) -> Result<Response, ProxyError> {
    match request.uri().path() {
        "/" | "/health" => {
            let host = request
                .headers()
                .get(header::HOST)
                .and_then(|v| v.to_str().ok())
                .or_else(|| request.uri().authority().map(|a| a.as_str()));

            let body = HealthReport::new(&state.config, host)
                .to_json()
                .map_err(|e| ProxyError::Internal(e.to_string()))?;
            Ok(json_response(body))
        }
        _ => Err(ProxyError::NotFound),
    }
}

async fn forward(
    state: &AppState,
    request: Request<Body>,
    request_id: &str,
) -> Result<Response, ProxyError> {
    let start_time = Instant::now();
    let decision = route(&state.config, request.uri().query());

    let payload = axum::body::to_bytes(request.into_body(), state.config.max_body_bytes)
        .await
        .map_err(|e| ProxyError::Internal(format!("failed to read request body: {e}")))?;

    match CallSummary::inspect(&payload) {
        CallSummary::Method(rpc_method) => tracing::info!(
            request_id = %request_id,
            rpc_method = %rpc_method,
            network = %decision.requested,
            target = %decision.target_url,
            "Proxying RPC call"
        ),
        CallSummary::Batch(size) => tracing::info!(
            request_id = %request_id,
            batch_size = size,
            network = %decision.requested,
            target = %decision.target_url,
            "Proxying RPC batch"
        ),
        CallSummary::Unclassified => tracing::info!(
            request_id = %request_id,
            network = %decision.requested,
            "Proxying request"
        ),
    }

    let reply = state.upstream.forward(decision.target_url, payload).await?;

    if !reply.status.is_success() {
        tracing::warn!(
            request_id = %request_id,
            upstream_status = %reply.status,
            "Upstream returned non-success status, relaying body as 200"
        );
    }

    tracing::debug!(
        request_id = %request_id,
        network = %decision.network,
        bytes = reply.body.len(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Upstream replied"
    );

    Ok(json_response(reply.body))
}
