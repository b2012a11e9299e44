//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all shape handler
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener
//! - Resolve and negotiate every request
//! - Swap the vocabulary on config reload

use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, Uri},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::{ResolverConfig, ShapeConfig};
use crate::error::BadRequest;
use crate::http::request::{header_value, request_id, MakeRequestUuid};
use crate::http::response::ShapeResponse;
use crate::lifecycle::ShutdownListener;
use crate::negotiation::negotiate;
use crate::observability::metrics;
use crate::routing::{resolve, KnownResourceNames};

/// Everything a request needs from configuration, swapped as one unit.
#[derive(Debug)]
struct ResolverSnapshot {
    context_path: String,
    known: KnownResourceNames,
}

impl From<&ResolverConfig> for ResolverSnapshot {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            context_path: config.context_path.clone(),
            known: config.known_resource_names(),
        }
    }
}

/// Handle for replacing the vocabulary of a running server.
#[derive(Debug, Clone)]
pub struct VocabularyHandle {
    current: Arc<ArcSwap<ResolverSnapshot>>,
}

impl VocabularyHandle {
    /// Atomically install a new context path and vocabulary.
    /// In-flight requests finish against the snapshot they loaded.
    pub fn replace(&self, config: &ResolverConfig) {
        let snapshot = ResolverSnapshot::from(config);
        if snapshot.known.is_empty() {
            tracing::warn!("Vocabulary is empty; only single-segment paths will resolve");
        }
        tracing::info!(
            context_path = %snapshot.context_path,
            resource_names = snapshot.known.len(),
            "Vocabulary replaced"
        );
        self.current.store(Arc::new(snapshot));
    }

    pub fn known_resource_names(&self) -> KnownResourceNames {
        self.current.load().known.clone()
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
struct AppState {
    resolver: Arc<ArcSwap<ResolverSnapshot>>,
}

/// HTTP server describing the shape of each request it receives.
pub struct HttpServer {
    router: Router,
    config: ShapeConfig,
    vocabulary: VocabularyHandle,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ShapeConfig) -> Self {
        let resolver = Arc::new(ArcSwap::from_pointee(ResolverSnapshot::from(&config.resolver)));
        let vocabulary = VocabularyHandle {
            current: resolver.clone(),
        };
        let router = Self::build_router(AppState { resolver });
        Self {
            router,
            config,
            vocabulary,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request.headers()),
                )
            }))
            .layer(PropagateRequestIdLayer::x_request_id());

        Router::new()
            .route("/", any(shape_handler))
            .route("/{*path}", any(shape_handler))
            .with_state(state)
            .layer(middleware)
    }

    /// Router with all layers, for serving or driving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn vocabulary(&self) -> VocabularyHandle {
        self.vocabulary.clone()
    }

    /// Get a reference to the config the server was built with.
    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(self, listener: TcpListener, shutdown: ShutdownListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.recv())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Resolve the path, negotiate formats, and describe the result.
async fn shape_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<ShapeResponse, BadRequest> {
    let snapshot = state.resolver.load();
    let request_id = request_id(&headers);

    let parsed = resolve(uri.path(), uri.query(), &snapshot.context_path, &snapshot.known)
        .inspect_err(|e| {
            tracing::debug!(request_id = %request_id, error = %e, "Path resolution failed");
            metrics::record_resolution(metrics::BAD_REQUEST);
        })?;

    let accept = header_value(&headers, header::ACCEPT);
    let content_type = header_value(&headers, header::CONTENT_TYPE);
    let negotiated = negotiate(parsed.extension_format(), accept.as_deref(), content_type.as_deref())
        .inspect_err(|e| {
            tracing::debug!(request_id = %request_id, error = %e, "Format negotiation failed");
            metrics::record_resolution(metrics::BAD_REQUEST);
        })?;

    metrics::record_resolution(metrics::RESOLVED);
    metrics::record_negotiated(&negotiated);
    tracing::debug!(
        request_id = %request_id,
        resources = parsed.resource_map().len(),
        response_format = %negotiated.response,
        request_format = %negotiated.request,
        "Request shape resolved"
    );

    Ok(ShapeResponse::new(parsed, negotiated))
}
