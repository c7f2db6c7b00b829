//! HTTP surface of the ordering assistant

use crate::error::panic_response;
use crate::session::state::SharedState;
use axum::{body::Body, extract::Request, middleware::Next, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

/// Builds the full API: session routes behind the shared middleware stack
pub fn create_app_router(state: SharedState) -> Router {
    with_middleware(crate::session::routes(), state)
}

/// Wraps `routes` in panic recovery, request logging and CORS, then binds the state.
pub fn with_middleware(routes: Router<SharedState>, state: SharedState) -> Router {
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        tracing::info!(%method, %uri, "request");
        let res = next.run(req).await;
        if !res.status().is_success() {
            tracing::warn!(%method, %uri, status = %res.status(), "request failed");
        }
        res
    });

    // Browser clients of the chat may live on any origin
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Innermost, so a panicking turn still shows up in the request log as a 500
    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}
