use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::handlers::health::health_check;
use crate::schemas::AppState;

/// Create application router serving the dashboard bundle.
///
/// Unknown paths fall back to `index.html` so client-side routes such as
/// `/terms` resolve in the browser router.
pub fn create_router(state: AppState) -> Router {
    let bundle = ServeDir::new(&state.dist_dir).fallback(ServeFile::new(state.index_file()));
    let timeout = state.request_timeout;

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(bundle)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state)
}
