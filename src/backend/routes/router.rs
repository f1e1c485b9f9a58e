/**
 * Main Router Creation
 *
 * Assembles the API routes, uploaded media and the fallback, then applies
 * the middleware stack.
 *
 * # Layers
 *
 * Outermost first:
 * 1. `TraceLayer` - request/response logging through `tracing`
 * 2. `auth_middleware` - optional bearer token authentication
 */

use axum::{middleware, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    // Uploaded post images
    let router = router.nest_service("/media", ServeDir::new(&app_state.config.media_dir));

    // Fallback handler for 404
    let router = router.fallback(|| async { BackendError::not_found() });

    router
        .layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
