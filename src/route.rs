//! Route definitions for the link checker API

use axum::routing::post;
use axum::Router;

use crate::handler::unshorten;
use crate::service::AppState;

/// Creates the Axum router
///
/// # Route Definitions
///
/// - `POST /api/unshorten` - Expands a link and returns its risk assessment
///
/// # Example Usage
///
/// ```no_run
/// # use std::time::Duration;
/// # use unshorten::resolver::RedirectResolver;
/// # use unshorten::route::create_app;
/// # use unshorten::service::AppState;
/// let resolver = RedirectResolver::new(Duration::from_secs(10)).unwrap();
/// let app = create_app(AppState { resolver });
/// // axum::serve(listener, app).await.unwrap();
/// ```
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/api/unshorten", post(unshorten))
        .with_state(state)
}
