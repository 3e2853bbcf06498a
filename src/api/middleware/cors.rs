//! CORS middleware configuration.

use tower_http::cors::CorsLayer;

/// Create a CORS layer with permissive settings for development.
///
/// The canvas frontend is normally served from a separate dev server, so all
/// origins, methods, and headers are allowed. Production deployments should
/// restrict this.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
