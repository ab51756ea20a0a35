//! HTML pages and static assets from the configured public directory.

use crate::routes::not_found;
use crate::state::ServerState;
use axum::handler::HandlerWithoutStateExt;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

/// Fixed page routes, each mapped to one document in the public directory.
pub const PAGES: [(&str, &str); 3] = [
    ("/", "index.html"),
    ("/animals", "animals.html"),
    ("/zookeepers", "zookeepers.html"),
];

/// Mount the fixed pages and fall back to files under `public_dir`.
///
/// Requests matching neither get the JSON 404 from [`not_found`].
pub fn serve_public(
    router: Router<Arc<ServerState>>,
    public_dir: &Path,
) -> Router<Arc<ServerState>> {
    let router = PAGES.iter().fold(router, |router, (route, file)| {
        router.route_service(route, ServeFile::new(public_dir.join(file)))
    });

    router.fallback_service(ServeDir::new(public_dir).not_found_service(not_found.into_service()))
}
