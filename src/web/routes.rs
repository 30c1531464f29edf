use axum::{
    routing::{get, post},
    Router,
};

use crate::web::handlers::{
    api::{api_not_found, health_check, list_presets, render_png_handler, render_svg_handler},
    static_files::serve_index,
};
use crate::web::server::ServerState;

pub fn create_routes(state: ServerState) -> Router {
    // API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/presets", get(list_presets))
        .route("/render", post(render_svg_handler))
        .route("/render/png", post(render_png_handler))
        .fallback(api_not_found)
        .with_state(state);

    // The generator page itself
    let static_routes = Router::new().fallback(serve_index);

    Router::new().nest("/api", api_routes).merge(static_routes)
}
