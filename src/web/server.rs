use anyhow::Result;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::core::models::StyleOptions;
use crate::web::routes::create_routes;

/// Shared handler state: the style applied when a request omits options.
#[derive(Debug, Clone)]
pub struct ServerState {
    pub defaults: StyleOptions,
}

pub struct WebServer {
    addr: SocketAddr,
    state: ServerState,
}

impl WebServer {
    pub fn new(addr: SocketAddr, defaults: StyleOptions) -> Self {
        Self {
            addr,
            state: ServerState { defaults },
        }
    }

    pub async fn run(&self) -> Result<()> {
        // Create CORS layer
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        // Create the application router
        let app = create_routes(self.state.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors);

        // Start the server
        info!("Starting web server on {}", self.addr);
        let listener = TcpListener::bind(self.addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
