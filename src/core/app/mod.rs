use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use crate::core::models::StyleOptions;
use crate::web::server::WebServer;

pub struct App {
    host: String,
    port: u16,
    open_browser: bool,
    defaults: StyleOptions,
}

impl App {
    pub fn new(host: String, port: u16, open_browser: bool, defaults: StyleOptions) -> Self {
        Self {
            host,
            port,
            open_browser,
            defaults,
        }
    }

    fn url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "localhost"
        } else {
            &self.host
        };
        format!("http://{}:{}", host, self.port)
    }

    pub async fn run(&self) -> Result<()> {
        info!("QR generator available at: {}", self.url());

        // Open browser if requested
        if self.open_browser {
            if let Err(e) = open::that(self.url()) {
                error!("Failed to open browser: {}", e);
            }
        }

        // Start the web server
        let addr: SocketAddr = format!("{}:{}", self.host, self.port).parse()?;
        let server = WebServer::new(addr, self.defaults.clone());

        // Setup graceful shutdown
        let shutdown_signal = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
            info!("Received Ctrl+C, shutting down gracefully...");
        };

        // Run the server with graceful shutdown
        tokio::select! {
            result = server.run() => {
                if let Err(e) = result {
                    error!("Server error: {}", e);
                }
            }
            _ = shutdown_signal => {
                info!("Shutdown signal received");
            }
        }

        info!("Shutdown complete");
        Ok(())
    }
}
