//! QR Studio - styled QR code generation with SVG/PNG export
//!
//! This crate turns text, Wi-Fi credentials or contact cards into styled
//! QR codes, rendered as inline SVG or rasterized PNG, either from the
//! command line or through a small web interface.

pub mod cli;
pub mod core;
pub mod payload;
pub mod render;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::{
    config::AppConfig,
    encoder::encode,
    error::{AppError, AppResult},
    models::{EccLevel, GradientKind, Logo, ModuleMatrix, ModuleShape, QrRequest, StyleOptions},
};

pub use crate::payload::{build_payload, ContactCard, WifiNetwork, WifiSecurity};

pub use crate::render::{
    raster::{render_png, render_raster},
    svg::render_svg,
    terminal::render_terminal,
};

pub use crate::web::{routes::create_routes, server::WebServer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
