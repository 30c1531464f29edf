pub mod app;
pub mod config;
pub mod encoder;
pub mod error;
pub mod models;
