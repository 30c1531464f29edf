use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::models::{EccLevel, GradientKind, ModuleShape, StyleOptions};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    /// Default style applied when a request or CLI invocation leaves
    /// options unset.
    #[serde(default)]
    pub style: StyleOptions,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_false")]
    pub open_browser: bool,
}

fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_false() -> bool {
    false
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            open_browser: default_false(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("qrstudio.toml").required(false))
            .add_source(config::Environment::with_prefix("QRSTUDIO"));

        // Override with individual environment variables
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(host) = std::env::var("HOST") {
            builder = builder.set_override("server.host", host)?;
        }

        let settings = builder.build()?;
        let config: AppConfig = settings.try_deserialize()?;
        Ok(config)
    }

    pub fn save_example() -> Result<()> {
        let example_config = AppConfig::default();
        let toml_string = toml::to_string_pretty(&example_config)?;
        std::fs::write("qrstudio.example.toml", toml_string)?;
        Ok(())
    }

    pub fn from_toml(toml_content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_content)?;
        Ok(config)
    }
}

/// Built-in style presets, matching the choices offered in the web UI.
pub const PRESET_NAMES: [&str; 4] = ["default", "minimal", "colorful", "dark"];

pub fn preset(name: &str) -> Option<StyleOptions> {
    match name {
        "default" => Some(StyleOptions::default()),
        "minimal" => Some(StyleOptions {
            pixel_size: 300,
            foreground: "#2d3748".to_string(),
            background: "#ffffff".to_string(),
            border_width: 8,
            module_shape: ModuleShape::Rounded,
            gradient: GradientKind::None,
            error_correction: EccLevel::Low,
            ..StyleOptions::default()
        }),
        "colorful" => Some(StyleOptions {
            pixel_size: 500,
            foreground: "#3b82f6".to_string(),
            background: "#f0f9ff".to_string(),
            border_width: 6,
            module_shape: ModuleShape::Rounded,
            gradient: GradientKind::Linear,
            gradient_color: "#ef4444".to_string(),
            error_correction: EccLevel::Medium,
            ..StyleOptions::default()
        }),
        "dark" => Some(StyleOptions {
            pixel_size: 400,
            foreground: "#ffffff".to_string(),
            background: "#1a202c".to_string(),
            border_width: 4,
            module_shape: ModuleShape::Square,
            gradient: GradientKind::None,
            error_correction: EccLevel::High,
            ..StyleOptions::default()
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.ui.open_browser);
        assert_eq!(config.style, StyleOptions::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        assert!(toml_string.contains("[server]"));
        assert!(toml_string.contains("port = 8080"));
        assert!(toml_string.contains("[style]"));
        assert!(toml_string.contains("pixel_size = 400"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_content = r##"
            [server]
            port = 9090
            host = "127.0.0.1"

            [style]
            pixel_size = 256
            foreground = "#2d3748"
            module_shape = "rounded"
            error_correction = "LOW"

            [ui]
            open_browser = true
        "##;

        let config = AppConfig::from_toml(toml_content).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.style.pixel_size, 256);
        assert_eq!(config.style.foreground, "#2d3748");
        assert_eq!(config.style.module_shape, ModuleShape::Rounded);
        assert_eq!(config.style.error_correction, EccLevel::Low);
        assert!(config.ui.open_browser);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml_content = r#"
            [server]
            port = 3000
        "#;

        let config = AppConfig::from_toml(toml_content).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0"); // Default value
        assert_eq!(config.style.border_width, 4); // Default value
        assert!(!config.ui.open_browser); // Default value
    }

    #[test]
    fn test_save_example_config() {
        let temp_dir = TempDir::new().unwrap();
        let original_dir = env::current_dir().unwrap();

        env::set_current_dir(&temp_dir).unwrap();
        AppConfig::save_example().unwrap();

        let content = std::fs::read_to_string("qrstudio.example.toml").unwrap();
        assert!(content.contains("[server]"));
        assert!(content.contains("port = 8080"));

        env::set_current_dir(original_dir).unwrap();
    }

    #[test]
    fn test_invalid_toml() {
        let invalid_toml = "invalid toml content [[[";
        let result = AppConfig::from_toml(invalid_toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_all_presets_resolve() {
        for name in PRESET_NAMES {
            assert!(preset(name).is_some(), "missing preset {}", name);
        }
        assert!(preset("neon").is_none());
    }

    #[test]
    fn test_preset_values() {
        let minimal = preset("minimal").unwrap();
        assert_eq!(minimal.pixel_size, 300);
        assert_eq!(minimal.border_width, 8);
        assert_eq!(minimal.module_shape, ModuleShape::Rounded);
        assert_eq!(minimal.error_correction, EccLevel::Low);

        let colorful = preset("colorful").unwrap();
        assert_eq!(colorful.gradient, GradientKind::Linear);
        assert_eq!(colorful.gradient_color, "#ef4444");
        assert_eq!(colorful.background, "#f0f9ff");

        let dark = preset("dark").unwrap();
        assert_eq!(dark.foreground, "#ffffff");
        assert_eq!(dark.background, "#1a202c");
        assert_eq!(dark.error_correction, EccLevel::High);
    }
}
