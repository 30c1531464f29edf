use anyhow::{anyhow, bail, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::core::app::App;
use crate::core::config::{preset, AppConfig, PRESET_NAMES};
use crate::core::encoder::encode;
use crate::core::models::{EccLevel, GradientKind, Logo, ModuleShape, StyleOptions};
use crate::payload::{ContactCard, WifiNetwork, WifiSecurity};
use crate::render::raster::render_png;
use crate::render::svg::render_svg;
use crate::render::terminal::render_terminal;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode free text or a URL
    Text {
        text: String,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Encode Wi-Fi network credentials
    Wifi {
        /// Network name
        #[arg(long)]
        ssid: String,

        #[arg(long, default_value = "")]
        password: String,

        /// Security type: WPA, WEP or nopass
        #[arg(long, default_value = "WPA")]
        security: WifiSecurity,

        /// Mark the network as hidden
        #[arg(long)]
        hidden: bool,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Encode a contact card (vCard 3.0)
    Contact {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        company: String,

        #[arg(long, default_value = "")]
        website: String,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Run the web interface
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Open web browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Generate example configuration file
    GenerateConfig,
}

#[derive(Args, Debug, Default)]
struct StyleArgs {
    /// Apply a named style preset (default, minimal, colorful, dark)
    #[arg(long)]
    preset: Option<String>,

    /// Output side length in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Foreground color as #rrggbb
    #[arg(long)]
    foreground: Option<String>,

    /// Background color as #rrggbb
    #[arg(long)]
    background: Option<String>,

    /// Quiet-zone width in modules
    #[arg(long)]
    border: Option<u32>,

    /// Module shape: square, rounded or circle
    #[arg(long)]
    shape: Option<ModuleShape>,

    /// Gradient: none, linear or radial
    #[arg(long)]
    gradient: Option<GradientKind>,

    /// Second gradient color as #rrggbb
    #[arg(long)]
    gradient_color: Option<String>,

    /// Error-correction level: low, medium, quartile or high
    #[arg(long)]
    ecc: Option<EccLevel>,

    /// Image file to overlay centered on the code
    #[arg(long)]
    logo: Option<PathBuf>,
}

impl StyleArgs {
    /// Layering: config defaults, then preset, then individual flags.
    fn resolve(&self, config_style: StyleOptions) -> Result<(StyleOptions, Option<Logo>)> {
        let mut style = match &self.preset {
            Some(name) => preset(name).ok_or_else(|| {
                anyhow!("unknown preset '{}' (available: {})", name, PRESET_NAMES.join(", "))
            })?,
            None => config_style,
        };

        if let Some(size) = self.size {
            style.pixel_size = size;
        }
        if let Some(ref foreground) = self.foreground {
            style.foreground = foreground.clone();
        }
        if let Some(ref background) = self.background {
            style.background = background.clone();
        }
        if let Some(border) = self.border {
            style.border_width = border;
        }
        if let Some(shape) = self.shape {
            style.module_shape = shape;
        }
        if let Some(gradient) = self.gradient {
            style.gradient = gradient;
        }
        if let Some(ref gradient_color) = self.gradient_color {
            style.gradient_color = gradient_color.clone();
        }
        if let Some(ecc) = self.ecc {
            style.error_correction = ecc;
        }

        let logo = self.logo.as_deref().map(Logo::from_path).transpose()?;
        Ok((style, logo))
    }
}

#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Output file; format chosen by extension (.svg or .png).
    /// Without it the SVG markup goes to stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print a unicode preview to the terminal
    #[arg(long)]
    terminal: bool,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Command::GenerateConfig => {
                AppConfig::save_example()?;
                println!("Generated example configuration file: qrstudio.example.toml");
                Ok(())
            }

            Command::Serve { port, host, open } => {
                let mut config = load_config();
                if let Some(port) = port {
                    config.server.port = *port;
                }
                if let Some(host) = host {
                    config.server.host = host.clone();
                }
                if *open {
                    config.ui.open_browser = true;
                }

                let app = App::new(
                    config.server.host,
                    config.server.port,
                    config.ui.open_browser,
                    config.style,
                );
                app.run().await
            }

            Command::Text { text, style, output } => {
                generate(text.trim().to_string(), style, output)
            }

            Command::Wifi {
                ssid,
                password,
                security,
                hidden,
                style,
                output,
            } => {
                let network = WifiNetwork {
                    ssid: ssid.clone(),
                    password: password.clone(),
                    security: *security,
                    hidden: *hidden,
                };
                generate(network.to_payload(), style, output)
            }

            Command::Contact {
                name,
                phone,
                email,
                company,
                website,
                style,
                output,
            } => {
                let card = ContactCard {
                    name: name.clone(),
                    phone: phone.clone(),
                    email: email.clone(),
                    company: company.clone(),
                    website: website.clone(),
                };
                generate(card.to_payload(), style, output)
            }
        }
    }
}

fn load_config() -> AppConfig {
    AppConfig::load().unwrap_or_else(|e| {
        info!("Using default configuration ({})", e);
        AppConfig::default()
    })
}

fn generate(payload: String, style_args: &StyleArgs, output: &OutputArgs) -> Result<()> {
    if payload.is_empty() {
        bail!("nothing to encode");
    }

    let config = load_config();
    let (style, logo) = style_args.resolve(config.style)?;
    let matrix = encode(&payload, style.error_correction)?;

    if output.terminal {
        println!("{}", render_terminal(&matrix, style.border_width as usize));
    }

    match &output.out {
        Some(path) => {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_ascii_lowercase());
            match ext.as_deref() {
                Some("png") => std::fs::write(path, render_png(&matrix, &style, logo.as_ref())?)?,
                Some("svg") => std::fs::write(path, render_svg(&matrix, &style, logo.as_ref()))?,
                _ => bail!("unsupported output extension (use .svg or .png)"),
            }
            info!("Wrote {}", path.display());
        }
        None if !output.terminal => {
            println!("{}", render_svg(&matrix, &style, logo.as_ref()));
        }
        None => {}
    }

    Ok(())
}
