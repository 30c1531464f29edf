use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::core::error::{AppError, AppResult};
use crate::payload::{ContactCard, WifiNetwork};

/// A decoded QR symbol: a square grid of dark/light modules.
///
/// The matrix is immutable once built; the encoder decides the side length
/// from the payload and error-correction level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl ModuleMatrix {
    pub fn new(size: usize, cells: Vec<bool>) -> AppResult<Self> {
        if cells.len() != size * size {
            return Err(AppError::Encoding(format!(
                "matrix cell count {} does not match side {}",
                cells.len(),
                size
            )));
        }
        Ok(Self { size, cells })
    }

    /// Side length in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at (x, y) is dark. Out-of-range lookups are light.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        self.cells[y * self.size + x]
    }

    pub fn dark_count(&self) -> usize {
        self.cells.iter().filter(|&&dark| dark).count()
    }
}

/// Error-correction level, ordered from least to most redundancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EccLevel {
    Low,
    Medium,
    Quartile,
    High,
}

impl Default for EccLevel {
    fn default() -> Self {
        EccLevel::Medium
    }
}

impl FromStr for EccLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" | "l" => Ok(EccLevel::Low),
            "medium" | "m" => Ok(EccLevel::Medium),
            "quartile" | "q" => Ok(EccLevel::Quartile),
            "high" | "h" => Ok(EccLevel::High),
            other => Err(AppError::Unknown(format!(
                "unknown error-correction level '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for EccLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EccLevel::Low => "LOW",
            EccLevel::Medium => "MEDIUM",
            EccLevel::Quartile => "QUARTILE",
            EccLevel::High => "HIGH",
        };
        write!(f, "{}", name)
    }
}

/// How each dark module is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleShape {
    Square,
    Rounded,
    Circle,
}

impl Default for ModuleShape {
    fn default() -> Self {
        ModuleShape::Square
    }
}

impl FromStr for ModuleShape {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "square" => Ok(ModuleShape::Square),
            "rounded" => Ok(ModuleShape::Rounded),
            "circle" => Ok(ModuleShape::Circle),
            other => Err(AppError::Unknown(format!(
                "unknown module shape '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    None,
    Linear,
    Radial,
}

impl Default for GradientKind {
    fn default() -> Self {
        GradientKind::None
    }
}

impl FromStr for GradientKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(GradientKind::None),
            "linear" => Ok(GradientKind::Linear),
            "radial" => Ok(GradientKind::Radial),
            other => Err(AppError::Unknown(format!(
                "unknown gradient kind '{}'",
                other
            ))),
        }
    }
}

/// Rendering options. Plain values only; a fresh set is assembled per render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleOptions {
    /// Output side length in physical pixels.
    #[serde(default = "default_pixel_size")]
    pub pixel_size: u32,
    #[serde(default = "default_foreground")]
    pub foreground: String,
    #[serde(default = "default_background")]
    pub background: String,
    /// Quiet-zone width in modules, applied on all four sides.
    #[serde(default = "default_border_width")]
    pub border_width: u32,
    #[serde(default)]
    pub module_shape: ModuleShape,
    #[serde(default)]
    pub gradient: GradientKind,
    /// Second gradient stop; ignored when `gradient` is none.
    #[serde(default = "default_gradient_color")]
    pub gradient_color: String,
    #[serde(default)]
    pub error_correction: EccLevel,
}

fn default_pixel_size() -> u32 {
    400
}
fn default_foreground() -> String {
    "#000000".to_string()
}
fn default_background() -> String {
    "#ffffff".to_string()
}
fn default_border_width() -> u32 {
    4
}
fn default_gradient_color() -> String {
    "#ef4444".to_string()
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            pixel_size: default_pixel_size(),
            foreground: default_foreground(),
            background: default_background(),
            border_width: default_border_width(),
            module_shape: ModuleShape::default(),
            gradient: GradientKind::default(),
            gradient_color: default_gradient_color(),
            error_correction: EccLevel::default(),
        }
    }
}

/// An optional logo drawn centered over the finished symbol.
///
/// The overlay is purely additive: no check is made that the modules it
/// covers are recoverable, so callers should pick a high enough
/// error-correction level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl Logo {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let bytes = std::fs::read(path)?;
        let mime = mime_guess::from_path(path).first_or_octet_stream().to_string();
        Ok(Self { bytes, mime })
    }

    /// Parses a `data:<mime>;base64,<payload>` URL, the form file pickers
    /// hand to the web UI.
    pub fn from_data_url(url: &str) -> AppResult<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| AppError::Logo("not a data URL".to_string()))?;
        let (mime, encoded) = rest
            .split_once(";base64,")
            .ok_or_else(|| AppError::Logo("missing base64 payload".to_string()))?;
        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| AppError::Logo(format!("bad base64 payload: {}", e)))?;
        Ok(Self {
            bytes,
            mime: mime.to_string(),
        })
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, BASE64.encode(&self.bytes))
    }
}

/// What to encode: free text or one of the structured payload kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PayloadSpec {
    Text { text: String },
    Wifi(WifiNetwork),
    Contact(ContactCard),
}

/// Wire model accepted by the rendering endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrRequest {
    pub payload: PayloadSpec,
    /// Omitted fields fall back to the server's configured defaults.
    #[serde(default)]
    pub style: Option<StyleOptions>,
    /// Logo as a data URL, if any.
    #[serde(default)]
    pub logo: Option<String>,
}
