use qrcode::{Color, EcLevel, QrCode};
use tracing::debug;

use crate::core::error::{AppError, AppResult};
use crate::core::models::{EccLevel, ModuleMatrix};

impl From<EccLevel> for EcLevel {
    fn from(level: EccLevel) -> Self {
        match level {
            EccLevel::Low => EcLevel::L,
            EccLevel::Medium => EcLevel::M,
            EccLevel::Quartile => EcLevel::Q,
            EccLevel::High => EcLevel::H,
        }
    }
}

/// Encodes UTF-8 text into a module matrix at the requested
/// error-correction level.
///
/// Symbol construction (segmentation, Reed-Solomon, masking, placement) is
/// owned entirely by the `qrcode` crate; this is the only place the crate
/// touches it for encoding. Fails when the payload exceeds capacity for the
/// level, or when the payload is empty.
pub fn encode(text: &str, level: EccLevel) -> AppResult<ModuleMatrix> {
    if text.is_empty() {
        return Err(AppError::EmptyPayload(
            "refusing to encode an empty payload".to_string(),
        ));
    }

    let code = QrCode::with_error_correction_level(text.as_bytes(), level.into())?;
    let size = code.width();
    let cells: Vec<bool> = code
        .to_colors()
        .into_iter()
        .map(|c| c == Color::Dark)
        .collect();

    debug!(
        "encoded {} bytes at {} into a {}x{} symbol",
        text.len(),
        level,
        size,
        size
    );
    ModuleMatrix::new(size, cells)
}
