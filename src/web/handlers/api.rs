use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error};

use crate::core::encoder::encode;
use crate::core::error::AppError;
use crate::core::models::{Logo, ModuleMatrix, QrRequest, StyleOptions};
use crate::payload::build_payload;
use crate::render::raster::render_png;
use crate::render::svg::render_svg;
use crate::web::server::ServerState;

/// Error responses carry a user-facing message; the UI shows it inline.
pub type ApiError = (StatusCode, Json<serde_json::Value>);

fn unprocessable(message: String) -> ApiError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": message })),
    )
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub svg: String,
    /// Symbol side in modules.
    pub modules: usize,
    /// Canvas side in modules including the quiet zone.
    pub canvas: usize,
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "qrstudio"
    }))
}

pub async fn list_presets() -> Json<serde_json::Value> {
    let presets: serde_json::Map<String, serde_json::Value> = crate::core::config::PRESET_NAMES
        .iter()
        .filter_map(|name| {
            crate::core::config::preset(name)
                .map(|style| ((*name).to_string(), json!(style)))
        })
        .collect();
    Json(serde_json::Value::Object(presets))
}

/// Shared front half of both render endpoints: payload text, effective
/// style, optional logo, encoded matrix.
fn prepare(
    req: QrRequest,
    defaults: &StyleOptions,
) -> Result<(ModuleMatrix, StyleOptions, Option<Logo>), ApiError> {
    let text = build_payload(&req.payload);
    if text.is_empty() {
        return Err(unprocessable("nothing to encode".to_string()));
    }

    let style = req.style.unwrap_or_else(|| defaults.clone());

    let logo = match req.logo {
        Some(ref url) => Some(Logo::from_data_url(url).map_err(|e| {
            error!("rejected logo upload: {}", e);
            unprocessable(e.to_string())
        })?),
        None => None,
    };

    let matrix = encode(&text, style.error_correction).map_err(|e| {
        debug!("encoding failed: {}", e);
        unprocessable(match e {
            AppError::Encoding(_) => format!(
                "payload too long for error-correction level {}",
                style.error_correction
            ),
            other => other.to_string(),
        })
    })?;

    Ok((matrix, style, logo))
}

pub async fn render_svg_handler(
    State(state): State<ServerState>,
    Json(req): Json<QrRequest>,
) -> Result<Json<RenderResponse>, ApiError> {
    let (matrix, style, logo) = prepare(req, &state.defaults)?;
    let canvas = matrix.size() + 2 * style.border_width as usize;
    let svg = render_svg(&matrix, &style, logo.as_ref());

    debug!("rendered {}x{} symbol as SVG", matrix.size(), matrix.size());
    Ok(Json(RenderResponse {
        svg,
        modules: matrix.size(),
        canvas,
    }))
}

pub async fn render_png_handler(
    State(state): State<ServerState>,
    Json(req): Json<QrRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (matrix, style, logo) = prepare(req, &state.defaults)?;
    let bytes = render_png(&matrix, &style, logo.as_ref()).map_err(|e| {
        error!("raster export failed: {}", e);
        unprocessable(e.to_string())
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(
        axum::http::header::CONTENT_TYPE,
        axum::http::HeaderValue::from_static("image/png"),
    );
    Ok((headers, bytes))
}

/// Handle 404 errors for API routes
pub async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "API endpoint not found" })),
    )
}
