//! Raster export: draws the styled symbol into an opaque RGBA buffer and
//! serializes it as PNG. Mirrors the SVG renderer's geometry so both outputs
//! agree pixel-for-pixel on module placement.

use std::io::Cursor;

use image::{imageops, ImageOutputFormat, Rgba, RgbaImage};

use crate::core::error::{AppError, AppResult};
use crate::core::models::{GradientKind, Logo, ModuleMatrix, ModuleShape, StyleOptions};
use crate::render::svg::logo_zone_side;

/// Parses a `#rrggbb` color into an opaque pixel.
pub fn parse_hex_color(color: &str) -> AppResult<Rgba<u8>> {
    let hex = color
        .strip_prefix('#')
        .ok_or_else(|| AppError::InvalidColor(color.to_string()))?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::InvalidColor(color.to_string()));
    }
    let channel = |range| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| AppError::InvalidColor(color.to_string()))
    };
    Ok(Rgba([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255]))
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
}

fn lerp(a: Rgba<u8>, b: Rgba<u8>, t: f64) -> Rgba<u8> {
    Rgba([
        lerp_channel(a[0], b[0], t),
        lerp_channel(a[1], b[1], t),
        lerp_channel(a[2], b[2], t),
        255,
    ])
}

/// Foreground color at an output pixel, with the gradient evaluated in
/// pixel space: linear runs along the top-left to bottom-right diagonal,
/// radial out from the center to half the canvas side.
fn module_color(style_fg: Rgba<u8>, gradient_to: Rgba<u8>, kind: GradientKind, x: u32, y: u32, side: u32) -> Rgba<u8> {
    match kind {
        GradientKind::None => style_fg,
        GradientKind::Linear => {
            let span = (2 * side.saturating_sub(1)).max(1) as f64;
            lerp(style_fg, gradient_to, (x + y) as f64 / span)
        }
        GradientKind::Radial => {
            let center = (side.saturating_sub(1)) as f64 / 2.0;
            let dx = x as f64 - center;
            let dy = y as f64 - center;
            let t = ((dx * dx + dy * dy).sqrt() / (side as f64 / 2.0)).min(1.0);
            lerp(style_fg, gradient_to, t)
        }
    }
}

/// Whether the point (fx, fy), in cell-local coordinates [0, 1), falls
/// inside the module shape.
fn shape_contains(shape: ModuleShape, fx: f64, fy: f64) -> bool {
    match shape {
        ModuleShape::Square => true,
        ModuleShape::Rounded => {
            // Rounded rect with 0.2-unit corner radius
            let dx = (0.2 - fx).max(fx - 0.8).max(0.0);
            let dy = (0.2 - fy).max(fy - 0.8).max(0.0);
            dx * dx + dy * dy <= 0.2 * 0.2
        }
        ModuleShape::Circle => {
            let dx = fx - 0.5;
            let dy = fy - 0.5;
            dx * dx + dy * dy <= 0.4 * 0.4
        }
    }
}

/// Rasterizes the symbol into a `pixel_size` x `pixel_size` opaque image.
pub fn render_raster(
    matrix: &ModuleMatrix,
    style: &StyleOptions,
    logo: Option<&Logo>,
) -> AppResult<RgbaImage> {
    let n = matrix.size();
    let border = style.border_width as usize;
    let total = (n + 2 * border) as f64;
    let side = style.pixel_size.max(1);
    let scale = side as f64 / total;

    let background = parse_hex_color(&style.background)?;
    let foreground = parse_hex_color(&style.foreground)?;
    let gradient_to = parse_hex_color(&style.gradient_color)?;

    let mut img = RgbaImage::from_pixel(side, side, background);

    for py in 0..side {
        for px in 0..side {
            // Pixel center in canvas units
            let u = (px as f64 + 0.5) / scale - border as f64;
            let v = (py as f64 + 0.5) / scale - border as f64;
            if u < 0.0 || v < 0.0 {
                continue;
            }
            let (mx, my) = (u.floor() as usize, v.floor() as usize);
            if mx >= n || my >= n || !matrix.get(mx, my) {
                continue;
            }
            if shape_contains(style.module_shape, u.fract(), v.fract()) {
                let color = module_color(foreground, gradient_to, style.gradient, px, py, side);
                img.put_pixel(px, py, color);
            }
        }
    }

    if let Some(logo) = logo {
        draw_logo(&mut img, logo, n, total, scale, background)?;
    }

    Ok(img)
}

/// Renders straight to PNG bytes (square, opaque, `pixel_size` per side).
pub fn render_png(
    matrix: &ModuleMatrix,
    style: &StyleOptions,
    logo: Option<&Logo>,
) -> AppResult<Vec<u8>> {
    let img = render_raster(matrix, style, logo)?;
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageOutputFormat::Png)?;
    Ok(cursor.into_inner())
}

fn draw_logo(
    img: &mut RgbaImage,
    logo: &Logo,
    n: usize,
    total: f64,
    scale: f64,
    background: Rgba<u8>,
) -> AppResult<()> {
    let zone = logo_zone_side(n) as f64;
    let plate = zone + 2.0;
    let plate_origin = (total - plate) / 2.0 * scale;
    let plate_side = plate * scale;
    let corner = 2.0 * scale;

    // Background plate with 2-unit rounded corners
    let x0 = plate_origin.max(0.0) as u32;
    let y0 = plate_origin.max(0.0) as u32;
    let x1 = ((plate_origin + plate_side) as u32).min(img.width());
    let y1 = ((plate_origin + plate_side) as u32).min(img.height());
    for py in y0..y1 {
        for px in x0..x1 {
            let lx = px as f64 + 0.5 - plate_origin;
            let ly = py as f64 + 0.5 - plate_origin;
            let dx = (corner - lx).max(lx - (plate_side - corner)).max(0.0);
            let dy = (corner - ly).max(ly - (plate_side - corner)).max(0.0);
            if dx * dx + dy * dy <= corner * corner {
                img.put_pixel(px, py, background);
            }
        }
    }

    // Logo scaled to fit the clear zone, aspect ratio preserved
    let decoded = image::load_from_memory(&logo.bytes)?;
    let zone_px = (zone * scale).round().max(1.0) as u32;
    let scaled = decoded.resize(zone_px, zone_px, imageops::FilterType::Lanczos3);
    let offset_x = (img.width().saturating_sub(scaled.width())) / 2;
    let offset_y = (img.height().saturating_sub(scaled.height())) / 2;
    imageops::overlay(img, &scaled.to_rgba8(), offset_x as i64, offset_y as i64);

    Ok(())
}
