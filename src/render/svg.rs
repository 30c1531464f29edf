//! The SVG renderer: a pure mapping from (matrix, style, logo) to markup.
//!
//! Output is deterministic apart from the gradient id, which is unique per
//! call so multiple rendered images can coexist in one document.

use uuid::Uuid;

use crate::core::models::{GradientKind, Logo, ModuleMatrix, ModuleShape, StyleOptions};

/// Side of the logo clear zone in modules for a symbol of side `n`.
pub fn logo_zone_side(n: usize) -> usize {
    4.max(n / 5)
}

/// Renders the matrix as inline SVG.
///
/// The coordinate space is `total x total` user units where
/// `total = N + 2 * border_width`, scaled to `pixel_size` physical pixels.
/// Light modules emit nothing; adjacent dark modules are never merged.
pub fn render_svg(matrix: &ModuleMatrix, style: &StyleOptions, logo: Option<&Logo>) -> String {
    let n = matrix.size();
    let border = style.border_width as usize;
    let total = n + 2 * border;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {total} {total}">"#,
        size = style.pixel_size,
        total = total,
    );

    svg.push_str(&format!(
        r#"<rect width="{total}" height="{total}" fill="{bg}"/>"#,
        total = total,
        bg = style.background,
    ));

    // When a gradient is requested, module fills reference it instead of the
    // flat foreground color.
    let fill = match style.gradient {
        GradientKind::None => style.foreground.clone(),
        kind => {
            let id = format!("gradient-{}", Uuid::new_v4().simple());
            svg.push_str("<defs>");
            match kind {
                GradientKind::Linear => {
                    svg.push_str(&format!(
                        r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="100%">"#
                    ));
                }
                GradientKind::Radial => {
                    svg.push_str(&format!(
                        r#"<radialGradient id="{id}" cx="50%" cy="50%" r="50%">"#
                    ));
                }
                GradientKind::None => unreachable!(),
            }
            svg.push_str(&format!(
                r#"<stop offset="0%" style="stop-color:{};stop-opacity:1"/>"#,
                style.foreground
            ));
            svg.push_str(&format!(
                r#"<stop offset="100%" style="stop-color:{};stop-opacity:1"/>"#,
                style.gradient_color
            ));
            svg.push_str(match kind {
                GradientKind::Linear => "</linearGradient>",
                _ => "</radialGradient>",
            });
            svg.push_str("</defs>");
            format!("url(#{})", id)
        }
    };

    for y in 0..n {
        for x in 0..n {
            if !matrix.get(x, y) {
                continue;
            }
            let cx = x + border;
            let cy = y + border;
            match style.module_shape {
                ModuleShape::Circle => {
                    svg.push_str(&format!(
                        r#"<circle cx="{}" cy="{}" r="0.4" fill="{}"/>"#,
                        cx as f64 + 0.5,
                        cy as f64 + 0.5,
                        fill,
                    ));
                }
                ModuleShape::Rounded => {
                    svg.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="1" height="1" fill="{}" rx="0.2" ry="0.2"/>"#,
                        cx, cy, fill,
                    ));
                }
                ModuleShape::Square => {
                    svg.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="1" height="1" fill="{}"/>"#,
                        cx, cy, fill,
                    ));
                }
            }
        }
    }

    // Logo overlay: a background plate one unit larger on each side, then
    // the image itself. Covered modules are not checked for recoverability;
    // error-correction headroom is the caller's problem.
    if let Some(logo) = logo {
        let zone = logo_zone_side(n) as f64;
        let offset = (total as f64 - zone) / 2.0;
        svg.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" rx="2" ry="2"/>"#,
            offset - 1.0,
            offset - 1.0,
            zone + 2.0,
            zone + 2.0,
            style.background,
        ));
        svg.push_str(&format!(
            r#"<image x="{}" y="{}" width="{}" height="{}" href="{}" preserveAspectRatio="xMidYMid meet"/>"#,
            offset,
            offset,
            zone,
            zone,
            logo.to_data_url(),
        ));
    }

    svg.push_str("</svg>");
    svg
}
