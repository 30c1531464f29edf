use crate::core::models::ModuleMatrix;

/// Renders the symbol as unicode half-blocks for a quick terminal preview.
///
/// Colors are inverted (light modules print as blocks) so the code stays
/// scannable on dark terminal themes. Two module rows share one text line.
pub fn render_terminal(matrix: &ModuleMatrix, border: usize) -> String {
    let n = matrix.size();
    let total = n + 2 * border;
    let dark = |x: usize, y: usize| {
        x >= border && y >= border && matrix.get(x - border, y - border)
    };

    let mut out = String::new();
    let mut y = 0;
    while y < total {
        for x in 0..total {
            let top = dark(x, y);
            // Past the bottom edge counts as quiet zone
            let bottom = y + 1 < total && dark(x, y + 1);
            out.push(match (top, bottom) {
                (false, false) => '█',
                (false, true) => '▀',
                (true, false) => '▄',
                (true, true) => ' ',
            });
        }
        out.push('\n');
        y += 2;
    }
    out
}
