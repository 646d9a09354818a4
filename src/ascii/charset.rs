//! Glyph selection from brightness and gradient direction.

/// Brightness ramp, darkest (space) to brightest (@).
pub const GLYPH_RAMP: &[char] = &[' ', '.', '-', '=', '+', '*', 'x', '#', '$', '&', 'X', '@'];

/// Pick a ramp glyph for a brightness in `[0, 1]`.
///
/// Out-of-range brightness is clamped; exactly 1.0 maps to the last glyph.
pub fn ascii_char(brightness: f64) -> char {
    let levels = GLYPH_RAMP.len();
    let brightness = brightness.clamp(0.0, 1.0);
    let idx = ((brightness * levels as f64) as usize).min(levels - 1);
    GLYPH_RAMP[idx]
}

/// Pick a line glyph for a gradient angle in degrees, `(-180, 180]`.
///
/// The circle is split into 45 degree windows centred on the diagonals and
/// the vertical axis. Shared boundaries go to the first matching window.
pub fn edge_char(angle: f64) -> char {
    if (22.5..=67.5).contains(&angle) || (-157.5..=-112.5).contains(&angle) {
        '\\'
    } else if (67.5..=112.5).contains(&angle) || (-112.5..=-67.5).contains(&angle) {
        '_'
    } else if (112.5..=157.5).contains(&angle) || (-67.5..=-22.5).contains(&angle) {
        '/'
    } else {
        '|'
    }
}

/// Gradient angle in degrees from its components.
pub fn gradient_angle(gx: f64, gy: f64) -> f64 {
    gy.atan2(gx) * 180.0 / std::f64::consts::PI
}
