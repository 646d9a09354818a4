//! HSV color conversion and palette quantization.

/// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

/// 8-bit RGB color for a rendered cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CellColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale `[0, 1]` channels to `[0, 255]`, truncating.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: (r * 255.0) as u8,
            g: (g * 255.0) as u8,
            b: (b * 255.0) as u8,
        }
    }

    /// The same gray level on every channel.
    pub fn gray(level: f64) -> Self {
        Self::from_unit(level, level, level)
    }
}

/// Below this, value and chroma are treated as zero.
const EPSILON: f64 = 1e-4;

/// Convert RGB in `[0, 1]` to HSV.
///
/// Black has zero saturation, grays have zero hue.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let saturation = if max.abs() < EPSILON { 0.0 } else { chroma / max };

    let hue = if chroma < EPSILON {
        0.0
    } else if max == r {
        let hue = 60.0 * (((g - b) / chroma) % 6.0);
        if hue < 0.0 { hue + 360.0 } else { hue }
    } else if max == g {
        60.0 * (2.0 + (b - r) / chroma)
    } else {
        60.0 * (4.0 + (r - g) / chroma)
    };

    Hsv {
        hue,
        saturation,
        value: max,
    }
}

/// Convert HSV to RGB in `[0, 1]`.
///
/// Hue is not normalised: the last sextant also catches `hue >= 300` and
/// anything outside `[0, 360)`.
pub fn hsv_to_rgb(hsv: &Hsv) -> (f64, f64, f64) {
    let c = hsv.value * hsv.saturation;
    let h = hsv.hue / 60.0;
    let x = c * (1.0 - ((h % 2.0) - 1.0).abs());

    let (r, g, b) = if (0.0..1.0).contains(&h) {
        (c, x, 0.0)
    } else if (1.0..2.0).contains(&h) {
        (x, c, 0.0)
    } else if (2.0..3.0).contains(&h) {
        (0.0, c, x)
    } else if (3.0..4.0).contains(&h) {
        (0.0, x, c)
    } else if (4.0..5.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = hsv.value - c;
    (r + m, g + m, b + m)
}

/// Quantize to the 8-color palette: black, white and the six primary and
/// secondary hues at full brightness.
///
/// Value is forced to 1, hue snaps to the nearest 60 degrees and saturation
/// becomes 0 below 0.25, 1 otherwise.
pub fn retro_rgb(hsv: &Hsv) -> CellColor {
    let mut hue = (hsv.hue / 60.0).round() * 60.0;
    if hue >= 360.0 {
        hue = 0.0;
    }
    let quantized = Hsv {
        hue,
        saturation: if hsv.saturation < 0.25 { 0.0 } else { 1.0 },
        value: 1.0,
    };
    let (r, g, b) = hsv_to_rgb(&quantized);
    CellColor::from_unit(r, g, b)
}

/// Full-range RGB with the value forced to 1.
pub fn truecolor_rgb(hsv: &Hsv) -> CellColor {
    let bright = Hsv { value: 1.0, ..*hsv };
    let (r, g, b) = hsv_to_rgb(&bright);
    CellColor::from_unit(r, g, b)
}

/// Brightness used for glyph selection: value squared, for extra contrast.
pub fn grayscale_from_hsv(hsv: &Hsv) -> f64 {
    hsv.value * hsv.value
}
