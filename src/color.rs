//! Hex/RGB color utilities and palette generation.
//!
//! Charts store a color list as configuration for consumers outside the text
//! rendering path (for example a future graphical backend). Nothing in this
//! module is consulted by the renderers.

/// Parse a `#rgb` or `#rrggbb` hex color (leading `#` optional) into RGB
/// components. Malformed input yields black.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> [u8; 3] {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.is_ascii() {
        return [0, 0, 0];
    }

    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return [0, 0, 0],
    };

    let mut rgb = [0u8; 3];
    for (i, component) in rgb.iter_mut().enumerate() {
        match u8::from_str_radix(&expanded[i * 2..i * 2 + 2], 16) {
            Ok(v) => *component = v,
            Err(_) => return [0, 0, 0],
        }
    }
    rgb
}

/// Format RGB components as a lowercase `#rrggbb` string.
#[must_use]
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Generate a brightness ladder of `count` colors around `base_hex`.
///
/// Scale factors step by 0.25, alternating darker and lighter around the
/// base, so the base color sits at the center of an odd-sized palette.
#[must_use]
pub fn generate_palette(base_hex: &str, count: usize) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![base_hex.to_string()];
    }

    let base = hex_to_rgb(base_hex);
    let mut scales = vec![1.0f64];
    for iteration in 1..count {
        if iteration % 2 == 0 {
            scales.push(scales[scales.len() - 1] + 0.25);
        } else {
            scales.insert(0, scales[0] - 0.25);
        }
    }

    scales
        .iter()
        .map(|&scale| {
            rgb_to_hex(base.map(|c| (f64::from(c) * scale).round().clamp(0.0, 255.0) as u8))
        })
        .collect()
}

/// Linearly interpolate between two hex colors.
///
/// `factor` 0.0 yields `from`, 1.0 yields `to`; components are rounded and
/// clamped to the valid byte range.
#[must_use]
pub fn interpolate_color(from: &str, to: &str, factor: f64) -> String {
    let a = hex_to_rgb(from);
    let b = hex_to_rgb(to);

    let mut blended = [0u8; 3];
    for i in 0..3 {
        let v = f64::from(a[i]) + (f64::from(b[i]) - f64::from(a[i])) * factor;
        blended[i] = v.round().clamp(0.0, 255.0) as u8;
    }
    rgb_to_hex(blended)
}
