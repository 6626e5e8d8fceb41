use egui::Color32;

use crate::error::ColorError;

/// Named colors understood by [`parse_color`], in addition to hex notation.
const NAMED_COLORS: &[(&str, Color32)] = &[
    ("black", Color32::BLACK),
    ("white", Color32::WHITE),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("purple", Color32::from_rgb(128, 0, 128)),
    ("pink", Color32::from_rgb(255, 192, 203)),
    ("brown", Color32::from_rgb(165, 42, 42)),
    ("gray", Color32::from_rgb(128, 128, 128)),
    ("grey", Color32::from_rgb(128, 128, 128)),
    ("transparent", Color32::TRANSPARENT),
];

/// Parse a CSS-like color string.
///
/// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa` and the names in [`NAMED_COLORS`]
/// (case-insensitive, surrounding whitespace ignored).
pub fn parse_color(input: &str) -> Result<Color32, ColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorError::Empty);
    }

    if trimmed.starts_with('#') {
        return Color32::from_hex(trimmed).map_err(|_| ColorError::InvalidHex(trimmed.to_owned()));
    }

    let lower = trimmed.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, color)| *color)
        .ok_or_else(|| ColorError::Unknown(trimmed.to_owned()))
}

/// Format a color as `#rrggbb` (or `#rrggbbaa` when not opaque).
pub fn format_color(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}
