use egui::Color32;
use log::warn;

use crate::color::parse_color;
use crate::error::SizeError;

pub const MIN_BRUSH_SIZE: f32 = 1.0;
pub const MAX_BRUSH_SIZE: f32 = 5.0;

/// Validate a requested brush size.
///
/// Sizes above the maximum are clamped to it. Sizes below the minimum and
/// non-finite values are rejected so the caller can keep its previous value.
pub fn validate_brush_size(size: f32) -> Result<f32, SizeError> {
    if size.is_nan() {
        return Err(SizeError::NotANumber(size.to_string()));
    }
    if size < MIN_BRUSH_SIZE {
        return Err(SizeError::BelowMinimum(size));
    }
    Ok(size.min(MAX_BRUSH_SIZE))
}

/// Parse brush size text as typed by the user, then validate it.
pub fn parse_brush_size(input: &str) -> Result<f32, SizeError> {
    let size = input
        .trim()
        .parse::<f32>()
        .map_err(|_| SizeError::NotANumber(input.to_owned()))?;
    validate_brush_size(size)
}

/// Current brush settings. New strokes copy these values when they are created.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    color: Color32,
    size: f32,
    selected_sticker: Option<String>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            size: MIN_BRUSH_SIZE,
            selected_sticker: None,
        }
    }
}

impl ToolState {
    pub fn new(color: Color32, size: f32) -> Result<Self, SizeError> {
        Ok(Self {
            color,
            size: validate_brush_size(size)?,
            selected_sticker: None,
        })
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn selected_sticker(&self) -> Option<&str> {
        self.selected_sticker.as_deref()
    }

    pub fn set_color32(&mut self, color: Color32) {
        self.color = color;
    }

    /// Returns `false` (keeping the previous color) if `input` isn't a color.
    pub fn set_color(&mut self, input: &str) -> bool {
        match parse_color(input) {
            Ok(color) => {
                self.color = color;
                true
            }
            Err(err) => {
                warn!("Ignoring color change: {err}");
                false
            }
        }
    }

    /// Returns `false` when the size was rejected and the last valid size kept.
    pub fn set_size(&mut self, size: f32) -> bool {
        self.apply_size(validate_brush_size(size))
    }

    /// Same rules as [`Self::set_size`], for raw text from a size field.
    pub fn set_size_input(&mut self, input: &str) -> bool {
        self.apply_size(parse_brush_size(input))
    }

    fn apply_size(&mut self, result: Result<f32, SizeError>) -> bool {
        match result {
            Ok(size) => {
                self.size = size;
                true
            }
            Err(err) => {
                warn!("{err}; keeping brush size {}", self.size);
                false
            }
        }
    }

    pub fn select_sticker(&mut self, sticker: Option<String>) {
        self.selected_sticker = sticker.filter(|glyph| !glyph.is_empty());
    }

    /// Clears and returns the selected sticker (placement is one-shot).
    pub fn take_sticker(&mut self) -> Option<String> {
        self.selected_sticker.take()
    }
}
