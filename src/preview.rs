use egui::{Color32, Pos2};

use crate::stroke::sticker_font_size;
use crate::surface::Surface;
use crate::tool_state::ToolState;

/// Width of the brush ring outline, independent of brush size.
const RING_WIDTH: f32 = 2.0;

/// Opacity multiplier for the sticker ghost.
const GHOST_OPACITY: f32 = 0.5;

/// Uncommitted hint drawn under the pointer while not drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Outline the size of the brush.
    BrushRing {
        center: Pos2,
        size: f32,
        color: Color32,
    },
    /// Translucent copy of the sticker that a click would place.
    StickerGhost {
        center: Pos2,
        glyph: String,
        size: f32,
        color: Color32,
    },
}

impl Preview {
    pub fn brush_ring(center: Pos2, tool: &ToolState) -> Self {
        Preview::BrushRing {
            center,
            size: tool.size(),
            color: tool.color(),
        }
    }

    pub fn sticker_ghost(center: Pos2, glyph: &str, tool: &ToolState) -> Self {
        Preview::StickerGhost {
            center,
            glyph: glyph.to_owned(),
            size: tool.size(),
            color: tool.color(),
        }
    }

    pub fn center(&self) -> Pos2 {
        match self {
            Preview::BrushRing { center, .. } | Preview::StickerGhost { center, .. } => *center,
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Preview::BrushRing {
                center,
                size,
                color,
            } => {
                surface.stroke_circle(*center, size / 2.0, RING_WIDTH, *color);
            }
            Preview::StickerGhost {
                center,
                glyph,
                size,
                color,
            } => {
                surface.text_centered(
                    *center,
                    glyph,
                    sticker_font_size(*size),
                    color.gamma_multiply(GHOST_OPACITY),
                );
            }
        }
    }
}
