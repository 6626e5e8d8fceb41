use egui::{Color32, Pos2};
use log::warn;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::surface::Surface;
use crate::tool_state::ToolState;

/// Font size of a stamp per unit of brush size.
pub const STICKER_FONT_SCALE: f32 = 10.0;

/// Unique identity of a stroke, independent of its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrokeId(Uuid);

impl StrokeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StrokeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A freehand polyline, or a stamped glyph when `sticker` is set.
///
/// Strokes are only mutable while in progress. Once committed they are shared
/// through [`StrokeRef`] and never change again.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Pos2>,
    color: Color32,
    size: f32,
    sticker: Option<String>,
}

/// Committed, immutable stroke as stored in the display list.
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    /// Start a stroke at `pos`. With a `sticker` this is a stamp anchored at `pos`.
    pub fn new(pos: Pos2, color: Color32, size: f32, sticker: Option<String>) -> Self {
        Self {
            id: StrokeId::new(),
            points: vec![pos],
            color,
            size,
            sticker,
        }
    }

    /// Start a polyline at `pos` using the current brush settings.
    pub fn from_tool(pos: Pos2, tool: &ToolState) -> Self {
        Self::new(pos, tool.color(), tool.size(), None)
    }

    /// Create a stamp of `glyph` at `pos` using the current brush settings.
    pub fn stamp(pos: Pos2, glyph: impl Into<String>, tool: &ToolState) -> Self {
        Self::new(pos, tool.color(), tool.size(), Some(glyph.into()))
    }

    /// Append a point.
    ///
    /// Must not be called on a stamp: stamps have exactly one anchor point.
    pub fn drag(&mut self, pos: Pos2) {
        debug_assert!(!self.is_stamp(), "drag called on a stamp");
        if self.is_stamp() {
            warn!("Ignoring drag on stamp {}", self.id);
            return;
        }
        self.points.push(pos);
    }

    /// Freeze this stroke so it can be committed.
    pub fn into_ref(self) -> StrokeRef {
        Arc::new(self)
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn sticker(&self) -> Option<&str> {
        self.sticker.as_deref()
    }

    pub fn is_stamp(&self) -> bool {
        self.sticker.is_some()
    }

    /// Draw with this stroke's own style.
    pub fn render(&self, surface: &mut dyn Surface) {
        match &self.sticker {
            Some(glyph) => {
                if let Some(anchor) = self.points.first() {
                    surface.text_centered(*anchor, glyph, sticker_font_size(self.size), self.color);
                }
            }
            None => {
                // A single click leaves no dot.
                if self.points.len() < 2 {
                    return;
                }
                surface.stroke_polyline(&self.points, self.size, self.color);
            }
        }
    }
}

pub fn sticker_font_size(size: f32) -> f32 {
    size * STICKER_FONT_SCALE
}
