use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

/// Primitive drawing operations the renderer needs from a drawing target.
///
/// All coordinates are canvas-local: `(0, 0)` is the top-left corner of the canvas.
pub trait Surface {
    /// Reset `rect` to an empty (transparent) state.
    fn clear(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Color32);

    /// Draw connected line segments through `points`.
    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32);

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32);

    /// Draw `text` centered on `pos`.
    fn text_centered(&mut self, pos: Pos2, text: &str, font_size: f32, color: Color32);
}

/// Draws onto an egui [`Painter`], translating canvas-local coordinates by `origin`.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    origin: Vec2,
}

impl<'a> EguiSurface<'a> {
    /// `canvas_rect` is where the canvas sits in screen space.
    pub fn new(painter: &'a Painter, canvas_rect: Rect) -> Self {
        Self {
            painter,
            origin: canvas_rect.min.to_vec2(),
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.origin
    }
}

impl Surface for EguiSurface<'_> {
    fn clear(&mut self, _rect: Rect) {
        // egui starts every frame from an empty shape list
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.painter
            .rect_filled(rect.translate(self.origin), 0.0, color);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(Shape::line(points, EguiStroke::new(width, color)));
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.painter
            .circle_stroke(self.to_screen(center), radius, EguiStroke::new(width, color));
    }

    fn text_centered(&mut self, pos: Pos2, text: &str, font_size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(pos),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(font_size),
            color,
        );
    }
}

/// One recorded call on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Rect),
    FillRect {
        rect: Rect,
        color: Color32,
    },
    Polyline {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        width: f32,
        color: Color32,
    },
    Text {
        pos: Pos2,
        text: String,
        font_size: f32,
        color: Color32,
    },
}

/// A surface that only remembers what was drawn on it.
///
/// Useful for headless checks of the redraw pipeline.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    /// Number of ops that actually put marks on the canvas (polylines, circles, text).
    pub fn mark_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    DrawOp::Polyline { .. } | DrawOp::Circle { .. } | DrawOp::Text { .. }
                )
            })
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            width,
            color,
        });
    }

    fn text_centered(&mut self, pos: Pos2, text: &str, font_size: f32, color: Color32) {
        self.ops.push(DrawOp::Text {
            pos,
            text: text.to_owned(),
            font_size,
            color,
        });
    }
}
