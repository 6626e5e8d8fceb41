use egui::{Color32, Rect, Vec2};

use crate::display_list::DisplayList;
use crate::preview::Preview;
use crate::stroke::Stroke;
use crate::surface::Surface;

/// Repaints the whole canvas from the display list and transient overlays.
#[derive(Debug, Clone)]
pub struct Renderer {
    canvas_size: Vec2,
    background: Color32,
}

impl Renderer {
    pub fn new(canvas_size: Vec2, background: Color32) -> Self {
        Self {
            canvas_size,
            background,
        }
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    pub fn canvas_rect(&self) -> Rect {
        Rect::from_min_size(egui::Pos2::ZERO, self.canvas_size)
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Paint a full frame.
    ///
    /// Layers, bottom to top: background, committed strokes in order, the
    /// in-progress stroke, the preview. The output depends only on the arguments.
    pub fn render(
        &self,
        surface: &mut dyn Surface,
        display_list: &DisplayList,
        in_progress: Option<&Stroke>,
        preview: Option<&Preview>,
    ) {
        let rect = self.canvas_rect();
        surface.clear(rect);
        surface.fill_rect(rect, self.background);

        for stroke in display_list.strokes() {
            stroke.render(surface);
        }
        if let Some(stroke) = in_progress {
            stroke.render(surface);
        }
        if let Some(preview) = preview {
            preview.render(surface);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Vec2::splat(256.0), Color32::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};
    use egui::pos2;

    #[test]
    fn test_empty_canvas_is_background_only() {
        let renderer = Renderer::default();
        let mut surface = RecordingSurface::new();
        renderer.render(&mut surface, &DisplayList::new(), None, None);
        assert_eq!(
            surface.ops(),
            &[
                DrawOp::Clear(renderer.canvas_rect()),
                DrawOp::FillRect {
                    rect: renderer.canvas_rect(),
                    color: Color32::WHITE,
                },
            ]
        );
    }

    #[test]
    fn test_overlays_are_drawn_last() {
        let renderer = Renderer::default();
        let mut stroke = Stroke::new(pos2(0.0, 0.0), Color32::BLACK, 1.0, None);
        stroke.drag(pos2(4.0, 4.0));
        let preview = Preview::BrushRing {
            center: pos2(8.0, 8.0),
            size: 2.0,
            color: Color32::BLACK,
        };

        let mut surface = RecordingSurface::new();
        renderer.render(
            &mut surface,
            &DisplayList::new(),
            Some(&stroke),
            Some(&preview),
        );
        let ops = surface.ops();
        assert!(matches!(ops[2], DrawOp::Polyline { .. }));
        assert!(matches!(ops[3], DrawOp::Circle { .. }));
    }
}
