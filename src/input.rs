use egui::{Context, Pos2, Rect};

/// Abstract pointer events understood by [`crate::EditorContext`].
///
/// Positions are canvas-local.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { pos: Pos2 },
    PointerMove { pos: Pos2 },
    PointerUp,
    PointerLeave,
}

/// Raw pointer state for one frame, in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub hover_pos: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_released: bool,
}

impl PointerSample {
    pub fn from_context(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            hover_pos: input.pointer.hover_pos(),
            primary_pressed: input.pointer.primary_pressed(),
            primary_released: input.pointer.primary_released(),
        })
    }
}

/// Turns per-frame pointer samples into [`InputEvent`]s for one canvas.
///
/// Presses and moves only count inside the canvas. A release counts anywhere
/// once a press started on the canvas, so a stroke dragged off the edge still
/// ends when the button comes up.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pos: Option<Pos2>,
    pressed_on_canvas: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read egui's pointer state and translate it.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        self.translate(PointerSample::from_context(ctx), canvas_rect)
    }

    pub fn translate(&mut self, sample: PointerSample, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let inside = sample.hover_pos.filter(|pos| canvas_rect.contains(*pos));
        let local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        if sample.primary_pressed {
            if let Some(pos) = inside {
                events.push(InputEvent::PointerDown { pos: local(pos) });
                self.pressed_on_canvas = true;
                // The press already carries this position.
                self.last_pos = Some(pos);
            }
        }

        match inside {
            Some(pos) if self.last_pos != Some(pos) => {
                events.push(InputEvent::PointerMove { pos: local(pos) });
                self.last_pos = Some(pos);
            }
            Some(_) => {}
            None => {
                if self.last_pos.take().is_some() {
                    events.push(InputEvent::PointerLeave);
                }
            }
        }

        if sample.primary_released && self.pressed_on_canvas {
            events.push(InputEvent::PointerUp);
            self.pressed_on_canvas = false;
        }

        events
    }
}
