//! The drawing-state engine.
//!
//! [`EditorContext`] owns the tool settings, the display list, the undo/redo
//! history, the stroke being drawn and the tool preview. The host feeds it
//! pointer events and tool commands, then calls [`EditorContext::render`]
//! whenever an [`EditorEvent::DrawingChanged`] was emitted.
//!
//! Pointer handling:
//!
//! ```text
//!              pointer_down (no sticker)
//!   ┌──────┐ ─────────────────────────► ┌─────────┐
//!   │ Idle │                            │ Drawing │ ◄─┐ pointer_move
//!   └──────┘ ◄───────────────────────── └─────────┘ ──┘ (drag)
//!      ▲  │         pointer_up
//!      │  │         (commit Draw)
//!      └──┘
//!   pointer_down with a sticker selected: commit PlaceSticker, stay Idle
//! ```
use egui::{Color32, Pos2, Vec2};
use log::{debug, warn};

use super::EditorState;
use crate::command::{Command, CommandHistory};
use crate::config::SketchConfig;
use crate::display_list::DisplayList;
use crate::error::ConfigError;
use crate::event::{EditorEvent, EventBus, EventHandler};
use crate::input::InputEvent;
use crate::preview::Preview;
use crate::renderer::Renderer;
use crate::stroke::Stroke;
use crate::surface::Surface;
use crate::tool_state::ToolState;

#[derive(Debug, Default)]
pub struct EditorContext {
    state: EditorState,
    tool: ToolState,
    history: CommandHistory,
    display_list: DisplayList,
    preview: Option<Preview>,
    renderer: Renderer,
    event_bus: EventBus,
}

impl EditorContext {
    pub fn new(renderer: Renderer, tool: ToolState) -> Self {
        Self {
            state: EditorState::Idle,
            tool,
            history: CommandHistory::new(),
            display_list: DisplayList::new(),
            preview: None,
            renderer,
            event_bus: EventBus::new(),
        }
    }

    pub fn from_config(config: &SketchConfig) -> Result<Self, ConfigError> {
        let renderer = Renderer::new(config.canvas_size()?, config.background_color()?);
        Ok(Self::new(renderer, config.tool_state()?))
    }

    /// Register a handler for editor notifications.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { pos } => self.pointer_down(pos),
            InputEvent::PointerMove { pos } => self.pointer_move(pos),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::PointerLeave => self.pointer_leave(),
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        // A missed pointer-up must not lose the previous stroke.
        self.commit_stroke();

        if let Some(glyph) = self.tool.take_sticker() {
            let stamp = Stroke::stamp(pos, glyph, &self.tool);
            debug!("Placing sticker {:?} at {pos:?}", stamp.sticker());
            self.preview = None;
            self.execute(Command::PlaceSticker(stamp.into_ref()));
            self.event_bus.emit(EditorEvent::ToolChanged);
            return;
        }

        self.preview = None;
        self.state = EditorState::Drawing {
            stroke: Stroke::from_tool(pos, &self.tool),
        };
        self.event_bus.emit(EditorEvent::DrawingChanged);
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        if let Some(glyph) = self.tool.selected_sticker() {
            self.preview = Some(Preview::sticker_ghost(pos, glyph, &self.tool));
            self.event_bus.emit(EditorEvent::ToolMoved { pos });
        } else if let EditorState::Drawing { stroke } = &mut self.state {
            stroke.drag(pos);
        } else {
            self.preview = Some(Preview::brush_ring(pos, &self.tool));
            self.event_bus.emit(EditorEvent::ToolMoved { pos });
        }
        self.event_bus.emit(EditorEvent::DrawingChanged);
    }

    pub fn pointer_up(&mut self) {
        self.commit_stroke();
    }

    /// Hides the preview. A stroke in progress is kept.
    pub fn pointer_leave(&mut self) {
        if self.preview.take().is_some() {
            self.event_bus.emit(EditorEvent::DrawingChanged);
        }
    }

    pub fn request_undo(&mut self) {
        match self.history.undo(&mut self.display_list) {
            Ok(()) => self.history_changed(),
            Err(err) => warn!("Undo ignored: {err}"),
        }
    }

    pub fn request_redo(&mut self) {
        match self.history.redo(&mut self.display_list) {
            Ok(()) => self.history_changed(),
            Err(err) => warn!("Redo ignored: {err}"),
        }
    }

    pub fn request_clear(&mut self) {
        let command = Command::clear(&self.display_list);
        self.execute(command);
    }

    pub fn set_color(&mut self, color: &str) {
        if self.tool.set_color(color) {
            self.tool_changed();
        }
    }

    pub fn set_color32(&mut self, color: Color32) {
        self.tool.set_color32(color);
        self.tool_changed();
    }

    pub fn set_size(&mut self, size: f32) {
        if self.tool.set_size(size) {
            self.tool_changed();
        }
    }

    /// Apply brush size text from the host's size field.
    pub fn set_size_input(&mut self, input: &str) {
        if self.tool.set_size_input(input) {
            self.tool_changed();
        }
    }

    pub fn select_sticker(&mut self, sticker: Option<String>) {
        self.tool.select_sticker(sticker);
        self.tool_changed();
    }

    /// Repaint the whole canvas on `surface`.
    pub fn render(&self, surface: &mut dyn Surface) {
        self.renderer.render(
            surface,
            &self.display_list,
            self.state.stroke(),
            self.preview.as_ref(),
        );
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.display_list
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tool
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn in_progress_stroke(&self) -> Option<&Stroke> {
        self.state.stroke()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.renderer.canvas_size()
    }

    fn commit_stroke(&mut self) {
        if let EditorState::Drawing { stroke } = std::mem::take(&mut self.state) {
            debug!(
                "Committing stroke {} with {} points",
                stroke.id(),
                stroke.points().len()
            );
            self.execute(Command::Draw(stroke.into_ref()));
        }
    }

    fn execute(&mut self, command: Command) {
        self.history.execute(command, &mut self.display_list);
        self.history_changed();
    }

    fn history_changed(&self) {
        self.event_bus.emit(EditorEvent::HistoryChanged {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        });
        self.event_bus.emit(EditorEvent::DrawingChanged);
    }

    fn tool_changed(&mut self) {
        // Keep a visible preview in sync with the new settings.
        if let Some(center) = self.preview.as_ref().map(Preview::center) {
            self.preview = Some(match self.tool.selected_sticker() {
                Some(glyph) => Preview::sticker_ghost(center, glyph, &self.tool),
                None => Preview::brush_ring(center, &self.tool),
            });
        }
        self.event_bus.emit(EditorEvent::ToolChanged);
        self.event_bus.emit(EditorEvent::DrawingChanged);
    }
}
