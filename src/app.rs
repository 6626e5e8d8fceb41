use egui::{Key, KeyboardShortcut, Modifiers};

use crate::config::SketchConfig;
use crate::error::ConfigError;
use crate::event::EditorEvent;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::state::EditorContext;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// Stickers offered by the tools panel.
pub const STICKERS: &[&str] = &["🙂", "⭐", "🌵", "❤"];

/// Desktop shell around an [`EditorContext`].
pub struct SketchpadApp {
    editor: EditorContext,
    input: InputHandler,
    /// Text of the brush size field, committed on Enter or focus loss.
    size_text: String,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &SketchConfig) -> Result<Self, ConfigError> {
        let editor = EditorContext::from_config(config)?;

        let ctx = cc.egui_ctx.clone();
        editor.subscribe(Box::new(move |event: &EditorEvent| {
            if *event == EditorEvent::DrawingChanged {
                ctx.request_repaint();
            }
        }));

        Ok(Self::with_editor(editor))
    }

    pub fn with_editor(editor: EditorContext) -> Self {
        let size_text = editor.tool_state().size().to_string();
        Self {
            editor,
            input: InputHandler::new(),
            size_text,
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorContext {
        &mut self.editor
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn size_text_mut(&mut self) -> &mut String {
        &mut self.size_text
    }

    /// Send the size field to the editor, then show whatever size it kept.
    pub fn commit_size_text(&mut self) {
        self.editor.set_size_input(&self.size_text);
        self.size_text = self.editor.tool_state().size().to_string();
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.editor.request_undo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&REDO_SHORTCUT)) {
            self.editor.request_redo();
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
