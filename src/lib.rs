#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod config;
pub mod display_list;
pub mod error;
pub mod event;
pub mod input;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod surface;
pub mod tool_state;

pub use app::SketchpadApp;
pub use command::{Command, CommandHistory};
pub use config::SketchConfig;
pub use display_list::DisplayList;
pub use event::{EditorEvent, EventBus, EventHandler};
pub use input::{InputEvent, InputHandler};
pub use preview::Preview;
pub use renderer::Renderer;
pub use state::{EditorContext, EditorState};
pub use stroke::{Stroke, StrokeId, StrokeRef};
pub use surface::{DrawOp, EguiSurface, RecordingSurface, Surface};
pub use tool_state::ToolState;
