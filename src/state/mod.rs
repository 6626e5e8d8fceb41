pub mod context;

pub use context::EditorContext;

use crate::stroke::Stroke;

/// What the pointer is doing to the canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorState {
    /// No stroke in progress.
    #[default]
    Idle,
    /// The pointer is down and `stroke` is collecting points.
    Drawing { stroke: Stroke },
}

impl EditorState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// The stroke being drawn, if any.
    pub fn stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Drawing { stroke } => Some(stroke),
            Self::Idle => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing { .. } => "Drawing",
        }
    }
}
