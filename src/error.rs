use thiserror::Error;

/// Raised by [`crate::command::CommandHistory`] when a stack is empty.
///
/// The editor treats these as warnings: the request becomes a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

/// Reasons a brush size input is rejected outright (the previous size is kept).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizeError {
    #[error("brush size {0:?} is not a number")]
    NotANumber(String),

    #[error("brush size {0} is below the minimum of {min}", min = crate::tool_state::MIN_BRUSH_SIZE)]
    BelowMinimum(f32),
}

/// Errors parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color string is empty")]
    Empty,

    #[error("invalid hex color {0:?}")]
    InvalidHex(String),

    #[error("unknown color name {0:?}")]
    Unknown(String),
}

/// Errors that can occur while loading or validating a [`crate::config::SketchConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid color in config field `{field}`: {source}")]
    InvalidColor {
        field: &'static str,
        #[source]
        source: ColorError,
    },

    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvasSize { width: f32, height: f32 },

    #[error("Invalid brush size: {0}")]
    InvalidBrushSize(#[from] SizeError),
}
