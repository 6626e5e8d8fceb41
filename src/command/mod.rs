mod commands;
mod history;

pub use commands::Command;
pub use history::CommandHistory;

pub use crate::error::HistoryError;

/// Result type for undo/redo requests
pub type HistoryResult = Result<(), HistoryError>;
