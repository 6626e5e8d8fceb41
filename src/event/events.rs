use egui::Pos2;

/// Notifications emitted by the editor after its state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Something visible on the canvas changed and it should be repainted.
    DrawingChanged,
    /// The tool preview followed the pointer to `pos`.
    ToolMoved { pos: Pos2 },
    /// Brush color, size or sticker selection changed.
    ToolChanged,
    /// Undo/redo availability may have changed.
    HistoryChanged { can_undo: bool, can_redo: bool },
}
