use log::debug;

use super::{Command, HistoryError, HistoryResult};
use crate::display_list::DisplayList;

/// Linear undo/redo history of executed commands
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Commands that can be undone, most recent last
    undo_stack: Vec<Command>,
    /// Commands that can be redone, most recently undone last
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command and record it. Any redo history is discarded.
    pub fn execute(&mut self, command: Command, list: &mut DisplayList) {
        command.apply(list);
        debug!(
            "Executed {} command ({} strokes on canvas)",
            command.name(),
            list.len()
        );
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Undo the last executed command
    pub fn undo(&mut self, list: &mut DisplayList) -> HistoryResult {
        let command = self.undo_stack.pop().ok_or(HistoryError::NothingToUndo)?;
        command.undo(list);
        debug!("Undid {} command", command.name());
        self.redo_stack.push(command);
        Ok(())
    }

    /// Redo the last undone command
    pub fn redo(&mut self, list: &mut DisplayList) -> HistoryResult {
        let command = self.redo_stack.pop().ok_or(HistoryError::NothingToRedo)?;
        command.apply(list);
        debug!("Redid {} command", command.name());
        self.undo_stack.push(command);
        Ok(())
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Rebuild a display list by applying every undoable command from scratch.
    ///
    /// The result always equals the live display list.
    pub fn replay(&self) -> DisplayList {
        let mut list = DisplayList::new();
        for command in &self.undo_stack {
            command.apply(&mut list);
        }
        list
    }
}
