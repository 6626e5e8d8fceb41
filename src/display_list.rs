use crate::stroke::StrokeRef;

/// Committed strokes in paint order: later strokes are drawn on top.
///
/// Only [`crate::command::Command`] mutates this list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    strokes: Vec<StrokeRef>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Copy of the current contents, detached from the live list.
    pub fn snapshot(&self) -> Vec<StrokeRef> {
        self.strokes.clone()
    }

    pub(crate) fn push(&mut self, stroke: StrokeRef) {
        self.strokes.push(stroke);
    }

    pub(crate) fn pop(&mut self) -> Option<StrokeRef> {
        self.strokes.pop()
    }

    pub(crate) fn take_all(&mut self) -> Vec<StrokeRef> {
        std::mem::take(&mut self.strokes)
    }

    pub(crate) fn replace(&mut self, strokes: Vec<StrokeRef>) {
        self.strokes = strokes;
    }
}
