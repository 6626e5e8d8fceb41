use crate::display_list::DisplayList;
use crate::stroke::StrokeRef;

/// A reversible change to the display list.
///
/// Commands are applied and undone by [`super::CommandHistory`] only, which
/// guarantees they are undone in strict reverse order of application.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Commit a freehand stroke drawn with a drag.
    Draw(StrokeRef),

    /// Commit a sticker stamp placed with a click.
    PlaceSticker(StrokeRef),

    /// Remove everything. Holds the list as it was when the clear was requested.
    Clear(Vec<StrokeRef>),
}

impl Command {
    /// Build a clear command that remembers the current contents of `list`.
    pub fn clear(list: &DisplayList) -> Self {
        Command::Clear(list.snapshot())
    }

    pub fn apply(&self, list: &mut DisplayList) {
        match self {
            Command::Draw(stroke) | Command::PlaceSticker(stroke) => {
                list.push(stroke.clone());
            }
            Command::Clear(_) => {
                list.take_all();
            }
        }
    }

    pub fn undo(&self, list: &mut DisplayList) {
        match self {
            Command::Draw(stroke) | Command::PlaceSticker(stroke) => {
                let removed = list.pop();
                debug_assert_eq!(
                    removed.as_ref().map(|s| s.id()),
                    Some(stroke.id()),
                    "undo out of order"
                );
            }
            Command::Clear(snapshot) => {
                list.replace(snapshot.clone());
            }
        }
    }

    /// Short name for log messages.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Draw(_) => "draw",
            Command::PlaceSticker(_) => "place sticker",
            Command::Clear(_) => "clear",
        }
    }
}
