mod bus;
mod events;

pub use bus::EventBus;
pub use events::EditorEvent;

/// Receives notifications from an [`EventBus`].
///
/// Handlers only see the event, never the editor, so they cannot re-enter it.
pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}

impl<F: FnMut(&EditorEvent)> EventHandler for F {
    fn handle_event(&mut self, event: &EditorEvent) {
        self(event)
    }
}
