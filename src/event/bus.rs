use log::warn;
use std::cell::RefCell;
use std::fmt;

use crate::event::{EditorEvent, EventHandler};

/// Fans editor notifications out to subscribed handlers, in subscription order.
///
/// Delivery is synchronous. While handlers run the bus is locked: a handler
/// that reaches back into the bus has its `emit` or `subscribe` call refused
/// with a warning instead of recursing.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.handlers.try_borrow() {
            Ok(handlers) => write!(f, "EventBus({} handlers)", handlers.len()),
            Err(_) => write!(f, "EventBus(<dispatching>)"),
        }
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the handler was refused because the bus is dispatching.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) -> bool {
        match self.handlers.try_borrow_mut() {
            Ok(mut handlers) => {
                handlers.push(handler);
                true
            }
            Err(_) => {
                warn!("Refusing subscription made from inside an event handler");
                false
            }
        }
    }

    /// Deliver `event` to every handler. Returns `false` if it was dropped
    /// because it was emitted from inside a handler.
    pub fn emit(&self, event: EditorEvent) -> bool {
        let Ok(mut handlers) = self.handlers.try_borrow_mut() else {
            warn!("Dropping {event:?} emitted from inside an event handler");
            return false;
        };
        for handler in handlers.iter_mut() {
            handler.handle_event(&event);
        }
        true
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.try_borrow().map_or(0, |handlers| handlers.len())
    }
}
