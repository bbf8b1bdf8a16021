//! Event types and dispatch
//!
//! Handlers are registered per `(target, event type)` pair through an
//! explicit interface; nodes never hold callbacks in mutable fields.

use rustc_hash::FxHashMap;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    /// Drag step (pointer down + move) on a draggable node
    pub const DRAG: EventType = 6;
    /// Drag ended (pointer up after drag)
    pub const DRAG_END: EventType = 7;
    pub const RESIZE: EventType = 40;
    /// Published once per frame after the scene tree has been painted
    pub const AFTER_RENDER: EventType = 50;
}

/// Opaque target identifier; scene crates map their node ids onto it
pub type TargetId = u64;

/// An input or lifecycle event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: TargetId,
    pub data: EventData,
    pub propagation_stopped: bool,
}

/// Event-specific data
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
    },
    /// Pointer movement since the previous drag step
    Drag {
        dx: f32,
        dy: f32,
    },
    Resize {
        width: f32,
        height: f32,
    },
    #[default]
    None,
}

impl Event {
    pub fn new(event_type: EventType, target: TargetId, data: EventData) -> Self {
        Self {
            event_type,
            target,
            data,
            propagation_stopped: false,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Event handler function type
pub type EventHandler = Box<dyn Fn(&Event) + Send + Sync>;

/// Dispatches events to registered handlers
#[derive(Default)]
pub struct EventDispatcher {
    handlers: FxHashMap<(TargetId, EventType), Vec<EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a target and event type
    pub fn register<F>(&mut self, target: TargetId, event_type: EventType, handler: F)
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.handlers
            .entry((target, event_type))
            .or_default()
            .push(Box::new(handler));
    }

    /// Dispatch an event to all handlers registered for its target
    pub fn dispatch(&self, event: &mut Event) {
        let Some(handlers) = self.handlers.get(&(event.target, event.event_type)) else {
            tracing::trace!(
                "no handlers for target {} event {}",
                event.target,
                event.event_type
            );
            return;
        };
        for handler in handlers {
            if event.propagation_stopped {
                break;
            }
            handler(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn dispatch_reaches_registered_target_only() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = fired.clone();

        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(7, event_types::DRAG, move |_| {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        let mut hit = Event::new(event_types::DRAG, 7, EventData::Drag { dx: 1.0, dy: 0.0 });
        let mut miss = Event::new(event_types::DRAG, 8, EventData::None);
        dispatcher.dispatch(&mut hit);
        dispatcher.dispatch(&mut miss);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn stop_propagation_halts_handler_chain() {
        let count = Arc::new(AtomicUsize::new(0));

        let mut dispatcher = EventDispatcher::new();
        let c1 = count.clone();
        dispatcher.register(1, event_types::DRAG_END, move |_| {
            c1.fetch_add(1, Ordering::SeqCst);
        });
        let c2 = count.clone();
        dispatcher.register(1, event_types::DRAG_END, move |_| {
            c2.fetch_add(1, Ordering::SeqCst);
        });

        let mut event = Event::new(event_types::DRAG_END, 1, EventData::None);
        event.stop_propagation();
        dispatcher.dispatch(&mut event);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
