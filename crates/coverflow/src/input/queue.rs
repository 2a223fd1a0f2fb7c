use crate::api::types::Direction;

/// Which drag adapter an event belongs to. Each has its own session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragSource {
    /// Mouse / pen, tracked on the document while held.
    Pointer,
    /// Touch, tracked on the carousel track.
    Touch,
}

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Input event types the carousel understands.
/// Coordinates are horizontal client positions in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key: Key },
    /// A drag began at `x`.
    DragStart { source: DragSource, x: f32 },
    /// The drag moved to `x`.
    DragMove { source: DragSource, x: f32 },
    /// The drag ended. `None` means "wherever it last was".
    DragEnd { source: DragSource, x: Option<f32> },
    /// The drag was interrupted without a release.
    DragCancel { source: DragSource },
    /// A card was clicked directly.
    CardClick { index: usize },
    /// A previous/next button was pressed.
    Button { direction: Direction },
}

/// A queue of input events.
/// The host writes events into the queue; the carousel drains them in order.
#[derive(Debug)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::DragStart { source: DragSource::Touch, x: 10.0 });
        q.push(InputEvent::KeyDown { key: Key::ArrowRight });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events[1], InputEvent::KeyDown { key: Key::ArrowRight });
        assert!(q.is_empty());
    }

    #[test]
    fn dom_key_mapping() {
        assert_eq!(Key::from_dom_key("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_dom_key("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_dom_key("ArrowUp"), Key::Other);
        assert_eq!(Key::from_dom_key("a"), Key::Other);
    }
}
