//! Gesture normalization.
//!
//! Keyboard, pointer drags, touch drags, button presses and card clicks all
//! reduce to a [`Navigation`]. Pointer and touch share one drag state machine
//! (`Idle -> Dragging -> Idle`) so the threshold logic exists exactly once.

use log::debug;

use crate::api::types::Direction;
use super::queue::{DragSource, InputEvent, Key};

/// What an input asks the index model to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Move one card.
    Step(Direction),
    /// Select a specific card.
    Jump(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging { start_x: f32, last_x: f32 },
}

/// Drag session for one input channel.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    state: DragState,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Dragging` at `x`. A start while dragging restarts the session.
    pub fn start(&mut self, x: f32) {
        self.state = DragState::Dragging { start_x: x, last_x: x };
    }

    /// Record the latest position. Ignored while idle.
    pub fn track(&mut self, x: f32) {
        if let DragState::Dragging { last_x, .. } = &mut self.state {
            *last_x = x;
        }
    }

    /// Leave `Dragging`. Returns `start_x - end_x`, or `None` if idle.
    pub fn end(&mut self, x: Option<f32>) -> Option<f32> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging { start_x, last_x } => Some(start_x - x.unwrap_or(last_x)),
        }
    }

    /// Abandon the session without a result.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }
}

/// Turns raw input events into navigation requests.
#[derive(Debug, Clone)]
pub struct GestureNormalizer {
    pointer: DragTracker,
    touch: DragTracker,
    /// Minimum horizontal travel, exclusive, for a drag to navigate.
    threshold: f32,
    /// Set when a drag just navigated; swallows the click the browser
    /// synthesizes on release.
    suppress_click: bool,
}

impl GestureNormalizer {
    pub fn new(threshold: f32) -> Self {
        Self {
            pointer: DragTracker::new(),
            touch: DragTracker::new(),
            threshold,
            suppress_click: false,
        }
    }

    /// Whether either channel is mid-drag.
    pub fn is_dragging(&self) -> bool {
        self.pointer.is_dragging() || self.touch.is_dragging()
    }

    /// Direction for a drag that travelled `diff = start_x - end_x`.
    pub fn classify(&self, diff: f32) -> Option<Direction> {
        if diff > self.threshold {
            Some(Direction::Next)
        } else if diff < -self.threshold {
            Some(Direction::Prev)
        } else {
            None
        }
    }

    /// Feed one event. Returns the navigation it produces, if any.
    pub fn handle(&mut self, event: &InputEvent) -> Option<Navigation> {
        let suppress_click = std::mem::take(&mut self.suppress_click);

        match *event {
            InputEvent::KeyDown { key } => match key {
                Key::ArrowLeft => Some(Navigation::Step(Direction::Prev)),
                Key::ArrowRight => Some(Navigation::Step(Direction::Next)),
                Key::Other => None,
            },
            InputEvent::Button { direction } => Some(Navigation::Step(direction)),
            InputEvent::CardClick { index } => {
                if suppress_click {
                    debug!("gesture: click on card {} swallowed after drag", index);
                    None
                } else {
                    Some(Navigation::Jump(index))
                }
            }
            InputEvent::DragStart { source, x } => {
                self.channel(source).start(x);
                None
            }
            InputEvent::DragMove { source, x } => {
                self.channel(source).track(x);
                // Keep the flag alive across stray moves between release and click
                self.suppress_click = suppress_click;
                None
            }
            InputEvent::DragEnd { source, x } => {
                let diff = self.channel(source).end(x)?;
                let direction = self.classify(diff)?;
                self.suppress_click = true;
                Some(Navigation::Step(direction))
            }
            InputEvent::DragCancel { source } => {
                self.channel(source).cancel();
                None
            }
        }
    }

    fn channel(&mut self, source: DragSource) -> &mut DragTracker {
        match source {
            DragSource::Pointer => &mut self.pointer,
            DragSource::Touch => &mut self.touch,
        }
    }
}

impl Default for GestureNormalizer {
    fn default() -> Self {
        Self::new(50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(g: &mut GestureNormalizer, source: DragSource, from: f32, to: f32) -> Option<Navigation> {
        g.handle(&InputEvent::DragStart { source, x: from });
        g.handle(&InputEvent::DragMove { source, x: to });
        g.handle(&InputEvent::DragEnd { source, x: Some(to) })
    }

    #[test]
    fn arrow_keys_step_immediately() {
        let mut g = GestureNormalizer::default();
        assert_eq!(
            g.handle(&InputEvent::KeyDown { key: Key::ArrowLeft }),
            Some(Navigation::Step(Direction::Prev))
        );
        assert_eq!(
            g.handle(&InputEvent::KeyDown { key: Key::ArrowRight }),
            Some(Navigation::Step(Direction::Next))
        );
        assert_eq!(g.handle(&InputEvent::KeyDown { key: Key::Other }), None);
    }

    #[test]
    fn threshold_is_strict() {
        let mut g = GestureNormalizer::default();
        assert_eq!(drag(&mut g, DragSource::Pointer, 200.0, 150.0), None);
        assert_eq!(
            drag(&mut g, DragSource::Pointer, 200.0, 149.0),
            Some(Navigation::Step(Direction::Next))
        );
        assert_eq!(
            drag(&mut g, DragSource::Touch, 200.0, 251.0),
            Some(Navigation::Step(Direction::Prev))
        );
        assert_eq!(drag(&mut g, DragSource::Touch, 200.0, 250.0), None);
    }

    #[test]
    fn move_does_not_navigate() {
        let mut g = GestureNormalizer::default();
        g.handle(&InputEvent::DragStart { source: DragSource::Pointer, x: 500.0 });
        assert_eq!(g.handle(&InputEvent::DragMove { source: DragSource::Pointer, x: 0.0 }), None);
        assert!(g.is_dragging());
    }

    #[test]
    fn end_without_position_uses_last_move() {
        let mut g = GestureNormalizer::default();
        g.handle(&InputEvent::DragStart { source: DragSource::Touch, x: 300.0 });
        g.handle(&InputEvent::DragMove { source: DragSource::Touch, x: 100.0 });
        assert_eq!(
            g.handle(&InputEvent::DragEnd { source: DragSource::Touch, x: None }),
            Some(Navigation::Step(Direction::Next))
        );
    }

    #[test]
    fn tap_without_move_does_not_navigate() {
        let mut g = GestureNormalizer::default();
        g.handle(&InputEvent::DragStart { source: DragSource::Touch, x: 300.0 });
        assert_eq!(g.handle(&InputEvent::DragEnd { source: DragSource::Touch, x: None }), None);
        assert!(!g.is_dragging());
    }

    #[test]
    fn end_while_idle_is_ignored() {
        let mut g = GestureNormalizer::default();
        g.handle(&InputEvent::DragMove { source: DragSource::Pointer, x: 10.0 });
        assert_eq!(g.handle(&InputEvent::DragEnd { source: DragSource::Pointer, x: Some(900.0) }), None);
    }

    #[test]
    fn channels_are_independent() {
        let mut g = GestureNormalizer::default();
        g.handle(&InputEvent::DragStart { source: DragSource::Touch, x: 300.0 });
        g.handle(&InputEvent::DragStart { source: DragSource::Pointer, x: 0.0 });
        g.handle(&InputEvent::DragCancel { source: DragSource::Pointer });
        assert!(g.is_dragging());
        assert_eq!(
            g.handle(&InputEvent::DragEnd { source: DragSource::Touch, x: Some(200.0) }),
            Some(Navigation::Step(Direction::Next))
        );
    }

    #[test]
    fn click_jumps_without_threshold() {
        let mut g = GestureNormalizer::default();
        assert_eq!(g.handle(&InputEvent::CardClick { index: 7 }), Some(Navigation::Jump(7)));
    }

    #[test]
    fn click_after_navigating_drag_is_swallowed() {
        let mut g = GestureNormalizer::default();
        assert!(drag(&mut g, DragSource::Pointer, 400.0, 100.0).is_some());
        assert_eq!(g.handle(&InputEvent::CardClick { index: 3 }), None);
        // Only the one synthesized click is swallowed
        assert_eq!(g.handle(&InputEvent::CardClick { index: 3 }), Some(Navigation::Jump(3)));
    }

    #[test]
    fn click_after_short_drag_still_counts() {
        let mut g = GestureNormalizer::default();
        assert_eq!(drag(&mut g, DragSource::Pointer, 400.0, 390.0), None);
        assert_eq!(g.handle(&InputEvent::CardClick { index: 2 }), Some(Navigation::Jump(2)));
    }

    #[test]
    fn buttons_step() {
        let mut g = GestureNormalizer::default();
        assert_eq!(
            g.handle(&InputEvent::Button { direction: Direction::Prev }),
            Some(Navigation::Step(Direction::Prev))
        );
    }
}
