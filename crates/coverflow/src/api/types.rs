use std::fmt;

/// Direction of a single-step navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward index 0.
    Prev,
    /// Toward the last card.
    Next,
}

impl Direction {
    /// Signed index delta for this direction.
    pub fn delta(self) -> i64 {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// Where a navigation request originated.
/// Only `Fragment` changes behavior: it suppresses the outbound URL write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOrigin {
    Keyboard,
    Drag,
    Click,
    Button,
    Fragment,
    Api,
}

/// Outcome of a bounded move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The index changed and every view was re-synchronized.
    Moved { from: usize, to: usize },
    /// The target was already current. Nothing fired.
    Unchanged,
    /// The target was outside `[0, N-1]`. Nothing fired.
    Rejected,
}

impl MoveOutcome {
    /// Whether the target was a valid index (moved or already there).
    pub fn applied(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected)
    }

    /// Whether the current index actually changed.
    pub fn changed(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Enabled state of the previous/next navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl NavState {
    /// Opacity applied to a disabled button.
    pub const DIMMED_OPACITY: f32 = 0.3;

    /// Button state for `index` in a deck of `total` cards.
    /// An empty deck disables both buttons.
    pub fn at(index: usize, total: usize) -> Self {
        if total == 0 {
            return Self::default();
        }
        Self {
            prev_enabled: index > 0,
            next_enabled: index + 1 < total,
        }
    }

    /// Rendered opacity for the previous button.
    pub fn prev_opacity(&self) -> f32 {
        if self.prev_enabled { 1.0 } else { Self::DIMMED_OPACITY }
    }

    /// Rendered opacity for the next button.
    pub fn next_opacity(&self) -> f32 {
        if self.next_enabled { 1.0 } else { Self::DIMMED_OPACITY }
    }
}

/// The `current/total` position indicator. `current` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub current: usize,
    pub total: usize,
}

impl Position {
    pub fn at(index: usize, total: usize) -> Self {
        Self {
            current: if total == 0 { 0 } else { index + 1 },
            total,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}
