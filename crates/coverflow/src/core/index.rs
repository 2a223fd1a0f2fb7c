use log::debug;

use crate::api::types::{Direction, MoveOutcome};

/// Sole owner of the current selection.
///
/// Every change goes through [`IndexModel::move_to`]; everything else in the
/// engine reads `current()` and reacts to the returned [`MoveOutcome`].
#[derive(Debug, Clone)]
pub struct IndexModel {
    current: usize,
    len: usize,
    /// Bumped on every applied change.
    generation: u64,
}

impl IndexModel {
    /// Model over `len` cards, starting at index 0.
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len,
            generation: 0,
        }
    }

    /// Model starting at `initial`, falling back to 0 when it is out of range.
    pub fn with_initial(len: usize, initial: usize) -> Self {
        let mut model = Self::new(len);
        if initial < len {
            model.current = initial;
        }
        model
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `target` names a card.
    pub fn in_bounds(&self, target: i64) -> bool {
        target >= 0 && (target as u64) < self.len as u64
    }

    /// Select `target`. Out-of-range targets are rejected, never clamped.
    pub fn move_to(&mut self, target: i64) -> MoveOutcome {
        if !self.in_bounds(target) {
            debug!("index: rejected move to {} (len {})", target, self.len);
            return MoveOutcome::Rejected;
        }
        let target = target as usize;
        if target == self.current {
            return MoveOutcome::Unchanged;
        }
        let from = self.current;
        self.current = target;
        self.generation += 1;
        MoveOutcome::Moved { from, to: target }
    }

    /// Step one card in `direction`.
    pub fn navigate(&mut self, direction: Direction) -> MoveOutcome {
        self.move_to(self.current as i64 + direction.delta())
    }

    /// In-range neighbors within `radius`, ordered -1, +1, -2, +2, ...
    pub fn neighbors(&self, radius: usize) -> Vec<usize> {
        let mut out = Vec::with_capacity(radius * 2);
        for step in 1..=radius as i64 {
            for candidate in [self.current as i64 - step, self.current as i64 + step] {
                if self.in_bounds(candidate) {
                    out.push(candidate as usize);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_moves() {
        let mut m = IndexModel::new(3);
        assert_eq!(m.move_to(-1), MoveOutcome::Rejected);
        assert_eq!(m.move_to(3), MoveOutcome::Rejected);
        assert_eq!(m.current(), 0);
        assert_eq!(m.generation(), 0);

        assert_eq!(m.move_to(2), MoveOutcome::Moved { from: 0, to: 2 });
        assert_eq!(m.current(), 2);
        assert_eq!(m.generation(), 1);
    }

    #[test]
    fn reselect_is_a_noop() {
        let mut m = IndexModel::with_initial(3, 1);
        assert_eq!(m.move_to(1), MoveOutcome::Unchanged);
        assert!(m.move_to(1).applied());
        assert!(!m.move_to(1).changed());
        assert_eq!(m.generation(), 0);
    }

    #[test]
    fn navigate_stops_at_edges() {
        let mut m = IndexModel::new(2);
        assert_eq!(m.navigate(Direction::Prev), MoveOutcome::Rejected);
        assert!(m.navigate(Direction::Next).changed());
        assert_eq!(m.navigate(Direction::Next), MoveOutcome::Rejected);
        assert_eq!(m.current(), 1);
    }

    #[test]
    fn empty_model_rejects_everything() {
        let mut m = IndexModel::new(0);
        assert_eq!(m.move_to(0), MoveOutcome::Rejected);
        assert_eq!(m.navigate(Direction::Next), MoveOutcome::Rejected);
    }

    #[test]
    fn initial_out_of_range_falls_back() {
        assert_eq!(IndexModel::with_initial(3, 7).current(), 0);
    }

    #[test]
    fn neighbors_are_clamped_and_ordered() {
        let m = IndexModel::with_initial(10, 1);
        assert_eq!(m.neighbors(2), vec![0, 2, 3]);
        let m = IndexModel::with_initial(10, 5);
        assert_eq!(m.neighbors(2), vec![4, 6, 3, 7]);
    }
}
