/// A single-slot deferred action driven by frame ticks.
///
/// Scheduling replaces whatever was pending, so only the most recent value
/// is ever delivered. Each schedule gets a new generation number.
#[derive(Debug)]
pub struct Deferred<T> {
    /// Delay before a scheduled value fires, in milliseconds.
    delay_ms: f32,
    pending: Option<Pending<T>>,
    generation: u64,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    remaining_ms: f32,
}

impl<T> Deferred<T> {
    pub fn new(delay_ms: f32) -> Self {
        Self {
            delay_ms,
            pending: None,
            generation: 0,
        }
    }

    /// Schedule `value`, superseding any pending one. Returns its generation.
    pub fn schedule(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.pending = Some(Pending {
            value,
            remaining_ms: self.delay_ms,
        });
        self.generation
    }

    /// Drop the pending value. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Advance time by `dt_ms`. Returns the value once its delay has elapsed.
    pub fn advance(&mut self, dt_ms: f32) -> Option<T> {
        let pending = self.pending.as_mut()?;
        pending.remaining_ms -= dt_ms;
        if pending.remaining_ms > 0.0 {
            return None;
        }
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_delay() {
        let mut d = Deferred::new(300.0);
        d.schedule(4);
        assert_eq!(d.advance(100.0), None);
        assert_eq!(d.advance(199.0), None);
        assert_eq!(d.advance(1.0), Some(4));
        assert!(!d.is_pending());
        assert_eq!(d.advance(1000.0), None);
    }

    #[test]
    fn reschedule_supersedes() {
        let mut d = Deferred::new(300.0);
        let first = d.schedule(1);
        d.advance(250.0);
        let second = d.schedule(2);
        assert!(second > first);
        // The first value would have fired here
        assert_eq!(d.advance(100.0), None);
        assert_eq!(d.advance(200.0), Some(2));
    }

    #[test]
    fn cancel_drops_pending() {
        let mut d = Deferred::new(10.0);
        d.schedule("x");
        assert!(d.cancel());
        assert!(!d.cancel());
        assert_eq!(d.advance(20.0), None);
    }

    #[test]
    fn zero_delay_fires_on_next_advance() {
        let mut d = Deferred::new(0.0);
        d.schedule(());
        assert_eq!(d.advance(0.0), Some(()));
    }
}
