//! One-shot deferred actions, the host-independent stand-in for `setTimeout`.

use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

/// Identifies a scheduled action so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Deferred actions ordered by deadline; actions sharing a deadline fire in
/// the order they were scheduled.
#[derive(Debug)]
pub struct TimerQueue<T> {
    pending: BTreeMap<(Instant, u64), T>,
    deadlines: HashMap<u64, Instant>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, action: T) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;

        let deadline = now + delay;
        self.pending.insert((deadline, id), action);
        self.deadlines.insert(id, deadline);
        TimerHandle(id)
    }

    /// Drops a pending action. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle.0) {
            Some(deadline) => self.pending.remove(&(deadline, handle.0)).is_some(),
            None => false,
        }
    }

    /// Removes and returns the earliest action due at `now`, with its deadline.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, T)> {
        let (&(deadline, _), _) = self.pending.first_key_value()?;
        if deadline > now {
            return None;
        }
        let ((deadline, id), action) = self.pending.pop_first()?;
        self.deadlines.remove(&id);
        Some((deadline, action))
    }

    pub fn deadline(&self, handle: TimerHandle) -> Option<Instant> {
        self.deadlines.get(&handle.0).copied()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.deadlines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(t0, ms(300), "late");
        timers.schedule(t0, ms(100), "early");
        timers.schedule(t0, ms(100), "early-second");

        assert_eq!(timers.pop_due(t0 + ms(50)), None);
        assert_eq!(timers.pop_due(t0 + ms(400)), Some((t0 + ms(100), "early")));
        assert_eq!(timers.pop_due(t0 + ms(400)), Some((t0 + ms(100), "early-second")));
        assert_eq!(timers.pop_due(t0 + ms(400)), Some((t0 + ms(300), "late")));
        assert!(timers.is_empty());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        let handle = timers.schedule(t0, ms(100), ());

        assert_eq!(timers.deadline(handle), Some(t0 + ms(100)));
        assert!(timers.cancel(handle));
        assert!(!timers.cancel(handle));
        assert_eq!(timers.deadline(handle), None);
        assert_eq!(timers.pop_due(t0 + ms(200)), None);
    }

    #[test]
    fn test_zero_delay_is_due_immediately() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        let handle = timers.schedule(t0, Duration::ZERO, 7);

        assert_eq!(timers.deadline(handle), Some(t0));
        assert_eq!(timers.pop_due(t0), Some((t0, 7)));
    }

    #[test]
    fn test_cancel_after_fire_reports_false() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        let handle = timers.schedule(t0, ms(10), ());
        timers.pop_due(t0 + ms(10));
        assert!(!timers.cancel(handle));
        assert_eq!(timers.len(), 0);
    }
}
