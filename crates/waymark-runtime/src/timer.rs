#![forbid(unsafe_code)]

//! Deadline queue for cooperative, single-thread suspension.
//!
//! The guide never sleeps on the UI thread. A suspension (settle delay,
//! frame-wait retry) becomes a timer in a [`TimerQueue`]; the host's frame
//! loop fires due timers by calling into the owner with the current time.
//!
//! # Invariants
//!
//! 1. Timers fire in deadline order; equal deadlines fire in schedule order.
//! 2. A timer fires at most once.
//! 3. A cancelled timer never fires.

use web_time::Instant;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<T> {
    due: Instant,
    id: TimerId,
    payload: T,
}

/// A small deadline-ordered queue of payloads.
///
/// Guides keep at most a handful of timers alive, so entries live in a
/// plain vector and lookups are linear.
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `payload` to fire at `due`.
    pub fn schedule(&mut self, due: Instant, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { due, id, payload });
        id
    }

    /// Cancel a timer, returning its payload if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.swap_remove(pos).payload)
    }

    /// Remove and return the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<T> {
        let pos = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(pos, _)| pos)?;
        Some(self.entries.swap_remove(pos).payload)
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keep only the timers whose payload matches `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.entries.retain(|e| keep(&e.payload));
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use web_time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_in_deadline_order() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule(t0 + ms(30), "c");
        q.schedule(t0 + ms(10), "a");
        q.schedule(t0 + ms(20), "b");

        let now = t0 + ms(100);
        assert_eq!(q.pop_due(now), Some("a"));
        assert_eq!(q.pop_due(now), Some("b"));
        assert_eq!(q.pop_due(now), Some("c"));
        assert_eq!(q.pop_due(now), None);
    }

    #[test]
    fn equal_deadlines_fire_in_schedule_order() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        for label in ["first", "second", "third"] {
            q.schedule(t0, label);
        }
        assert_eq!(q.pop_due(t0), Some("first"));
        assert_eq!(q.pop_due(t0), Some("second"));
        assert_eq!(q.pop_due(t0), Some("third"));
    }

    #[test]
    fn not_yet_due_stays_queued() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule(t0 + ms(50), 1);
        assert_eq!(q.pop_due(t0 + ms(49)), None);
        assert_eq!(q.next_deadline(), Some(t0 + ms(50)));
        assert_eq!(q.pop_due(t0 + ms(50)), Some(1));
        assert!(q.is_empty());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        let id = q.schedule(t0, 7);
        assert_eq!(q.cancel(id), Some(7));
        assert_eq!(q.cancel(id), None);
        assert_eq!(q.pop_due(t0 + ms(1)), None);
    }

    #[test]
    fn retain_filters_payloads() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule(t0, 1);
        q.schedule(t0, 2);
        q.schedule(t0, 3);
        q.retain(|n| n % 2 == 1);
        assert_eq!(q.len(), 2);
        q.clear();
        assert_eq!(q.next_deadline(), None);
    }
}
