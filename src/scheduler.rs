//! Delayed events for the single-threaded game loop.
//!
//! Events are stored with their due time and handed back strictly in due
//! order; entries due at the same instant come back in scheduling order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

struct Entry<E> {
    due: Instant,
    seq: u64,
    event: E,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-ordered queue of pending timer events.
pub struct TimerQueue<E> {
    entries: BinaryHeap<Reverse<Entry<E>>>,
    next_seq: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            entries: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Queue `event` to fire `delay` after `now`.
    pub fn schedule(&mut self, event: E, delay: Duration, now: Instant) {
        let entry = Entry {
            due: now + delay,
            seq: self.next_seq,
            event,
        };
        self.next_seq += 1;
        self.entries.push(Reverse(entry));
    }

    /// Remove and return the earliest event if it is due at `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<E> {
        let due = self.entries.peek().map(|Reverse(entry)| entry.due)?;
        if due > now {
            return None;
        }
        self.entries.pop().map(|Reverse(entry)| entry.event)
    }

    /// How long until the next event is due, zero if already overdue.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.entries
            .peek()
            .map(|Reverse(entry)| entry.due.saturating_duration_since(now))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
