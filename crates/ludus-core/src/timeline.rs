//! Virtual-time event queue for animated multi-step sequences.
//!
//! Dice animation, step-by-step movement and card flips are all timed
//! choreography. Rather than chains of wall-clock timers, the choreography is
//! an explicit queue against a virtual clock: an engine schedules events, a
//! driver advances the clock and feeds the due events back in. A real-time
//! front-end sleeps until [`Timeline::next_due`]; tests call
//! [`Timeline::fast_forward`] and get the exact same ordering.
//!
//! Events fire strictly in schedule order: earlier deadline first, insertion
//! order breaking ties. Once scheduled, an event cannot be cancelled
//! individually; the only cancellation is a whole-queue [`Timeline::clear`]
//! on game reset.

use std::collections::BinaryHeap;
use tracing::trace;

struct Entry<E> {
    due_ms: u64,
    seq: u64,
    event: E,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    // Reversed so the max-heap pops the earliest (deadline, seq) first.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue of events against a virtual millisecond clock.
pub struct Timeline<E> {
    now_ms: u64,
    next_seq: u64,
    queue: BinaryHeap<Entry<E>>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Timeline {
            now_ms: 0,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// True when nothing is pending.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Schedule `event` to fire `delay_ms` after the current virtual time.
    pub fn schedule_in(&mut self, delay_ms: u64, event: E) {
        let due_ms = self.now_ms + delay_ms;
        trace!("[TIMELINE] schedule at {due_ms}ms (now {}ms)", self.now_ms);
        self.queue.push(Entry {
            due_ms,
            seq: self.next_seq,
            event,
        });
        self.next_seq += 1;
    }

    /// Deadline of the earliest pending event, if any.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|e| e.due_ms)
    }

    /// Advance the clock to `t_ms` (no-op backwards) and return every event
    /// that came due, in firing order.
    pub fn advance_to(&mut self, t_ms: u64) -> Vec<E> {
        if t_ms > self.now_ms {
            self.now_ms = t_ms;
        }
        let mut fired = Vec::new();
        while self
            .queue
            .peek()
            .is_some_and(|e| e.due_ms <= self.now_ms)
        {
            let entry = self.queue.pop().expect("peeked entry");
            trace!("[TIMELINE] fire due {}ms", entry.due_ms);
            fired.push(entry.event);
        }
        fired
    }

    /// Advance the clock by `dt_ms`.
    pub fn advance(&mut self, dt_ms: u64) -> Vec<E> {
        self.advance_to(self.now_ms + dt_ms)
    }

    /// Jump the clock past every pending deadline and return all events in
    /// firing order.
    pub fn fast_forward(&mut self) -> Vec<E> {
        match self.queue.iter().map(|e| e.due_ms).max() {
            Some(last) => self.advance_to(last),
            None => Vec::new(),
        }
    }

    /// Drop everything pending without firing. Virtual time keeps its value.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
