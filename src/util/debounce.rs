//! Trailing debounce bookkeeping.
//!
//! The browser layer owns the actual timer and replaces it on every event
//! (dropping a `gloo_timers` `Timeout` cancels it). `Debounce` tracks which
//! scheduled callback is the latest, so a callback that fires anyway after
//! being superseded settles to nothing.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Identifies one scheduled trailing call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Latest-value-wins debounce state.
#[derive(Clone, Debug)]
pub struct Debounce<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self { generation: 0, pending: None }
    }
}

impl<T> Debounce<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new triggering value and supersede any earlier ticket.
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket(self.generation)
    }

    /// Consume the pending value if `ticket` is still the latest.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
