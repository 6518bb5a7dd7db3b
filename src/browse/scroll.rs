//! Near-bottom detection with debounced evaluation.
//!
//! Each scroll event takes a fresh [`DebounceTicket`]. The caller arms a
//! timer for [`ScrollTrigger::delay`] and hands the ticket back when the
//! timer fires; only the newest ticket is evaluated.

use std::time::Duration;

/// Default distance from the bottom, in rows, that counts as "near".
pub const DEFAULT_SCROLL_THRESHOLD: usize = 2;

/// Default quiet period before a scroll event is evaluated.
pub const DEFAULT_SCROLL_DEBOUNCE: Duration = Duration::from_millis(100);

/// Scroll geometry of the output surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// Offset of the first visible row.
    pub scroll_top: usize,
    /// Number of visible rows.
    pub client_height: usize,
    /// Total number of rows.
    pub scroll_height: usize,
}

impl ScrollMetrics {
    /// Returns true when the visible window ends within `threshold` rows of
    /// the bottom.
    #[must_use]
    pub const fn is_near_bottom(self, threshold: usize) -> bool {
        self.scroll_top
            .saturating_add(self.client_height)
            .saturating_add(threshold)
            >= self.scroll_height
    }
}

/// Generation token issued for one scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DebounceTicket(u64);

/// Issues tickets and remembers which one is current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    /// Supersedes any outstanding ticket and returns a new one.
    pub const fn issue(&mut self) -> DebounceTicket {
        self.generation = self.generation.wrapping_add(1);
        DebounceTicket(self.generation)
    }

    /// Returns true when `ticket` is the most recently issued one.
    #[must_use]
    pub const fn is_current(&self, ticket: DebounceTicket) -> bool {
        ticket.0 == self.generation
    }
}

/// Decides when scrolling should load the next page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTrigger {
    threshold: usize,
    delay: Duration,
    debouncer: Debouncer,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD, DEFAULT_SCROLL_DEBOUNCE)
    }
}

impl ScrollTrigger {
    /// Creates a trigger with the given near-bottom threshold and delay.
    #[must_use]
    pub const fn new(threshold: usize, delay: Duration) -> Self {
        Self {
            threshold,
            delay,
            debouncer: Debouncer { generation: 0 },
        }
    }

    /// Returns the debounce delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the near-bottom threshold in rows.
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Records a scroll event, superseding any pending evaluation.
    pub const fn on_scroll(&mut self) -> DebounceTicket {
        self.debouncer.issue()
    }

    /// Evaluates a settled ticket against the current geometry.
    ///
    /// Returns true only when `ticket` is still current and `metrics` is
    /// near the bottom.
    #[must_use]
    pub const fn on_settled(&self, ticket: DebounceTicket, metrics: ScrollMetrics) -> bool {
        self.debouncer.is_current(ticket) && metrics.is_near_bottom(self.threshold)
    }
}
