//! Scroll position tracking and debounced prefetch probing.
//!
//! The viewport scrolls over the window in virtual pixels (one list row is
//! [`ITEM_HEIGHT`] px, the viewport [`WINDOW_HEIGHT`] px). Scroll events
//! produce a [`ScrollProbe`] recording where the viewport landed and which
//! way it traveled; probes are coalesced by a trailing-edge [`Debouncer`]
//! and the surviving probe is checked against the near-top / near-bottom
//! thresholds to decide whether to prefetch.

use std::time::{Duration, Instant};

use crate::config::{ITEM_HEIGHT, WINDOW_HEIGHT};
use crate::window::FetchDirection;

/// Direction of travel reported by a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Travel {
    /// Toward the end of the list
    Forward,
    /// Toward the start of the list
    Backward,
}

/// A scroll observation: where the viewport is and which way it moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollProbe {
    /// Viewport offset in virtual pixels after the event
    pub offset: f64,
    /// Direction the viewport traveled
    pub travel: Travel,
}

/// Viewport offset in virtual pixels, clamped to the scrollable content.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollPosition {
    offset: f64,
}

impl ScrollPosition {
    /// Start at the top of the content.
    pub fn new() -> Self {
        Self { offset: 0.0 }
    }

    /// Current offset in virtual pixels.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Apply a scroll delta against content of `item_count` rows.
    ///
    /// The offset is clamped to `[0, item_count * ITEM_HEIGHT - WINDOW_HEIGHT]`;
    /// content shorter than the viewport cannot scroll at all. Returns a
    /// probe only when the viewport actually moved, so scrolling against
    /// an edge produces no event.
    pub fn scroll_by(&mut self, delta: f64, item_count: usize) -> Option<ScrollProbe> {
        let max = (item_count as f64 * ITEM_HEIGHT - WINDOW_HEIGHT).max(0.0);
        let target = (self.offset + delta).clamp(0.0, max);

        if target == self.offset {
            return None;
        }

        let travel = if target > self.offset {
            Travel::Forward
        } else {
            Travel::Backward
        };
        self.offset = target;

        Some(ScrollProbe { offset: target, travel })
    }
}

/// Trailing-edge debouncer for scroll probes.
///
/// Each recorded probe replaces the pending one and restarts the quiet
/// interval; polling at or past the deadline yields the last probe exactly
/// once. There is no cancellation beyond this cancel-and-reschedule cycle.
#[derive(Debug)]
pub struct Debouncer {
    interval: Duration,
    pending: Option<ScrollProbe>,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            deadline: None,
        }
    }

    /// Record a probe, replacing any pending one and restarting the timer.
    pub fn record(&mut self, probe: ScrollProbe, now: Instant) {
        self.pending = Some(probe);
        self.deadline = Some(now + self.interval);
    }

    /// Yield the trailing probe once the quiet interval has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<ScrollProbe> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            },
            _ => None,
        }
    }
}

/// Decide whether a debounced probe should trigger a prefetch.
///
/// Forward travel within 1.5 viewport-heights of the bottom asks for the
/// next page; backward travel within 0.2 viewport-heights of the top asks
/// for the previous one. Travel direction must match the edge.
pub fn prefetch_direction(probe: &ScrollProbe, item_count: usize) -> Option<FetchDirection> {
    let near_bottom = probe.offset >= item_count as f64 * ITEM_HEIGHT - WINDOW_HEIGHT * 1.5;
    let near_top = probe.offset <= WINDOW_HEIGHT * 0.2;

    match probe.travel {
        Travel::Forward if near_bottom => Some(FetchDirection::Next),
        Travel::Backward if near_top => Some(FetchDirection::Prev),
        _ => None,
    }
}

// Include tests module
#[path = "scroll_tests.rs"]
mod tests;
