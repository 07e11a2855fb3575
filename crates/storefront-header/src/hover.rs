#![forbid(unsafe_code)]

//! Desktop hover mega menu.
//!
//! Showing is immediate; hiding is deferred by a short delay so the pointer
//! can cross the gap between the trigger and the panel without the menu
//! flickering shut. Re-entering before the delay elapses cancels the
//! pending hide — that cancellation is the anti-flicker contract.
//!
//! The hide delay is a deadline owned by this struct, fired by
//! [`poll`](HoverMenu::poll). At most one hide deadline is live: arming a
//! new one replaces any prior one.

use std::time::{Duration, Instant};

use tracing::trace;

/// State of the hover-triggered mega menu.
#[derive(Debug, Clone)]
pub struct HoverMenu {
    open: bool,
    hide_at: Option<Instant>,
    hide_delay: Duration,
}

impl HoverMenu {
    /// Create a closed mega menu with the given hide delay.
    #[must_use]
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            open: false,
            hide_at: None,
            hide_delay,
        }
    }

    /// Whether the panel is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The pending hide deadline, if one is armed.
    #[must_use]
    pub fn pending_hide(&self) -> Option<Instant> {
        self.hide_at
    }

    /// Pointer entered the trigger or panel: show immediately and cancel
    /// any pending hide.
    pub fn enter(&mut self) {
        if self.hide_at.take().is_some() {
            trace!("pending mega menu hide cancelled");
        }
        self.open = true;
    }

    /// Pointer left: arm the hide deadline, replacing any prior one.
    pub fn leave(&mut self, now: Instant) {
        self.hide_at = Some(now + self.hide_delay);
    }

    /// Fire the hide deadline if due. Returns `true` when the panel hid.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if deadline <= now => {
                self.hide_at = None;
                self.open = false;
                trace!("mega menu hidden");
                true
            }
            _ => false,
        }
    }
}
