#![forbid(unsafe_code)]

//! Mobile hamburger menu with an animation lock.
//!
//! Opening or closing the panel starts a visual transition; while it is in
//! flight the menu is locked and repeated toggle clicks are ignored, so
//! transitions never overlap. The lock is released by whichever comes
//! first:
//!
//! - a transition-completion notification matching the configured visual
//!   property, or
//! - a fallback deadline at transition duration plus grace, fired by
//!   [`poll`](MobileMenu::poll), for environments that never report
//!   completion.
//!
//! At most one fallback deadline is live; acquiring the lock replaces any
//! prior one. Every `open` flip acquires the lock, and the fallback
//! guarantees the lock is eventually released, so no transition can be
//! silently dropped.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::config::HeaderConfig;
use crate::event::TransitionProperty;

/// Outcome of a toggle/close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTransition {
    /// The panel started opening.
    Opened,
    /// The panel started closing. The caller must reset submenu state.
    Closed,
    /// The request was ignored (locked, or already in the requested state).
    Ignored,
}

/// State of the mobile panel: visibility plus the animation lock.
#[derive(Debug, Clone)]
pub struct MobileMenu {
    open: bool,
    /// Fallback unlock deadline. `Some` while the lock is held.
    unlock_at: Option<Instant>,
    anim_lock: Duration,
    unlock_property: TransitionProperty,
}

impl MobileMenu {
    /// Create a closed, unlocked menu.
    #[must_use]
    pub fn new(config: &HeaderConfig) -> Self {
        Self {
            open: false,
            unlock_at: None,
            anim_lock: config.anim_lock(),
            unlock_property: config.unlock_property,
        }
    }

    /// Whether the panel is visible (including while animating).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether an open/close transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.unlock_at.is_some()
    }

    /// The fallback unlock deadline, if the lock is held.
    #[must_use]
    pub fn unlock_deadline(&self) -> Option<Instant> {
        self.unlock_at
    }

    /// Flip the panel, acquiring the lock. Ignored while locked.
    pub fn toggle(&mut self, now: Instant) -> MenuTransition {
        if self.unlock_at.is_some() {
            trace!("menu toggle ignored: transition in flight");
            return MenuTransition::Ignored;
        }
        self.open = !self.open;
        self.unlock_at = Some(now + self.anim_lock);
        debug!(open = self.open, "mobile menu transition started");
        if self.open {
            MenuTransition::Opened
        } else {
            MenuTransition::Closed
        }
    }

    /// Close the panel. Ignored if already closed or locked.
    pub fn close(&mut self, now: Instant) -> MenuTransition {
        if !self.open || self.unlock_at.is_some() {
            trace!("menu close ignored");
            return MenuTransition::Ignored;
        }
        self.toggle(now)
    }

    /// A visual transition finished. Releases the lock (and disarms the
    /// fallback) only when locked and `property` matches the configured
    /// unlock property. Returns `true` when the lock was released.
    pub fn notify_transition_end(&mut self, property: TransitionProperty) -> bool {
        if self.unlock_at.is_none() || property != self.unlock_property {
            return false;
        }
        self.unlock_at = None;
        debug!("animation lock released by transition end");
        true
    }

    /// Fire the fallback deadline if due. Returns `true` when it released
    /// the lock.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.unlock_at {
            Some(deadline) if deadline <= now => {
                self.unlock_at = None;
                debug!("animation lock released by fallback deadline");
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCK: Duration = Duration::from_millis(350);

    fn menu() -> (MobileMenu, Instant) {
        (MobileMenu::new(&HeaderConfig::default()), Instant::now())
    }

    #[test]
    fn toggle_opens_and_locks() {
        let (mut menu, t0) = menu();
        assert_eq!(menu.toggle(t0), MenuTransition::Opened);
        assert!(menu.is_open());
        assert!(menu.is_animating());
        assert_eq!(menu.unlock_deadline(), Some(t0 + LOCK));
    }

    #[test]
    fn toggle_while_locked_is_ignored() {
        let (mut menu, t0) = menu();
        menu.toggle(t0);
        assert_eq!(menu.toggle(t0), MenuTransition::Ignored);
        assert_eq!(menu.toggle(t0 + Duration::from_millis(100)), MenuTransition::Ignored);
        assert!(menu.is_open(), "repeated clicks do not flip state");
    }

    #[test]
    fn fallback_releases_lock() {
        let (mut menu, t0) = menu();
        menu.toggle(t0);
        assert!(!menu.poll(t0 + LOCK - Duration::from_millis(1)));
        assert!(menu.poll(t0 + LOCK));
        assert!(!menu.is_animating());
    }

    #[test]
    fn transition_end_releases_lock_and_disarms_fallback() {
        let (mut menu, t0) = menu();
        menu.toggle(t0);
        assert!(menu.notify_transition_end(TransitionProperty::Opacity));
        assert!(!menu.is_animating());
        assert!(menu.unlock_deadline().is_none());
        // The old deadline must not fire later.
        assert!(!menu.poll(t0 + LOCK));
    }

    #[test]
    fn wrong_property_does_not_unlock() {
        let (mut menu, t0) = menu();
        menu.toggle(t0);
        assert!(!menu.notify_transition_end(TransitionProperty::Transform));
        assert!(!menu.notify_transition_end(TransitionProperty::MaxHeight));
        assert!(menu.is_animating());
    }

    #[test]
    fn transition_end_while_unlocked_is_ignored() {
        let (mut menu, _) = menu();
        assert!(!menu.notify_transition_end(TransitionProperty::Opacity));
    }

    #[test]
    fn close_when_closed_is_ignored() {
        let (mut menu, t0) = menu();
        assert_eq!(menu.close(t0), MenuTransition::Ignored);
        assert!(!menu.is_animating(), "ignored close takes no lock");
    }

    #[test]
    fn close_while_locked_is_ignored() {
        let (mut menu, t0) = menu();
        menu.toggle(t0);
        assert_eq!(menu.close(t0), MenuTransition::Ignored);
        assert!(menu.is_open());
    }

    #[test]
    fn close_follows_the_toggle_close_path() {
        let (mut menu, t0) = menu();
        menu.toggle(t0);
        menu.poll(t0 + LOCK);
        let t1 = t0 + LOCK;
        assert_eq!(menu.close(t1), MenuTransition::Closed);
        assert!(!menu.is_open());
        assert_eq!(menu.unlock_deadline(), Some(t1 + LOCK));
    }

    #[test]
    fn relock_replaces_deadline() {
        let (mut menu, t0) = menu();
        menu.toggle(t0);
        menu.notify_transition_end(TransitionProperty::Opacity);
        let t1 = t0 + Duration::from_millis(500);
        menu.toggle(t1);
        assert_eq!(menu.unlock_deadline(), Some(t1 + LOCK));
    }

    #[test]
    fn custom_unlock_property() {
        let config = HeaderConfig {
            unlock_property: TransitionProperty::MaxHeight,
            ..Default::default()
        };
        let mut menu = MobileMenu::new(&config);
        menu.toggle(Instant::now());
        assert!(!menu.notify_transition_end(TransitionProperty::Opacity));
        assert!(menu.notify_transition_end(TransitionProperty::MaxHeight));
    }
}
