#![forbid(unsafe_code)]

//! Header timing and threshold configuration.
//!
//! All timing constants are named and overridable. The defaults reproduce
//! the storefront's stylesheet: the mobile panel animates opacity for
//! 300ms, so the fallback unlock fires at 300ms + 50ms grace if no
//! transition-end notification arrives first.

use std::time::Duration;

use crate::event::TransitionProperty;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Duration of the mobile panel's open/close transition, in milliseconds.
///
/// Must match the transition duration in the header stylesheet.
pub const MENU_ANIM_MS: u64 = 300;

/// Grace added on top of [`MENU_ANIM_MS`] before the fallback unlock fires.
pub const ANIM_GRACE_MS: u64 = 50;

/// Delay before the hover mega menu hides after the pointer leaves.
///
/// Long enough to tolerate the pointer crossing the gap between the trigger
/// and the panel without the menu flickering shut.
pub const MEGA_MENU_HIDE_DELAY_MS: u64 = 120;

/// Scroll offset above which the header renders in its "scrolled" style.
pub const SCROLLED_THRESHOLD_PX: u32 = 10;

/// Scroll offset below which the topbar stays visible.
pub const TOPBAR_THRESHOLD_PX: u32 = 50;

// ---------------------------------------------------------------------------
// HeaderConfig
// ---------------------------------------------------------------------------

/// Configuration for the header state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Visual duration of the mobile panel transition.
    pub menu_anim: Duration,

    /// Grace period added to `menu_anim` for the fallback unlock deadline.
    pub anim_grace: Duration,

    /// Hide delay for the hover mega menu.
    pub mega_menu_hide_delay: Duration,

    /// `is_scrolled` turns on strictly above this offset.
    pub scrolled_threshold_px: u32,

    /// `show_topbar` stays on strictly below this offset.
    pub topbar_threshold_px: u32,

    /// Transition property whose completion releases the animation lock.
    pub unlock_property: TransitionProperty,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            menu_anim: Duration::from_millis(MENU_ANIM_MS),
            anim_grace: Duration::from_millis(ANIM_GRACE_MS),
            mega_menu_hide_delay: Duration::from_millis(MEGA_MENU_HIDE_DELAY_MS),
            scrolled_threshold_px: SCROLLED_THRESHOLD_PX,
            topbar_threshold_px: TOPBAR_THRESHOLD_PX,
            unlock_property: TransitionProperty::Opacity,
        }
    }
}

impl HeaderConfig {
    /// Total duration the animation lock is held when the environment never
    /// reports the transition's completion.
    #[must_use]
    pub fn anim_lock(&self) -> Duration {
        self.menu_anim + self.anim_grace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = HeaderConfig::default();
        assert_eq!(config.menu_anim, Duration::from_millis(300));
        assert_eq!(config.anim_grace, Duration::from_millis(50));
        assert_eq!(config.mega_menu_hide_delay, Duration::from_millis(120));
        assert_eq!(config.scrolled_threshold_px, 10);
        assert_eq!(config.topbar_threshold_px, 50);
        assert_eq!(config.unlock_property, TransitionProperty::Opacity);
    }

    #[test]
    fn anim_lock_is_duration_plus_grace() {
        let config = HeaderConfig::default();
        assert_eq!(config.anim_lock(), Duration::from_millis(350));
    }

    #[test]
    fn overrides_flow_through() {
        let config = HeaderConfig {
            menu_anim: Duration::from_millis(200),
            anim_grace: Duration::from_millis(25),
            ..Default::default()
        };
        assert_eq!(config.anim_lock(), Duration::from_millis(225));
    }
}
