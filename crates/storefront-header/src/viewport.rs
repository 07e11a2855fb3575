#![forbid(unsafe_code)]

//! Scroll-derived visual flags.
//!
//! The topbar and the header's condensed style are pure functions of the
//! scroll offset: no hysteresis, no debounce. Flags are recomputed on every
//! scroll event in interactive contexts and keep their initial value
//! everywhere else.

use bitflags::bitflags;

use crate::config::HeaderConfig;

bitflags! {
    /// Visual flags derived from the viewport scroll offset.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ViewportFlags: u8 {
        /// The page is scrolled past the condensed-header threshold.
        const SCROLLED = 1 << 0;
        /// The topbar is still visible.
        const TOPBAR = 1 << 1;
    }
}

impl ViewportFlags {
    /// Flags before any scroll event has been observed (offset zero).
    #[must_use]
    pub fn initial() -> Self {
        Self::TOPBAR
    }

    /// Recompute flags for a scroll offset in pixels.
    ///
    /// `SCROLLED` is set strictly above `scrolled_threshold_px`; `TOPBAR`
    /// is set strictly below `topbar_threshold_px`.
    #[must_use]
    pub fn for_offset(offset_px: u32, config: &HeaderConfig) -> Self {
        let mut flags = Self::empty();
        if offset_px > config.scrolled_threshold_px {
            flags |= Self::SCROLLED;
        }
        if offset_px < config.topbar_threshold_px {
            flags |= Self::TOPBAR;
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: u32) -> ViewportFlags {
        ViewportFlags::for_offset(offset, &HeaderConfig::default())
    }

    #[test]
    fn initial_shows_topbar_only() {
        let flags = ViewportFlags::initial();
        assert!(flags.contains(ViewportFlags::TOPBAR));
        assert!(!flags.contains(ViewportFlags::SCROLLED));
    }

    #[test]
    fn near_top() {
        let flags = at(5);
        assert!(!flags.contains(ViewportFlags::SCROLLED));
        assert!(flags.contains(ViewportFlags::TOPBAR));
    }

    #[test]
    fn mid_band_shows_both() {
        let flags = at(30);
        assert!(flags.contains(ViewportFlags::SCROLLED));
        assert!(flags.contains(ViewportFlags::TOPBAR));
    }

    #[test]
    fn deep_scroll_drops_topbar() {
        let flags = at(80);
        assert!(flags.contains(ViewportFlags::SCROLLED));
        assert!(!flags.contains(ViewportFlags::TOPBAR));
    }

    #[test]
    fn thresholds_are_strict() {
        // SCROLLED turns on strictly above 10.
        assert!(!at(10).contains(ViewportFlags::SCROLLED));
        assert!(at(11).contains(ViewportFlags::SCROLLED));
        // TOPBAR stays on strictly below 50.
        assert!(at(49).contains(ViewportFlags::TOPBAR));
        assert!(!at(50).contains(ViewportFlags::TOPBAR));
    }

    #[test]
    fn offset_zero_matches_initial() {
        assert_eq!(at(0), ViewportFlags::initial());
    }

    #[test]
    fn custom_thresholds() {
        let config = HeaderConfig {
            scrolled_threshold_px: 0,
            topbar_threshold_px: 1,
            ..Default::default()
        };
        let flags = ViewportFlags::for_offset(1, &config);
        assert!(flags.contains(ViewportFlags::SCROLLED));
        assert!(!flags.contains(ViewportFlags::TOPBAR));
    }
}
