#![forbid(unsafe_code)]

//! Canonical header events.
//!
//! [`HeaderEvent`] is the inbound UI-event contract: the view layer maps
//! raw gestures (clicks, pointer enter/leave, scroll) onto these variants
//! and feeds them to [`HeaderController::handle`]. The return value tells
//! the view whether the originating gesture may continue to propagate to
//! enclosing handlers.
//!
//! [`HeaderController::handle`]: crate::controller::HeaderController::handle

/// Visual property named by a transition-completion notification.
///
/// The animation lock on the mobile menu is released only when the finished
/// transition matches the property configured in
/// [`HeaderConfig::unlock_property`](crate::config::HeaderConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionProperty {
    /// Opacity fade (the mobile panel's open/close transition).
    Opacity,
    /// Translate/scale transform.
    Transform,
    /// Max-height collapse (accordion-style reveals).
    MaxHeight,
}

/// An inbound UI event handled by the header controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderEvent {
    /// Hamburger button clicked.
    MenuToggle,
    /// A navigation link inside the open mobile menu was clicked.
    MenuClose,
    /// The products section header in the mobile menu was tapped.
    ProductsToggle,
    /// A category row inside the products accordion was tapped.
    ///
    /// Handling this event always yields [`Propagation::Stop`]: the tap must
    /// not also reach the enclosing products toggle.
    CategoryToggle(usize),
    /// Pointer entered the mega-menu trigger or panel.
    MegaMenuEnter,
    /// Pointer left the mega-menu trigger or panel.
    MegaMenuLeave,
    /// Viewport scrolled to the given offset in pixels.
    Scroll(u32),
    /// Scroll-to-top affordance clicked.
    ScrollToTop,
    /// The environment reports a finished visual transition.
    TransitionEnd(TransitionProperty),
    /// A scheduled deadline may have come due; fire pending timers.
    Tick,
}

/// Whether the originating gesture may continue to propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Let enclosing handlers see the gesture.
    Continue,
    /// The view must stop propagation of the gesture.
    Stop,
}

impl Propagation {
    /// `true` when the view must stop propagation.
    #[must_use]
    pub fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}
