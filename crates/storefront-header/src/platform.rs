#![forbid(unsafe_code)]

//! Platform capability seam.
//!
//! The header may be constructed in a non-interactive rendering context (a
//! server-side pass with no real viewport). Every operation that touches
//! the ambient viewport goes through [`Platform`] so that the controller
//! itself never has to know which context it is in: in a non-interactive
//! context the capability answers `false` and the controller skips the
//! operation entirely rather than fail.

/// Capabilities the header needs from its rendering environment.
pub trait Platform {
    /// Whether this is an interactive rendering context with a real
    /// viewport (as opposed to a static/server-side render pass).
    fn is_interactive(&self) -> bool;

    /// Request a smooth scroll back to the top of the page.
    ///
    /// Only called in interactive contexts. Default: no-op.
    fn request_scroll_to_top(&mut self) {}

    /// Register (`true`) or unregister (`false`) interest in
    /// transition-completion notifications for the mobile menu panel.
    ///
    /// The controller registers once on construction in interactive
    /// contexts and unregisters on teardown. Hosts that observe
    /// transitions forward completions as
    /// [`HeaderEvent::TransitionEnd`](crate::event::HeaderEvent).
    /// Default: no-op.
    fn observe_transition_end(&mut self, enabled: bool) {
        let _ = enabled;
    }
}

/// A non-interactive rendering context.
///
/// Used for static/server-side passes and as an inert default in tests:
/// scroll state never updates, scroll requests are dropped, and no
/// transition observer is registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContext;

impl Platform for StaticContext {
    fn is_interactive(&self) -> bool {
        false
    }
}
