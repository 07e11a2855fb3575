#![forbid(unsafe_code)]

//! The header controller.
//!
//! [`HeaderController`] owns every piece of interactive header state — the
//! mobile menu with its animation lock, the products accordion, the hover
//! mega menu, scroll-derived viewport flags, the navigation catalog, and
//! the display-only cart counter — and exposes the handler methods a view
//! layer binds to user gestures.
//!
//! All handlers are total: invalid or repeated input degrades to a logged
//! no-op, never an error. Time is injected (`now: Instant`) and timers are
//! deadlines fired by [`poll`](HeaderController::poll), so the controller
//! runs identically under a simulated clock in tests and a real event loop
//! in production. A host loop can sleep until
//! [`next_deadline`](HeaderController::next_deadline).
//!
//! # Example
//!
//! ```rust
//! use std::time::Instant;
//! use storefront_header::{HeaderController, HeaderEvent, StaticContext};
//!
//! let mut header = HeaderController::new(StaticContext);
//! let now = Instant::now();
//! header.handle(HeaderEvent::MenuToggle, now);
//! assert!(header.menu_open());
//! assert!(header.menu_animating());
//! ```

use std::time::Instant;

use tracing::{debug, trace};

use crate::accordion::Accordion;
use crate::catalog::{ProductCategory, default_catalog};
use crate::config::HeaderConfig;
use crate::event::{HeaderEvent, Propagation, TransitionProperty};
use crate::hover::HoverMenu;
use crate::menu::{MenuTransition, MobileMenu};
use crate::platform::Platform;
use crate::viewport::ViewportFlags;

// ---------------------------------------------------------------------------
// HeaderController
// ---------------------------------------------------------------------------

/// Interactive state of the storefront header.
#[derive(Debug)]
pub struct HeaderController<P: Platform> {
    platform: P,
    config: HeaderConfig,
    menu: MobileMenu,
    accordion: Accordion,
    mega: HoverMenu,
    viewport: ViewportFlags,
    catalog: Vec<ProductCategory>,
    cart_item_count: u32,
    /// Whether we registered a transition observer on the platform.
    observing: bool,
}

impl<P: Platform> HeaderController<P> {
    /// Create a controller with the default configuration and catalog.
    #[must_use]
    pub fn new(platform: P) -> Self {
        Self::with_config(platform, HeaderConfig::default())
    }

    /// Create a controller with an explicit configuration.
    ///
    /// In interactive contexts this registers interest in transition-end
    /// notifications; the registration is undone on drop.
    #[must_use]
    pub fn with_config(mut platform: P, config: HeaderConfig) -> Self {
        let catalog = default_catalog();
        let observing = platform.is_interactive();
        if observing {
            platform.observe_transition_end(true);
        }
        Self {
            menu: MobileMenu::new(&config),
            accordion: Accordion::new(catalog.len()),
            mega: HoverMenu::new(config.mega_menu_hide_delay),
            viewport: ViewportFlags::initial(),
            catalog,
            cart_item_count: 0,
            observing,
            platform,
            config,
        }
    }

    /// Replace the navigation catalog (builder, construction time only:
    /// accordion state resets to match the new row count).
    #[must_use]
    pub fn with_catalog(mut self, catalog: Vec<ProductCategory>) -> Self {
        self.accordion = Accordion::new(catalog.len());
        self.catalog = catalog;
        self
    }

    // -----------------------------------------------------------------------
    // Gesture handlers
    // -----------------------------------------------------------------------

    /// Hamburger click: flip the mobile menu unless a transition is in
    /// flight. Closing resets all submenu state.
    pub fn toggle_menu(&mut self, now: Instant) {
        if self.menu.toggle(now) == MenuTransition::Closed {
            self.accordion.reset();
        }
    }

    /// Close the mobile menu (navigation-link click). No-op if already
    /// closed or locked.
    pub fn close_menu(&mut self, now: Instant) {
        if self.menu.close(now) == MenuTransition::Closed {
            self.accordion.reset();
        }
    }

    /// Flip the products section of the mobile menu.
    ///
    /// Ignored while the mobile menu is closed, which keeps the submenu
    /// invariant: the products section is never open when the menu is not.
    pub fn toggle_products_menu(&mut self) {
        if !self.menu.is_open() {
            trace!("products toggle ignored: mobile menu closed");
            return;
        }
        self.accordion.toggle_products();
    }

    /// Toggle one category row of the products accordion.
    ///
    /// Always answers [`Propagation::Stop`]: the view must not let the tap
    /// also reach the enclosing products toggle.
    pub fn toggle_category(&mut self, index: usize) -> Propagation {
        self.accordion.toggle_category(index);
        Propagation::Stop
    }

    /// Pointer entered the mega-menu trigger or panel.
    pub fn show_mega_menu(&mut self) {
        self.mega.enter();
    }

    /// Pointer left the mega-menu trigger or panel.
    pub fn hide_mega_menu(&mut self, now: Instant) {
        self.mega.leave(now);
    }

    /// Viewport scrolled. Recomputes the visual flags; skipped entirely in
    /// non-interactive contexts, where the flags keep their initial values.
    pub fn on_scroll(&mut self, offset_px: u32) {
        if !self.platform.is_interactive() {
            return;
        }
        self.viewport = ViewportFlags::for_offset(offset_px, &self.config);
    }

    /// Request a smooth scroll to the top. No-op outside an interactive
    /// context.
    pub fn scroll_to_top(&mut self) {
        if !self.platform.is_interactive() {
            return;
        }
        debug!("scroll to top requested");
        self.platform.request_scroll_to_top();
    }

    /// The environment reports a finished visual transition.
    pub fn on_transition_end(&mut self, property: TransitionProperty) {
        self.menu.notify_transition_end(property);
    }

    // -----------------------------------------------------------------------
    // Timers
    // -----------------------------------------------------------------------

    /// Fire every due deadline (fallback unlock, mega-menu hide).
    pub fn poll(&mut self, now: Instant) {
        self.menu.poll(now);
        self.mega.poll(now);
    }

    /// The earliest pending deadline, so a host loop knows when to wake.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.menu.unlock_deadline(), self.mega.pending_hide()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }

    // -----------------------------------------------------------------------
    // Event dispatch
    // -----------------------------------------------------------------------

    /// Dispatch one inbound UI event.
    ///
    /// Returns what the view should do with the originating gesture; only
    /// [`HeaderEvent::CategoryToggle`] demands [`Propagation::Stop`].
    pub fn handle(&mut self, event: HeaderEvent, now: Instant) -> Propagation {
        match event {
            HeaderEvent::MenuToggle => self.toggle_menu(now),
            HeaderEvent::MenuClose => self.close_menu(now),
            HeaderEvent::ProductsToggle => self.toggle_products_menu(),
            HeaderEvent::CategoryToggle(index) => return self.toggle_category(index),
            HeaderEvent::MegaMenuEnter => self.show_mega_menu(),
            HeaderEvent::MegaMenuLeave => self.hide_mega_menu(now),
            HeaderEvent::Scroll(offset_px) => self.on_scroll(offset_px),
            HeaderEvent::ScrollToTop => self.scroll_to_top(),
            HeaderEvent::TransitionEnd(property) => self.on_transition_end(property),
            HeaderEvent::Tick => self.poll(now),
        }
        Propagation::Continue
    }

    // -----------------------------------------------------------------------
    // Read surface for the view layer
    // -----------------------------------------------------------------------

    /// Mobile menu visibility.
    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Whether a mobile-menu transition is in flight.
    #[must_use]
    pub fn menu_animating(&self) -> bool {
        self.menu.is_animating()
    }

    /// Products accordion section visibility.
    #[must_use]
    pub fn products_menu_open(&self) -> bool {
        self.accordion.products_open()
    }

    /// The open accordion row, if any (at most one).
    #[must_use]
    pub fn open_category(&self) -> Option<usize> {
        self.accordion.open_category()
    }

    /// Mega-menu panel visibility.
    #[must_use]
    pub fn mega_menu_open(&self) -> bool {
        self.mega.is_open()
    }

    /// Scroll-derived visual flags.
    #[must_use]
    pub fn viewport_flags(&self) -> ViewportFlags {
        self.viewport
    }

    /// Whether the header renders in its condensed "scrolled" style.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.viewport.contains(ViewportFlags::SCROLLED)
    }

    /// Whether the topbar is visible.
    #[must_use]
    pub fn show_topbar(&self) -> bool {
        self.viewport.contains(ViewportFlags::TOPBAR)
    }

    /// Display-only cart counter.
    #[must_use]
    pub fn cart_item_count(&self) -> u32 {
        self.cart_item_count
    }

    /// Update the cart counter (supplied externally in a full system).
    pub fn set_cart_item_count(&mut self, count: u32) {
        self.cart_item_count = count;
    }

    /// The navigation catalog, immutable after construction.
    #[must_use]
    pub fn categories(&self) -> &[ProductCategory] {
        &self.catalog
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Borrow the platform (hosts can inspect recorded requests in tests).
    #[must_use]
    pub fn platform(&self) -> &P {
        &self.platform
    }
}

impl<P: Platform> Drop for HeaderController<P> {
    /// Teardown: unregister the transition observer. Deadlines die with
    /// the controller, so nothing scheduled before drop can fire after it.
    fn drop(&mut self) {
        if self.observing {
            self.platform.observe_transition_end(false);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
