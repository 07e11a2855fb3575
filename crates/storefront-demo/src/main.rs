#![forbid(unsafe_code)]

//! Scripted walkthrough of the storefront header and registration form.
//!
//! Replays a typical user session against a simulated clock: hammering the
//! hamburger button during the open animation, browsing the products
//! accordion, hovering across the mega-menu gap, scrolling the page, and
//! finally registering an account through the stub API. Run with
//! `RUST_LOG=debug` to watch the state transitions.

use std::time::{Duration, Instant};

use tracing::info;
use tracing_subscriber::EnvFilter;

use storefront_form::{RegistrationApi, RegistrationForm, StubApi};
use storefront_header::{
    HeaderController, HeaderEvent, Platform, TransitionProperty,
};

/// Interactive platform for the walkthrough: honors scroll requests by
/// logging them.
#[derive(Debug, Default)]
struct DemoViewport {
    scroll_requests: u32,
}

impl Platform for DemoViewport {
    fn is_interactive(&self) -> bool {
        true
    }

    fn request_scroll_to_top(&mut self) {
        self.scroll_requests += 1;
        info!("viewport: smooth scroll to top");
    }

    fn observe_transition_end(&mut self, enabled: bool) {
        info!(enabled, "viewport: transition observer");
    }
}

fn header_session() {
    let mut header = HeaderController::new(DemoViewport::default());
    header.set_cart_item_count(3);

    let t0 = Instant::now();
    let at = |ms: u64| t0 + Duration::from_millis(ms);

    info!(
        categories = header.categories().len(),
        cart = header.cart_item_count(),
        "header ready"
    );

    // An impatient user hammers the hamburger during the open animation.
    for ms in [0, 40, 80] {
        header.handle(HeaderEvent::MenuToggle, at(ms));
    }
    info!(
        open = header.menu_open(),
        animating = header.menu_animating(),
        "after three rapid clicks"
    );

    // The browser reports the opacity transition finished.
    header.handle(HeaderEvent::TransitionEnd(TransitionProperty::Opacity), at(300));
    info!(animating = header.menu_animating(), "after transition end");

    // Browse the products accordion. A real view layer would honor the
    // propagation directive; here we log it.
    header.handle(HeaderEvent::ProductsToggle, at(400));
    for (index, ms) in [(0usize, 450u64), (3, 500)] {
        let propagation = header.handle(HeaderEvent::CategoryToggle(index), at(ms));
        info!(index, stop_propagation = propagation.is_stop(), "category tap");
    }
    info!(open_category = ?header.open_category(), "browsing categories");

    // Tap a link: the menu closes and this time the browser never reports
    // completion, so the fallback deadline releases the lock.
    header.handle(HeaderEvent::MenuClose, at(600));
    if let Some(deadline) = header.next_deadline() {
        header.handle(HeaderEvent::Tick, deadline);
    }
    info!(
        open = header.menu_open(),
        animating = header.menu_animating(),
        products = header.products_menu_open(),
        "after close + fallback unlock"
    );

    // Desktop hover: the pointer dips out of the trigger on its way to the
    // panel; re-entering cancels the pending hide.
    header.handle(HeaderEvent::MegaMenuEnter, at(2000));
    header.handle(HeaderEvent::MegaMenuLeave, at(2030));
    header.handle(HeaderEvent::MegaMenuEnter, at(2090));
    header.handle(HeaderEvent::Tick, at(3000));
    info!(mega = header.mega_menu_open(), "after hover flicker");
    header.handle(HeaderEvent::MegaMenuLeave, at(3100));
    header.handle(HeaderEvent::Tick, at(3220));
    info!(mega = header.mega_menu_open(), "after leaving for good");

    // Scroll sweep.
    for offset in [5u32, 30, 80] {
        header.handle(HeaderEvent::Scroll(offset), at(4000));
        info!(
            offset,
            scrolled = header.is_scrolled(),
            topbar = header.show_topbar(),
            "scroll"
        );
    }
    header.handle(HeaderEvent::ScrollToTop, at(4200));
}

fn registration_session() {
    let mut form = RegistrationForm::new();
    form.set_full_name("Al");
    form.set_email("ana@@example.com");
    form.set_password("short");

    match form.validate() {
        Ok(_) => unreachable!("the first attempt is deliberately invalid"),
        Err(errors) => {
            for error in &errors {
                info!(%error, "field error");
            }
        }
    }

    form.set_full_name("Ana María");
    form.set_email("ana@example.com");
    form.set_phone("+56 9 1234 5678");
    form.set_password("hunter2hunter2");
    form.set_cookie_analytics(true);

    let payload = form.validate().expect("second attempt is valid");
    let mut api = StubApi::new();
    api.submit(&payload).expect("stub never fails");
    let json = serde_json::to_string_pretty(&payload).expect("payload serializes");
    println!("{json}");
    info!(submissions = api.submitted().len(), "registration done");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    header_session();
    registration_session();
}
