#![forbid(unsafe_code)]

//! Header: the interactive state machine behind the storefront site header.
//!
//! The header owns all transient UI state for the mobile hamburger menu
//! (with an animation lock around open/close transitions), the mobile
//! products accordion, the desktop hover mega menu, and the scroll-derived
//! visual flags. Rendering, styling, and the real viewport are external
//! collaborators behind the [`Platform`] seam, so the whole crate is a pure
//! state machine that can be driven and tested with a simulated clock.
//!
//! Timers are pull-based: the controller owns deadlines and the host calls
//! [`HeaderController::poll`] when they come due (see
//! [`HeaderController::next_deadline`]). No callback can outlive the
//! controller.

pub mod accordion;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod event;
pub mod hover;
pub mod menu;
pub mod platform;
pub mod viewport;

pub use accordion::Accordion;
pub use catalog::{CategoryItem, ProductCategory, default_catalog};
pub use config::HeaderConfig;
pub use controller::HeaderController;
pub use event::{HeaderEvent, Propagation, TransitionProperty};
pub use hover::HoverMenu;
pub use menu::{MenuTransition, MobileMenu};
pub use platform::{Platform, StaticContext};
pub use viewport::ViewportFlags;
