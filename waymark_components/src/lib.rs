//! Router-aware components.
//!
//! [`Link`] renders an anchor whose target is resolved against the route it lives in,
//! decorates itself when that location is active, and routes plain clicks through a
//! [`NavigationService`](waymark_router::NavigationService) instead of letting the
//! browser reload the page.

mod decoration;
mod interaction;
mod link;

#[cfg(target_arch = "wasm32")]
mod browser;

pub use decoration::{ActiveDecorationInput, Decoration, Style, decorate, wants_active_decoration};
pub use interaction::{ClickDecision, ClickEvent, InteractionEvent, should_intercept};
pub use link::{ClickHandler, ClickOutcome, Link, LinkProps, RenderedLink};

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserNavigator, NAVIGATE_EVENT};

pub use waymark_router;
