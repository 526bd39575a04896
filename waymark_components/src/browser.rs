//! DOM bindings: click events from `web_sys` and navigation through the document.

use wasm_bindgen::JsValue;
use waymark_router::{LocationDescriptor, NavigationService, format_href};

use crate::interaction::InteractionEvent;

/// Name of the event dispatched on the document for every routed click. Its detail
/// holds the target `href`.
pub const NAVIGATE_EVENT: &str = "waymark:navigate";

// Called through the `web_sys` types, the inherent methods would otherwise resolve back
// to this impl.
impl InteractionEvent for web_sys::MouseEvent {
    fn button(&self) -> i16 {
        web_sys::MouseEvent::button(self)
    }

    fn meta_key(&self) -> bool {
        web_sys::MouseEvent::meta_key(self)
    }

    fn alt_key(&self) -> bool {
        web_sys::MouseEvent::alt_key(self)
    }

    fn ctrl_key(&self) -> bool {
        web_sys::MouseEvent::ctrl_key(self)
    }

    fn shift_key(&self) -> bool {
        web_sys::MouseEvent::shift_key(self)
    }

    fn default_prevented(&self) -> bool {
        web_sys::Event::default_prevented(self)
    }

    fn prevent_default(&mut self) {
        web_sys::Event::prevent_default(self);
    }
}

/// Navigation service backed by the browser window.
///
/// Pushing dispatches [`NAVIGATE_EVENT`] for the client router to pick up. Active
/// matching only compares pathnames with `window.location`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    fn dispatch_navigate(href: &str) -> Result<(), JsValue> {
        let event_init = web_sys::CustomEventInit::new();
        event_init.set_detail(&JsValue::from_str(href));

        let custom_event =
            web_sys::CustomEvent::new_with_event_init_dict(NAVIGATE_EVENT, &event_init)?;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("document not found"))?;

        document.dispatch_event(&custom_event)?;

        Ok(())
    }

    fn current_pathname() -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }
}

impl NavigationService for BrowserNavigator {
    fn push(&self, location: &LocationDescriptor) {
        let href = format_href(location);

        if let Err(err) = Self::dispatch_navigate(&href) {
            tracing::warn!(?err, "failed to dispatch navigation to {href}");
        }
    }

    fn create_href(&self, location: &LocationDescriptor) -> String {
        format_href(location)
    }

    fn is_active(&self, location: &LocationDescriptor, index_only: bool) -> bool {
        let Some(current) = Self::current_pathname() else {
            return false;
        };

        pathname_is_active(&current, &location.pathname, index_only)
    }
}

fn pathname_is_active(current: &str, pathname: &str, index_only: bool) -> bool {
    if current == pathname {
        return true;
    }

    if index_only {
        return false;
    }

    let prefix = pathname.trim_end_matches('/');

    current
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('/'))
}
