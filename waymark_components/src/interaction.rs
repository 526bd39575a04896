//! Deciding whether a click on a link is handled by the router or by the browser.

#![allow(missing_docs)]

/// The parts of a pointer event a link looks at.
pub trait InteractionEvent {
    /// Pressed button, `0` being the primary one.
    fn button(&self) -> i16;
    fn meta_key(&self) -> bool;
    fn alt_key(&self) -> bool;
    fn ctrl_key(&self) -> bool;
    fn shift_key(&self) -> bool;
    /// Whether the default action was already cancelled, possibly by a click handler.
    fn default_prevented(&self) -> bool;
    fn prevent_default(&mut self);
}

/// Plain click event, for callers that are not running against a DOM.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickEvent {
    pub button: i16,
    pub meta_key: bool,
    pub alt_key: bool,
    pub ctrl_key: bool,
    pub shift_key: bool,
    pub default_prevented: bool,
}

impl ClickEvent {
    /// Unmodified click with the primary button.
    pub fn primary() -> Self {
        Self::default()
    }
}

impl InteractionEvent for ClickEvent {
    fn button(&self) -> i16 {
        self.button
    }

    fn meta_key(&self) -> bool {
        self.meta_key
    }

    fn alt_key(&self) -> bool {
        self.alt_key
    }

    fn ctrl_key(&self) -> bool {
        self.ctrl_key
    }

    fn shift_key(&self) -> bool {
        self.shift_key
    }

    fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// What to do with a click on a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickDecision {
    /// Navigate through the router.
    pub intercept: bool,
    /// Cancel the browser's own handling of the click.
    pub prevent_default: bool,
}

/// Decides how a click on a link is handled.
///
/// Modified clicks and clicks with any other than the primary button are left to the
/// browser, so that "open in new tab" and friends keep working. Links that name an
/// explicit browsing context are left to the browser as well, unless the event was
/// already cancelled. Everything else is cancelled and routed, except when a click
/// handler cancelled the event first, which suppresses the navigation.
pub fn should_intercept(event: &dyn InteractionEvent, has_explicit_target: bool) -> ClickDecision {
    if is_modified(event) || event.button() != 0 {
        return ClickDecision {
            intercept: false,
            prevent_default: false,
        };
    }

    if has_explicit_target {
        return ClickDecision {
            intercept: false,
            prevent_default: event.default_prevented(),
        };
    }

    ClickDecision {
        intercept: !event.default_prevented(),
        prevent_default: true,
    }
}

fn is_modified(event: &dyn InteractionEvent) -> bool {
    event.meta_key() || event.alt_key() || event.ctrl_key() || event.shift_key()
}
