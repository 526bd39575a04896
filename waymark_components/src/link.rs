//! The `Link` component: an anchor that navigates through the router.
//!
//! ```rust
//! use serde_json::json;
//! use waymark_components::{Link, LinkProps};
//!
//! let props: LinkProps = serde_json::from_value(json!({
//!     "to": "/posts/42",
//!     "activeClassName": "current",
//! }))
//! .unwrap();
//!
//! let rendered = Link::new(props).render(None).unwrap();
//! assert_eq!(rendered.href, None);
//! ```

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use waymark_router::{
    Diagnostic, LegacyExtras, LocationDescriptor, NavigationService, NormalizedLocation, Query,
    ResolveError, RouterContext, TargetSpec, normalize_location, resolve_location,
};

use crate::decoration::{ActiveDecorationInput, Style, decorate, wants_active_decoration};
use crate::interaction::{ClickDecision, InteractionEvent, should_intercept};

/// Callback run on every click, before the link decides what to do with it.
pub type ClickHandler = Box<dyn Fn(&mut dyn InteractionEvent)>;

/// Configuration of a [`Link`], deserializable from camelCase JSON props.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkProps {
    /// Where the link points, relative to the route that renders it unless absolute.
    pub to: TargetSpec,
    /// Deprecated, put the query inside `to` instead.
    pub query: Option<Query>,
    /// Deprecated, put the hash inside `to` instead.
    pub hash: Option<String>,
    /// Deprecated, put the state inside `to` instead.
    pub state: Option<Value>,
    /// Class appended to `class_name` while the link is active.
    pub active_class_name: Option<String>,
    /// Style merged over `style` while the link is active.
    pub active_style: Option<Style>,
    /// Only count as active on an exact match of the location.
    #[serde(default)]
    pub only_active_on_index: bool,
    /// Base class of the anchor.
    #[serde(default)]
    pub class_name: String,
    /// Base inline style of the anchor.
    #[serde(default)]
    pub style: Style,
    /// Browsing context to open the link in, such as `_blank`.
    pub target: Option<String>,
}

impl LinkProps {
    /// Props pointing at `to`, with everything else left empty.
    pub fn new(to: impl Into<TargetSpec>) -> Self {
        Self {
            to: to.into(),
            query: None,
            hash: None,
            state: None,
            active_class_name: None,
            active_style: None,
            only_active_on_index: false,
            class_name: String::new(),
            style: Style::new(),
            target: None,
        }
    }

    fn legacy_extras(&self) -> LegacyExtras {
        LegacyExtras {
            query: self.query.clone(),
            hash: self.hash.clone(),
            state: self.state.clone(),
        }
    }

    fn has_explicit_target(&self) -> bool {
        self.target.as_deref().is_some_and(|target| !target.is_empty())
    }
}

/// Attributes of the rendered anchor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedLink {
    /// Only set when rendered inside a router.
    pub href: Option<String>,
    /// Class, including the active class when it applies.
    pub class_name: String,
    /// Style, including the active style when it applies.
    pub style: Style,
    /// Passed through from [`LinkProps::target`].
    pub target: Option<String>,
    /// Everything noticed while resolving the target.
    pub diagnostics: Vec<Diagnostic>,
}

/// What happened to a click.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    /// How the click was classified.
    pub decision: ClickDecision,
    /// The location pushed to the router, if the click was routed.
    pub location: Option<LocationDescriptor>,
    /// Everything noticed while resolving the target.
    pub diagnostics: Vec<Diagnostic>,
}

/// Anchor resolving its target against the router it is rendered in.
pub struct Link {
    props: LinkProps,
    on_click: Option<ClickHandler>,
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("props", &self.props)
            .field("on_click", &self.on_click.as_ref().map(|_| "<ClickHandler>"))
            .finish()
    }
}

impl Link {
    /// Link without a click handler.
    pub fn new(props: LinkProps) -> Self {
        Self {
            props,
            on_click: None,
        }
    }

    /// Sets the callback run at the start of every click. It may cancel the event to
    /// keep the link from navigating.
    pub fn on_click(mut self, handler: impl Fn(&mut dyn InteractionEvent) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// The props the link was built with.
    pub fn props(&self) -> &LinkProps {
        &self.props
    }

    /// Computes the anchor attributes.
    ///
    /// Outside a router the link renders without an `href` and without active
    /// decoration. Inside one, the target is resolved against the context, turned into
    /// an `href`, and the router is asked whether it is active when there is an active
    /// class or style to apply.
    pub fn render(
        &self,
        router: Option<(&RouterContext<'_>, &dyn NavigationService)>,
    ) -> Result<RenderedLink, ResolveError> {
        let normalized = self.location();

        let mut rendered = RenderedLink {
            href: None,
            class_name: self.props.class_name.clone(),
            style: self.props.style.clone(),
            target: self.props.target.clone(),
            diagnostics: normalized.diagnostic.into_iter().collect(),
        };

        let Some((context, navigator)) = router else {
            return Ok(rendered);
        };

        let resolved = resolve_location(normalized.location, context)?;
        rendered.diagnostics.extend(resolved.diagnostics);
        rendered.href = Some(navigator.create_href(&resolved.location));

        let active_class_name = self.props.active_class_name.as_deref();
        let active_style = self.props.active_style.as_ref();

        if wants_active_decoration(active_class_name, active_style) {
            let is_active =
                navigator.is_active(&resolved.location, self.props.only_active_on_index);

            let decoration = decorate(ActiveDecorationInput {
                is_active,
                active_class_name,
                active_style,
                base_class_name: &self.props.class_name,
                base_style: &self.props.style,
            });

            rendered.class_name = decoration.class_name;
            rendered.style = decoration.style;
        }

        Ok(rendered)
    }

    /// Handles a click on the rendered anchor.
    ///
    /// The click handler runs first. The event is then cancelled if needed, and only
    /// after that is the resolved location pushed to the router. When resolution fails
    /// the event stays cancelled and nothing is pushed.
    pub fn handle_click(
        &self,
        event: &mut dyn InteractionEvent,
        context: &RouterContext<'_>,
        navigator: &dyn NavigationService,
    ) -> Result<ClickOutcome, ResolveError> {
        if let Some(handler) = &self.on_click {
            handler(&mut *event);
        }

        let decision = should_intercept(event, self.props.has_explicit_target());
        tracing::debug!(?decision, "link clicked");

        if decision.prevent_default {
            event.prevent_default();
        }

        if !decision.intercept {
            return Ok(ClickOutcome {
                decision,
                location: None,
                diagnostics: Vec::new(),
            });
        }

        let normalized = self.location();
        let mut diagnostics: Vec<Diagnostic> = normalized.diagnostic.into_iter().collect();

        let resolved = resolve_location(normalized.location, context)?;
        diagnostics.extend(resolved.diagnostics);

        tracing::debug!(pathname = %resolved.location.pathname, "pushing link location");
        navigator.push(&resolved.location);

        Ok(ClickOutcome {
            decision,
            location: Some(resolved.location),
            diagnostics,
        })
    }

    fn location(&self) -> NormalizedLocation {
        normalize_location(self.props.to.clone(), self.props.legacy_extras())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_props_defaults() {
        let props: LinkProps = serde_json::from_value(json!({ "to": "/about" })).unwrap();

        assert_eq!(props, LinkProps::new("/about"));
    }

    #[test]
    fn test_props_require_target() {
        let result = serde_json::from_value::<LinkProps>(json!({ "className": "nav" }));

        assert!(result.is_err());
    }

    #[test]
    fn test_props_from_json() {
        let props: LinkProps = serde_json::from_value(json!({
            "to": { "pathname": "/search", "query": { "q": "rust" } },
            "activeClassName": "active",
            "activeStyle": { "color": "red" },
            "onlyActiveOnIndex": true,
            "className": "nav",
            "target": "_blank"
        }))
        .unwrap();

        assert!(matches!(props.to, TargetSpec::Descriptor(_)));
        assert_eq!(props.active_class_name.as_deref(), Some("active"));
        assert!(props.only_active_on_index);
        assert_eq!(props.class_name, "nav");
        assert!(props.has_explicit_target());
    }

    #[test]
    fn test_empty_target_is_not_explicit() {
        let props = LinkProps {
            target: Some(String::new()),
            ..LinkProps::new("/")
        };

        assert!(!props.has_explicit_target());
    }

    #[test]
    fn test_render_outside_router() {
        let props = LinkProps {
            class_name: "nav".to_owned(),
            active_class_name: Some("active".to_owned()),
            hash: Some("#top".to_owned()),
            ..LinkProps::new("/docs")
        };

        let rendered = Link::new(props).render(None).unwrap();

        assert_eq!(rendered.href, None);
        assert_eq!(rendered.class_name, "nav");
        assert_eq!(
            rendered.diagnostics,
            vec![Diagnostic::DeprecatedUsage {
                fields: vec!["hash"]
            }]
        );
    }

    #[test]
    fn test_debug_hides_handler() {
        let link = Link::new(LinkProps::new("/")).on_click(|_| {});

        assert!(format!("{link:?}").contains("<ClickHandler>"));
    }
}
