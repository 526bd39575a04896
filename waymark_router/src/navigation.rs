//! The router state a link resolves against, and the services it navigates through.

use crate::diagnostic::Diagnostic;
use crate::error::ResolveError;
use crate::location::LocationDescriptor;
use crate::params::Params;
use crate::resolve::resolve_pathname;
use crate::route::{Route, compose_route_pattern};

/// Navigation entry points provided by the router.
///
/// Calls are synchronous. Whatever `push` does afterwards is the router's business.
pub trait NavigationService {
    /// Navigates to `location`.
    fn push(&self, location: &LocationDescriptor);

    /// Renders `location` as an `href` attribute value.
    fn create_href(&self, location: &LocationDescriptor) -> String;

    /// Whether `location` matches the router's current location. With `index_only`,
    /// only an exact match counts.
    fn is_active(&self, location: &LocationDescriptor, index_only: bool) -> bool;
}

/// Snapshot of the router state for a single render or click.
#[derive(Debug, Clone, Copy)]
pub struct RouterContext<'a> {
    /// Matched routes, root first.
    pub routes: &'a [&'a dyn Route],
    /// The route that renders the link.
    pub route: &'a dyn Route,
    /// The router's current location.
    pub location: &'a LocationDescriptor,
    /// Values of the placeholders in the current location.
    pub params: &'a Params,
}

/// Location ready for the navigation service, along with anything noticed on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    /// The location with an absolute pathname.
    pub location: LocationDescriptor,
    /// Diagnostics raised while composing the route pattern.
    pub diagnostics: Vec<Diagnostic>,
}

/// Makes the pathname of `location` absolute.
///
/// Absolute pathnames are kept as they are. Relative ones are resolved against the
/// pattern of the routes leading to `context.route`, with the current params filled in.
pub fn resolve_location(
    mut location: LocationDescriptor,
    context: &RouterContext<'_>,
) -> Result<ResolvedLocation, ResolveError> {
    if location.is_absolute() {
        return Ok(ResolvedLocation {
            location,
            diagnostics: Vec::new(),
        });
    }

    let composed = compose_route_pattern(context.routes, context.route);
    location.pathname = resolve_pathname(&location.pathname, &composed.pattern, context.params)?;

    Ok(ResolvedLocation {
        location,
        diagnostics: composed.diagnostic.into_iter().collect(),
    })
}
