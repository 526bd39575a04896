//! Matched routes and the composition of their path fragments.
//!
//! The router hands the link a snapshot of the currently matched routes, ordered from
//! the root down to the deepest match. Joining the fragments up to a given route gives
//! the absolute pattern that relative link targets are resolved against.

use std::fmt;

use crate::diagnostic::Diagnostic;

/// A single routing rule in a matched chain.
///
/// Only the path fragment is read. The fragment may hold parameter placeholders such as
/// `:id` or `*path`.
pub trait Route: fmt::Debug {
    /// Path fragment of this route. Defaults to the root path "/".
    fn path(&self) -> &str {
        "/"
    }
}

/// Owned route holding nothing but its path fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition {
    path: String,
}

impl RouteDefinition {
    /// Creates a route for the given path fragment.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Route for RouteDefinition {
    fn path(&self) -> &str {
        &self.path
    }
}

/// Pattern produced by [`compose_route_pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPattern {
    /// Raw concatenation of the fragments; separators are left untouched.
    pub pattern: String,
    /// Set when the current route could not be found in the chain.
    pub diagnostic: Option<Diagnostic>,
}

/// Concatenates the fragments of every route before `route` in `routes`, followed by
/// `route`'s own fragment.
///
/// Routes are compared by identity, not by path. When `route` is not part of the chain
/// the whole chain is concatenated, `route`'s fragment is still appended last, and an
/// [`AmbiguousRouteChain`](Diagnostic::AmbiguousRouteChain) diagnostic is attached.
///
/// ```rust
/// use waymark_router::{Route, RouteDefinition, compose_route_pattern};
///
/// let root = RouteDefinition::new("/");
/// let users = RouteDefinition::new("users/");
/// let user = RouteDefinition::new(":id");
/// let routes: [&dyn Route; 3] = [&root, &users, &user];
///
/// assert_eq!(compose_route_pattern(&routes, &users).pattern, "/users/");
/// assert_eq!(compose_route_pattern(&routes, &user).pattern, "/users/:id");
/// ```
pub fn compose_route_pattern(routes: &[&dyn Route], route: &dyn Route) -> ComposedPattern {
    let mut pattern = String::new();

    for candidate in routes {
        if same_route(*candidate, route) {
            pattern.push_str(route.path());
            tracing::trace!(pattern = %pattern, "composed route pattern");

            return ComposedPattern {
                pattern,
                diagnostic: None,
            };
        }

        pattern.push_str(candidate.path());
    }

    // The current route should always be part of its own chain.
    pattern.push_str(route.path());
    let diagnostic = Diagnostic::AmbiguousRouteChain {
        route_path: route.path().to_owned(),
    };
    tracing::warn!(pattern = %pattern, "{diagnostic}");

    ComposedPattern {
        pattern,
        diagnostic: Some(diagnostic),
    }
}

fn same_route(a: &dyn Route, b: &dyn Route) -> bool {
    std::ptr::addr_eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_up_to_current_route() {
        let root = RouteDefinition::new("/");
        let users = RouteDefinition::new("users/");
        let user = RouteDefinition::new(":id");
        let routes: [&dyn Route; 3] = [&root, &users, &user];

        assert_eq!(compose_route_pattern(&routes, &root).pattern, "/");
        assert_eq!(compose_route_pattern(&routes, &users).pattern, "/users/");
        assert_eq!(compose_route_pattern(&routes, &user).pattern, "/users/:id");
        assert!(compose_route_pattern(&routes, &user).diagnostic.is_none());
    }

    #[test]
    fn test_compose_matches_by_identity_not_path() {
        let first = RouteDefinition::new("a/");
        let second = RouteDefinition::new("a/");
        let leaf = RouteDefinition::new("b");
        let routes: [&dyn Route; 3] = [&first, &second, &leaf];

        assert_eq!(compose_route_pattern(&routes, &second).pattern, "a/a/");
        assert_eq!(compose_route_pattern(&routes, &first).pattern, "a/");
    }

    #[test]
    fn test_compose_stops_at_first_occurrence() {
        let root = RouteDefinition::new("/");
        let repeated = RouteDefinition::new("x/");
        let routes: [&dyn Route; 3] = [&root, &repeated, &repeated];

        assert_eq!(compose_route_pattern(&routes, &repeated).pattern, "/x/");
    }

    #[test]
    fn test_compose_does_not_normalize_separators() {
        let parent = RouteDefinition::new("/users");
        let child = RouteDefinition::new(":id");
        let routes: [&dyn Route; 2] = [&parent, &child];

        assert_eq!(compose_route_pattern(&routes, &child).pattern, "/users:id");
    }

    #[test]
    fn test_compose_falls_back_to_full_chain() {
        let root = RouteDefinition::new("/");
        let users = RouteDefinition::new("users/");
        let stray = RouteDefinition::new("stray");
        let routes: [&dyn Route; 2] = [&root, &users];

        let composed = compose_route_pattern(&routes, &stray);

        assert_eq!(composed.pattern, "/users/stray");
        assert_eq!(
            composed.diagnostic,
            Some(Diagnostic::AmbiguousRouteChain {
                route_path: "stray".to_owned()
            })
        );
    }

    #[test]
    fn test_compose_empty_chain() {
        let stray = RouteDefinition::new("/stray");

        let composed = compose_route_pattern(&[], &stray);

        assert_eq!(composed.pattern, "/stray");
        assert!(composed.diagnostic.is_some());
    }
}
