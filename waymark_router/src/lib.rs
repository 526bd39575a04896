//! Location resolution for links inside nested routes.
//!
//! A link rendered by a nested route may point somewhere relative to that route. The
//! pieces in this crate turn such a target into an absolute location:
//!
//! - [`compose_route_pattern`] joins the path fragments of the matched routes
//! - [`resolve_pathname`] resolves a relative path against that pattern and fills in
//!   the current params
//! - [`normalize_location`] turns a link target into a [`LocationDescriptor`]
//! - [`resolve_location`] ties these together for a given [`RouterContext`]

mod diagnostic;
mod error;
mod href;
mod location;
mod navigation;
mod params;
mod resolve;
mod route;

pub use diagnostic::Diagnostic;
pub use error::ResolveError;
pub use href::format_href;
pub use location::{
    LegacyExtras, LocationDescriptor, NormalizedLocation, Query, TargetSpec, normalize_location,
};
pub use navigation::{NavigationService, ResolvedLocation, RouterContext, resolve_location};
pub use params::{Params, SPLAT, format_pattern};
pub use resolve::{resolve_path, resolve_pathname};
pub use route::{ComposedPattern, Route, RouteDefinition, compose_route_pattern};
