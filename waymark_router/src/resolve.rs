//! Resolution of relative link targets against the matched route pattern.

use crate::error::ResolveError;
use crate::params::{Params, format_pattern};

/// Resolves `relative` against `base` the way a filesystem path would be.
///
/// An absolute `relative` is returned verbatim. Otherwise `base` is taken as the
/// directory to start from and the segments of `relative` are applied on top of it:
/// `.` and empty segments are skipped, `..` climbs one level but never above the
/// root. The result always starts with `/` and never ends with one, unless it is
/// the root itself.
///
/// - `resolve_path("edit", "/users/:id")` → `"/users/:id/edit"`
/// - `resolve_path("../2", "/users/1")` → `"/users/2"`
/// - `resolve_path("/about", "/users")` → `"/about"`
pub fn resolve_path(relative: &str, base: &str) -> String {
    if relative.starts_with('/') {
        return relative.to_owned();
    }

    let mut segments: Vec<&str> = Vec::new();

    for segment in base.split('/').chain(relative.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            segment => segments.push(segment),
        }
    }

    format!("/{}", segments.join("/"))
}

/// Resolves `relative` against `pattern`, then fills in the placeholders from `params`.
///
/// Fails with [`ResolveError::MissingParameter`] rather than leaving a placeholder in
/// the returned path.
pub fn resolve_pathname(
    relative: &str,
    pattern: &str,
    params: &Params,
) -> Result<String, ResolveError> {
    let resolved = resolve_path(relative, pattern);

    format_pattern(&resolved, params)
}
