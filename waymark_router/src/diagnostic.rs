use thiserror::Error;

/// Non-fatal condition noticed while preparing a link location.
///
/// Diagnostics never stop resolution. They are logged through `tracing` when raised and
/// handed back to the caller next to the value they concern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// The current route was not part of the matched chain, so the whole chain was
    /// composed instead.
    #[error("route '{route_path}' is not part of the matched route chain, composing the full chain")]
    AmbiguousRouteChain {
        /// Path fragment of the missing route.
        route_path: String,
    },

    /// Location fields were passed next to the target instead of inside it.
    #[error(
        "the {} link fields are deprecated, pass them inside the target location instead",
        .fields.join("/")
    )]
    DeprecatedUsage {
        /// Names of the fields that were set, in `query`, `hash`, `state` order.
        fields: Vec<&'static str>,
    },
}
