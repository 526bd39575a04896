use thiserror::Error;

/// Failure to turn a link target into a navigable path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A placeholder in the resolved pattern has no value in the params map.
    #[error("missing value for parameter '{name}' in pattern '{pattern}'")]
    MissingParameter {
        /// Name of the placeholder, [`SPLAT`](crate::SPLAT) for a bare `*`.
        name: String,
        /// The pattern being formatted.
        pattern: String,
    },
}
