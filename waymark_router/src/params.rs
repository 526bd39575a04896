use std::collections::HashMap;

use crate::error::ResolveError;

/// Values bound to the placeholders of the currently matched path.
pub type Params = HashMap<String, String>;

/// Key read for a bare `*` wildcard.
pub const SPLAT: &str = "splat";

/// Replaces every placeholder in `pattern` with its value from `params`.
///
/// Recognised placeholders:
/// - `:name`, where the name starts with an ASCII letter or `_` and continues with
///   ASCII alphanumerics and `_`
/// - `*name`, or a bare `*` which reads the [`SPLAT`] key
///
/// A `:` that is not followed by a name is kept as is, so `10:30` stays literal. Any
/// other character, braces included, is copied through. Values are inserted verbatim.
pub fn format_pattern(pattern: &str, params: &Params) -> Result<String, ResolveError> {
    let mut formatted = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(start) = rest.find([':', '*']) {
        formatted.push_str(&rest[..start]);

        let marker = rest.as_bytes()[start];
        let tail = &rest[start + 1..];

        let (name, consumed) = match (marker, name_len(tail)) {
            (b':', 0) => {
                formatted.push(':');
                rest = tail;
                continue;
            }
            (b'*', 0) => (SPLAT, 0),
            (_, len) => (&tail[..len], len),
        };

        let value = params
            .get(name)
            .ok_or_else(|| ResolveError::MissingParameter {
                name: name.to_owned(),
                pattern: pattern.to_owned(),
            })?;

        formatted.push_str(value);
        rest = &tail[consumed..];
    }

    formatted.push_str(rest);

    Ok(formatted)
}

fn name_len(s: &str) -> usize {
    match s.chars().next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => s
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(s.len()),
        _ => 0,
    }
}
