use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;

use crate::location::{LocationDescriptor, Query};

// Everything but the unreserved characters of RFC 3986.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Formats a location as `pathname[?query][#hash]` for use in an `href` attribute.
///
/// Query keys come out sorted. Arrays repeat their key once per item, `null` emits the
/// bare key and nested objects are written as JSON.
pub fn format_href(location: &LocationDescriptor) -> String {
    let mut href = location.pathname.clone();

    if let Some(query) = &location.query {
        let search = format_query(query);
        if !search.is_empty() {
            href.push('?');
            href.push_str(&search);
        }
    }

    if let Some(hash) = location.hash.as_deref().filter(|hash| !hash.is_empty()) {
        if !hash.starts_with('#') {
            href.push('#');
        }
        href.push_str(hash);
    }

    href
}

fn format_query(query: &Query) -> String {
    let mut keys: Vec<&String> = query.keys().collect();
    keys.sort();

    let mut pairs = Vec::new();

    for key in keys {
        let key_component = encode(key);

        match &query[key.as_str()] {
            Value::Array(items) => {
                for item in items {
                    push_pair(&mut pairs, &key_component, item);
                }
            }
            value => push_pair(&mut pairs, &key_component, value),
        }
    }

    pairs.join("&")
}

fn push_pair(pairs: &mut Vec<String>, key: &str, value: &Value) {
    match value {
        Value::Null => pairs.push(key.to_owned()),
        Value::String(text) => pairs.push(format!("{key}={}", encode(text))),
        other => pairs.push(format!("{key}={}", encode(&other.to_string()))),
    }
}

fn encode(component: &str) -> String {
    utf8_percent_encode(component, QUERY_COMPONENT).to_string()
}
