#![allow(missing_docs)]

use serde_json::Value;

/// Inline style declarations, keyed by property name.
pub type Style = serde_json::Map<String, Value>;

/// Everything needed to decorate a link.
#[derive(Debug, Clone, Copy)]
pub struct ActiveDecorationInput<'a> {
    /// Answer of the router's active-match query for the link's location.
    pub is_active: bool,
    pub active_class_name: Option<&'a str>,
    pub active_style: Option<&'a Style>,
    pub base_class_name: &'a str,
    pub base_style: &'a Style,
}

/// Class and style to render a link with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoration {
    pub class_name: String,
    pub style: Style,
}

/// Whether there is any active decoration to apply, which is also when the router needs
/// to be asked if the link is active.
pub fn wants_active_decoration(active_class_name: Option<&str>, active_style: Option<&Style>) -> bool {
    active_class_name.is_some_and(|class| !class.is_empty())
        || active_style.is_some_and(|style| !style.is_empty())
}

/// Adds the active class and style on top of the base ones when the link is active.
pub fn decorate(input: ActiveDecorationInput<'_>) -> Decoration {
    let mut class_name = input.base_class_name.to_owned();
    let mut style = input.base_style.clone();

    if input.is_active {
        if let Some(active) = input.active_class_name.filter(|class| !class.is_empty()) {
            if !class_name.is_empty() {
                class_name.push(' ');
            }
            class_name.push_str(active);
        }

        if let Some(active_style) = input.active_style {
            style.extend(active_style.clone());
        }
    }

    Decoration { class_name, style }
}
