//! AngularJS `ng-class` binding resolver.
//!
//! `ng-class` applies classes at render time, so the static `class="…"` rule
//! never sees them. Two literal forms are understood:
//!
//! - object form: `ng-class="{active: isActive, 'is-open': open}"` yields the keys
//! - array form: `ng-class="['a', 'b']"` yields the string elements
//!
//! Anything else (plain expressions, ternaries, malformed literals) contributes
//! nothing. A bad occurrence never affects the others.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::{Regex, RegexBuilder};
use serde_json::Value;

/// `ng-class="…"` or `ng-class='…'`, also matching `data-ng-class`.
static NG_CLASS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r#"ng-class\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// A key directly after `{` or `,`, optionally quoted, followed by `:`.
/// Array literals never match, which is how the two forms are told apart.
static OBJECT_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[{,]\s*('[^']*'|"[^"]*"|[^\s'",{}:\[\]]+)\s*:"#).unwrap()
});

/// Collect every class name bound through `ng-class` in `corpus`.
pub fn resolve(corpus: &str) -> Vec<String> {
    let mut classes = IndexSet::new();

    for caps in NG_CLASS_REGEX.captures_iter(corpus) {
        let Some(value) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        classes.extend(resolve_binding(value.as_str()));
    }

    classes.into_iter().collect()
}

/// Class names from a single binding value, without the attribute name or quotes.
fn resolve_binding(value: &str) -> Vec<String> {
    let keys = object_keys(value);
    if !keys.is_empty() {
        return keys;
    }
    array_elements(value).unwrap_or_default()
}

fn object_keys(value: &str) -> Vec<String> {
    OBJECT_KEY_REGEX
        .captures_iter(value)
        .filter_map(|caps| caps.get(1))
        .flat_map(|key| {
            let key: String = key
                .as_str()
                .chars()
                .filter(|c| !matches!(c, '\'' | '"' | '{' | '}' | ','))
                .collect();
            key.split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// `None` when the value is not a JSON array once quotes are normalized.
fn array_elements(value: &str) -> Option<Vec<String>> {
    let normalized = value.replace('\'', "\"");
    let Value::Array(items) = serde_json::from_str::<Value>(&normalized).ok()? else {
        return None;
    };

    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .flat_map(str::split_whitespace)
            .map(str::to_string)
            .collect(),
    )
}
