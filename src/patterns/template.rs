use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::Value;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\$\{(\d+)\}").expect("placeholder regex");
}


pub fn placeholder_groups(template: &Value) -> BTreeSet<usize> {
    let mut groups = BTreeSet::new();
    collect_groups(template, &mut groups);
    groups
}

fn collect_groups(value: &Value, groups: &mut BTreeSet<usize>) {
    match value {
        Value::String(text) => {
            for caps in PLACEHOLDER.captures_iter(text) {
                if let Ok(n) = caps[1].parse::<usize>() {
                    groups.insert(n);
                }
            }
        }
        Value::Array(items) => items.iter().for_each(|item| collect_groups(item, groups)),
        Value::Object(map) => map.values().for_each(|item| collect_groups(item, groups)),
        _ => {}
    }
}

/// Fills every `${N}` in the string leaves of `template` with capture
/// group `N`. Groups that did not participate become empty strings.
/// Object keys and non-string leaves are copied as-is.
pub fn interpolate(template: &Value, captures: &Captures<'_>) -> Value {
    match template {
        Value::String(text) => Value::String(substitute(text, captures)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| interpolate(item, captures))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), interpolate(item, captures)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn substitute(text: &str, captures: &Captures<'_>) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|n| captures.get(n))
                .map_or_else(String::new, |m| m.as_str().to_string())
        })
        .into_owned()
}
