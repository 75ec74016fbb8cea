//! Helpers for turning one delimited setting string into structured values.
//!
//! A configuration source hands out raw strings; these split a single string such as
//! `"red, green, blue"` or `"host;db01, port;5432"` into a list or a [`Mapping`].

use crate::mapping::Mapping;

pub const DEFAULT_LIST_SEPARATOR: &str = ",";
pub const DEFAULT_PAIR_SEPARATOR: &str = ";";

/// Split `text` on `separator`, trimming each item.
///
/// Blank text yields an empty list. An empty separator yields the trimmed text as the
/// only item.
pub fn split_list(text: &str, separator: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    if separator.is_empty() {
        return vec![text.trim().to_string()];
    }
    text.split(separator)
        .map(|item| item.trim().to_string())
        .collect()
}

/// Split `text` into items on `list_separator`, then each item into a key and a value on
/// `pair_separator`.
///
/// Keys and values are trimmed. An item with no pair separator maps its key to `""`.
/// Only the first two parts of an item are used. Blank items are skipped, and the first
/// occurrence of a repeated key wins.
///
/// ```
/// use multival_core::settings::split_pairs;
///
/// let m = split_pairs("host;db01, port;5432, debug", ",", ";");
/// assert_eq!(m.get_as_string("host"), "db01");
/// assert_eq!(m.get_as_i32("port"), 5432);
/// assert_eq!(m.get_as_string("debug"), "");
/// ```
pub fn split_pairs(text: &str, list_separator: &str, pair_separator: &str) -> Mapping {
    let mut mapping = Mapping::new();
    for item in split_list(text, list_separator) {
        let (key, value) = split_pair(&item, pair_separator);
        if key.is_empty() || mapping.contains_key(key) {
            continue;
        }
        mapping.insert(key, value);
    }
    mapping
}

fn split_pair<'a>(item: &'a str, separator: &str) -> (&'a str, &'a str) {
    if separator.is_empty() {
        return (item.trim(), "");
    }
    let mut parts = item.split(separator);
    let key = parts.next().unwrap_or_default();
    let value = parts.next().unwrap_or_default();
    (key.trim(), value.trim())
}
