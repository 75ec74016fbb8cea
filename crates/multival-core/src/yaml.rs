//! YAML documents deserialized straight into a caller-chosen type.
//!
//! Unlike the JSON decoder this path has no safe default for an arbitrary `T`, so
//! failures surface as [`ValueError::Yaml`](crate::ValueError::Yaml).
//!
//! By default key matching is forgiving: every mapping key in the document is folded to
//! snake_case before deserialization, so `fooBar`, `FooBar`, `foo-bar` and `FOO_BAR` all
//! land in a Rust field named `foo_bar`. Folding applies to every mapping in the document,
//! including maps whose keys are data rather than field names; pass
//! `case_sensitive = true` to keep keys verbatim.

use serde::de::DeserializeOwned;
use serde_yaml::value::TaggedValue;
use serde_yaml::Value as YamlValue;

use crate::error::Result;

/// Deserialize a YAML document into `T`.
///
/// # Examples
///
/// ```
/// use serde::Deserialize;
/// use multival_core::deserialize_yaml;
///
/// #[derive(Deserialize)]
/// struct Server {
///     host_name: String,
///     port: u16,
/// }
///
/// let server: Server = deserialize_yaml("hostName: example.org\nPort: 8080\n", false).unwrap();
/// assert_eq!(server.host_name, "example.org");
/// assert_eq!(server.port, 8080);
/// ```
pub fn deserialize_yaml<T: DeserializeOwned>(yaml: &str, case_sensitive: bool) -> Result<T> {
    if case_sensitive {
        return Ok(serde_yaml::from_str(yaml)?);
    }
    let document: YamlValue = serde_yaml::from_str(yaml)?;
    Ok(serde_yaml::from_value(fold_keys(document))?)
}

/// Rewrite every string key in the tree to snake_case.
fn fold_keys(node: YamlValue) -> YamlValue {
    match node {
        YamlValue::Mapping(map) => YamlValue::Mapping(
            map.into_iter()
                .map(|(key, value)| (fold_key(key), fold_keys(value)))
                .collect(),
        ),
        YamlValue::Sequence(items) => {
            YamlValue::Sequence(items.into_iter().map(fold_keys).collect())
        }
        YamlValue::Tagged(tagged) => {
            let TaggedValue { tag, value } = *tagged;
            YamlValue::Tagged(Box::new(TaggedValue {
                tag,
                value: fold_keys(value),
            }))
        }
        other => other,
    }
}

fn fold_key(key: YamlValue) -> YamlValue {
    match key {
        YamlValue::String(name) => YamlValue::String(snake_case(&name)),
        other => other,
    }
}

/// `fooBar`, `FooBar`, `foo-bar`, `foo bar` → `foo_bar`; `HTTPServer` → `http_server`.
pub(crate) fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == '-' || ch == ' ' {
            if !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if ch.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1);
            let after_lower = prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
            let acronym_end =
                prev.is_some_and(char::is_uppercase) && next.is_some_and(|n| n.is_lowercase());
            if (after_lower || acronym_end) && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}
