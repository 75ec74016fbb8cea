//! JSON decoder. Converts JSON text into [`Mapping`], [`Sequence`] or [`Value`] trees.
//!
//! Parsing is delegated to `serde_json` (with `preserve_order` and
//! `arbitrary_precision`), then every node is re-typed into a [`Value`]:
//!
//! - object → `Mapping`, array → `Sequence` (recursively)
//! - string → `String`, `true`/`false` → `Bool`, `null` → `Null`
//! - number → `Number`, keeping the exact digits of the source numeral; a numeral outside
//!   decimal range, or with more digits than a decimal holds, is kept as its source
//!   text in a `String`
//!
//! `//` and `/* */` comments outside string literals are skipped.
//!
//! # Key design decisions
//!
//! - **Fail-soft boundary**: `parse_json_to_mapping` / `parse_json_to_sequence` never
//!   fail. Empty input, malformed text, and a top-level value of the wrong shape all
//!   produce an empty container. A top-level array given to `parse_json_to_mapping` is
//!   discarded, not rerouted.
//! - **`try_` variants**: the same parsers returning [`Result`], for callers that need
//!   to know why nothing came back.

use std::borrow::Cow;

use serde_json::Value as JsonValue;

use crate::error::{Result, ValueError};
use crate::mapping::Mapping;
use crate::scalar;
use crate::sequence::Sequence;
use crate::value::Value;

/// Parse a JSON object into a [`Mapping`]; anything else yields an empty mapping.
pub fn parse_json_to_mapping(json: &str) -> Mapping {
    try_parse_json_to_mapping(json).unwrap_or_else(|err| {
        log_discarded(&err);
        Mapping::new()
    })
}

/// Parse a JSON array into a [`Sequence`]; anything else yields an empty sequence.
pub fn parse_json_to_sequence(json: &str) -> Sequence {
    try_parse_json_to_sequence(json).unwrap_or_else(|err| {
        log_discarded(&err);
        Sequence::new()
    })
}

fn log_discarded(err: &ValueError) {
    match err {
        ValueError::UnexpectedShape { .. } => {
            tracing::debug!(error = %err, "discarding JSON of the wrong top-level shape")
        }
        _ => tracing::debug!(error = %err, "discarding malformed JSON"),
    }
}

/// Parse any JSON document into a [`Value`]; malformed or blank text yields `Null`.
pub fn parse_json(json: &str) -> Value {
    try_parse_json(json).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "discarding malformed JSON");
        Value::Null
    })
}

/// Blank input is an empty mapping; a non-object top level is
/// [`ValueError::UnexpectedShape`].
pub fn try_parse_json_to_mapping(json: &str) -> Result<Mapping> {
    if json.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match try_parse_json(json)? {
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(ValueError::UnexpectedShape {
            expected: "object",
            found: json_kind(&other),
        }),
    }
}

/// Blank input is an empty sequence; a non-array top level is
/// [`ValueError::UnexpectedShape`].
pub fn try_parse_json_to_sequence(json: &str) -> Result<Sequence> {
    if json.trim().is_empty() {
        return Ok(Sequence::new());
    }
    match try_parse_json(json)? {
        Value::Sequence(sequence) => Ok(sequence),
        other => Err(ValueError::UnexpectedShape {
            expected: "array",
            found: json_kind(&other),
        }),
    }
}

/// Blank input is `Null`; malformed input is [`ValueError::JsonParse`].
pub fn try_parse_json(json: &str) -> Result<Value> {
    if json.trim().is_empty() {
        return Ok(Value::Null);
    }
    let cleaned = strip_comments(json);
    let raw: JsonValue = serde_json::from_str(&cleaned)?;
    Ok(convert(raw))
}

/// Re-type one parsed JSON node (and its children) into the value model.
fn convert(node: JsonValue) -> Value {
    match node {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => convert_number(n.to_string()),
        JsonValue::String(s) => Value::String(s),
        JsonValue::Array(items) => Value::Sequence(items.into_iter().map(convert).collect()),
        JsonValue::Object(map) => Value::Mapping(
            map.into_iter()
                .map(|(key, child)| (key, convert(child)))
                .collect(),
        ),
    }
}

/// `raw` is the numeral exactly as written in the source (`arbitrary_precision`).
fn convert_number(raw: String) -> Value {
    match scalar::parse_numeral(&raw) {
        Some(number) => Value::Number(number),
        None => {
            tracing::debug!(numeral = %raw, "numeral that does not fit a decimal kept as text");
            Value::String(raw)
        }
    }
}

/// JSON-side name of a top-level value, for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::Mapping(_) => "object",
        Value::Sequence(_) => "array",
        _ => "string",
    }
}

/// Blank out `//` line comments and `/* */` block comments that appear outside string
/// literals. Newlines inside comments are kept so parse errors report the right line.
/// An unterminated block comment is left in place so the parser rejects it.
fn strip_comments(json: &str) -> Cow<'_, str> {
    if !json.contains("//") && !json.contains("/*") {
        return Cow::Borrowed(json);
    }

    let mut out = String::with_capacity(json.len());
    let mut chars = json.chars().peekable();
    let mut in_string = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            match ch {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        let next = chars.peek().copied();
        match (ch, next) {
            ('"', _) => {
                in_string = true;
                out.push(ch);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                let mut closed = false;
                let mut newlines = 0;
                let mut body = String::new();
                for skipped in chars.by_ref() {
                    if prev == '*' && skipped == '/' {
                        closed = true;
                        break;
                    }
                    if skipped == '\n' {
                        newlines += 1;
                    }
                    body.push(skipped);
                    prev = skipped;
                }
                if closed {
                    out.extend(std::iter::repeat('\n').take(newlines));
                    out.push(' ');
                } else {
                    out.push_str("/*");
                    out.push_str(&body);
                }
            }
            _ => out.push(ch),
        }
    }

    Cow::Owned(out)
}
