//! Canonical JSON encoder.
//!
//! Produces compact JSON with no insignificant whitespace:
//!
//! - **Key order**: mappings render in insertion order
//! - **Minimal escaping**: only `"`, `\` and control characters below U+0020 are
//!   escaped; `/` and non-ASCII text are written as-is
//! - **Number normalization**: decimals render without exponent, without trailing
//!   fractional zeros, and `-0` becomes `0` (`0`, `1.5`, never `1.50` or `1e3`)
//! - **Top-level null**: renders as the empty object `{}`
//!
//! # Example
//! ```
//! use multival_core::{mapping, sequence, to_json};
//! let m = mapping! { "name" => "Alice", "tags" => sequence!["rust", 1] };
//! assert_eq!(to_json(&m), r#"{"name":"Alice","tags":["rust",1]}"#);
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::mapping::Mapping;
use crate::scalar;
use crate::sequence::Sequence;
use crate::simple::SimpleMapping;
use crate::value::{Opaque, Value};

const EMPTY_OBJECT: &str = "{}";

/// Types that can render themselves as canonical JSON.
pub trait ToJson {
    /// Append the JSON form of `self` to `out`.
    fn write_json(&self, out: &mut String);

    /// Whether `self` is a null value; a top-level null renders as `{}`.
    fn is_json_null(&self) -> bool {
        false
    }
}

/// Serialize `value` to canonical compact JSON. A top-level null yields `{}`.
pub fn to_json<T: ToJson + ?Sized>(value: &T) -> String {
    if value.is_json_null() {
        return EMPTY_OBJECT.to_string();
    }
    let mut out = String::new();
    value.write_json(&mut out);
    out
}

impl ToJson for Value {
    fn write_json(&self, out: &mut String) {
        match self {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => b.write_json(out),
            Value::Number(n) => n.write_json(out),
            Value::String(s) => write_string(s, out),
            Value::Uuid(u) => u.write_json(out),
            Value::DateTime(dt) => dt.write_json(out),
            Value::Mapping(m) => m.write_json(out),
            Value::Sequence(s) => s.write_json(out),
            Value::Opaque(o) => o.write_json(out),
        }
    }

    fn is_json_null(&self) -> bool {
        self.is_null()
    }
}

impl ToJson for Mapping {
    fn write_json(&self, out: &mut String) {
        write_object(self.iter(), out);
    }
}

impl<T: ToJson> ToJson for SimpleMapping<T> {
    fn write_json(&self, out: &mut String) {
        write_object(self.iter(), out);
    }
}

impl ToJson for Sequence {
    fn write_json(&self, out: &mut String) {
        write_array(self.iter(), out);
    }
}

impl<T: ToJson> ToJson for [T] {
    fn write_json(&self, out: &mut String) {
        write_array(self.iter(), out);
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn write_json(&self, out: &mut String) {
        write_array(self.iter(), out);
    }
}

impl<T: ToJson> ToJson for Option<T> {
    fn write_json(&self, out: &mut String) {
        match self {
            Some(inner) => inner.write_json(out),
            None => out.push_str("null"),
        }
    }

    fn is_json_null(&self) -> bool {
        match self {
            Some(inner) => inner.is_json_null(),
            None => true,
        }
    }
}

impl<T: ToJson + ?Sized> ToJson for &T {
    fn write_json(&self, out: &mut String) {
        (**self).write_json(out);
    }

    fn is_json_null(&self) -> bool {
        (**self).is_json_null()
    }
}

impl ToJson for str {
    fn write_json(&self, out: &mut String) {
        write_string(self, out);
    }
}

impl ToJson for String {
    fn write_json(&self, out: &mut String) {
        write_string(self, out);
    }
}

impl ToJson for bool {
    fn write_json(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

macro_rules! impl_to_json_integer {
    ($($t:ty),*) => {
        $(
            impl ToJson for $t {
                fn write_json(&self, out: &mut String) {
                    out.push_str(&self.to_string());
                }
            }
        )*
    };
}

impl_to_json_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToJson for f64 {
    fn write_json(&self, out: &mut String) {
        out.push_str(&format_float(*self));
    }
}

impl ToJson for f32 {
    fn write_json(&self, out: &mut String) {
        out.push_str(&format_float(*self));
    }
}

impl ToJson for Decimal {
    fn write_json(&self, out: &mut String) {
        out.push_str(&format_decimal(self));
    }
}

impl ToJson for Uuid {
    fn write_json(&self, out: &mut String) {
        write_string(&self.hyphenated().to_string(), out);
    }
}

impl ToJson for NaiveDateTime {
    fn write_json(&self, out: &mut String) {
        write_string(&scalar::format_datetime(self), out);
    }
}

impl ToJson for NaiveDate {
    fn write_json(&self, out: &mut String) {
        write_string(&scalar::format_date(self), out);
    }
}

impl ToJson for NaiveTime {
    fn write_json(&self, out: &mut String) {
        write_string(&scalar::format_time(self), out);
    }
}

impl ToJson for Opaque {
    fn write_json(&self, out: &mut String) {
        write_string(self.text(), out);
    }
}

/// Emit `{"k":v,...}` for any ordered key/value iterator.
fn write_object<'a, V, I>(entries: I, out: &mut String)
where
    V: ToJson + 'a,
    I: Iterator<Item = (&'a String, &'a V)>,
{
    out.push('{');
    for (i, (key, value)) in entries.enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_string(key, out);
        out.push(':');
        value.write_json(out);
    }
    out.push('}');
}

fn write_array<'a, V, I>(items: I, out: &mut String)
where
    V: ToJson + 'a,
    I: Iterator<Item = &'a V>,
{
    out.push('[');
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push(',');
        }
        item.write_json(out);
    }
    out.push(']');
}

/// Emit a quoted JSON string, escaping only what JSON requires.
fn write_string(s: &str, out: &mut String) {
    out.reserve(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Strip trailing fractional zeros; `normalize` also folds `-0` into `0`.
fn format_decimal(n: &Decimal) -> String {
    n.normalize().to_string()
}

/// Non-finite floats have no JSON form and become `null`.
fn format_float<F>(f: F) -> String
where
    F: Copy + Into<f64> + std::fmt::Display,
{
    let wide: f64 = f.into();
    if !wide.is_finite() {
        return "null".to_string();
    }
    if wide == 0.0 {
        return "0".to_string();
    }
    // `Display` on the native width prints the shortest round-trip form, with no
    // exponent and no trailing `.0`.
    format!("{}", f)
}
