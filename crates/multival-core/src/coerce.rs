//! Total coercion of a [`Value`] into primitive types.
//!
//! Every `to_*` function returns a value for every input: when the input cannot be
//! interpreted, the target's documented default comes back instead (`""`, `0`, `0.0`,
//! `false`, the nil UUID, `NaiveDateTime::MIN`, an empty container). Callers that must
//! tell a failed coercion apart from a legitimate default use the matching `try_to_*`
//! function, which returns `None` on failure.
//!
//! Each conversion first checks whether the value already holds the target
//! representation and returns it unchanged. Otherwise it goes through the string form
//! of the value (see [`to_string`]) or, for numeric targets, the canonical [`Decimal`].
//!
//! | Target | Default |
//! |---|---|
//! | `String` | `""` |
//! | `Decimal`, integers | `0` |
//! | `f32`, `f64` | `0.0` |
//! | `bool` | `false` |
//! | `Uuid` | `Uuid::nil()` |
//! | `NaiveDateTime` | `NaiveDateTime::MIN` |
//! | `NaiveDate` | `NaiveDate::MIN` |
//! | `NaiveTime` | midnight |
//! | `Mapping`, `Sequence` | empty |
//! | `to_object::<T>` | `None` |

use std::any::Any;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::mapping::Mapping;
use crate::scalar;
use crate::sequence::Sequence;
use crate::value::Value;

/// The closed set of types a [`Value`] can be coerced into.
///
/// Implemented for `String`, `bool`, `Decimal`, `f32`, `f64`, every fixed-width
/// integer, `Uuid`, the chrono naive date/time types, `Mapping`, `Sequence`, and `Value`.
/// Used by the generic `get_as::<T>` accessors on the containers.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Self;
}

// ============================================================================
// String
// ============================================================================

/// Text form of a value.
///
/// - `Null` → `""`
/// - booleans → `true` / `false`
/// - numbers → plain numeral, no grouping, scale preserved (`1.10` stays `1.10`)
/// - UUIDs → lowercase hyphenated
/// - date-times → `YYYY-MM-DDTHH:MM:SS[.fff]`
/// - mappings and sequences → canonical JSON
/// - opaque values → their text form (a named enum constant yields its name)
pub fn to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Uuid(u) => u.hyphenated().to_string(),
        Value::DateTime(dt) => scalar::format_datetime(dt),
        Value::Mapping(_) | Value::Sequence(_) => crate::encoder::to_json(value),
        Value::Opaque(o) => o.text().to_string(),
    }
}

/// Run `parse` over the string form of a non-null value without cloning strings.
fn parse_text<T>(value: &Value, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    match value {
        Value::Null => None,
        Value::String(s) => parse(s),
        other => parse(&to_string(other)),
    }
}

// ============================================================================
// Numbers
// ============================================================================

/// Numbers pass through; text is parsed allowing a sign and `,` grouping separators.
pub fn to_decimal(value: &Value) -> Decimal {
    try_to_decimal(value).unwrap_or_default()
}

pub fn try_to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Some(*n),
        other => parse_text(other, scalar::parse_decimal),
    }
}

fn whole_number(value: &Value) -> Option<i128> {
    try_to_decimal(value)?.trunc().to_i128()
}

/// Negative inputs are rejected outright rather than wrapped or clamped.
fn whole_non_negative(value: &Value) -> Option<i128> {
    let number = try_to_decimal(value)?;
    if number < Decimal::ZERO {
        return None;
    }
    number.trunc().to_i128()
}

macro_rules! integer_coercion {
    ($(#[$doc:meta])* $to:ident, $try_to:ident => $ty:ty, $source:ident) => {
        $(#[$doc])*
        pub fn $to(value: &Value) -> $ty {
            $try_to(value).unwrap_or_default()
        }

        #[doc = concat!("Fallible form of [`", stringify!($to), "`].")]
        pub fn $try_to(value: &Value) -> Option<$ty> {
            <$ty>::try_from($source(value)?).ok()
        }

        impl FromValue for $ty {
            fn from_value(value: &Value) -> Self {
                $to(value)
            }
        }
    };
}

integer_coercion!(
    /// Truncates toward zero; out-of-range values yield `0`.
    to_i8, try_to_i8 => i8, whole_number
);
integer_coercion!(
    /// Truncates toward zero; out-of-range values yield `0`.
    to_i16, try_to_i16 => i16, whole_number
);
integer_coercion!(
    /// Truncates toward zero (`"-1.1"` → `-1`); out-of-range values yield `0`.
    to_i32, try_to_i32 => i32, whole_number
);
integer_coercion!(
    /// Truncates toward zero; out-of-range values yield `0`.
    to_i64, try_to_i64 => i64, whole_number
);
integer_coercion!(
    /// Truncates toward zero; negative or out-of-range values yield `0`.
    to_u8, try_to_u8 => u8, whole_non_negative
);
integer_coercion!(
    /// Truncates toward zero; negative or out-of-range values yield `0`.
    to_u16, try_to_u16 => u16, whole_non_negative
);
integer_coercion!(
    /// Truncates toward zero; negative values yield `0` (`"-1.1"` → `0`, not a wrap).
    to_u32, try_to_u32 => u32, whole_non_negative
);
integer_coercion!(
    /// Truncates toward zero; negative values yield `0`.
    to_u64, try_to_u64 => u64, whole_non_negative
);

pub fn to_f64(value: &Value) -> f64 {
    try_to_f64(value).unwrap_or_default()
}

pub fn try_to_f64(value: &Value) -> Option<f64> {
    try_to_decimal(value)?.to_f64()
}

pub fn to_f32(value: &Value) -> f32 {
    try_to_f32(value).unwrap_or_default()
}

pub fn try_to_f32(value: &Value) -> Option<f32> {
    try_to_decimal(value)?.to_f32()
}

// ============================================================================
// Booleans, UUIDs, date-times
// ============================================================================

/// Booleans pass through; text must be `true` or `false` in any case.
pub fn to_bool(value: &Value) -> bool {
    try_to_bool(value).unwrap_or_default()
}

pub fn try_to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        other => parse_text(other, scalar::parse_bool),
    }
}

/// Accepts hyphenated, compact, `{braced}` and `(parenthesized)` forms.
pub fn to_uuid(value: &Value) -> Uuid {
    try_to_uuid(value).unwrap_or_default()
}

pub fn try_to_uuid(value: &Value) -> Option<Uuid> {
    match value {
        Value::Uuid(u) => Some(*u),
        other => parse_text(other, scalar::parse_uuid),
    }
}

/// Accepts `YYYY-MM-DD` or `YYYY/MM/DD`, then `T` or a space, then
/// `HH:MM[:SS[.fraction]]`; a bare date (midnight); or RFC 3339 with an offset,
/// converted to UTC. Defaults to `NaiveDateTime::MIN`.
pub fn to_datetime(value: &Value) -> NaiveDateTime {
    try_to_datetime(value).unwrap_or(NaiveDateTime::MIN)
}

pub fn try_to_datetime(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::DateTime(dt) => Some(*dt),
        other => parse_text(other, scalar::parse_datetime),
    }
}

pub fn to_date(value: &Value) -> NaiveDate {
    try_to_date(value).unwrap_or(NaiveDate::MIN)
}

pub fn try_to_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::DateTime(dt) => Some(dt.date()),
        other => parse_text(other, scalar::parse_date),
    }
}

/// Defaults to midnight.
pub fn to_time(value: &Value) -> NaiveTime {
    try_to_time(value).unwrap_or(NaiveTime::MIN)
}

pub fn try_to_time(value: &Value) -> Option<NaiveTime> {
    match value {
        Value::DateTime(dt) => Some(dt.time()),
        other => parse_text(other, scalar::parse_time),
    }
}

// ============================================================================
// Containers
// ============================================================================

/// Clone of a nested mapping; anything else yields an empty mapping.
pub fn to_mapping(value: &Value) -> Mapping {
    value.as_mapping().cloned().unwrap_or_default()
}

/// Clone of a nested sequence; anything else yields an empty sequence.
pub fn to_sequence(value: &Value) -> Sequence {
    value.as_sequence().cloned().unwrap_or_default()
}

// ============================================================================
// Generic fallback
// ============================================================================

/// Convert to an arbitrary `T`.
///
/// Returns the payload unchanged when the value already holds a `T` (including a `T`
/// wrapped in [`Opaque`](crate::Opaque)); `None` for `Null`; otherwise `T::from_str`
/// of the string form, with `None` when parsing fails.
pub fn to_object<T>(value: &Value) -> Option<T>
where
    T: Any + Clone + FromStr,
{
    if let Some(same) = payload_as::<T>(value) {
        return Some(same.clone());
    }
    parse_text(value, |text| text.parse::<T>().ok())
}

fn payload_as<T: Any>(value: &Value) -> Option<&T> {
    let payload: &dyn Any = match value {
        Value::Null => return None,
        Value::Bool(b) => b,
        Value::Number(n) => n,
        Value::String(s) => s,
        Value::Uuid(u) => u,
        Value::DateTime(dt) => dt,
        Value::Mapping(m) => m,
        Value::Sequence(s) => s,
        Value::Opaque(o) => return o.downcast_ref::<T>(),
    };
    payload.downcast_ref::<T>()
}

// ============================================================================
// FromValue registry
// ============================================================================

impl FromValue for Value {
    fn from_value(value: &Value) -> Self {
        value.clone()
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Self {
        to_string(value)
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Self {
        to_bool(value)
    }
}

impl FromValue for Decimal {
    fn from_value(value: &Value) -> Self {
        to_decimal(value)
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Self {
        to_f64(value)
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Self {
        to_f32(value)
    }
}

impl FromValue for Uuid {
    fn from_value(value: &Value) -> Self {
        to_uuid(value)
    }
}

impl FromValue for NaiveDateTime {
    fn from_value(value: &Value) -> Self {
        to_datetime(value)
    }
}

impl FromValue for NaiveDate {
    fn from_value(value: &Value) -> Self {
        to_date(value)
    }
}

impl FromValue for NaiveTime {
    fn from_value(value: &Value) -> Self {
        to_time(value)
    }
}

impl FromValue for Mapping {
    fn from_value(value: &Value) -> Self {
        to_mapping(value)
    }
}

impl FromValue for Sequence {
    fn from_value(value: &Value) -> Self {
        to_sequence(value)
    }
}
