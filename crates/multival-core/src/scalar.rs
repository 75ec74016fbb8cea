//! Text parsers and formatters behind the coercion engine.
//!
//! Parsers return `None` on any malformed input; [`coerce`](crate::coerce) collapses
//! that into the documented default.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use uuid::Uuid;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%dT%H:%M",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

/// Parse a plain decimal numeral.
///
/// Accepts surrounding whitespace, one leading `+`/`-`, `,` grouping separators in the
/// integer part, and at most one `.`. Exponents are rejected.
pub(crate) fn parse_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first()? {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut digits = String::with_capacity(unsigned.len() + 1);
    let mut seen_dot = false;
    let mut seen_digit = false;
    for ch in unsigned.chars() {
        match ch {
            '0'..='9' => {
                seen_digit = true;
                digits.push(ch);
            }
            ',' if !seen_dot && seen_digit => {}
            '.' if !seen_dot => {
                seen_dot = true;
                digits.push('.');
            }
            _ => return None,
        }
    }
    if !seen_digit {
        return None;
    }
    if digits.starts_with('.') {
        digits.insert(0, '0');
    }
    if digits.ends_with('.') {
        digits.pop();
    }

    let magnitude = Decimal::from_str(&digits).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a JSON numeral, which may carry an exponent (`1.5e3`).
///
/// Returns `None` when the numeral cannot be held without rounding, either because it
/// is out of range or because it has more fraction digits than a `Decimal` keeps.
pub(crate) fn parse_numeral(text: &str) -> Option<Decimal> {
    if let Ok(exact) = Decimal::from_str_exact(text) {
        return Some(exact);
    }
    let scientific = Decimal::from_scientific(text).ok()?;
    (significant_digits(text) == significant_digits(&scientific.normalize().to_string()))
        .then_some(scientific)
}

/// Digits of the mantissa with leading and trailing zeros dropped.
fn significant_digits(numeral: &str) -> usize {
    let mantissa = numeral.split(['e', 'E']).next().unwrap_or_default();
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    digits.trim_matches('0').len()
}

/// Case-insensitive `true` / `false`.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Hyphenated or compact hex, optionally wrapped in `{}` or `()`.
pub(crate) fn parse_uuid(text: &str) -> Option<Uuid> {
    let trimmed = text.trim();
    let inner = strip_wrapping(trimmed, '{', '}')
        .or_else(|| strip_wrapping(trimmed, '(', ')'))
        .unwrap_or(trimmed);
    // 36 = hyphenated, 32 = compact. Rules out urn: and nested braces.
    if inner.len() != 36 && inner.len() != 32 {
        return None;
    }
    Uuid::try_parse(inner).ok()
}

fn strip_wrapping(text: &str, open: char, close: char) -> Option<&str> {
    text.strip_prefix(open)?.strip_suffix(close)
}

/// ISO-like date-time in local (offset-free) form, a bare date, or RFC 3339 with an
/// offset, which is converted to UTC.
pub(crate) fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    if let Some(date) = parse_date_only(trimmed) {
        return Some(date.and_time(NaiveTime::MIN));
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|parsed| parsed.naive_utc())
}

pub(crate) fn parse_date(text: &str) -> Option<NaiveDate> {
    parse_date_only(text.trim()).or_else(|| parse_datetime(text).map(|dt| dt.date()))
}

pub(crate) fn parse_time(text: &str) -> Option<NaiveTime> {
    let trimmed = text.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .or_else(|| parse_datetime(trimmed).map(|dt| dt.time()))
}

fn parse_date_only(trimmed: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// `YYYY-MM-DDTHH:MM:SS`, with milli/micro/nanoseconds only when non-zero.
pub(crate) fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

pub(crate) fn format_date(value: &NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub(crate) fn format_time(value: &NaiveTime) -> String {
    value.format("%H:%M:%S%.f").to_string()
}
