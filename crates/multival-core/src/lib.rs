//! # multival-core
//!
//! Ordered heterogeneous containers for data whose shape is only known at runtime
//! (JSON payloads, loosely typed settings, heterogeneous rows), with total coercion into
//! primitive types and lossless JSON round-trips.
//!
//! ## Quick start
//!
//! ```rust
//! use multival_core::{parse_json_to_mapping, to_json};
//!
//! let m = parse_json_to_mapping(r#"{"id":"42","price":"1,250.50","tags":["a","b"]}"#);
//! assert_eq!(m.get_as_i32("id"), 42);
//! assert_eq!(m.get_as_f64("price"), 1250.5);
//! assert_eq!(m.get_as_sequence("tags").len(), 2);
//! assert_eq!(m.get_as_i32("missing"), 0);
//!
//! assert_eq!(to_json(&m), r#"{"id":"42","price":"1,250.50","tags":["a","b"]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value` leaf type and `Opaque` host values
//! - [`mapping`]: `Mapping`, the insertion-ordered dictionary
//! - [`sequence`]: `Sequence`, the ordered list
//! - [`simple`]: `SimpleMapping<T>`, the single-typed dictionary
//! - [`coerce`]: total `Value` → primitive conversions
//! - [`encoder`]: canonical JSON output
//! - [`decoder`]: fail-soft JSON input
//! - [`yaml`]: YAML into caller-defined types
//! - [`settings`]: splitting delimited setting strings
//! - [`error`]: Error types for the fallible parse paths

pub mod coerce;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod mapping;
mod scalar;
pub mod sequence;
pub mod settings;
pub mod simple;
pub mod value;
pub mod yaml;

pub use coerce::FromValue;
pub use decoder::{
    parse_json, parse_json_to_mapping, parse_json_to_sequence, try_parse_json,
    try_parse_json_to_mapping, try_parse_json_to_sequence,
};
pub use encoder::{to_json, ToJson};
pub use error::ValueError;
pub use mapping::Mapping;
pub use sequence::Sequence;
pub use simple::SimpleMapping;
pub use value::{Opaque, Value};
pub use yaml::deserialize_yaml;

pub use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;

/// Build a [`Mapping`] from `key => value` pairs, in order.
///
/// ```
/// use multival_core::mapping;
///
/// let m = mapping! { "name" => "Alice", "age" => 30 };
/// assert_eq!(m.get_as_string("name"), "Alice");
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::Mapping::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut mapping = $crate::Mapping::new();
        $( mapping.insert($key, $value); )+
        mapping
    }};
}

/// Build a [`Sequence`] from a list of values.
///
/// ```
/// use multival_core::sequence;
///
/// let s = sequence![true, 0, "hoge"];
/// assert_eq!(s.len(), 3);
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::Sequence::new()
    };
    ($($item:expr),+ $(,)?) => {{
        let mut sequence = $crate::Sequence::new();
        $( sequence.push($item); )+
        sequence
    }};
}
