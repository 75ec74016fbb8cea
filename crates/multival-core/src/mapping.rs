//! `Mapping`: an insertion-ordered, string-keyed map of [`Value`]s.
//!
//! Backed by `IndexMap`, so iteration order is the order in which keys were first
//! inserted. Re-inserting a key replaces the value in place; removal preserves the
//! relative order of the remaining entries.
//!
//! Reads never fail: `mapping["missing"]` is `Value::Null`, and every `get_as_*`
//! accessor routes through [`coerce`](crate::coerce), returning that function's default
//! when the key is absent.

use std::fmt;
use std::ops::Index;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::map::{IntoIter, Iter, IterMut, Keys, Values};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::de::{self, Deserialize, Deserializer, Unexpected};
use uuid::Uuid;

use crate::coerce::{self, FromValue};
use crate::sequence::Sequence;
use crate::value::{Value, NULL};

/// Ordered heterogeneous dictionary.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: IndexMap<String, Value>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set `key` to `value`. An existing key keeps its position and its old value is
    /// returned; a new key is appended at the end.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove `key`, shifting later entries down so order is preserved.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> Values<'_, String, Value> {
        self.entries.values()
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    // ------------------------------------------------------------------------
    // Typed accessors
    // ------------------------------------------------------------------------

    fn lookup(&self, key: &str) -> &Value {
        self.entries.get(key).unwrap_or(&NULL)
    }

    pub fn get_as_string(&self, key: &str) -> String {
        coerce::to_string(self.lookup(key))
    }

    pub fn get_as_bool(&self, key: &str) -> bool {
        coerce::to_bool(self.lookup(key))
    }

    pub fn get_as_decimal(&self, key: &str) -> Decimal {
        coerce::to_decimal(self.lookup(key))
    }

    pub fn get_as_f64(&self, key: &str) -> f64 {
        coerce::to_f64(self.lookup(key))
    }

    pub fn get_as_i32(&self, key: &str) -> i32 {
        coerce::to_i32(self.lookup(key))
    }

    pub fn get_as_u32(&self, key: &str) -> u32 {
        coerce::to_u32(self.lookup(key))
    }

    pub fn get_as_i64(&self, key: &str) -> i64 {
        coerce::to_i64(self.lookup(key))
    }

    pub fn get_as_u64(&self, key: &str) -> u64 {
        coerce::to_u64(self.lookup(key))
    }

    pub fn get_as_uuid(&self, key: &str) -> Uuid {
        coerce::to_uuid(self.lookup(key))
    }

    pub fn get_as_datetime(&self, key: &str) -> NaiveDateTime {
        coerce::to_datetime(self.lookup(key))
    }

    pub fn get_as_date(&self, key: &str) -> NaiveDate {
        coerce::to_date(self.lookup(key))
    }

    pub fn get_as_time(&self, key: &str) -> NaiveTime {
        coerce::to_time(self.lookup(key))
    }

    /// Clone of the nested mapping under `key`, or an empty mapping when the key is
    /// absent or holds something else.
    pub fn get_as_mapping(&self, key: &str) -> Mapping {
        coerce::to_mapping(self.lookup(key))
    }

    /// Clone of the nested sequence under `key`, or an empty sequence.
    pub fn get_as_sequence(&self, key: &str) -> Sequence {
        coerce::to_sequence(self.lookup(key))
    }

    /// Borrow the nested mapping under `key` without cloning it.
    pub fn get_mapping(&self, key: &str) -> Option<&Mapping> {
        self.entries.get(key).and_then(Value::as_mapping)
    }

    pub fn get_sequence(&self, key: &str) -> Option<&Sequence> {
        self.entries.get(key).and_then(Value::as_sequence)
    }

    /// Coerce the value under `key` through the [`FromValue`] impl for `T`.
    pub fn get_as<T: FromValue>(&self, key: &str) -> T {
        T::from_value(self.lookup(key))
    }

    /// Generic conversion; see [`coerce::to_object`].
    pub fn get_as_object<T>(&self, key: &str) -> Option<T>
    where
        T: std::any::Any + Clone + std::str::FromStr,
    {
        coerce::to_object(self.lookup(key))
    }
}

/// Order-sensitive structural equality: same keys in the same order with equal values.
impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl Index<&str> for Mapping {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.lookup(key)
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encoder::to_json(self))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        mapping.extend(iter);
        mapping
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Mapping {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Accepts any map; `null` (an empty YAML document) reads as an empty mapping.
impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Mapping(mapping) => Ok(mapping),
            Value::Null => Ok(Mapping::new()),
            other => Err(de::Error::invalid_type(
                Unexpected::Other(other.kind()),
                &"a mapping",
            )),
        }
    }
}
