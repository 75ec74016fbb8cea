//! `Sequence`: an ordered list of [`Value`]s.
//!
//! Unlike [`Mapping`], indexing follows slice semantics: the scalar `get_as_*`
//! accessors panic when `index >= len()`. Only the structured accessors
//! (`get_as_mapping`, `get_as_sequence`) fall back to an empty container.

use std::fmt;
use std::ops::{Index, IndexMut};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::de::{self, Deserialize, Deserializer, Unexpected};
use uuid::Uuid;

use crate::coerce::{self, FromValue};
use crate::mapping::Mapping;
use crate::value::Value;

/// Ordered heterogeneous list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    items: Vec<Value>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Insert at `index`, shifting later items right. Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) {
        self.items.insert(index, value.into());
    }

    /// Remove and return the item at `index`. Panics if out of range.
    pub fn remove(&mut self, index: usize) -> Value {
        self.items.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    // ------------------------------------------------------------------------
    // Typed accessors. All of these panic when `index` is out of range.
    // ------------------------------------------------------------------------

    pub fn get_as_string(&self, index: usize) -> String {
        coerce::to_string(&self.items[index])
    }

    pub fn get_as_bool(&self, index: usize) -> bool {
        coerce::to_bool(&self.items[index])
    }

    pub fn get_as_decimal(&self, index: usize) -> Decimal {
        coerce::to_decimal(&self.items[index])
    }

    pub fn get_as_f64(&self, index: usize) -> f64 {
        coerce::to_f64(&self.items[index])
    }

    pub fn get_as_i32(&self, index: usize) -> i32 {
        coerce::to_i32(&self.items[index])
    }

    pub fn get_as_u32(&self, index: usize) -> u32 {
        coerce::to_u32(&self.items[index])
    }

    pub fn get_as_i64(&self, index: usize) -> i64 {
        coerce::to_i64(&self.items[index])
    }

    pub fn get_as_u64(&self, index: usize) -> u64 {
        coerce::to_u64(&self.items[index])
    }

    pub fn get_as_uuid(&self, index: usize) -> Uuid {
        coerce::to_uuid(&self.items[index])
    }

    pub fn get_as_datetime(&self, index: usize) -> NaiveDateTime {
        coerce::to_datetime(&self.items[index])
    }

    pub fn get_as_date(&self, index: usize) -> NaiveDate {
        coerce::to_date(&self.items[index])
    }

    pub fn get_as_time(&self, index: usize) -> NaiveTime {
        coerce::to_time(&self.items[index])
    }

    pub fn get_as<T: FromValue>(&self, index: usize) -> T {
        T::from_value(&self.items[index])
    }

    pub fn get_as_object<T>(&self, index: usize) -> Option<T>
    where
        T: std::any::Any + Clone + std::str::FromStr,
    {
        coerce::to_object(&self.items[index])
    }

    /// Clone of the mapping at `index`; empty when out of range or not a mapping.
    pub fn get_as_mapping(&self, index: usize) -> Mapping {
        self.items.get(index).map(coerce::to_mapping).unwrap_or_default()
    }

    /// Clone of the sequence at `index`; empty when out of range or not a sequence.
    pub fn get_as_sequence(&self, index: usize) -> Sequence {
        self.items.get(index).map(coerce::to_sequence).unwrap_or_default()
    }

    pub fn get_mapping(&self, index: usize) -> Option<&Mapping> {
        self.items.get(index).and_then(Value::as_mapping)
    }

    pub fn get_sequence(&self, index: usize) -> Option<&Sequence> {
        self.items.get(index).and_then(Value::as_sequence)
    }
}

impl Index<usize> for Sequence {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl IndexMut<usize> for Sequence {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.items[index]
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encoder::to_json(self))
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl From<Sequence> for Vec<Value> {
    fn from(sequence: Sequence) -> Self {
        sequence.items
    }
}

impl<V: Into<Value>> FromIterator<V> for Sequence {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<Value>> Extend<V> for Sequence {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Sequence {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'de> Deserialize<'de> for Sequence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Sequence(sequence) => Ok(sequence),
            Value::Null => Ok(Sequence::new()),
            other => Err(de::Error::invalid_type(
                Unexpected::Other(other.kind()),
                &"a sequence",
            )),
        }
    }
}
