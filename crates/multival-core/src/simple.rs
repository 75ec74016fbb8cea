//! `SimpleMapping<T>`: the homogeneously typed sibling of [`Mapping`](crate::Mapping).
//!
//! Same ordering rules: first insertion fixes a key's position, re-insertion updates
//! in place, removal preserves order.

use std::fmt;

use indexmap::map::{IntoIter, Iter, Keys, Values};
use indexmap::IndexMap;

use crate::encoder::ToJson;

/// Ordered string-keyed map whose values share one type.
#[derive(Debug, Clone)]
pub struct SimpleMapping<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for SimpleMapping<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> SimpleMapping<T> {
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

    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.entries.get_mut(key)
    }

    /// The stored value, or `T::default()` when `key` is absent.
    pub fn get_or_default(&self, key: &str) -> T
    where
        T: Clone + Default,
    {
        self.entries.get(key).cloned().unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.entries.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> Keys<'_, String, T> {
        self.entries.keys()
    }

    pub fn values(&self) -> Values<'_, String, T> {
        self.entries.values()
    }

    pub fn iter(&self) -> Iter<'_, String, T> {
        self.entries.iter()
    }
}

impl<T: PartialEq> PartialEq for SimpleMapping<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl<T: ToJson> fmt::Display for SimpleMapping<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encoder::to_json(self))
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for SimpleMapping<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut mapping = SimpleMapping::new();
        mapping.extend(iter);
        mapping
    }
}

impl<K: Into<String>, T> Extend<(K, T)> for SimpleMapping<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T> IntoIterator for SimpleMapping<T> {
    type Item = (String, T);
    type IntoIter = IntoIter<String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SimpleMapping<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
