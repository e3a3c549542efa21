//! The ordered object map.
//!
//! [`ObjectMap`] is a string-keyed map with unique keys, ordered by
//! byte-lexicographic key comparison rather than insertion order. It wraps a
//! balanced ordered structure ([`BTreeMap`]); `str`'s `Ord` is exactly the
//! byte-wise comparison the contract requires, including the tie-break where
//! a key that is a strict prefix of another sorts first.
//!
//! Values moved into the map are owned by it: `put` over an existing key
//! drops the prior value, `clear` and the map's own drop release every entry.
//! Lookups hand out borrows, so an entry can never be released through a
//! borrowed reference. Iterators borrow the map for their whole lifetime;
//! mutating while iterating is rejected at compile time rather than being a
//! documented caller contract.

use alloc::collections::{btree_map, BTreeMap};
use alloc::string::String;

use crate::error::Error;
use crate::value::Value;

/// An ordered map from string keys to [`Value`]s.
///
/// # Examples
///
/// ```
/// use jsoncodec::{ObjectMap, Value};
///
/// let mut map = ObjectMap::new();
/// map.put("zeta", Value::Null);
/// map.put("alpha", Value::Bool(true));
///
/// // Iteration is in ascending byte order, not insertion order.
/// let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, ["alpha", "zeta"]);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectMap {
    entries: BTreeMap<String, Value>,
}

impl ObjectMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, taking ownership of both.
    ///
    /// The key bytes are copied into map-owned storage. If the key is
    /// already present the prior value is dropped and replaced; the entry
    /// count does not change.
    pub fn put(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Borrows the value stored under `key`. Ownership stays with the map.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the key is absent; absence is an error
    /// signal, never a `null` value.
    pub fn get(&self, key: &str) -> Result<&Value, Error> {
        self.entries.get(key).ok_or(Error::KeyNotFound)
    }

    /// Mutably borrows the value stored under `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the key is absent.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut Value, Error> {
        self.entries.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns `true` if `key` has an entry.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes the entry under `key`, returning its value for the caller to
    /// drop or reuse. Removing an absent key is a no-op, not an error.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Drops every entry, returning the map to its just-created state.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// In-order iterator over entries, ascending by key bytes.
    ///
    /// Exhaustion is signalled by `None`. The iterator borrows the map, so
    /// the map cannot be mutated (and the iterator cannot dangle) while it
    /// is alive.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a ObjectMap {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, Value)> for ObjectMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Borrowed in-order iterator over an [`ObjectMap`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
