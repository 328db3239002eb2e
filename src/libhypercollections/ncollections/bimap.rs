// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bidirectional map where keys and values are both unique.
//!
//! The inverse views (`inverse()` and `inverse_mut()`) borrow the same storage with the roles of keys and values swapped, so a mutation through the view is visible from the map and conversely.

use crate::error::{Error, Result};
use gcollections::ops::*;
use log::trace;
use std::collections::hash_map::{Iter, Keys};
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

pub struct BiMap<K, V>
{
  forward: HashMap<K, V>,
  backward: HashMap<V, K>
}

impl<K, V> BiMap<K, V>
{
  pub fn new() -> BiMap<K, V> {
    BiMap {
      forward: HashMap::new(),
      backward: HashMap::new()
    }
  }

  pub fn iter(&self) -> Iter<K, V> {
    self.forward.iter()
  }

  pub fn values(&self) -> Keys<V, K> {
    self.backward.keys()
  }

  pub fn inverse(&self) -> Inverse<K, V> {
    Inverse { map: self }
  }

  pub fn inverse_mut(&mut self) -> InverseMut<K, V> {
    InverseMut { map: self }
  }

  pub fn into_inverse(self) -> BiMap<V, K> {
    BiMap {
      forward: self.backward,
      backward: self.forward
    }
  }
}

impl<K, V> BiMap<K, V> where
 K: Eq + Hash + Clone,
 V: Eq + Hash + Clone
{
  fn insert(&mut self, key: K, value: V) {
    self.forward.insert(key.clone(), value.clone());
    self.backward.insert(value, key);
  }

  /// Fails if `key` is already a key or `value` already a value.
  pub fn put(&mut self, key: K, value: V) -> Result<()> {
    if self.forward.contains_key(&key) || self.backward.contains_key(&value) {
      return Err(Error::DuplicateKeyOrValue);
    }
    self.insert(key, value);
    Ok(())
  }

  /// Inserts every entry or none of them.
  pub fn put_all<I>(&mut self, entries: I) -> Result<()> where
   I: IntoIterator<Item=(K, V)>
  {
    let entries: Vec<(K, V)> = entries.into_iter().collect();
    {
      let mut keys = HashSet::new();
      let mut values = HashSet::new();
      for (key, value) in &entries {
        if self.forward.contains_key(key) || self.backward.contains_key(value)
          || !keys.insert(key) || !values.insert(value)
        {
          return Err(Error::DuplicateKeyOrValue);
        }
      }
    }
    for (key, value) in entries {
      self.insert(key, value);
    }
    Ok(())
  }

  /// Inserts the entry, first removing the entries currently holding `key` or `value`.
  pub fn force_put(&mut self, key: K, value: V) {
    if let Some(old_value) = self.forward.remove(&key) {
      self.backward.remove(&old_value);
      trace!("bimap: force_put replaced the value of an existing key");
    }
    if let Some(old_key) = self.backward.remove(&value) {
      self.forward.remove(&old_key);
      trace!("bimap: force_put evicted the key previously bound to the value");
    }
    self.insert(key, value);
  }

  pub fn get(&self, key: &K) -> Option<&V> {
    self.forward.get(key)
  }

  pub fn get_key(&self, value: &V) -> Option<&K> {
    self.backward.get(value)
  }

  pub fn contains_key(&self, key: &K) -> bool {
    self.forward.contains_key(key)
  }

  pub fn contains_value(&self, value: &V) -> bool {
    self.backward.contains_key(value)
  }

  pub fn remove(&mut self, key: &K) -> Option<V> {
    let value = self.forward.remove(key)?;
    self.backward.remove(&value);
    Some(value)
  }

  pub fn remove_value(&mut self, value: &V) -> Option<K> {
    let key = self.backward.remove(value)?;
    self.forward.remove(&key);
    Some(key)
  }
}

impl<K, V> Default for BiMap<K, V>
{
  fn default() -> BiMap<K, V> {
    BiMap::new()
  }
}

impl<K, V> Cardinality for BiMap<K, V>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.forward.len()
  }
}

impl<K, V> Debug for BiMap<K, V> where
 K: Debug,
 V: Debug
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    formatter.debug_map().entries(self.forward.iter()).finish()
  }
}

/// Read-only view of a `BiMap` from values to keys.
pub struct Inverse<'a, K, V>
{
  map: &'a BiMap<K, V>
}

impl<'a, K, V> Inverse<'a, K, V> where
 K: Eq + Hash + Clone,
 V: Eq + Hash + Clone
{
  pub fn get(&self, value: &V) -> Option<&'a K> {
    self.map.backward.get(value)
  }

  pub fn contains_key(&self, value: &V) -> bool {
    self.map.contains_value(value)
  }

  pub fn contains_value(&self, key: &K) -> bool {
    self.map.contains_key(key)
  }

  pub fn iter(&self) -> Iter<'a, V, K> {
    self.map.backward.iter()
  }

  pub fn size(&self) -> usize {
    self.map.size()
  }
}

/// Mutable view of a `BiMap` from values to keys.
pub struct InverseMut<'a, K, V>
{
  map: &'a mut BiMap<K, V>
}

impl<'a, K, V> InverseMut<'a, K, V> where
 K: Eq + Hash + Clone,
 V: Eq + Hash + Clone
{
  pub fn put(&mut self, value: V, key: K) -> Result<()> {
    self.map.put(key, value)
  }

  pub fn force_put(&mut self, value: V, key: K) {
    self.map.force_put(key, value)
  }

  pub fn get(&self, value: &V) -> Option<&K> {
    self.map.get_key(value)
  }

  pub fn remove(&mut self, value: &V) -> Option<K> {
    self.map.remove_value(value)
  }

  pub fn size(&self) -> usize {
    self.map.size()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn roman() -> BiMap<u32, &'static str> {
    let mut map = BiMap::new();
    map.put(1, "I").unwrap();
    map.put(5, "V").unwrap();
    map
  }

  #[test]
  fn put_rejects_duplicates() {
    let mut map = roman();
    assert_eq!(map.put(1, "X"), Err(Error::DuplicateKeyOrValue));
    assert_eq!(map.put(10, "V"), Err(Error::DuplicateKeyOrValue));
    assert_eq!(map.size(), 2);
    assert_eq!(map.get(&1), Some(&"I"));
    assert!(!map.contains_key(&10));
    assert!(map.put(10, "X").is_ok());
    assert_eq!(map.get_key(&"X"), Some(&10));
  }

  #[test]
  fn put_all_is_atomic() {
    let mut map = roman();
    assert_eq!(map.put_all(vec![(10, "X"), (50, "V")]), Err(Error::DuplicateKeyOrValue));
    assert_eq!(map.put_all(vec![(10, "X"), (20, "X")]), Err(Error::DuplicateKeyOrValue));
    assert!(!map.contains_key(&10));
    assert_eq!(map.size(), 2);
    map.put_all(vec![(10, "X"), (50, "L")]).unwrap();
    assert_eq!(map.size(), 4);
  }

  #[test]
  fn force_put_evicts_conflicts() {
    let mut map = roman();
    map.force_put(1, "V");
    assert_eq!(map.size(), 1);
    assert_eq!(map.get(&1), Some(&"V"));
    assert!(!map.contains_key(&5));
    assert!(!map.contains_value(&"I"));

    map.force_put(2, "II");
    map.force_put(2, "TWO");
    assert_eq!(map.size(), 2);
    assert!(!map.contains_value(&"II"));
  }

  #[test]
  fn inverse_views_share_storage() {
    let mut map = roman();
    assert_eq!(map.inverse().get(&"V"), Some(&5));
    assert!(map.inverse().contains_key(&"I"));

    {
      let mut inverse = map.inverse_mut();
      assert_eq!(inverse.put("X", 10), Ok(()));
      assert_eq!(inverse.put("I", 100), Err(Error::DuplicateKeyOrValue));
      assert_eq!(inverse.remove(&"V"), Some(5));
    }
    assert_eq!(map.get(&10), Some(&"X"));
    assert!(!map.contains_key(&5));

    map.put(50, "L").unwrap();
    assert_eq!(map.inverse().get(&"L"), Some(&50));
    assert_eq!(map.inverse().size(), 3);
  }

  #[test]
  fn into_inverse_swaps_roles() {
    let inverse = roman().into_inverse();
    assert_eq!(inverse.get(&"I"), Some(&1));
    assert_eq!(inverse.get_key(&5), Some(&"V"));
  }

  #[test]
  fn remove_updates_both_directions() {
    let mut map = roman();
    assert_eq!(map.remove(&1), Some("I"));
    assert!(!map.contains_value(&"I"));
    assert_eq!(map.remove(&1), None);
    assert_eq!(map.remove_value(&"V"), Some(5));
    assert!(map.is_empty());
  }

  #[test]
  fn values_and_debug() {
    let map = roman();
    let mut values: Vec<_> = map.values().cloned().collect();
    values.sort();
    assert_eq!(values, vec!["I", "V"]);

    let mut single = BiMap::new();
    single.put("one", 1).unwrap();
    assert_eq!(format!("{:?}", single), "{\"one\": 1}");
  }
}
