// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Unordered collection counting the occurrences of each element.
//!
//! Only elements with a positive count are stored, so `contains` and `element_set` agree.

use gcollections::kind::*;
use gcollections::ops::*;
use log::trace;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;
use std::iter::{repeat, FromIterator};

#[derive(Clone, PartialEq, Eq)]
pub struct Multiset<E: Eq + Hash>
{
  counts: HashMap<E, usize>,
  occurrences: usize
}

impl<E> Multiset<E> where
 E: Eq + Hash
{
  pub fn new() -> Multiset<E> {
    Multiset {
      counts: HashMap::new(),
      occurrences: 0
    }
  }

  pub fn add(&mut self, element: E) {
    self.add_occurrences(element, 1);
  }

  /// Adding zero occurrences does nothing.
  pub fn add_occurrences(&mut self, element: E, occurrences: usize) {
    if occurrences > 0 {
      *self.counts.entry(element).or_insert(0) += occurrences;
      self.occurrences += occurrences;
    }
  }

  pub fn remove(&mut self, element: &E) {
    self.remove_occurrences(element, 1);
  }

  /// Removes at most `occurrences` occurrences of `element`, dropping it when none is left.
  pub fn remove_occurrences(&mut self, element: &E, occurrences: usize) {
    if occurrences == 0 {
      return;
    }
    let count = self.count(element);
    if count > occurrences {
      if let Some(count) = self.counts.get_mut(element) {
        *count -= occurrences;
      }
      self.occurrences -= occurrences;
    }
    else if count > 0 {
      self.drop_element(element);
    }
  }

  fn drop_element(&mut self, element: &E) {
    if let Some(count) = self.counts.remove(element) {
      self.occurrences -= count;
      trace!("multiset: dropped an element whose {} occurrence(s) were removed", count);
    }
  }

  pub fn count(&self, element: &E) -> usize {
    self.counts.get(element).cloned().unwrap_or(0)
  }

  /// Sets the count of an element already present and returns whether the count was applied.
  ///
  /// A zero count removes the element, so `contains` no longer reports it (a zero-count entry is never kept).
  pub fn set_count(&mut self, element: &E, count: usize) -> bool {
    if count == 0 {
      let present = self.counts.contains_key(element);
      self.drop_element(element);
      return present;
    }
    match self.counts.get_mut(element) {
      Some(current) => {
        self.occurrences = self.occurrences - *current + count;
        *current = count;
        true
      }
      None => false
    }
  }

  /// Sets the count to `new_count` only if it currently equals `old_count`.
  pub fn set_count_if(&mut self, element: &E, old_count: usize, new_count: usize) -> bool {
    if self.count(element) == old_count {
      self.set_count(element, new_count)
    }
    else {
      false
    }
  }

  pub fn element_set(&self) -> HashSet<&E> {
    self.counts.keys().collect()
  }

  /// Distinct elements with their counts.
  pub fn iter(&self) -> impl Iterator<Item=(&E, usize)> {
    self.counts.iter().map(|(element, &count)| (element, count))
  }
}

impl<E> Default for Multiset<E> where
 E: Eq + Hash
{
  fn default() -> Multiset<E> {
    Multiset::new()
  }
}

impl<E> Collection for Multiset<E> where
 E: Eq + Hash
{
  type Item = E;
}

impl<E> Contains for Multiset<E> where
 E: Eq + Hash
{
  fn contains(&self, element: &E) -> bool {
    self.counts.contains_key(element)
  }
}

impl<E> Cardinality for Multiset<E> where
 E: Eq + Hash
{
  type Size = usize;

  /// Total number of occurrences.
  fn size(&self) -> usize {
    self.occurrences
  }
}

impl<E> Extend<E> for Multiset<E> where
 E: Eq + Hash
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=E>
  {
    for element in iterable {
      self.add(element);
    }
  }
}

impl<E> FromIterator<E> for Multiset<E> where
 E: Eq + Hash
{
  fn from_iter<I>(iterable: I) -> Multiset<E> where
   I: IntoIterator<Item=E>
  {
    let mut multiset = Multiset::new();
    multiset.extend(iterable);
    multiset
  }
}

impl<E> Debug for Multiset<E> where
 E: Eq + Hash + Debug
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    formatter.debug_list()
      .entries(self.counts.iter().flat_map(|(element, &count)| repeat(element).take(count)))
      .finish()
  }
}
