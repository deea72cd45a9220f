// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Map from disjoint intervals to values.
//!
//! Entries are kept sorted and never overlap. Two neighbouring entries holding equal values are merged as soon as they touch, so a key range mapped to a single value is always stored as a single entry.
//!
//! ```rust
//! use interval_algebra::{Interval, IntervalMap};
//!
//! let mut rates = IntervalMap::new();
//! rates.insert(Interval::closed_open(0, 10), "low");
//! rates.insert(Interval::closed_open(10, 20), "low");
//! rates.insert(Interval::new(5, 6), "high");
//! assert_eq!(rates.len(), 3);
//! assert_eq!(rates.get(&5), Some(&"high"));
//! assert_eq!(rates.get(&15), Some(&"low"));
//! assert_eq!(rates.get(&20), None);
//! ```

use crate::interval::Interval;
use crate::interval_set::{ends_before, IntervalSet};
use crate::order::Order;
use gcollections::ops::Empty;
use log::trace;
use std::iter::FromIterator;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalMap<K, V> {
  entries: Vec<(Interval<K>, V)>
}

impl<K, V> IntervalMap<K, V> where
 K: PartialOrd + Clone + Default,
 V: Clone + PartialEq
{
  pub fn new() -> IntervalMap<K, V> {
    IntervalMap {
      entries: vec![]
    }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item=(&Interval<K>, &V)> {
    self.entries.iter().map(|(key, value)| (key, value))
  }

  /// Maps every value of `key` to `value`, replacing what was there.
  pub fn insert(&mut self, key: Interval<K>, value: V) {
    if key.is_empty() {
      return;
    }
    self.remove(&key);
    // No entry overlaps `key` anymore, they are either below or above it.
    let pos = self.entries.partition_point(|(k, _)| k.order(&key) <= Order::ATouchesB);
    let mut start = pos;
    let mut end = pos;
    let mut joint = key;
    if let Some((below, v)) = pos.checked_sub(1).and_then(|i| self.entries.get(i)) {
      if *v == value && below.touches(&joint) {
        joint = below.envelope(&joint);
        start -= 1;
      }
    }
    if let Some((above, v)) = self.entries.get(pos) {
      if *v == value && above.touches(&joint) {
        joint = joint.envelope(above);
        end += 1;
      }
    }
    trace!("map insert at {}: merged {} neighbour(s)", start, end - start);
    self.entries.splice(start..end, Some((joint, value)));
  }

  /// Unmaps every value of `key`.
  pub fn remove(&mut self, key: &Interval<K>) {
    if self.is_empty() || key.is_empty() {
      return;
    }
    let start = self.entries.partition_point(|(k, _)| k.order(key) <= Order::ATouchesB);
    let mut end = start;
    let mut remainder = vec![];
    while let Some((stored, value)) = self.entries.get(end) {
      if stored.order(key).is_disjoint() {
        break;
      }
      remainder.extend(stored.set_difference(key).into_iter().map(|piece| (piece, value.clone())));
      end += 1;
    }
    trace!("map remove at {}: split {} entry(ies) into {}", start, end - start, remainder.len());
    self.entries.splice(start..end, remainder);
  }

  pub fn get(&self, key: &K) -> Option<&V> {
    let idx = self.entries.partition_point(|(k, _)| ends_before(k, key));
    self.entries.get(idx)
      .filter(|(k, _)| k.contains(key))
      .map(|(_, value)| value)
  }

  /// Keys mapped to some value.
  pub fn domain(&self) -> IntervalSet<K> {
    self.entries.iter().map(|(key, _)| key.clone()).collect()
  }
}

impl<K, V> Default for IntervalMap<K, V> where
 K: PartialOrd + Clone + Default,
 V: Clone + PartialEq
{
  fn default() -> IntervalMap<K, V> {
    IntervalMap::new()
  }
}

impl<K, V> FromIterator<(Interval<K>, V)> for IntervalMap<K, V> where
 K: PartialOrd + Clone + Default,
 V: Clone + PartialEq
{
  /// Later pairs overwrite earlier ones.
  fn from_iter<I>(iter: I) -> IntervalMap<K, V> where
   I: IntoIterator<Item=(Interval<K>, V)>
  {
    let mut map = IntervalMap::new();
    for (key, value) in iter {
      map.insert(key, value);
    }
    map
  }
}
