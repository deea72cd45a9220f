// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Normalized set of intervals.
//!
//! It stores intervals in a sorted vector. The main advantage is the exact representation of sets with "holes". For example `[1,2] U (5,6]` is stored as `{[1,2], (5,6]}`. The vector is kept maximally merged: stored intervals never overlap and never touch, so there is always at least one value missing between two consecutive intervals. Two sets are thus equal if and only if they contain the same values.
//!
//! Only [`insert`](struct.IntervalSet.html#method.insert) and [`erase`](struct.IntervalSet.html#method.erase) modify the vector. Union and difference are folds of these two, the complement inverts the edges facing each gap, and the intersection is obtained from the other two by De Morgan's law.
//!
//! # Examples
//!
//! ```rust
//! use interval_algebra::{Interval, IntervalSet};
//!
//! let mut set = IntervalSet::empty();
//! set.insert(Interval::new(1, 5));
//! set.insert(Interval::open_closed(5, 10));
//! assert_eq!(set, IntervalSet::from(Interval::new(1, 10)));
//!
//! set.erase(&Interval::open(3, 4));
//! assert_eq!(set.interval_count(), 2);
//! assert!(set.contains(&3) && set.contains(&4));
//! ```
//!
//! # See also
//! [interval](../interval/index.html)

use crate::boundary::Boundary;
use crate::interval::Interval;
use crate::ops::{Arithmetic, Whole};
use crate::order::Order;
use gcollections::kind::*;
use gcollections::ops::{Complement, Contains, Difference, Empty, Intersection, IsEmpty, IsSingleton,
  Overlap, Singleton, SymmetricDifference, Union};
use log::trace;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::iter::{FromIterator, IntoIterator};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<T> {
  intervals: Vec<Interval<T>>
}

// `i` lies entirely below `value`.
pub(crate) fn ends_before<T>(i: &Interval<T>, value: &T) -> bool where
 T: PartialOrd + Clone + Default
{
  match i.right_edge() {
    Boundary::Closed(max) => max < value,
    Boundary::Open(max) => max <= value,
    _ => false
  }
}

impl<T> IntervalSet<T> where
 T: PartialOrd + Clone + Default
{
  pub fn empty() -> IntervalSet<T> {
    IntervalSet {
      intervals: vec![]
    }
  }

  /// The set holding the closed interval `[min, max]`.
  pub fn new(min: T, max: T) -> IntervalSet<T> {
    IntervalSet::from(Interval::new(min, max))
  }

  pub fn interval_count(&self) -> usize {
    self.intervals.len()
  }

  pub fn is_empty(&self) -> bool {
    self.intervals.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
    self.intervals.iter()
  }

  /// Smallest interval containing the whole set.
  pub fn span(&self) -> Interval<T> {
    match (self.intervals.first(), self.intervals.last()) {
      (Some(front), Some(back)) => front.envelope(back),
      _ => Interval::empty()
    }
  }

  // Appends a piece known to lie strictly above the last interval, with a gap in between.
  fn push(&mut self, x: Interval<T>) {
    if !x.is_empty() {
      debug_assert!(self.intervals.last().map_or(true, |back| back.order(&x) == Order::ABelowB),
        "The intervals must be ordered and separated by a gap. For a safe push, use `insert`.");
      self.intervals.push(x);
    }
  }

  /// Adds `x`, merging it with every stored interval it overlaps or touches.
  pub fn insert(&mut self, x: Interval<T>) {
    if x.is_empty() {
      return;
    }
    let start = self.intervals.partition_point(|i| i.order(&x) == Order::ABelowB);
    let mut joint = x;
    let mut end = start;
    while let Some(stored) = self.intervals.get(end) {
      if !stored.order(&joint).is_touch() {
        break;
      }
      joint = joint.envelope(stored);
      end += 1;
    }
    trace!("insert at {}: absorbed {} interval(s)", start, end - start);
    self.intervals.splice(start..end, Some(joint));
  }

  /// Removes the values of `x`, splitting the stored intervals it partially covers.
  pub fn erase(&mut self, x: &Interval<T>) {
    if self.is_empty() || x.is_empty() {
      return;
    }
    let start = self.intervals.partition_point(|i| i.order(x) <= Order::ATouchesB);
    let mut end = start;
    let mut remainder = vec![];
    while let Some(stored) = self.intervals.get(end) {
      if !stored.overlaps(x) {
        break;
      }
      remainder.extend(stored.set_difference(x).intervals);
      end += 1;
    }
    trace!("erase at {}: split {} interval(s) into {}", start, end - start, remainder.len());
    self.intervals.splice(start..end, remainder);
  }

  pub fn contains(&self, value: &T) -> bool {
    let idx = self.intervals.partition_point(|i| ends_before(i, value));
    self.intervals.get(idx).map_or(false, |i| i.contains(value))
  }

  pub fn complement(&self) -> IntervalSet<T> {
    let mut res = IntervalSet::empty();
    match (self.intervals.first(), self.intervals.last()) {
      (Some(front), Some(back)) => {
        res.push(Interval::from_boundaries(Boundary::MinusInfinity, front.left_boundary().invert()));
        for pair in self.intervals.windows(2) {
          res.push(Interval::from_boundaries(
            pair[0].right_boundary().invert(),
            pair[1].left_boundary().invert()));
        }
        res.push(Interval::from_boundaries(back.right_boundary().invert(), Boundary::PlusInfinity));
      }
      _ => res.push(Interval::whole())
    }
    res
  }

  pub fn set_union(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
    let mut res = self.clone();
    res.apply_union(other);
    res
  }

  pub fn set_intersection(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
    self.complement().set_union(&other.complement()).complement()
  }

  pub fn set_difference(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
    let mut res = self.clone();
    res.apply_difference(other);
    res
  }

  pub fn set_symmetric_difference(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
    self.set_difference(other).set_union(&other.set_difference(self))
  }

  pub fn apply_union(&mut self, other: &IntervalSet<T>) {
    for i in other.iter() {
      self.insert(i.clone());
    }
  }

  pub fn apply_intersection(&mut self, other: &IntervalSet<T>) {
    *self = self.set_intersection(other);
  }

  pub fn apply_difference(&mut self, other: &IntervalSet<T>) {
    for i in other.iter() {
      self.erase(i);
    }
  }

  pub fn apply_symmetric_difference(&mut self, other: &IntervalSet<T>) {
    *self = self.set_symmetric_difference(other);
  }

  pub fn apply_complement(&mut self) {
    *self = self.complement();
  }

  /// Order of the spans of both sets.
  pub fn order(&self, other: &IntervalSet<T>) -> Order {
    self.span().order(&other.span())
  }

  /// `self` covers every value of `other`. As for intervals, false if either set is empty.
  pub fn includes(&self, other: &IntervalSet<T>) -> bool {
    !self.is_empty() && !other.is_empty() && other.set_difference(self).is_empty()
  }

  pub fn overlaps(&self, other: &IntervalSet<T>) -> bool {
    !self.set_intersection(other).is_empty()
  }

  /// Some interval of `self` overlaps or touches some interval of `other`.
  pub fn touches(&self, other: &IntervalSet<T>) -> bool {
    !self.is_empty() && !other.is_empty()
    && self.set_union(other).interval_count() < self.interval_count() + other.interval_count()
  }
}

impl<T> IntervalSet<T> where
 T: Arithmetic
{
  /// Sum of the sizes of the intervals, `None` if one of them is unbounded.
  pub fn size(&self) -> Option<T> {
    self.intervals.iter().try_fold(T::zero(), |acc, i| i.size().map(|s| acc + s))
  }
}

impl<T> Default for IntervalSet<T>
{
  fn default() -> IntervalSet<T> {
    IntervalSet {
      intervals: vec![]
    }
  }
}

impl<T> From<Interval<T>> for IntervalSet<T> where
 T: PartialOrd + Clone + Default
{
  fn from(i: Interval<T>) -> IntervalSet<T> {
    let mut res = IntervalSet::empty();
    res.push(i);
    res
  }
}

impl<T> Extend<Interval<T>> for IntervalSet<T> where
 T: PartialOrd + Clone + Default
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=Interval<T>>
  {
    for interval in iterable {
      self.insert(interval);
    }
  }
}

impl<T> FromIterator<Interval<T>> for IntervalSet<T> where
 T: PartialOrd + Clone + Default
{
  fn from_iter<I>(iterable: I) -> IntervalSet<T> where
   I: IntoIterator<Item=Interval<T>>
  {
    let mut res = IntervalSet::empty();
    res.extend(iterable);
    res
  }
}

impl<T> IntoIterator for IntervalSet<T>
{
  type Item = Interval<T>;
  type IntoIter = std::vec::IntoIter<Interval<T>>;

  fn into_iter(self) -> Self::IntoIter {
    self.intervals.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T>
{
  type Item = &'a Interval<T>;
  type IntoIter = std::slice::Iter<'a, Interval<T>>;

  fn into_iter(self) -> Self::IntoIter {
    self.intervals.iter()
  }
}

impl<T> Collection for IntervalSet<T>
{
  type Item = T;
}

impl<T> Empty for IntervalSet<T> where
 T: PartialOrd + Clone + Default
{
  fn empty() -> IntervalSet<T> {
    IntervalSet::empty()
  }
}

impl<T> Singleton for IntervalSet<T> where
 T: PartialOrd + Clone + Default
{
  fn singleton(x: T) -> IntervalSet<T> {
    IntervalSet::new(x.clone(), x)
  }
}

impl<T> Whole for IntervalSet<T> where
 T: PartialOrd + Clone + Default
{
  fn whole() -> IntervalSet<T> {
    IntervalSet::from(Interval::whole())
  }
}

impl<T> IsEmpty for IntervalSet<T> where
 T: PartialOrd + Clone + Default
{
  fn is_empty(&self) -> bool {
    IntervalSet::is_empty(self)
  }
}

impl<T> IsSingleton for IntervalSet<T> where
 T: PartialOrd + Clone + Default
{
  fn is_singleton(&self) -> bool {
    self.intervals.len() == 1 && self.intervals[0].is_singleton()
  }
}

impl<T> Contains for IntervalSet<T> where
 T: PartialOrd + Clone + Default
{
  fn contains(&self, value: &T) -> bool {
    IntervalSet::contains(self, value)
  }
}

impl<T> Overlap for IntervalSet<T> where
 T: PartialOrd + Clone + Default
{
  fn overlap(&self, other: &IntervalSet<T>) -> bool {
    self.overlaps(other)
  }
}

impl<T> Complement for IntervalSet<T> where
 T: PartialOrd + Clone + Default
{
  fn complement(&self) -> IntervalSet<T> {
    IntervalSet::complement(self)
  }
}

macro_rules! set_op_impl
{
  ( $( $t: ident, $m:ident, $v:ident );* ) =>
  {$(
    impl<T> $t for IntervalSet<T> where
     T: PartialOrd + Clone + Default
    {
      type Output = IntervalSet<T>;

      fn $m(&self, other: &IntervalSet<T>) -> IntervalSet<T> {
        self.$v(other)
      }
    }
  )*}
}

set_op_impl! {
  Intersection, intersection, set_intersection;
  Union, union, set_union;
  Difference, difference, set_difference;
  SymmetricDifference, symmetric_difference, set_symmetric_difference
}

impl<T> Serialize for IntervalSet<T> where
 T: Serialize
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    self.intervals.serialize(serializer)
  }
}

impl<'de, T> Deserialize<'de> for IntervalSet<T> where
 T: Deserialize<'de> + PartialOrd + Clone + Default
{
  fn deserialize<D>(deserializer: D) -> Result<IntervalSet<T>, D::Error> where
   D: Deserializer<'de>
  {
    let intervals = Vec::<Interval<T>>::deserialize(deserializer)?;
    Ok(intervals.into_iter().collect())
  }
}
