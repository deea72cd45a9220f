// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval over an ordered domain with open, closed or unbounded sides.
//!
//! An interval is stored as `(min, max, left, right)` and is normalized on every construction, so two intervals denoting the same set of values are always equal:
//!
//! * an empty interval has both sides `Empty` and `min = max = T::default()`,
//! * `min > max`, or `min == max` with one side open, is empty,
//! * the value of an unbounded side is reset to `T::default()`.
//!
//! Binary relations are derived from [`Order`](../order/enum.Order.html), the relative position of the two operands. Set operations whose result may not be an interval (union, difference, complement) return an [`IntervalSet`](../interval_set/struct.IntervalSet.html).
//!
//! # Examples
//!
//! ```rust
//! use interval_algebra::Interval;
//! use interval_algebra::order::Order;
//! use gcollections::ops::*;
//!
//! let a = Interval::new(10, 20);
//! let b = Interval::open(20, 25);
//! assert_eq!(a.order(&b), Order::ATouchesB);
//! assert!(a.touches(&b));
//! assert!(!a.overlaps(&b));
//! assert_eq!(a.envelope(&b), Interval::closed_open(10, 25));
//!
//! // `[5,5)` contains no value at all.
//! assert_eq!(Interval::closed_open(5, 5), Interval::empty());
//!
//! let pieces = Interval::open(2, 4).set_difference(&Interval::singleton(3));
//! assert_eq!(pieces.iter().cloned().collect::<Vec<_>>(),
//!   vec![Interval::open(2, 3), Interval::open(3, 4)]);
//! ```

use crate::boundary::{Adjacency, BoundKind, Boundary};
use crate::error::IntervalError;
use crate::interval_set::IntervalSet;
use crate::ops::{Arithmetic, Category, Hull, Whole};
use crate::order::Order;
use gcollections::kind::*;
use gcollections::ops::{Contains, Difference, Empty, Intersection, IsEmpty, IsSingleton, Overlap,
  Singleton, SymmetricDifference, Union};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Interval<T> {
  min: T,
  max: T,
  left: BoundKind,
  right: BoundKind
}

impl<T> Interval<T> where
 T: PartialOrd + Clone + Default
{
  /// The closed interval `[min, max]`.
  pub fn new(min: T, max: T) -> Interval<T> {
    Interval::bounded_parts(min, max, BoundKind::Closed, BoundKind::Closed)
  }

  pub fn open(min: T, max: T) -> Interval<T> {
    Interval::bounded_parts(min, max, BoundKind::Open, BoundKind::Open)
  }

  pub fn open_closed(min: T, max: T) -> Interval<T> {
    Interval::bounded_parts(min, max, BoundKind::Open, BoundKind::Closed)
  }

  pub fn closed_open(min: T, max: T) -> Interval<T> {
    Interval::bounded_parts(min, max, BoundKind::Closed, BoundKind::Open)
  }

  /// `[min, +inf)`
  pub fn at_least(min: T) -> Interval<T> {
    Interval::bounded_parts(min, T::default(), BoundKind::Closed, BoundKind::Unbounded)
  }

  /// `(min, +inf)`
  pub fn greater_than(min: T) -> Interval<T> {
    Interval::bounded_parts(min, T::default(), BoundKind::Open, BoundKind::Unbounded)
  }

  /// `(-inf, max]`
  pub fn at_most(max: T) -> Interval<T> {
    Interval::bounded_parts(T::default(), max, BoundKind::Unbounded, BoundKind::Closed)
  }

  /// `(-inf, max)`
  pub fn less_than(max: T) -> Interval<T> {
    Interval::bounded_parts(T::default(), max, BoundKind::Unbounded, BoundKind::Open)
  }

  /// Builds an interval from its raw representation and normalizes it.
  /// Fails only if exactly one side is `Empty`.
  pub fn try_from_raw(min: T, max: T, left: BoundKind, right: BoundKind) -> Result<Interval<T>, IntervalError> {
    match (left, right) {
      (BoundKind::Empty, BoundKind::Empty) => Ok(Interval::empty()),
      (BoundKind::Empty, _) | (_, BoundKind::Empty) =>
        Err(IntervalError::MismatchedEmptiness { left: left, right: right }),
      _ => Ok(Interval::bounded_parts(min, max, left, right))
    }
  }

  /// Same as `try_from_raw` but panics on mismatched emptiness.
  pub fn from_raw(min: T, max: T, left: BoundKind, right: BoundKind) -> Interval<T> {
    match Interval::try_from_raw(min, max, left, right) {
      Ok(i) => i,
      Err(e) => panic!("Cannot build the interval: {}.", e)
    }
  }

  /// Builds the interval lying between a left and a right edge. A left edge at `PlusInfinity`, a right edge at `MinusInfinity` or an `Empty` edge gives the empty interval.
  pub fn from_boundaries(left: Boundary<T>, right: Boundary<T>) -> Interval<T> {
    let (min, left) = match left {
      Boundary::MinusInfinity => (T::default(), BoundKind::Unbounded),
      Boundary::Closed(x) => (x, BoundKind::Closed),
      Boundary::Open(x) => (x, BoundKind::Open),
      Boundary::Empty | Boundary::PlusInfinity => return Interval::empty()
    };
    let (max, right) = match right {
      Boundary::PlusInfinity => (T::default(), BoundKind::Unbounded),
      Boundary::Closed(x) => (x, BoundKind::Closed),
      Boundary::Open(x) => (x, BoundKind::Open),
      Boundary::Empty | Boundary::MinusInfinity => return Interval::empty()
    };
    Interval::bounded_parts(min, max, left, right)
  }

  // Normalization of an interval whose sides are both non-empty.
  fn bounded_parts(min: T, max: T, left: BoundKind, right: BoundKind) -> Interval<T> {
    debug_assert!(left != BoundKind::Empty && right != BoundKind::Empty);
    let degenerate =
      if left.is_bounded() && right.is_bounded() {
        match min.partial_cmp(&max) {
          Some(Ordering::Less) => false,
          Some(Ordering::Equal) => left != BoundKind::Closed || right != BoundKind::Closed,
          _ => true
        }
      }
      // A value incomparable to itself (NaN) bounds nothing.
      else {
        (left.is_bounded() && min.partial_cmp(&min).is_none())
        || (right.is_bounded() && max.partial_cmp(&max).is_none())
      };
    if degenerate {
      Interval::empty()
    }
    else {
      Interval {
        min: if left.is_bounded() { min } else { T::default() },
        max: if right.is_bounded() { max } else { T::default() },
        left: left,
        right: right
      }
    }
  }

  pub fn left_kind(&self) -> BoundKind {
    self.left
  }

  pub fn right_kind(&self) -> BoundKind {
    self.right
  }

  /// The lower value, if the interval is non-empty and left-bounded.
  pub fn lower(&self) -> Option<&T> {
    if self.left.is_bounded() { Some(&self.min) } else { None }
  }

  /// The upper value, if the interval is non-empty and right-bounded.
  pub fn upper(&self) -> Option<&T> {
    if self.right.is_bounded() { Some(&self.max) } else { None }
  }

  pub fn left_boundary(&self) -> Boundary<T> {
    self.left_edge().map(T::clone)
  }

  pub fn right_boundary(&self) -> Boundary<T> {
    self.right_edge().map(T::clone)
  }

  pub(crate) fn left_edge(&self) -> Boundary<&T> {
    match self.left {
      BoundKind::Empty => Boundary::Empty,
      BoundKind::Unbounded => Boundary::MinusInfinity,
      BoundKind::Closed => Boundary::Closed(&self.min),
      BoundKind::Open => Boundary::Open(&self.min)
    }
  }

  pub(crate) fn right_edge(&self) -> Boundary<&T> {
    match self.right {
      BoundKind::Empty => Boundary::Empty,
      BoundKind::Unbounded => Boundary::PlusInfinity,
      BoundKind::Closed => Boundary::Closed(&self.max),
      BoundKind::Open => Boundary::Open(&self.max)
    }
  }

  pub fn is_empty(&self) -> bool {
    self.left == BoundKind::Empty
  }

  pub fn is_singleton(&self) -> bool {
    self.left == BoundKind::Closed && self.right == BoundKind::Closed && self.min == self.max
  }

  pub fn is_bounded(&self) -> bool {
    self.left_edge().is_finite() && self.right_edge().is_finite()
  }

  pub fn is_whole(&self) -> bool {
    self.left == BoundKind::Unbounded && self.right == BoundKind::Unbounded
  }

  pub fn contains(&self, value: &T) -> bool {
    let above_left = match self.left {
      BoundKind::Empty => false,
      BoundKind::Unbounded => true,
      BoundKind::Closed => *value >= self.min,
      BoundKind::Open => *value > self.min
    };
    above_left && match self.right {
      BoundKind::Empty => false,
      BoundKind::Unbounded => true,
      BoundKind::Closed => *value <= self.max,
      BoundKind::Open => *value < self.max
    }
  }

  /// Position of `self` relative to `other`.
  pub fn order(&self, other: &Interval<T>) -> Order {
    match (self.is_empty(), other.is_empty()) {
      (true, true) => return Order::Equal,
      (true, false) => return Order::BOnly,
      (false, true) => return Order::AOnly,
      (false, false) => ()
    }
    let (a_left, a_right) = (self.left_edge(), self.right_edge());
    let (b_left, b_right) = (other.left_edge(), other.right_edge());
    match a_right.precedes(&b_left) {
      Adjacency::Gap => return Order::ABelowB,
      Adjacency::Touch => return Order::ATouchesB,
      Adjacency::Overlap => ()
    }
    match b_right.precedes(&a_left) {
      Adjacency::Gap => return Order::BBelowA,
      Adjacency::Touch => return Order::BTouchesA,
      Adjacency::Overlap => ()
    }
    match (a_left.cmp_left(&b_left), a_right.cmp_right(&b_right)) {
      (Ordering::Less, Ordering::Less) => Order::AOverlapsB,
      (Ordering::Less, Ordering::Equal) => Order::AExtendsBelowB,
      (Ordering::Less, Ordering::Greater) => Order::AEnclosesB,
      (Ordering::Equal, Ordering::Less) => Order::BExtendsAboveA,
      (Ordering::Equal, Ordering::Equal) => Order::Equal,
      (Ordering::Equal, Ordering::Greater) => Order::AExtendsAboveB,
      (Ordering::Greater, Ordering::Less) => Order::BEnclosesA,
      (Ordering::Greater, Ordering::Equal) => Order::BExtendsBelowA,
      (Ordering::Greater, Ordering::Greater) => Order::BOverlapsA
    }
  }

  // The predicates below are false as soon as one operand is empty, even for `includes`.
  fn non_empty_order(&self, other: &Interval<T>) -> Option<Order> {
    if self.is_empty() || other.is_empty() { None }
    else { Some(self.order(other)) }
  }

  /// `self` covers every value of `other`. False if either operand is empty.
  pub fn includes(&self, other: &Interval<T>) -> bool {
    self.non_empty_order(other).map_or(false, Order::is_inclusion)
  }

  pub fn overlaps(&self, other: &Interval<T>) -> bool {
    self.non_empty_order(other).map_or(false, Order::is_overlap)
  }

  /// Overlapping or adjacent with no value in between.
  pub fn touches(&self, other: &Interval<T>) -> bool {
    self.non_empty_order(other).map_or(false, Order::is_touch)
  }

  /// Smallest interval containing both operands.
  pub fn envelope(&self, other: &Interval<T>) -> Interval<T> {
    if self.is_empty() {
      other.clone()
    }
    else if other.is_empty() {
      self.clone()
    }
    else {
      let left =
        if self.left_edge().cmp_left(&other.left_edge()) == Ordering::Greater { other.left_boundary() }
        else { self.left_boundary() };
      let right =
        if self.right_edge().cmp_right(&other.right_edge()) == Ordering::Less { other.right_boundary() }
        else { self.right_boundary() };
      Interval::from_boundaries(left, right)
    }
  }

  pub fn set_intersection(&self, other: &Interval<T>) -> Interval<T> {
    if !self.overlaps(other) {
      Interval::empty()
    }
    else {
      let left =
        if self.left_edge().cmp_left(&other.left_edge()) == Ordering::Less { other.left_boundary() }
        else { self.left_boundary() };
      let right =
        if self.right_edge().cmp_right(&other.right_edge()) == Ordering::Greater { other.right_boundary() }
        else { self.right_boundary() };
      Interval::from_boundaries(left, right)
    }
  }

  pub fn set_union(&self, other: &Interval<T>) -> IntervalSet<T> {
    let mut res = IntervalSet::from(self.clone());
    res.insert(other.clone());
    res
  }

  /// Values of `self` not in `other`: the parts of `self` left below and above `other`.
  pub fn set_difference(&self, other: &Interval<T>) -> IntervalSet<T> {
    let mut res = IntervalSet::empty();
    if !self.overlaps(other) {
      res.insert(self.clone());
    }
    else {
      res.insert(Interval::from_boundaries(self.left_boundary(), other.left_boundary().invert()));
      res.insert(Interval::from_boundaries(other.right_boundary().invert(), self.right_boundary()));
    }
    res
  }

  pub fn set_symmetric_difference(&self, other: &Interval<T>) -> IntervalSet<T> {
    self.set_difference(other).set_union(&other.set_difference(self))
  }

  pub fn complement(&self) -> IntervalSet<T> {
    IntervalSet::from(self.clone()).complement()
  }
}

impl<T> Interval<T> where
 T: Arithmetic
{
  /// Number of values for integral domains, `max - min` for the others, `None` when unbounded.
  /// Like the bound type, it overflows for an integral interval covering the whole type.
  pub fn size(&self) -> Option<T> {
    if self.is_empty() {
      Some(T::zero())
    }
    else if !self.is_bounded() {
      None
    }
    else {
      let width = self.max.clone() - self.min.clone();
      if T::CATEGORY == Category::Integral {
        let mut count = width;
        if self.left == BoundKind::Closed { count = count + T::one(); }
        if self.right == BoundKind::Open { count = count - T::one(); }
        Some(count)
      }
      else {
        Some(width)
      }
    }
  }
}

impl<T> Default for Interval<T> where
 T: Default
{
  fn default() -> Interval<T> {
    Interval {
      min: T::default(),
      max: T::default(),
      left: BoundKind::Empty,
      right: BoundKind::Empty
    }
  }
}

impl<T> Collection for Interval<T>
{
  type Item = T;
}

impl<T> Empty for Interval<T> where
 T: Default
{
  fn empty() -> Interval<T> {
    Interval::default()
  }
}

impl<T> Singleton for Interval<T> where
 T: PartialOrd + Clone + Default
{
  fn singleton(x: T) -> Interval<T> {
    Interval::new(x.clone(), x)
  }
}

impl<T> Whole for Interval<T> where
 T: Default
{
  fn whole() -> Interval<T> {
    Interval {
      min: T::default(),
      max: T::default(),
      left: BoundKind::Unbounded,
      right: BoundKind::Unbounded
    }
  }
}

impl<T> IsEmpty for Interval<T> where
 T: PartialOrd + Clone + Default
{
  fn is_empty(&self) -> bool {
    Interval::is_empty(self)
  }
}

impl<T> IsSingleton for Interval<T> where
 T: PartialOrd + Clone + Default
{
  fn is_singleton(&self) -> bool {
    Interval::is_singleton(self)
  }
}

impl<T> Contains for Interval<T> where
 T: PartialOrd + Clone + Default
{
  fn contains(&self, value: &T) -> bool {
    Interval::contains(self, value)
  }
}

impl<T> Overlap for Interval<T> where
 T: PartialOrd + Clone + Default
{
  fn overlap(&self, other: &Interval<T>) -> bool {
    self.overlaps(other)
  }
}

impl<T> Hull for Interval<T> where
 T: PartialOrd + Clone + Default
{
  type Output = Interval<T>;

  fn hull(&self, other: &Interval<T>) -> Interval<T> {
    self.envelope(other)
  }
}

impl<T> Intersection for Interval<T> where
 T: PartialOrd + Clone + Default
{
  type Output = Interval<T>;

  fn intersection(&self, other: &Interval<T>) -> Interval<T> {
    self.set_intersection(other)
  }
}

impl<T> Union for Interval<T> where
 T: PartialOrd + Clone + Default
{
  type Output = IntervalSet<T>;

  fn union(&self, other: &Interval<T>) -> IntervalSet<T> {
    self.set_union(other)
  }
}

impl<T> Difference for Interval<T> where
 T: PartialOrd + Clone + Default
{
  type Output = IntervalSet<T>;

  fn difference(&self, other: &Interval<T>) -> IntervalSet<T> {
    self.set_difference(other)
  }
}

impl<T> SymmetricDifference for Interval<T> where
 T: PartialOrd + Clone + Default
{
  type Output = IntervalSet<T>;

  fn symmetric_difference(&self, other: &Interval<T>) -> IntervalSet<T> {
    self.set_symmetric_difference(other)
  }
}

impl<T> Serialize for Interval<T> where
 T: Serialize
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    (&self.min, &self.max, self.left, self.right).serialize(serializer)
  }
}

impl<'de, T> Deserialize<'de> for Interval<T> where
 T: Deserialize<'de> + PartialOrd + Clone + Default
{
  fn deserialize<D>(deserializer: D) -> Result<Interval<T>, D::Error> where
   D: Deserializer<'de>
  {
    let (min, max, left, right) = <(T, T, BoundKind, BoundKind)>::deserialize(deserializer)?;
    Interval::try_from_raw(min, max, left, right).map_err(serde::de::Error::custom)
  }
}
