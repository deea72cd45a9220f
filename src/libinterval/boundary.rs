// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Edges of intervals.
//!
//! An interval stores a [`BoundKind`] for each side. When two intervals are compared or combined arithmetically, each side is lifted to a [`Boundary`], which carries its value together with one of five kinds. Left edges and right edges do not order the same way: on the left, `[5` starts before `(5`, while on the right `5)` stops before `5]`. This is why there are two comparison functions and no `Ord` implementation.
//!
//! # Examples
//!
//! ```rust
//! use interval_algebra::boundary::{Boundary, Adjacency};
//! use std::cmp::Ordering;
//!
//! assert_eq!(Boundary::Closed(5).cmp_left(&Boundary::Open(5)), Ordering::Less);
//! assert_eq!(Boundary::Closed(5).cmp_right(&Boundary::Open(5)), Ordering::Greater);
//! // `[.., 5]` followed by `(5, ..]`: no value is missing in between.
//! assert_eq!(Boundary::Closed(5).precedes(&Boundary::Open(5)), Adjacency::Touch);
//! assert_eq!(Boundary::Closed(2) + Boundary::Open(3), Boundary::Open(5));
//! ```

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

use self::Boundary::*;

/// Kind of one side of an interval.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum BoundKind {
  Empty,
  Open,
  Closed,
  Unbounded
}

impl BoundKind
{
  pub fn is_bounded(self) -> bool {
    match self {
      BoundKind::Open | BoundKind::Closed => true,
      BoundKind::Empty | BoundKind::Unbounded => false
    }
  }
}

/// An edge value. The payload is only meaningful for `Closed` and `Open`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Boundary<T> {
  Empty,
  MinusInfinity,
  Closed(T),
  Open(T),
  PlusInfinity
}

/// Result of testing whether a right edge comes before a left edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Adjacency {
  /// At least one value lies strictly between the two edges.
  Gap,
  /// Nothing lies between the edges and nothing is shared.
  Touch,
  /// The edges share at least one value.
  Overlap
}

fn rank<T>(b: &Boundary<T>) -> u8 {
  match b {
    MinusInfinity => 0,
    Closed(_) | Open(_) => 1,
    PlusInfinity => 2,
    Empty => 3
  }
}

// Incomparable values (NaN) are treated as equal; normalization already rejected them as endpoints.
fn cmp_values<T: PartialOrd>(a: &T, b: &T) -> Ordering {
  a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

impl<T> Boundary<T>
{
  pub fn value(&self) -> Option<&T> {
    match self {
      Closed(x) | Open(x) => Some(x),
      Empty | MinusInfinity | PlusInfinity => None
    }
  }

  pub fn is_finite(&self) -> bool {
    self.value().is_some()
  }

  /// Swaps `Closed` and `Open`, keeping the value. The right edge `x]` becomes the left edge `(x` of the gap following it.
  pub fn invert(self) -> Boundary<T> {
    match self {
      Closed(x) => Open(x),
      Open(x) => Closed(x),
      other => other
    }
  }

  pub fn map<U, F>(self, f: F) -> Boundary<U> where
   F: FnOnce(T) -> U
  {
    match self {
      Empty => Empty,
      MinusInfinity => MinusInfinity,
      Closed(x) => Closed(f(x)),
      Open(x) => Open(f(x)),
      PlusInfinity => PlusInfinity
    }
  }
}

impl<T: PartialOrd> Boundary<T>
{
  /// Ordering of two left edges: `MinusInfinity` first, and a closed edge before an open one at the same value.
  pub fn cmp_left(&self, other: &Boundary<T>) -> Ordering {
    match (self, other) {
      (Closed(x), Closed(y)) | (Open(x), Open(y)) => cmp_values(x, y),
      (Closed(x), Open(y)) => cmp_values(x, y).then(Ordering::Less),
      (Open(x), Closed(y)) => cmp_values(x, y).then(Ordering::Greater),
      _ => rank(self).cmp(&rank(other))
    }
  }

  /// Ordering of two right edges: `PlusInfinity` last, and an open edge before a closed one at the same value.
  pub fn cmp_right(&self, other: &Boundary<T>) -> Ordering {
    match (self, other) {
      (Closed(x), Closed(y)) | (Open(x), Open(y)) => cmp_values(x, y),
      (Closed(x), Open(y)) => cmp_values(x, y).then(Ordering::Greater),
      (Open(x), Closed(y)) => cmp_values(x, y).then(Ordering::Less),
      _ => rank(self).cmp(&rank(other))
    }
  }

  /// Tests whether the right edge `self` comes before the left edge `left`.
  /// An infinite edge never comes before anything.
  pub fn precedes(&self, left: &Boundary<T>) -> Adjacency {
    match (self.value(), left.value()) {
      (Some(x), Some(y)) => match cmp_values(x, y) {
        Ordering::Less => Adjacency::Gap,
        Ordering::Greater => Adjacency::Overlap,
        Ordering::Equal => match (self, left) {
          (Closed(_), Closed(_)) => Adjacency::Overlap,
          (Open(_), Open(_)) => Adjacency::Gap,
          _ => Adjacency::Touch
        }
      },
      _ => Adjacency::Overlap
    }
  }
}

impl<T> Boundary<T> where
 T: Zero + One + PartialEq + Div<Output=T>
{
  /// `1/self` for an edge of an interval lying on one side of zero. Infinite edges become an open zero and a zero edge becomes `at_zero`.
  pub fn reciprocal(self, at_zero: Boundary<T>) -> Boundary<T> {
    match self {
      Empty => Empty,
      MinusInfinity | PlusInfinity => Open(T::zero()),
      Closed(x) =>
        if x.is_zero() { at_zero }
        else { Closed(T::one() / x) },
      Open(x) =>
        if x.is_zero() { at_zero }
        else { Open(T::one() / x) }
    }
  }
}

fn flip<T>(infinity: Boundary<T>) -> Boundary<T> {
  match infinity {
    MinusInfinity => PlusInfinity,
    PlusInfinity => MinusInfinity,
    other => other
  }
}

// `Empty` marks the indeterminate product `±∞ × 0`.
fn scale_infinity<T: Zero + PartialOrd>(infinity: Boundary<T>, factor: T) -> Boundary<T> {
  let zero = T::zero();
  if factor > zero { infinity }
  else if factor < zero { flip(infinity) }
  else { Empty }
}

impl<T> Neg for Boundary<T> where
 T: Neg<Output=T>
{
  type Output = Boundary<T>;

  fn neg(self) -> Boundary<T> {
    match self {
      Empty => Empty,
      MinusInfinity => PlusInfinity,
      Closed(x) => Closed(-x),
      Open(x) => Open(-x),
      PlusInfinity => MinusInfinity
    }
  }
}

impl<T> Add for Boundary<T> where
 T: Add<Output=T>
{
  type Output = Boundary<T>;

  fn add(self, other: Boundary<T>) -> Boundary<T> {
    match (self, other) {
      (Empty, _) | (_, Empty) => Empty,
      (MinusInfinity, PlusInfinity) | (PlusInfinity, MinusInfinity) => Empty,
      (MinusInfinity, _) | (_, MinusInfinity) => MinusInfinity,
      (PlusInfinity, _) | (_, PlusInfinity) => PlusInfinity,
      (Closed(x), Closed(y)) => Closed(x + y),
      (Closed(x), Open(y))
    | (Open(x), Closed(y))
    | (Open(x), Open(y)) => Open(x + y)
    }
  }
}

impl<T> Sub for Boundary<T> where
 T: Add<Output=T> + Neg<Output=T>
{
  type Output = Boundary<T>;

  fn sub(self, other: Boundary<T>) -> Boundary<T> {
    self + (-other)
  }
}

impl<T> Mul for Boundary<T> where
 T: Mul<Output=T> + Zero + PartialOrd
{
  type Output = Boundary<T>;

  fn mul(self, other: Boundary<T>) -> Boundary<T> {
    match (self, other) {
      (Empty, _) | (_, Empty) => Empty,
      (Closed(x), Closed(y)) => Closed(x * y),
      // A closed zero is attained whatever the other factor.
      (Closed(x), Open(y))
    | (Open(y), Closed(x)) if x == T::zero() => Closed(x * y),
      (Closed(x), Open(y))
    | (Open(x), Closed(y))
    | (Open(x), Open(y)) => Open(x * y),
      (MinusInfinity, MinusInfinity) | (PlusInfinity, PlusInfinity) => PlusInfinity,
      (MinusInfinity, PlusInfinity) | (PlusInfinity, MinusInfinity) => MinusInfinity,
      (infinity, Closed(v))
    | (infinity, Open(v))
    | (Closed(v), infinity)
    | (Open(v), infinity) => scale_infinity(infinity, v)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn left_and_right_orderings() {
    let cases = vec![
      (1, MinusInfinity, Closed(0), Ordering::Less, Ordering::Less),
      (2, Closed(5), Open(5), Ordering::Less, Ordering::Greater),
      (3, Open(5), Closed(5), Ordering::Greater, Ordering::Less),
      (4, Open(4), Closed(5), Ordering::Less, Ordering::Less),
      (5, Closed(6), Open(5), Ordering::Greater, Ordering::Greater),
      (6, PlusInfinity, Closed(100), Ordering::Greater, Ordering::Greater),
      (7, Open(3), Open(3), Ordering::Equal, Ordering::Equal),
      (8, MinusInfinity, MinusInfinity, Ordering::Equal, Ordering::Equal),
    ];

    for (id, a, b, left, right) in cases {
      assert_eq!(a.cmp_left(&b), left, "test #{} of cmp_left", id);
      assert_eq!(a.cmp_right(&b), right, "test #{} of cmp_right", id);
      assert_eq!(b.cmp_left(&a), left.reverse(), "test #{} of cmp_left (reversed)", id);
      assert_eq!(b.cmp_right(&a), right.reverse(), "test #{} of cmp_right (reversed)", id);
    }
  }

  #[test]
  fn precedes() {
    let cases = vec![
      (1, Closed(3), Closed(5), Adjacency::Gap),
      (2, Closed(5), Closed(5), Adjacency::Overlap),
      (3, Closed(5), Open(5), Adjacency::Touch),
      (4, Open(5), Closed(5), Adjacency::Touch),
      (5, Open(5), Open(5), Adjacency::Gap),
      (6, Closed(6), Closed(5), Adjacency::Overlap),
      (7, PlusInfinity, Closed(5), Adjacency::Overlap),
      (8, Closed(5), MinusInfinity, Adjacency::Overlap),
    ];

    for (id, right, left, expected) in cases {
      assert_eq!(right.precedes(&left), expected, "test #{} of precedes", id);
    }
  }

  #[test]
  fn negation() {
    assert_eq!(-Closed(3), Closed(-3));
    assert_eq!(-Open(-2), Open(2));
    assert_eq!(-Boundary::<i32>::MinusInfinity, PlusInfinity);
    assert_eq!(-Boundary::<i32>::PlusInfinity, MinusInfinity);
    assert_eq!(-Boundary::<i32>::Empty, Empty);
  }

  #[test]
  fn addition() {
    let cases = vec![
      (1, Closed(1), Closed(2), Closed(3)),
      (2, Closed(1), Open(2), Open(3)),
      (3, Open(1), Open(2), Open(3)),
      (4, MinusInfinity, Closed(2), MinusInfinity),
      (5, Open(7), PlusInfinity, PlusInfinity),
      (6, MinusInfinity, PlusInfinity, Empty),
      (7, Empty, Closed(2), Empty),
      (8, Empty, Empty, Empty),
    ];

    for (id, a, b, expected) in cases {
      assert_eq!(a + b, expected, "test #{} of addition", id);
      assert_eq!(b + a, expected, "test #{} of addition (commuted)", id);
    }
    assert_eq!(Closed(5) - Open(2), Open(3));
    assert_eq!(Closed(5) - MinusInfinity, PlusInfinity);
  }

  #[test]
  fn multiplication() {
    let cases = vec![
      (1, Closed(2), Closed(-3), Closed(-6)),
      (2, Open(2), Closed(3), Open(6)),
      (3, PlusInfinity, Closed(-1), MinusInfinity),
      (4, MinusInfinity, Open(4), MinusInfinity),
      (5, MinusInfinity, MinusInfinity, PlusInfinity),
      (6, MinusInfinity, PlusInfinity, MinusInfinity),
      (7, PlusInfinity, Closed(0), Empty),
      (8, Empty, Closed(3), Empty),
      (9, Closed(0), Open(5), Closed(0)),
      (10, Open(0), Open(5), Open(0)),
    ];

    for (id, a, b, expected) in cases {
      assert_eq!(a * b, expected, "test #{} of multiplication", id);
      assert_eq!(b * a, expected, "test #{} of multiplication (commuted)", id);
    }
  }

  #[test]
  fn reciprocal() {
    assert_eq!(Closed(4.0).reciprocal(PlusInfinity), Closed(0.25));
    assert_eq!(Open(-2.0).reciprocal(PlusInfinity), Open(-0.5));
    assert_eq!(Open(0.0).reciprocal(PlusInfinity), PlusInfinity);
    assert_eq!(Open(0.0).reciprocal(MinusInfinity), MinusInfinity);
    assert_eq!(Boundary::<f64>::PlusInfinity.reciprocal(PlusInfinity), Open(0.0));
  }

  #[test]
  fn finite_values() {
    assert!(Closed(1).is_finite());
    assert!(Open(1).is_finite());
    assert_eq!(Open(1).value(), Some(&1));
    for edge in [Empty, MinusInfinity, PlusInfinity].iter() {
      assert!(!Boundary::<i32>::is_finite(edge), "{:?}", edge);
      assert_eq!(edge.value(), None);
    }
  }

  #[test]
  fn invert() {
    assert_eq!(Closed(1).invert(), Open(1));
    assert_eq!(Open(1).invert(), Closed(1));
    assert_eq!(Boundary::<i32>::PlusInfinity.invert(), PlusInfinity);
  }
}
