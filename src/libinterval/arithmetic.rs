// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval arithmetic.
//!
//! Operations are lifted on the edges of their operands (see [boundary](../boundary/index.html)): the sum of two intervals is the interval between the sum of their left edges and the sum of their right edges, and a product is the hull of the four products of edges. Division is only available on continuous domains and returns an [`IntervalSet`](../interval_set/struct.IntervalSet.html): a divisor containing zero is split into its negative and positive parts, each giving a piece of the result.
//!
//! ```rust
//! use interval_algebra::{Interval, IntervalSet};
//!
//! assert_eq!(Interval::new(2, 4) * Interval::new(-1, 3), Interval::new(-4, 12));
//! assert_eq!(Interval::new(1, 2) - Interval::open(0, 1), Interval::open(0, 2));
//!
//! let res = Interval::new(1.0, 1.0) / Interval::new(-1.0, 1.0);
//! assert_eq!(res, vec![Interval::at_most(-1.0), Interval::at_least(1.0)].into_iter().collect());
//! ```

use crate::boundary::Boundary;
use crate::interval::Interval;
use crate::interval_set::IntervalSet;
use crate::ops::{Arithmetic, Continuous, Whole};
use gcollections::ops::Empty;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<'a, T> Neg for &'a Interval<T> where
 T: Arithmetic + Neg<Output=T>
{
  type Output = Interval<T>;

  fn neg(self) -> Interval<T> {
    Interval::from_boundaries(-self.right_boundary(), -self.left_boundary())
  }
}

impl<T> Neg for Interval<T> where
 T: Arithmetic + Neg<Output=T>
{
  type Output = Interval<T>;

  fn neg(self) -> Interval<T> {
    -&self
  }
}

impl<'a, 'b, T> Add<&'b Interval<T>> for &'a Interval<T> where
 T: Arithmetic
{
  type Output = Interval<T>;

  fn add(self, other: &Interval<T>) -> Interval<T> {
    if self.is_empty() || other.is_empty() {
      Interval::empty()
    }
    else {
      Interval::from_boundaries(
        self.left_boundary() + other.left_boundary(),
        self.right_boundary() + other.right_boundary())
    }
  }
}

impl<'a, 'b, T> Sub<&'b Interval<T>> for &'a Interval<T> where
 T: Arithmetic + Neg<Output=T>
{
  type Output = Interval<T>;

  fn sub(self, other: &Interval<T>) -> Interval<T> {
    self + &(-other)
  }
}

// Hull of the edge products. An indeterminate product (`±∞ × 0`) widens the result to the whole line.
fn hull_of_corners<T>(corners: [Boundary<T>; 4]) -> Interval<T> where
 T: PartialOrd + Clone + Default
{
  if corners.iter().any(|c| *c == Boundary::Empty) {
    return Interval::whole();
  }
  let mut left = &corners[0];
  let mut right = &corners[0];
  for corner in corners.iter().skip(1) {
    if corner.cmp_left(left) == Ordering::Less {
      left = corner;
    }
    if corner.cmp_right(right) == Ordering::Greater {
      right = corner;
    }
  }
  Interval::from_boundaries(left.clone(), right.clone())
}

impl<'a, 'b, T> Mul<&'b Interval<T>> for &'a Interval<T> where
 T: Arithmetic
{
  type Output = Interval<T>;

  fn mul(self, other: &Interval<T>) -> Interval<T> {
    if self.is_empty() || other.is_empty() {
      Interval::empty()
    }
    else {
      hull_of_corners([
        self.left_boundary() * other.left_boundary(),
        self.left_boundary() * other.right_boundary(),
        self.right_boundary() * other.left_boundary(),
        self.right_boundary() * other.right_boundary()
      ])
    }
  }
}

impl<T> Interval<T> where
 T: Continuous
{
  // Only valid when `self` does not contain zero, its edges may be zero if open.
  fn reciprocal(&self) -> Interval<T> {
    Interval::from_boundaries(
      self.right_boundary().reciprocal(Boundary::MinusInfinity),
      self.left_boundary().reciprocal(Boundary::PlusInfinity))
  }

  // Pieces of `self` without zero, negative first.
  fn split_at_zero(&self) -> Vec<Interval<T>> {
    let zero = T::zero();
    if self.contains(&zero) {
      vec![
        self.set_intersection(&Interval::less_than(zero)),
        self.set_intersection(&Interval::greater_than(zero))
      ]
    }
    else {
      vec![self.clone()]
    }
  }
}

impl<'a, 'b, T> Div<&'b Interval<T>> for &'a Interval<T> where
 T: Continuous
{
  type Output = IntervalSet<T>;

  fn div(self, other: &Interval<T>) -> IntervalSet<T> {
    if self.is_empty() {
      return IntervalSet::empty();
    }
    other.split_at_zero().into_iter()
      .filter(|divisor| !divisor.is_empty())
      .map(|divisor| self * &divisor.reciprocal())
      .collect()
  }
}

forward_all_binop!(impl<T> Add, add for Interval -> Interval<T> where T: Arithmetic);
forward_all_binop!(impl<T> Sub, sub for Interval -> Interval<T> where T: Arithmetic + Neg<Output=T>);
forward_all_binop!(impl<T> Mul, mul for Interval -> Interval<T> where T: Arithmetic);
forward_all_binop!(impl<T> Div, div for Interval -> IntervalSet<T> where T: Continuous);

forward_assign_op!(impl<T> AddAssign, add_assign, add for Interval where T: Arithmetic);
forward_assign_op!(impl<T> SubAssign, sub_assign, sub for Interval where T: Arithmetic + Neg<Output=T>);
forward_assign_op!(impl<T> MulAssign, mul_assign, mul for Interval where T: Arithmetic);

fn pairwise<T, F>(a: &IntervalSet<T>, b: &IntervalSet<T>, op: F) -> IntervalSet<T> where
 T: PartialOrd + Clone + Default,
 F: Fn(&Interval<T>, &Interval<T>) -> Interval<T>
{
  let mut res = IntervalSet::empty();
  for x in a {
    for y in b {
      res.insert(op(x, y));
    }
  }
  res
}

impl<'a, T> Neg for &'a IntervalSet<T> where
 T: Arithmetic + Neg<Output=T>
{
  type Output = IntervalSet<T>;

  fn neg(self) -> IntervalSet<T> {
    self.iter().map(|i| -i).collect()
  }
}

impl<T> Neg for IntervalSet<T> where
 T: Arithmetic + Neg<Output=T>
{
  type Output = IntervalSet<T>;

  fn neg(self) -> IntervalSet<T> {
    -&self
  }
}

impl<'a, 'b, T> Add<&'b IntervalSet<T>> for &'a IntervalSet<T> where
 T: Arithmetic
{
  type Output = IntervalSet<T>;

  fn add(self, other: &IntervalSet<T>) -> IntervalSet<T> {
    pairwise(self, other, |x, y| x + y)
  }
}

impl<'a, 'b, T> Sub<&'b IntervalSet<T>> for &'a IntervalSet<T> where
 T: Arithmetic + Neg<Output=T>
{
  type Output = IntervalSet<T>;

  fn sub(self, other: &IntervalSet<T>) -> IntervalSet<T> {
    pairwise(self, other, |x, y| x - y)
  }
}

impl<'a, 'b, T> Mul<&'b IntervalSet<T>> for &'a IntervalSet<T> where
 T: Arithmetic
{
  type Output = IntervalSet<T>;

  fn mul(self, other: &IntervalSet<T>) -> IntervalSet<T> {
    pairwise(self, other, |x, y| x * y)
  }
}

impl<'a, 'b, T> Div<&'b IntervalSet<T>> for &'a IntervalSet<T> where
 T: Continuous
{
  type Output = IntervalSet<T>;

  fn div(self, other: &IntervalSet<T>) -> IntervalSet<T> {
    let mut res = IntervalSet::empty();
    for x in self {
      for y in other {
        res.apply_union(&(x / y));
      }
    }
    res
  }
}

forward_all_binop!(impl<T> Add, add for IntervalSet -> IntervalSet<T> where T: Arithmetic);
forward_all_binop!(impl<T> Sub, sub for IntervalSet -> IntervalSet<T> where T: Arithmetic + Neg<Output=T>);
forward_all_binop!(impl<T> Mul, mul for IntervalSet -> IntervalSet<T> where T: Arithmetic);
forward_all_binop!(impl<T> Div, div for IntervalSet -> IntervalSet<T> where T: Continuous);

forward_assign_op!(impl<T> AddAssign, add_assign, add for IntervalSet where T: Arithmetic);
forward_assign_op!(impl<T> SubAssign, sub_assign, sub for IntervalSet where T: Arithmetic + Neg<Output=T>);
forward_assign_op!(impl<T> MulAssign, mul_assign, mul for IntervalSet where T: Arithmetic);
forward_assign_op!(impl<T> DivAssign, div_assign, div for IntervalSet where T: Continuous);

#[cfg(test)]
mod tests {
  use super::*;
  use gcollections::ops::Singleton;

  fn set<T>(intervals: Vec<Interval<T>>) -> IntervalSet<T> where
   T: PartialOrd + Clone + Default
  {
    intervals.into_iter().collect()
  }

  #[test]
  fn negation() {
    let empty: Interval<i32> = Interval::empty();
    let cases = vec![
      (1, Interval::new(1, 5), Interval::new(-5, -1)),
      (2, Interval::open_closed(1, 5), Interval::closed_open(-5, -1)),
      (3, Interval::at_least(2), Interval::at_most(-2)),
      (4, Interval::less_than(-3), Interval::greater_than(3)),
      (5, Interval::whole(), Interval::whole()),
      (6, empty, empty),
    ];
    for (id, x, expected) in cases {
      assert_eq!(-x, expected, "test #{} of negation", id);
      assert_eq!(-(-x), x, "test #{} of double negation", id);
    }
  }

  #[test]
  fn addition() {
    let empty: Interval<i32> = Interval::empty();
    let cases = vec![
      (1, Interval::new(1, 2), Interval::new(3, 4), Interval::new(4, 6)),
      (2, Interval::new(1, 2), Interval::open(3, 4), Interval::open(4, 6)),
      (3, Interval::closed_open(1, 2), Interval::new(3, 4), Interval::closed_open(4, 6)),
      (4, Interval::at_least(1), Interval::new(2, 3), Interval::at_least(3)),
      (5, Interval::at_most(1), Interval::greater_than(2), Interval::whole()),
      (6, Interval::new(1, 2), empty, empty),
      (7, Interval::singleton(-1), Interval::singleton(1), Interval::singleton(0)),
    ];
    for (id, a, b, expected) in cases {
      assert_eq!(a + b, expected, "test #{} of addition", id);
      assert_eq!(b + a, expected, "test #{} of addition (commuted)", id);
      assert_eq!(&a + &b, expected, "test #{} of addition (by reference)", id);
    }
  }

  #[test]
  fn subtraction() {
    let cases = vec![
      (1, Interval::new(1, 2), Interval::new(0, 5), Interval::new(-4, 2)),
      (2, Interval::new(1, 2), Interval::open(0, 1), Interval::open(0, 2)),
      (3, Interval::at_least(3), Interval::at_least(1), Interval::whole()),
      (4, Interval::at_least(3), Interval::at_most(1), Interval::at_least(2)),
    ];
    for (id, a, b, expected) in cases {
      assert_eq!(a - b, expected, "test #{} of subtraction", id);
    }
  }

  #[test]
  fn multiplication() {
    let empty: Interval<i32> = Interval::empty();
    let cases = vec![
      (1, Interval::new(2, 4), Interval::new(-1, 3), Interval::new(-4, 12)),
      (2, Interval::new(-3, -2), Interval::new(-5, -4), Interval::new(8, 15)),
      (3, Interval::closed_open(0, 1), Interval::new(2, 3), Interval::closed_open(0, 3)),
      (4, Interval::new(1, 2), Interval::at_least(1), Interval::at_least(1)),
      (5, Interval::new(-2, -1), Interval::at_least(1), Interval::at_most(-1)),
      (6, Interval::new(-1, 1), Interval::at_least(1), Interval::whole()),
      (7, Interval::new(0, 1), Interval::at_least(1), Interval::whole()),
      (8, Interval::singleton(0), Interval::new(-7, 7), Interval::singleton(0)),
      (9, Interval::new(1, 2), empty, empty),
      (10, Interval::new(0, 1), Interval::open(2, 3), Interval::closed_open(0, 3)),
    ];
    for (id, a, b, expected) in cases {
      assert_eq!(a * b, expected, "test #{} of multiplication", id);
      assert_eq!(b * a, expected, "test #{} of multiplication (commuted)", id);
    }
  }

  #[test]
  fn division() {
    let empty: IntervalSet<f64> = IntervalSet::empty();
    let cases = vec![
      (1, Interval::new(-1.0, 1.0), Interval::new(2.0, 4.0), set(vec![Interval::new(-0.5, 0.5)])),
      (2, Interval::new(1.0, 1.0), Interval::new(-1.0, 1.0), set(vec![Interval::at_most(-1.0), Interval::at_least(1.0)])),
      (3, Interval::new(2.0, 4.0), Interval::new(-1.0, 1.0), set(vec![Interval::at_most(-2.0), Interval::at_least(2.0)])),
      (4, Interval::new(1.0, 2.0), Interval::open_closed(0.0, 2.0), set(vec![Interval::at_least(0.5)])),
      (5, Interval::new(1.0, 2.0), Interval::new(0.0, 2.0), set(vec![Interval::at_least(0.5)])),
      (6, Interval::new(1.0, 2.0), Interval::new(-2.0, 0.0), set(vec![Interval::at_most(-0.5)])),
      (7, Interval::new(1.0, 2.0), Interval::at_least(1.0), set(vec![Interval::open_closed(0.0, 2.0)])),
      (8, Interval::new(1.0, 2.0), Interval::singleton(0.0), empty.clone()),
      (9, Interval::new(-1.0, 1.0), Interval::new(-1.0, 1.0), set(vec![Interval::whole()])),
      (10, Interval::empty(), Interval::new(1.0, 2.0), empty.clone()),
      // `+∞ × (0` is indeterminate and widens the quotient.
      (11, Interval::at_least(1.0), Interval::at_least(1.0), set(vec![Interval::whole()])),
      (12, Interval::new(1.0, 2.0), Interval::greater_than(0.0), set(vec![Interval::greater_than(0.0)])),
    ];
    for (id, a, b, expected) in cases {
      assert_eq!(a / b, expected, "test #{} of division", id);
    }
  }

  #[test]
  fn assignment_operators() {
    let mut x = Interval::new(1, 2);
    x += Interval::new(1, 1);
    assert_eq!(x, Interval::new(2, 3));
    x -= &Interval::new(0, 1);
    assert_eq!(x, Interval::new(1, 3));
    x *= Interval::singleton(-2);
    assert_eq!(x, Interval::new(-6, -2));

    let mut s = set(vec![Interval::new(1.0, 2.0)]);
    s /= set(vec![Interval::singleton(2.0)]);
    assert_eq!(s, set(vec![Interval::new(0.5, 1.0)]));
    s += &set(vec![Interval::singleton(1.0)]);
    assert_eq!(s, set(vec![Interval::new(1.5, 2.0)]));
  }

  #[test]
  fn set_arithmetic() {
    let a = set(vec![Interval::new(0, 1), Interval::new(10, 11)]);
    assert_eq!(&a + &set(vec![Interval::new(0, 1)]), set(vec![Interval::new(0, 2), Interval::new(10, 12)]));
    // Pieces growing into each other are merged.
    assert_eq!(&a + &set(vec![Interval::new(0, 9)]), set(vec![Interval::new(0, 20)]));
    assert_eq!(&a - &set(vec![Interval::singleton(1)]), set(vec![Interval::new(-1, 0), Interval::new(9, 10)]));
    assert_eq!(set(vec![Interval::new(1, 2)]) * set(vec![Interval::singleton(-1), Interval::singleton(3)]),
      set(vec![Interval::new(-2, -1), Interval::new(3, 6)]));
    assert_eq!(-set(vec![Interval::less_than(0), Interval::new(1, 2)]),
      set(vec![Interval::new(-2, -1), Interval::greater_than(0)]));
    assert_eq!(set(vec![Interval::singleton(1.0)]) / set(vec![Interval::singleton(2.0), Interval::singleton(4.0)]),
      set(vec![Interval::singleton(0.25), Interval::singleton(0.5)]));
    assert_eq!(&a + &IntervalSet::empty(), IntervalSet::empty());
  }
}
