// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval specific operations and classification of bound types.
//!
//! The category of a bound type decides which operations are available on intervals over it. It is resolved at compile time: `+`, `*` and `size()` need an [`Arithmetic`] domain, and `/` a [`Continuous`] one.

use num_traits::{Float, Num};

pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

pub trait Whole
{
  fn whole() -> Self;
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Category {
  /// Values cannot be compared.
  Unordered,
  /// Totally ordered, without successor or arithmetic.
  Ordered,
  /// Ordered with a successor (`char`, `bool`).
  Stepwise,
  /// Integers.
  Integral,
  /// Reals and their floating point approximations.
  Continuous
}

impl Category
{
  pub fn is_ordered(self) -> bool {
    self >= Category::Ordered
  }

  pub fn is_arithmetic(self) -> bool {
    self >= Category::Integral
  }
}

pub trait Domain
{
  const CATEGORY: Category;
}

macro_rules! domain_impl
{
  ( $category:ident: $( $t:ty ),* ) =>
  {$(
    impl Domain for $t
    {
      const CATEGORY: Category = Category::$category;
    }
  )*}
}

domain_impl!(Integral: i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);
domain_impl!(Continuous: f32, f64);
domain_impl!(Stepwise: char, bool);
domain_impl!(Ordered: String);

/// Bound types supporting interval `+`, `*` and `size()`.
pub trait Arithmetic: Domain + Num + PartialOrd + Clone + Default {}

impl<T> Arithmetic for T where
 T: Domain + Num + PartialOrd + Clone + Default
{}

/// Bound types supporting interval `/`.
pub trait Continuous: Arithmetic + Float {}

impl<T> Continuous for T where
 T: Arithmetic + Float
{}

#[cfg(test)]
mod tests {
  use super::*;

  fn category_of<T: Domain>() -> Category {
    T::CATEGORY
  }

  #[test]
  fn categories() {
    assert_eq!(category_of::<i32>(), Category::Integral);
    assert_eq!(category_of::<u8>(), Category::Integral);
    assert_eq!(category_of::<f64>(), Category::Continuous);
    assert_eq!(category_of::<char>(), Category::Stepwise);
    assert_eq!(category_of::<String>(), Category::Ordered);
    assert!(Category::Integral.is_arithmetic());
    assert!(Category::Continuous.is_arithmetic());
    assert!(!Category::Stepwise.is_arithmetic());
    assert!(Category::Stepwise.is_ordered());
    assert!(!Category::Unordered.is_ordered());
  }
}
