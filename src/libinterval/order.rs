// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Relative position of two intervals.
//!
//! The thirteen positions of two non-empty intervals `a` and `b` form a chain, from `a` lying entirely below `b` to `b` lying entirely below `a`. The variants are declared in chain order so the derived `Ord` is the chain order, and predicates such as "touches" are ranges of it.
//!
//! ```text
//! ABelowB          [a]   [b]
//! ATouchesB        [a](b]
//! AOverlapsB       [a (] b]
//! AExtendsBelowB   [a [b]]
//! AEnclosesB       [a [b] ]
//! BExtendsAboveA   [[a] b]
//! Equal            [ab]
//! AExtendsAboveB   [[b] a]
//! BEnclosesA       [b [a] ]
//! BExtendsBelowA   [b [a]]
//! BOverlapsA       [b (] a]
//! BTouchesA        [b](a]
//! BBelowA          [b]   [a]
//! ```

use std::ops::RangeInclusive;

use self::Order::*;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Order {
  ABelowB,
  ATouchesB,
  AOverlapsB,
  AExtendsBelowB,
  AEnclosesB,
  BExtendsAboveA,
  Equal,
  AExtendsAboveB,
  BEnclosesA,
  BExtendsBelowA,
  BOverlapsA,
  BTouchesA,
  BBelowA,
  /// `b` is empty and `a` is not.
  AOnly,
  /// `a` is empty and `b` is not.
  BOnly
}

const TOUCHING: RangeInclusive<Order> = ATouchesB..=BTouchesA;
const OVERLAPPING: RangeInclusive<Order> = AOverlapsB..=BOverlapsA;

impl Order
{
  /// The order of `(b, a)` given the order of `(a, b)`.
  pub fn mirror(self) -> Order {
    match self {
      ABelowB => BBelowA,
      ATouchesB => BTouchesA,
      AOverlapsB => BOverlapsA,
      AExtendsBelowB => BExtendsBelowA,
      AEnclosesB => BEnclosesA,
      BExtendsAboveA => AExtendsAboveB,
      Equal => Equal,
      AExtendsAboveB => BExtendsAboveA,
      BEnclosesA => AEnclosesB,
      BExtendsBelowA => AExtendsBelowB,
      BOverlapsA => AOverlapsB,
      BTouchesA => ATouchesB,
      BBelowA => ABelowB,
      AOnly => BOnly,
      BOnly => AOnly
    }
  }

  /// True when one operand is empty.
  pub fn is_degenerate(self) -> bool {
    self == AOnly || self == BOnly
  }

  /// `a` covers every value of `b`. The caller must rule out the both-empty case, which also yields `Equal`.
  pub fn is_inclusion(self) -> bool {
    match self {
      Equal | AExtendsBelowB | AExtendsAboveB | AEnclosesB => true,
      _ => false
    }
  }

  /// `a` and `b` share at least one value.
  pub fn is_overlap(self) -> bool {
    OVERLAPPING.contains(&self)
  }

  /// `a` and `b` overlap or meet with nothing in between.
  pub fn is_touch(self) -> bool {
    TOUCHING.contains(&self)
  }

  /// `a` and `b` share no value.
  pub fn is_disjoint(self) -> bool {
    !self.is_overlap()
  }
}
