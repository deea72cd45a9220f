// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::boundary::BoundKind;
use thiserror::Error;

/// Errors raised when building an interval from raw parts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
  /// Exactly one of the two sides was `Empty`. Emptiness is a property of the whole interval.
  #[error("mismatched emptiness: left side is {left:?} but right side is {right:?}")]
  MismatchedEmptiness {
    left: BoundKind,
    right: BoundKind
  }
}
