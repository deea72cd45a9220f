// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! This library proposes an algebra of intervals over any ordered domain. Each side of an interval is open, closed or unbounded, and the relative position of two intervals is classified into one of thirteen [orders](order/enum.Order.html) from which every binary relation is derived. Set operations whose result is not a single interval produce a normalized [`IntervalSet`](interval_set/struct.IntervalSet.html), and numeric domains get [interval arithmetic](arithmetic/index.html).
//!
//! The collection traits of `gcollections` (`Intersection`, `Union`, `Contains`, ...) are implemented on both `Interval` and `IntervalSet`.
//!
//! # Examples
//!
//! For examples see the [interval module](interval/index.html), the [interval_set module](interval_set/index.html) or the [interval_map module](interval_map/index.html).
//!
//! # References
//! * [Boost Interval Arithmetic Library](http://www.boost.org/doc/libs/1_57_0/libs/numeric/interval/doc/interval.html)
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)
//! * [Allen's interval algebra](https://en.wikipedia.org/wiki/Allen%27s_interval_algebra)
//!

mod macros;

pub mod boundary;
pub mod error;
pub mod order;
pub mod ops;
pub mod interval;
pub mod interval_set;
pub mod interval_map;
pub mod arithmetic;

pub use boundary::{BoundKind, Boundary};
pub use error::IntervalError;
pub use interval::Interval;
pub use interval_map::IntervalMap;
pub use interval_set::IntervalSet;
pub use order::Order;
