// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![macro_use]

// Inspired by the macros from the BigUint impl. (doc.rust-lang.org/num/src/num/bigint.rs.html#235-280)
// The operation must already be implemented for `&$res op &$res`.
macro_rules! forward_val_val_binop {
  (impl<$t:ident> $imp:ident, $method:ident for $res:ident -> $out:ty where $($bounds:tt)+) => {
    impl<$t> $imp<$res<$t>> for $res<$t> where $($bounds)+
    {
      type Output = $out;

      fn $method(self, other: $res<$t>) -> $out {
        (&self).$method(&other)
      }
    }
  }
}

macro_rules! forward_ref_val_binop {
  (impl<$t:ident> $imp:ident, $method:ident for $res:ident -> $out:ty where $($bounds:tt)+) => {
    impl<'a, $t> $imp<$res<$t>> for &'a $res<$t> where $($bounds)+
    {
      type Output = $out;

      fn $method(self, other: $res<$t>) -> $out {
        self.$method(&other)
      }
    }
  }
}

macro_rules! forward_val_ref_binop {
  (impl<$t:ident> $imp:ident, $method:ident for $res:ident -> $out:ty where $($bounds:tt)+) => {
    impl<'b, $t> $imp<&'b $res<$t>> for $res<$t> where $($bounds)+
    {
      type Output = $out;

      fn $method(self, other: &'b $res<$t>) -> $out {
        (&self).$method(other)
      }
    }
  }
}

macro_rules! forward_all_binop {
  (impl<$t:ident> $imp:ident, $method:ident for $res:ident -> $out:ty where $($bounds:tt)+) => {
    forward_val_val_binop!(impl<$t> $imp, $method for $res -> $out where $($bounds)+);
    forward_ref_val_binop!(impl<$t> $imp, $method for $res -> $out where $($bounds)+);
    forward_val_ref_binop!(impl<$t> $imp, $method for $res -> $out where $($bounds)+);
  };
}

// `a op= b` as `a = &a op &b`, for both `b` and `&b`.
macro_rules! forward_assign_op {
  (impl<$t:ident> $imp:ident, $method:ident, $op:ident for $res:ident where $($bounds:tt)+) => {
    impl<$t> $imp<$res<$t>> for $res<$t> where $($bounds)+
    {
      fn $method(&mut self, other: $res<$t>) {
        *self = (&*self).$op(&other);
      }
    }

    impl<'b, $t> $imp<&'b $res<$t>> for $res<$t> where $($bounds)+
    {
      fn $method(&mut self, other: &'b $res<$t>) {
        *self = (&*self).$op(other);
      }
    }
  }
}
